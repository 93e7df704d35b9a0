//! Extra field blocks attached to ZIP records, in their decoded form.
//!
//! Decoding the raw `header id / size / data` layout is left to the archive
//! reader; the values here are what it hands to the resolver.
//!
//! Use the field definitions given in Info-Zip's source archive: zip-3.0.tar.gz/proginfo/extrafld.txt.
//! It can be found here (https://github.com/LuaDist/zip/blob/master/proginfo/extrafld.txt)

use chrono::{DateTime, TimeZone, Utc};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::constants::{
    NTFS_EPOCH_OFFSET, NTFS_TICKS_PER_SECOND, X000A_NTFS, X5455_EXTENDEDTIMESTAMP,
    X7855_INFOZIP_UNIX, X7875_INFOZIP_NEW_UNIX,
};

/// Extended timestamp, header 0x5455.
///
/// The time values are in standard Unix signed-long format, indicating
/// the number of seconds since 1 January 1970 00:00:00.  The times
/// are relative to Coordinated Universal Time (UTC).
///
/// The central directory copy usually holds the modification time only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedTimestamp {
    pub modify_time: Option<i32>,
    pub access_time: Option<i32>,
    pub create_time: Option<i32>,
}

impl ExtendedTimestamp {
    pub const HEADER_ID: u16 = X5455_EXTENDEDTIMESTAMP;

    pub fn new(
        modify_time: Option<i32>,
        access_time: Option<i32>,
        create_time: Option<i32>,
    ) -> Self {
        Self {
            modify_time,
            access_time,
            create_time,
        }
    }
}

/// NTFS timestamps, header 0x000a, attribute tag 0x0001.
///
/// Values count 100 nanoseconds ticks since 1601-01-01 00:00:00 UTC.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NtfsTimestamp {
    pub modify_time: Option<u64>,
    pub access_time: Option<u64>,
    pub create_time: Option<u64>,
}

impl NtfsTimestamp {
    pub const HEADER_ID: u16 = X000A_NTFS;

    pub fn new(modify_time: Option<u64>, access_time: Option<u64>, create_time: Option<u64>) -> Self {
        Self {
            modify_time,
            access_time,
            create_time,
        }
    }
}

/// Info-ZIP Unix type 2, header 0x7855: 16 bits owner and group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoZipUnix {
    pub uid: u16,
    pub gid: u16,
}

impl InfoZipUnix {
    pub const HEADER_ID: u16 = X7855_INFOZIP_UNIX;
}

/// Info-ZIP new Unix, header 0x7875: variable size owner and group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoZipNewUnix {
    pub uid: u64,
    pub gid: u64,
}

impl InfoZipNewUnix {
    pub const HEADER_ID: u16 = X7875_INFOZIP_NEW_UNIX;
}

/// An extra field the reader does not interpret, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CustomExtraField {
    pub header_id: u16,
    pub data: Vec<u8>,
}

impl CustomExtraField {
    pub fn new(header_id: u16, data: Vec<u8>) -> Self {
        Self { header_id, data }
    }
}

pub fn unix_to_datetime(seconds: i32) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds as i64, 0).single()
}

pub fn ntfs_to_datetime(ticks: u64) -> Option<DateTime<Utc>> {
    let seconds = (ticks / NTFS_TICKS_PER_SECOND) as i64 - NTFS_EPOCH_OFFSET;
    let nanoseconds = ((ticks % NTFS_TICKS_PER_SECOND) * 100) as u32;

    Utc.timestamp_opt(seconds, nanoseconds).single()
}
