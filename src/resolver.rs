//! Merges the central directory entry and the local file header of one entry
//! into an [`EntryDescription`].
//!
//! Every field is looked up independently. When several records or extra
//! fields may hold a value, they are tried in a fixed order and the first one
//! present wins. A missing or unusable value never fails the whole entry, the
//! field is left empty instead.

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{debug, trace, trace_span};

use crate::compression::CompressionMethod;
use crate::constants::{INTERNAL_ATTRIBUTE_TEXT, ZIP64_SIZE_SENTINEL};
use crate::entry::EntryDescription;
use crate::extra_field::{ntfs_to_datetime, unix_to_datetime, ExtendedTimestamp, NtfsTimestamp};
use crate::records::{CentralDirectoryEntry, LocalFileHeader};
use crate::types::{DosAttributes, EntryType, FileSystemType, MsDosDateTime, Permissions};

/// Settings of the resolution.
#[derive(Debug, Clone)]
pub struct ResolveOptions<Tz: TimeZone = Local> {
    time_zone: Tz,
}

impl<Tz: TimeZone> ResolveOptions<Tz> {
    /// Options reading MS-DOS dates and times in `time_zone`.
    pub fn with_time_zone(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    /// Set the time zone in which MS-DOS dates and times are read.
    ///
    /// The default is the local time zone of the process.
    pub fn time_zone<T: TimeZone>(self, time_zone: T) -> ResolveOptions<T> {
        ResolveOptions { time_zone }
    }
}

impl Default for ResolveOptions<Local> {
    fn default() -> Self {
        Self { time_zone: Local }
    }
}

/// Which timestamp of a record is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Modification,
    Access,
    Creation,
}

/// A place where a timestamp may be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    LocalExtendedTimestamp,
    CentralExtendedTimestamp,
    LocalNtfs,
    CentralNtfs,
    /// The MS-DOS date and time of the central directory entry. It only knows
    /// one time, returned whatever the field.
    MsDos,
}

pub const MODIFICATION_TIME_SOURCES: [TimeSource; 5] = [
    TimeSource::LocalExtendedTimestamp,
    TimeSource::CentralExtendedTimestamp,
    TimeSource::LocalNtfs,
    TimeSource::CentralNtfs,
    TimeSource::MsDos,
];

// Creation and access times never come from the central extended timestamp,
// whose copy of 0x5455 normally holds the modification time only.
pub const CREATION_TIME_SOURCES: [TimeSource; 3] = [
    TimeSource::LocalExtendedTimestamp,
    TimeSource::LocalNtfs,
    TimeSource::CentralNtfs,
];

pub const ACCESS_TIME_SOURCES: [TimeSource; 3] = CREATION_TIME_SOURCES;

pub(crate) struct Records<'a, Tz: TimeZone> {
    pub(crate) central: &'a CentralDirectoryEntry,
    pub(crate) local: &'a LocalFileHeader,
    pub(crate) time_zone: &'a Tz,
}

fn extended_time(extended_timestamp: &ExtendedTimestamp, field: TimeField) -> Option<i32> {
    match field {
        TimeField::Modification => extended_timestamp.modify_time,
        TimeField::Access => extended_timestamp.access_time,
        TimeField::Creation => extended_timestamp.create_time,
    }
}

fn ntfs_time(ntfs_timestamp: &NtfsTimestamp, field: TimeField) -> Option<u64> {
    match field {
        TimeField::Modification => ntfs_timestamp.modify_time,
        TimeField::Access => ntfs_timestamp.access_time,
        TimeField::Creation => ntfs_timestamp.create_time,
    }
}

impl TimeSource {
    pub(crate) fn lookup<Tz: TimeZone>(
        self,
        field: TimeField,
        records: &Records<'_, Tz>,
    ) -> Option<DateTime<Utc>> {
        match self {
            TimeSource::LocalExtendedTimestamp => records
                .local
                .extended_timestamp
                .as_ref()
                .and_then(|extra_field| extended_time(extra_field, field))
                .and_then(unix_to_datetime),
            TimeSource::CentralExtendedTimestamp => records
                .central
                .extended_timestamp
                .as_ref()
                .and_then(|extra_field| extended_time(extra_field, field))
                .and_then(unix_to_datetime),
            TimeSource::LocalNtfs => records
                .local
                .ntfs_timestamp
                .as_ref()
                .and_then(|extra_field| ntfs_time(extra_field, field))
                .and_then(ntfs_to_datetime),
            TimeSource::CentralNtfs => records
                .central
                .ntfs_timestamp
                .as_ref()
                .and_then(|extra_field| ntfs_time(extra_field, field))
                .and_then(ntfs_to_datetime),
            TimeSource::MsDos => {
                let date_time = MsDosDateTime::from_msdos(
                    records.central.last_mod_file_date,
                    records.central.last_mod_file_time,
                );
                let resolved = date_time.to_datetime(records.time_zone);
                if resolved.is_none() {
                    debug!(%date_time, "MS-DOS date and time is out of range");
                }
                resolved
            }
        }
    }
}

pub(crate) fn resolve_time<Tz: TimeZone>(
    sources: &[TimeSource],
    field: TimeField,
    records: &Records<'_, Tz>,
) -> Option<DateTime<Utc>> {
    let resolved = sources
        .iter()
        .find_map(|source| source.lookup(field, records).map(|time| (*source, time)));

    match resolved {
        Some((source, time)) => {
            trace!(?field, ?source, %time, "timestamp resolved");
            Some(time)
        }
        None => {
            trace!(?field, "no timestamp available");
            None
        }
    }
}

pub(crate) fn entry_size(uncompressed_size: u64) -> Option<usize> {
    if uncompressed_size == ZIP64_SIZE_SENTINEL {
        debug!("uncompressed size is the ZIP64 placeholder");
        return None;
    }

    usize::try_from(uncompressed_size).ok()
}

pub(crate) fn infer_entry_type(
    external_file_attributes: u32,
    dos_attributes: Option<DosAttributes>,
    size: Option<usize>,
    file_name: &str,
) -> EntryType {
    if let Some(unix_type) = EntryType::from_external_attributes(external_file_attributes) {
        return unix_type;
    }

    if let Some(dos_attributes) = dos_attributes {
        return if dos_attributes.contains(DosAttributes::DIRECTORY) {
            EntryType::Directory
        } else {
            EntryType::Regular
        };
    }

    if size == Some(0) && file_name.ends_with('/') {
        EntryType::Directory
    } else {
        EntryType::Regular
    }
}

/// Resolves an entry, reading MS-DOS times in the local time zone.
///
/// `has_data_descriptor` tells that the entry's CRC and size follow its data,
/// so the local header only holds placeholders for them.
pub fn resolve(
    central: &CentralDirectoryEntry,
    local: &LocalFileHeader,
    has_data_descriptor: bool,
) -> EntryDescription {
    resolve_with(central, local, has_data_descriptor, &ResolveOptions::<Local>::default())
}

/// Resolves an entry with explicit [`ResolveOptions`].
pub fn resolve_with<Tz: TimeZone>(
    central: &CentralDirectoryEntry,
    local: &LocalFileHeader,
    has_data_descriptor: bool,
    options: &ResolveOptions<Tz>,
) -> EntryDescription {
    let _span = trace_span!("resolve", name = %central.file_name).entered();

    let records = Records {
        central,
        local,
        time_zone: &options.time_zone,
    };

    let modification_time =
        resolve_time(&MODIFICATION_TIME_SOURCES, TimeField::Modification, &records);
    let creation_time = resolve_time(&CREATION_TIME_SOURCES, TimeField::Creation, &records);
    let access_time = resolve_time(&ACCESS_TIME_SOURCES, TimeField::Access, &records);

    let (uncompressed_size, crc) = if has_data_descriptor {
        (central.uncompressed_size, central.crc32)
    } else {
        (local.uncompressed_size, local.crc32)
    };
    let size = entry_size(uncompressed_size);

    let external_file_attributes = central.external_file_attributes;
    let permissions = Permissions::from_external_attributes(external_file_attributes);
    let dos_attributes = DosAttributes::from_external_attributes(external_file_attributes);
    let entry_type = infer_entry_type(
        external_file_attributes,
        dos_attributes,
        size,
        &central.file_name,
    );

    let owner_id = local
        .info_zip_new_unix
        .map(|extra_field| extra_field.uid)
        .or_else(|| local.info_zip_unix.map(|extra_field| extra_field.uid as u64));
    let group_id = local
        .info_zip_new_unix
        .map(|extra_field| extra_field.gid)
        .or_else(|| local.info_zip_unix.map(|extra_field| extra_field.gid as u64));

    let mut custom_extra_fields = central.custom_extra_fields.clone();
    custom_extra_fields.extend(local.custom_extra_fields.iter().cloned());

    EntryDescription {
        name: central.file_name.clone(),
        comment: central.file_comment.clone(),
        size,
        entry_type,
        access_time,
        creation_time,
        modification_time,
        permissions: Some(permissions),
        external_file_attributes,
        dos_attributes,
        is_text_file: central.internal_file_attributes & INTERNAL_ATTRIBUTE_TEXT != 0,
        file_system_type: FileSystemType::from_version_made_by(central.version_made_by),
        compression_method: CompressionMethod::from_compression_method(local.compression_method),
        owner_id,
        group_id,
        custom_extra_fields,
        crc,
    }
}

#[cfg(test)]
#[path = "./tests/resolver.rs"]
mod resolver_tests;
