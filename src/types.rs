use core::fmt;

use bitflags::bitflags;
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::constants::{DOS_ATTRIBUTES_MASK, UNIX_FILE_TYPE_MASK, UNIX_PERMISSIONS_MASK};

/// Date and time as stored in the two 16 bits MS-DOS words of a ZIP record.
///
/// The value is kept as decoded, without validation: a record may carry fields
/// such as day 0 or month 13 which only fail when converted to a calendar value.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MsDosDateTime {
    year: u16,
    month: u16,
    day: u16,
    hour: u16,
    minute: u16,
    second: u16,
    raw: (u16, u16),
}

impl MsDosDateTime {
    pub fn from_msdos(datepart: u16, timepart: u16) -> Self {
        let seconds = (timepart & 0b0000000000011111) << 1;
        let minutes = (timepart & 0b0000011111100000) >> 5;
        let hours = (timepart & 0b1111100000000000) >> 11;
        let days = datepart & 0b0000000000011111;
        let months = (datepart & 0b0000000111100000) >> 5;
        let years = (datepart & 0b1111111000000000) >> 9;

        Self {
            year: years + 1980,
            month: months,
            day: days,
            hour: hours,
            minute: minutes,
            second: seconds,
            raw: (datepart, timepart),
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u16 {
        self.month
    }

    pub fn day(&self) -> u16 {
        self.day
    }

    pub fn hour(&self) -> u16 {
        self.hour
    }

    pub fn minute(&self) -> u16 {
        self.minute
    }

    pub fn second(&self) -> u16 {
        self.second
    }

    /// Calendar value of the fields, `None` when one of them is out of range:
    /// day 0 or above 31, month 0 or above 12, hour 24 or more, minute or
    /// second 60 or more.
    ///
    /// A day past the end of its month rolls over into the next one, so
    /// 30 February reads as 2 or 1 March.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        if !(1..=31).contains(&self.day)
            || !(1..=12).contains(&self.month)
            || self.hour >= 24
            || self.minute >= 60
            || self.second >= 60
        {
            return None;
        }

        let first_of_month = NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, 1)?;
        let date = first_of_month.checked_add_signed(Duration::days(self.day as i64 - 1))?;
        date.and_hms_opt(self.hour as u32, self.minute as u32, self.second as u32)
    }

    /// Interprets the fields as a wall clock time of `tz`.
    ///
    /// A time repeated by a DST fold resolves to its earliest instant. A time
    /// skipped by a DST gap is read with the offset in force before the gap,
    /// which moves it forward by the length of the gap.
    pub fn to_datetime<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        let local = self.to_naive()?;

        match tz.from_local_datetime(&local) {
            LocalResult::Single(single) => Some(single.with_timezone(&Utc)),
            LocalResult::Ambiguous(first, _) => Some(first.with_timezone(&Utc)),
            LocalResult::None => {
                let offset = offset_before_gap(tz, &local)?;
                let utc = local.checked_sub_signed(Duration::seconds(
                    offset.fix().local_minus_utc() as i64,
                ))?;
                Some(Utc.from_utc_datetime(&utc))
            }
        }
    }
}

// Walks back from a skipped local time, half an hour at a time, to the last
// wall clock time that exists.
fn offset_before_gap<Tz: TimeZone>(tz: &Tz, local: &NaiveDateTime) -> Option<Tz::Offset> {
    (1..=GAP_SEARCH_STEPS).find_map(|step| {
        let earlier = local.checked_sub_signed(Duration::minutes(30 * step))?;
        tz.offset_from_local_datetime(&earlier).earliest()
    })
}

const GAP_SEARCH_STEPS: i64 = 48;

impl fmt::Display for MsDosDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive() {
            Some(date_time) => write!(f, "{}", date_time),
            None => write!(
                f,
                "invalid (date=0x{:04x}, time=0x{:04x})",
                self.raw.0, self.raw.1
            ),
        }
    }
}

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum EntryType {
    Regular,
    Directory,
    Symlink,
    Fifo,
    CharacterDevice,
    BlockDevice,
    Socket,
}

impl EntryType {
    /// Maps the `S_IFMT` part of a Unix mode. Unknown or empty type bits give `None`.
    pub fn from_unix_mode(mode: u32) -> Option<EntryType> {
        match mode & S_IFMT {
            S_IFIFO => Some(EntryType::Fifo),
            S_IFCHR => Some(EntryType::CharacterDevice),
            S_IFDIR => Some(EntryType::Directory),
            S_IFBLK => Some(EntryType::BlockDevice),
            S_IFREG => Some(EntryType::Regular),
            S_IFLNK => Some(EntryType::Symlink),
            S_IFSOCK => Some(EntryType::Socket),
            _ => None,
        }
    }

    /// Unix file type carried by the high 4 bits of the external attributes.
    pub fn from_external_attributes(external_file_attributes: u32) -> Option<EntryType> {
        Self::from_unix_mode((external_file_attributes & UNIX_FILE_TYPE_MASK) >> 16)
    }

    /// The leading character of an `ls -l` mode string.
    pub fn mode_char(&self) -> char {
        match self {
            EntryType::Regular => '-',
            EntryType::Directory => 'd',
            EntryType::Symlink => 'l',
            EntryType::Fifo => 'p',
            EntryType::CharacterDevice => 'c',
            EntryType::BlockDevice => 'b',
            EntryType::Socket => 's',
        }
    }
}

bitflags! {
    /// POSIX permission bits, including setuid, setgid and sticky.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    pub struct Permissions: u32 {
        const SETUID = 0o4000;
        const SETGID = 0o2000;
        const STICKY = 0o1000;
        const OWNER_READ = 0o400;
        const OWNER_WRITE = 0o200;
        const OWNER_EXECUTE = 0o100;
        const GROUP_READ = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXECUTE = 0o010;
        const OTHER_READ = 0o004;
        const OTHER_WRITE = 0o002;
        const OTHER_EXECUTE = 0o001;
    }
}

impl Permissions {
    /// Decodes bits 16 to 27 of the external attributes.
    ///
    /// The value is meaningful only for archives made on a Unix-like system,
    /// see [`FileSystemType`].
    pub fn from_external_attributes(external_file_attributes: u32) -> Permissions {
        Permissions::from_bits_retain((external_file_attributes & UNIX_PERMISSIONS_MASK) >> 16)
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let triplets = [
            (
                Permissions::OWNER_READ,
                Permissions::OWNER_WRITE,
                Permissions::OWNER_EXECUTE,
                Permissions::SETUID,
                's',
            ),
            (
                Permissions::GROUP_READ,
                Permissions::GROUP_WRITE,
                Permissions::GROUP_EXECUTE,
                Permissions::SETGID,
                's',
            ),
            (
                Permissions::OTHER_READ,
                Permissions::OTHER_WRITE,
                Permissions::OTHER_EXECUTE,
                Permissions::STICKY,
                't',
            ),
        ];

        for (read, write, execute, special, marker) in triplets {
            let r = if self.contains(read) { 'r' } else { '-' };
            let w = if self.contains(write) { 'w' } else { '-' };
            let x = match (self.contains(execute), self.contains(special)) {
                (true, true) => marker,
                (false, true) => marker.to_ascii_uppercase(),
                (true, false) => 'x',
                (false, false) => '-',
            };
            write!(f, "{}{}{}", r, w, x)?;
        }

        Ok(())
    }
}

bitflags! {
    /// MS-DOS attribute byte, the low 8 bits of the external attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    pub struct DosAttributes: u32 {
        const READ_ONLY = 0x01;
        const HIDDEN = 0x02;
        const SYSTEM = 0x04;
        const VOLUME = 0x08;
        const DIRECTORY = 0x10;
        const ARCHIVE = 0x20;
    }
}

impl DosAttributes {
    /// The DOS attribute bits of the low byte, `None` when none of them is set.
    ///
    /// The undefined bits 0x40 and 0x80 are dropped.
    pub fn from_external_attributes(external_file_attributes: u32) -> Option<DosAttributes> {
        let attributes =
            DosAttributes::from_bits_truncate(external_file_attributes & DOS_ATTRIBUTES_MASK);
        if attributes.is_empty() {
            return None;
        }

        Some(attributes)
    }
}

/// File system of the tool that produced the archive, from the upper byte of
/// the "version made by" field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FileSystemType {
    Fat,
    Unix,
    Macintosh,
    Ntfs,
    Other(u8),
}

impl FileSystemType {
    pub fn from_version_made_by(version_made_by: u16) -> FileSystemType {
        match (version_made_by >> 8) as u8 {
            0 | 14 => FileSystemType::Fat,
            3 => FileSystemType::Unix,
            7 | 19 => FileSystemType::Macintosh,
            10 => FileSystemType::Ntfs,
            other => FileSystemType::Other(other),
        }
    }
}

impl fmt::Display for FileSystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSystemType::Fat => write!(f, "MS-DOS, OS/2 or NT FAT"),
            FileSystemType::Unix => write!(f, "Unix"),
            FileSystemType::Macintosh => write!(f, "Macintosh"),
            FileSystemType::Ntfs => write!(f, "NTFS"),
            FileSystemType::Other(code) => write!(f, "unknown ({})", code),
        }
    }
}

#[cfg(test)]
#[path = "./tests/types.rs"]
mod types_tests;
