use zipentry::extra_field::CustomExtraField;
use zipentry::records::{CentralDirectoryEntry, LocalFileHeader};

// 2021-06-15 13:45:30
pub const DOS_DATE: u16 = (41 << 9) | (6 << 5) | 15;
pub const DOS_TIME: u16 = (13 << 11) | (45 << 5) | 15;

pub const VERSION_MADE_BY_UNIX: u16 = 3 << 8 | 30;
pub const VERSION_MADE_BY_FAT: u16 = 20;

pub const REGULAR_644: u32 = 0o100644 << 16;

pub fn ntfs_ticks(unix: i64) -> u64 {
    (unix + 11_644_473_600) as u64 * 10_000_000
}

pub fn custom(header_id: u16, data: &[u8]) -> CustomExtraField {
    CustomExtraField::new(header_id, data.to_vec())
}

/// A central directory entry as written by Info-ZIP on Unix, without extra fields.
pub fn unix_central(file_name: &str, size: u64, crc32: u32) -> CentralDirectoryEntry {
    CentralDirectoryEntry {
        file_name: file_name.to_owned(),
        version_made_by: VERSION_MADE_BY_UNIX,
        last_mod_file_date: DOS_DATE,
        last_mod_file_time: DOS_TIME,
        crc32,
        uncompressed_size: size,
        external_file_attributes: REGULAR_644,
        ..Default::default()
    }
}

pub fn local(size: u64, crc32: u32) -> LocalFileHeader {
    LocalFileHeader {
        compression_method: 8,
        crc32,
        uncompressed_size: size,
        ..Default::default()
    }
}
