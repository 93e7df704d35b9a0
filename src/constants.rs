pub const X000A_NTFS: u16 = 0x000a;
pub const X5455_EXTENDEDTIMESTAMP: u16 = 0x5455;
pub const X7855_INFOZIP_UNIX: u16 = 0x7855;
pub const X7875_INFOZIP_NEW_UNIX: u16 = 0x7875;

/// Value stored in a 32 bits size field when the real size lives in a ZIP64 extra field.
pub const ZIP64_SIZE_SENTINEL: u64 = 0xFFFF_FFFF;

pub const UNIX_PERMISSIONS_MASK: u32 = 0x0FFF_0000;
pub const UNIX_FILE_TYPE_MASK: u32 = 0xF000_0000;
pub const DOS_ATTRIBUTES_MASK: u32 = 0xFF;

pub const INTERNAL_ATTRIBUTE_TEXT: u16 = 0x1;

/// Seconds between 1601-01-01 and 1970-01-01.
pub const NTFS_EPOCH_OFFSET: i64 = 11_644_473_600;
pub const NTFS_TICKS_PER_SECOND: u64 = 10_000_000;
