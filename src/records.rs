use crate::extra_field::{
    CustomExtraField, ExtendedTimestamp, InfoZipNewUnix, InfoZipUnix, NtfsTimestamp,
};

/// An entry of the central directory, already decoded by the archive reader.
///
/// Sizes are expected with any ZIP64 extra field applied; a size still equal to
/// `0xFFFFFFFF` is taken as unknown.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CentralDirectoryEntry {
    pub file_name: String,
    pub file_comment: String,
    pub version_made_by: u16,
    pub last_mod_file_time: u16,
    pub last_mod_file_date: u16,
    pub crc32: u32,
    pub uncompressed_size: u64,
    pub internal_file_attributes: u16,
    pub external_file_attributes: u32,
    pub extended_timestamp: Option<ExtendedTimestamp>,
    pub ntfs_timestamp: Option<NtfsTimestamp>,
    pub custom_extra_fields: Vec<CustomExtraField>,
}

/// The local file header preceding an entry's data, already decoded by the archive reader.
///
/// When bit 3 of the general purpose flags is set, `crc32` and
/// `uncompressed_size` are placeholders and the real values follow the data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub compression_method: u16,
    pub crc32: u32,
    pub uncompressed_size: u64,
    pub extended_timestamp: Option<ExtendedTimestamp>,
    pub ntfs_timestamp: Option<NtfsTimestamp>,
    pub info_zip_unix: Option<InfoZipUnix>,
    pub info_zip_new_unix: Option<InfoZipNewUnix>,
    pub custom_extra_fields: Vec<CustomExtraField>,
}
