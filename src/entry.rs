use core::fmt;

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::compression::CompressionMethod;
use crate::error::ArchiveError;
use crate::extra_field::CustomExtraField;
use crate::types::{DosAttributes, EntryType, FileSystemType, Permissions};

/// Metadata of one archive entry, merged from its central directory entry and
/// its local file header by [`crate::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EntryDescription {
    pub(crate) name: String,
    pub(crate) comment: String,
    pub(crate) size: Option<usize>,
    pub(crate) entry_type: EntryType,
    pub(crate) access_time: Option<DateTime<Utc>>,
    pub(crate) creation_time: Option<DateTime<Utc>>,
    pub(crate) modification_time: Option<DateTime<Utc>>,
    pub(crate) permissions: Option<Permissions>,
    pub(crate) external_file_attributes: u32,
    pub(crate) dos_attributes: Option<DosAttributes>,
    pub(crate) is_text_file: bool,
    pub(crate) file_system_type: FileSystemType,
    pub(crate) compression_method: CompressionMethod,
    pub(crate) owner_id: Option<u64>,
    pub(crate) group_id: Option<u64>,
    pub(crate) custom_extra_fields: Vec<CustomExtraField>,
    pub(crate) crc: u32,
}

impl EntryDescription {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Uncompressed size, `None` when the record only holds the ZIP64 placeholder
    /// or the value does not fit in `usize`.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn is_directory(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.entry_type == EntryType::Symlink
    }

    /// Last access time.
    ///
    /// Set from, in order: the local extended timestamp, the NTFS extra field.
    pub fn access_time(&self) -> Option<DateTime<Utc>> {
        self.access_time
    }

    /// Creation time.
    ///
    /// Set from, in order: the local extended timestamp, the NTFS extra field.
    pub fn creation_time(&self) -> Option<DateTime<Utc>> {
        self.creation_time
    }

    /// Last modification time.
    ///
    /// Set from, in order: the extended timestamp, the NTFS extra field, the
    /// MS-DOS date and time of the central directory. `None` only when the
    /// latter is used and one of its fields is out of range.
    pub fn modification_time(&self) -> Option<DateTime<Utc>> {
        self.modification_time
    }

    /// Unix permissions. Meaningless when the archive was not made on a
    /// POSIX-compatible file system, check [`Self::file_system_type`].
    pub fn permissions(&self) -> Option<Permissions> {
        self.permissions
    }

    pub fn external_file_attributes(&self) -> u32 {
        self.external_file_attributes
    }

    pub fn dos_attributes(&self) -> Option<DosAttributes> {
        self.dos_attributes
    }

    pub fn is_text_file(&self) -> bool {
        self.is_text_file
    }

    pub fn file_system_type(&self) -> FileSystemType {
        self.file_system_type
    }

    pub fn compression_method(&self) -> CompressionMethod {
        self.compression_method
    }

    pub fn owner_id(&self) -> Option<u64> {
        self.owner_id
    }

    pub fn group_id(&self) -> Option<u64> {
        self.group_id
    }

    /// Unrecognised extra fields of the central directory entry followed by
    /// those of the local file header.
    pub fn custom_extra_fields(&self) -> &[CustomExtraField] {
        &self.custom_extra_fields
    }

    pub fn crc(&self) -> u32 {
        self.crc
    }

    /// Compares the CRC-32 of the extracted `data` with the recorded one.
    pub fn check_crc(&self, data: &[u8]) -> Result<(), ArchiveError> {
        let actual = crc32fast::hash(data);

        if actual == self.crc {
            Ok(())
        } else {
            Err(ArchiveError::WrongCrc {
                name: self.name.clone(),
                expected: self.crc,
                actual,
            })
        }
    }
}

fn optional_time(time: &Option<DateTime<Utc>>) -> String {
    match time {
        Some(time) => time.to_string(),
        None => "not available".to_owned(),
    }
}

impl fmt::Display for EntryDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = 48;

        writeln!(f, "{: <padding$}{}", "file name:", self.name)?;

        let mode = match self.permissions {
            Some(permissions) => format!("{}{}", self.entry_type.mode_char(), permissions),
            None => self.entry_type.mode_char().to_string(),
        };
        writeln!(f, "{: <padding$}{}", "file type and permissions:", mode)?;

        writeln!(
            f,
            "{: <padding$}{}",
            "file system or operating system of origin:", self.file_system_type
        )?;

        writeln!(
            f,
            "{: <padding$}{}",
            "compression method:", self.compression_method
        )?;

        let text = if self.is_text_file { "text" } else { "binary" };
        writeln!(f, "{: <padding$}{}", "apparent file type:", text)?;

        writeln!(
            f,
            "{: <padding$}{}",
            "file last modified on (UTC):",
            optional_time(&self.modification_time)
        )?;
        writeln!(
            f,
            "{: <padding$}{}",
            "file last accessed on (UTC):",
            optional_time(&self.access_time)
        )?;
        writeln!(
            f,
            "{: <padding$}{}",
            "file created on (UTC):",
            optional_time(&self.creation_time)
        )?;

        writeln!(f, "{: <padding$}{:x}", "32-bit CRC value (hex):", self.crc)?;

        match self.size {
            Some(size) => writeln!(f, "{: <padding$}{} bytes", "uncompressed size:", size)?,
            None => writeln!(f, "{: <padding$}unknown", "uncompressed size:")?,
        }

        writeln!(
            f,
            "{: <padding$}{:#010x}",
            "external file attributes:", self.external_file_attributes
        )?;

        if let Some(dos_attributes) = self.dos_attributes {
            writeln!(
                f,
                "{: <padding$}{:?}",
                "MS-DOS file attributes:", dos_attributes
            )?;
        }

        if let (Some(uid), Some(gid)) = (self.owner_id, self.group_id) {
            writeln!(f, "{: <padding$}{}/{}", "Unix UID/GID:", uid, gid)?;
        }

        for extra_field in &self.custom_extra_fields {
            writeln!(
                f,
                "- A subfield with ID 0x{:04X} (unknown) and {} data bytes.",
                extra_field.header_id,
                extra_field.data.len()
            )?;
        }

        if self.comment.is_empty() {
            writeln!(f, "There is no file comment.")
        } else {
            writeln!(f, "{: <padding$}{}", "file comment:", self.comment)
        }
    }
}
