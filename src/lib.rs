//! A library deriving the metadata of ZIP archive entries.
//!
//! The same attribute of an entry may be recorded several times: the central
//! directory entry and the local file header each carry their own copy of the
//! size and CRC, and optional extra fields may add timestamps of various
//! precisions and Unix ownership. This crate picks, field by field, the most
//! precise value available and returns it as an [`EntryDescription`].
//!
//! The records are expected already decoded by an archive reader, see
//! [`records`] and [`extra_field`].
//!
//! The current implementation is based on
//!
//! [PKWARE's APPNOTE.TXT v6.3.10](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT)
//! and Info-ZIP's `proginfo/extrafld.txt`.
//!
//! ## Features
//!
//! Feature  | Description
//! ---------|------
//! serde    | Implements `serde::Serialize` for [`EntryDescription`] and its field types
//!
//! ## Example
//!
//!```rust
//! use chrono::Utc;
//! use zipentry::{
//!     extra_field::ExtendedTimestamp,
//!     records::{CentralDirectoryEntry, LocalFileHeader},
//!     resolve_with, EntryType, ResolveOptions,
//! };
//!
//! let central = CentralDirectoryEntry {
//!     file_name: "docs/".to_owned(),
//!     version_made_by: 0x031e,
//!     external_file_attributes: 0o040755 << 16,
//!     ..Default::default()
//! };
//! let local = LocalFileHeader {
//!     extended_timestamp: Some(ExtendedTimestamp::new(Some(1_600_000_000), None, None)),
//!     ..Default::default()
//! };
//!
//! let options = ResolveOptions::with_time_zone(Utc);
//! let entry = resolve_with(&central, &local, false, &options);
//!
//! assert_eq!(entry.entry_type(), EntryType::Directory);
//! assert_eq!(entry.permissions().unwrap().bits(), 0o755);
//! assert_eq!(entry.modification_time().unwrap().timestamp(), 1_600_000_000);
//!```

mod constants;

pub mod compression;
mod entry;
pub mod error;
pub mod extra_field;
pub mod records;
mod resolver;
pub mod types;

pub use compression::CompressionMethod;
pub use entry::EntryDescription;
pub use error::ArchiveError;
pub use resolver::{
    resolve, resolve_with, ResolveOptions, TimeField, TimeSource, ACCESS_TIME_SOURCES,
    CREATION_TIME_SOURCES, MODIFICATION_TIME_SOURCES,
};
pub use types::{DosAttributes, EntryType, FileSystemType, MsDosDateTime, Permissions};
