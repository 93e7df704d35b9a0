use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    #[error("CRC mismatch for '{name}': expected {expected:08x}, computed {actual:08x}")]
    WrongCrc {
        name: String,
        expected: u32,
        actual: u32,
    },
}
