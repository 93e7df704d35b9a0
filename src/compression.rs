use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::Serialize;

pub const STORE: u16 = 0;
pub const DEFLATE: u16 = 8;
pub const BZIP2: u16 = 12;
pub const LZMA: u16 = 14;
pub const ZSTD: u16 = 93;
pub const XZ: u16 = 95;

/// Compression method of an entry, as declared by its local file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CompressionMethod {
    Store,
    Deflate,
    BZip2,
    Lzma,
    Zstd,
    Xz,
    Unknown(u16),
}

impl CompressionMethod {
    pub fn from_compression_method(compression_method: u16) -> CompressionMethod {
        match compression_method {
            STORE => CompressionMethod::Store,
            DEFLATE => CompressionMethod::Deflate,
            BZIP2 => CompressionMethod::BZip2,
            LZMA => CompressionMethod::Lzma,
            ZSTD => CompressionMethod::Zstd,
            XZ => CompressionMethod::Xz,
            _ => CompressionMethod::Unknown(compression_method),
        }
    }

    pub fn zip_code(&self) -> u16 {
        match self {
            CompressionMethod::Store => STORE,
            CompressionMethod::Deflate => DEFLATE,
            CompressionMethod::BZip2 => BZIP2,
            CompressionMethod::Lzma => LZMA,
            CompressionMethod::Zstd => ZSTD,
            CompressionMethod::Xz => XZ,
            CompressionMethod::Unknown(code) => *code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CompressionMethod::Store => "store",
            CompressionMethod::Deflate => "deflate",
            CompressionMethod::BZip2 => "bzip2",
            CompressionMethod::Lzma => "lzma",
            CompressionMethod::Zstd => "zstd",
            CompressionMethod::Xz => "xz",
            CompressionMethod::Unknown(_) => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, CompressionMethod::Unknown(_))
    }
}

impl Display for CompressionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressionMethod::Unknown(code) => write!(f, "unknown ({})", code),
            _ => write!(f, "{}", self.label()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(
            CompressionMethod::from_compression_method(0),
            CompressionMethod::Store
        );
        assert_eq!(
            CompressionMethod::from_compression_method(8),
            CompressionMethod::Deflate
        );
        assert_eq!(
            CompressionMethod::from_compression_method(93),
            CompressionMethod::Zstd
        );
        assert_eq!(CompressionMethod::Xz.zip_code(), 95);
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let method = CompressionMethod::from_compression_method(99);

        assert!(method.is_unknown());
        assert_eq!(method.zip_code(), 99);
        assert_eq!(method.to_string(), "unknown (99)");
    }
}
