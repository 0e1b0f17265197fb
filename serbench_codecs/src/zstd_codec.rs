use serbench_core::codec::Compressor;
use serbench_core::error::{BenchError, Result};

/// Zstandard compressor.
///
/// Each payload becomes one zstd frame at the configured level (default: 3).
#[derive(Debug, Clone, Copy)]
pub struct ZstdCompressor {
    /// Compression level (1 = fast / larger, 22 = slow / smallest).
    level: i32,
}

impl Default for ZstdCompressor {
    fn default() -> Self {
        Self { level: 3 }
    }
}

impl ZstdCompressor {
    /// Rejects levels outside the range the linked zstd library accepts,
    /// since zstd would clamp them and the reported level would be wrong.
    pub fn new(level: i32) -> Result<Self> {
        let range = zstd::compression_level_range();
        if !range.contains(&level) {
            return Err(BenchError::InvalidArgument(format!(
                "zstd level must be {}-{}, got {level}",
                range.start(),
                range.end()
            )));
        }
        Ok(Self { level })
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl Compressor for ZstdCompressor {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn settings(&self) -> String {
        format!("level {}", self.level)
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        zstd::bulk::compress(raw, self.level).map_err(|source| BenchError::Compress {
            compressor: "zstd",
            source,
        })
    }
}
