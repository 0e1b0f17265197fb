use std::io::{self, Write};

use flate2::write::GzEncoder;
use flate2::Compression;

use serbench_core::codec::Compressor;
use serbench_core::error::{BenchError, Result};

/// Gzip (DEFLATE) compressor.
#[derive(Debug, Clone, Copy)]
pub struct GzipCompressor {
    /// Compression level, 0-9 (default: 6).
    level: u32,
}

impl Default for GzipCompressor {
    fn default() -> Self {
        Self { level: 6 }
    }
}

impl GzipCompressor {
    pub fn new(level: i32) -> Result<Self> {
        if !(0..=9).contains(&level) {
            return Err(BenchError::InvalidArgument(format!(
                "gzip level must be 0-9, got {level}"
            )));
        }
        Ok(Self {
            level: level as u32,
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Compressor for GzipCompressor {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn settings(&self) -> String {
        format!("level {}", self.level)
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let map_err = |source: io::Error| BenchError::Compress {
            compressor: "gzip",
            source,
        };
        let mut enc = GzEncoder::new(Vec::with_capacity(raw.len() / 2), Compression::new(self.level));
        enc.write_all(raw).map_err(map_err)?;
        enc.finish().map_err(map_err)
    }
}
