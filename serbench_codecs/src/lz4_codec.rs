use std::io::{self, Write};

use lz4_flex::block::compress_prepend_size;
use lz4_flex::frame::{BlockMode, BlockSize, FrameEncoder, FrameInfo};

use serbench_core::codec::Compressor;
use serbench_core::error::{BenchError, Result};

/// LZ4 frame compressor.
///
/// Writes a standard LZ4 frame: 64 KB linked blocks, the content size in the
/// frame header, no block or content checksums. Frame overhead makes tiny
/// inputs grow, which shows up as ratios below 1.
///
/// Default compressor for benchmark runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4FrameCompressor;

impl Lz4FrameCompressor {
    fn frame_info(raw_len: usize) -> FrameInfo {
        FrameInfo::new()
            .block_size(BlockSize::Max64KB)
            .block_mode(BlockMode::Linked)
            .content_size(Some(raw_len as u64))
    }
}

impl Compressor for Lz4FrameCompressor {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn settings(&self) -> String {
        "frame, 64KB linked blocks, content size, no checksums".to_string()
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let map_err = |source: io::Error| BenchError::Compress {
            compressor: "lz4",
            source,
        };
        let mut enc =
            FrameEncoder::with_frame_info(Self::frame_info(raw.len()), Vec::with_capacity(raw.len()));
        enc.write_all(raw).map_err(map_err)?;
        enc.finish().map_err(|e| map_err(io::Error::other(e)))
    }
}

/// Raw LZ4 block with a 4-byte little-endian length prefix.
///
/// No frame header, so the overhead on small payloads is minimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz4BlockCompressor;

impl Compressor for Lz4BlockCompressor {
    fn name(&self) -> &'static str {
        "lz4-block"
    }

    fn settings(&self) -> String {
        "block, size-prepended".to_string()
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(compress_prepend_size(raw))
    }
}
