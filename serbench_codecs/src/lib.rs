mod gzip_codec;
mod json_codec;
mod lz4_codec;
mod passthrough;
pub mod proto;
mod zstd_codec;

pub use gzip_codec::GzipCompressor;
pub use json_codec::{JsonCodec, JsonLayout, TEXT_LABEL};
pub use lz4_codec::{Lz4BlockCompressor, Lz4FrameCompressor};
pub use passthrough::PassThroughCompressor;
pub use proto::{ProstSchema, PROTO_SCHEMA};
pub use zstd_codec::ZstdCompressor;

use serbench_core::binary::BinaryCodec;
use serbench_core::codec::Compressor;
use serbench_core::error::{BenchError, Result};

/// Resolve a compressor from its CLI name.
///
/// `level` applies to zstd and gzip only. Passing one to a compressor without
/// levels is an error, so the recorded settings never mention an unused level.
pub fn compressor_by_name(name: &str, level: Option<i32>) -> Result<Box<dyn Compressor>> {
    match name.to_ascii_lowercase().as_str() {
        "lz4" | "lz4-frame" => without_level(Box::new(Lz4FrameCompressor), level),
        "lz4-block" => without_level(Box::new(Lz4BlockCompressor), level),
        "zstd" | "z" => match level {
            Some(l) => Ok(Box::new(ZstdCompressor::new(l)?)),
            None => Ok(Box::new(ZstdCompressor::default())),
        },
        "gzip" | "gz" => match level {
            Some(l) => Ok(Box::new(GzipCompressor::new(l)?)),
            None => Ok(Box::new(GzipCompressor::default())),
        },
        "none" | "passthrough" => without_level(Box::new(PassThroughCompressor), level),
        other => Err(BenchError::InvalidArgument(format!(
            "unknown compressor '{other}'. Valid options: lz4, lz4-block, zstd, gzip, none"
        ))),
    }
}

fn without_level(compressor: Box<dyn Compressor>, level: Option<i32>) -> Result<Box<dyn Compressor>> {
    match level {
        Some(l) => Err(BenchError::InvalidArgument(format!(
            "compressor '{}' takes no level, got {l}",
            compressor.name()
        ))),
        None => Ok(compressor),
    }
}

/// The protobuf binary codec.
pub fn protobuf_codec() -> BinaryCodec<ProstSchema> {
    BinaryCodec::new(ProstSchema)
}
