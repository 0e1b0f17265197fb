use thiserror::Error;

use crate::record::Shape;

/// Errors raised while generating, encoding, compressing, or measuring.
///
/// Every variant is fatal to the measurement that produced it; the runner
/// stops at the first one.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A codec was handed a record shape its schema does not declare.
    #[error("codec '{codec}' does not support {shape} records")]
    UnsupportedShape { codec: &'static str, shape: Shape },

    /// A compressed payload came back empty, so the ratio has no value.
    #[error("compression ratio undefined for {codec} payload of {shape} x {num_records}: compressed size is 0")]
    RatioUndefined {
        codec: &'static str,
        shape: Shape,
        num_records: u32,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{codec} encoding failed: {source}")]
    Encode {
        codec: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{compressor} compression failed: {source}")]
    Compress {
        compressor: &'static str,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;
