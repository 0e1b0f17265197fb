use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::{Compressor, Encoder};
use crate::error::{BenchError, Result};
use crate::generate::{generate, DEFAULT_MAX_RECORDS};
use crate::record::Shape;

/// Sizes and ratios for one (shape, count) pair.
///
/// Serialized field names follow the established report columns, where the
/// text codec is reported as `json_*`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    #[serde(rename = "data_type")]
    pub shape: Shape,
    pub num_records: u32,
    #[serde(rename = "json_size")]
    pub text_size: usize,
    pub binary_size: usize,
    #[serde(rename = "json_compressed_size")]
    pub text_compressed_size: usize,
    pub binary_compressed_size: usize,
    #[serde(rename = "json_compression_ratio")]
    pub text_ratio: f64,
    #[serde(rename = "binary_compression_ratio")]
    pub binary_ratio: f64,
    #[serde(rename = "json_checksum")]
    pub text_checksum: u64,
    pub binary_checksum: u64,
}

impl Measurement {
    /// Codec labels whose payload grew under compression (ratio below 1).
    ///
    /// Expansion is legal for tiny inputs; callers surface it, nothing fails.
    /// An empty payload (zero records under a format with no container
    /// bytes) has ratio 0.0 and is listed here too.
    pub fn expanded(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.text_ratio < 1.0 {
            out.push("text");
        }
        if self.binary_ratio < 1.0 {
            out.push("binary");
        }
        out
    }
}

/// `size / compressed`, refusing to divide by a zero compressed size.
///
/// An empty payload with a non-empty compressed form yields 0.0, the only
/// case where the ratio is not strictly positive.
pub fn compression_ratio(
    size: usize,
    compressed: usize,
    codec: &'static str,
    shape: Shape,
    num_records: u32,
) -> Result<f64> {
    if compressed == 0 {
        return Err(BenchError::RatioUndefined {
            codec,
            shape,
            num_records,
        });
    }
    Ok(size as f64 / compressed as f64)
}

/// The measurement pipeline: generator, both codecs, one compressor.
///
/// Codecs and compressor are injected so tests can swap in fakes.
pub struct Bench {
    pub(crate) text: Box<dyn Encoder>,
    pub(crate) binary: Box<dyn Encoder>,
    pub(crate) compressor: Box<dyn Compressor>,
    max_records: u32,
}

impl Bench {
    pub fn new(
        text: Box<dyn Encoder>,
        binary: Box<dyn Encoder>,
        compressor: Box<dyn Compressor>,
    ) -> Self {
        Self {
            text,
            binary,
            compressor,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }

    /// Cap the record count any single measurement may request.
    pub fn with_max_records(mut self, max_records: u32) -> Self {
        self.max_records = max_records;
        self
    }

    pub fn max_records(&self) -> u32 {
        self.max_records
    }

    pub fn compressor(&self) -> &dyn Compressor {
        self.compressor.as_ref()
    }

    /// Measure one (shape, count) pair. Any failing step fails the whole
    /// measurement; there are no partial results.
    pub fn measure(&self, shape: Shape, count: u32) -> Result<Measurement> {
        if count > self.max_records {
            return Err(BenchError::InvalidArgument(format!(
                "record count {count} exceeds the configured limit of {}",
                self.max_records
            )));
        }

        let records = generate(shape, count);

        let text = self.text.encode(&records)?;
        let binary = self.binary.encode(&records)?;

        let text_compressed = self.compressor.compress_payload(&text)?;
        let binary_compressed = self.compressor.compress_payload(&binary)?;

        let text_ratio = compression_ratio(
            text.len(),
            text_compressed.len(),
            self.text.label(),
            shape,
            count,
        )?;
        let binary_ratio = compression_ratio(
            binary.len(),
            binary_compressed.len(),
            self.binary.label(),
            shape,
            count,
        )?;

        let measurement = Measurement {
            shape,
            num_records: count,
            text_size: text.len(),
            binary_size: binary.len(),
            text_compressed_size: text_compressed.len(),
            binary_compressed_size: binary_compressed.len(),
            text_ratio,
            binary_ratio,
            text_checksum: text.checksum(),
            binary_checksum: binary.checksum(),
        };

        debug!(
            %shape,
            count,
            text_size = measurement.text_size,
            binary_size = measurement.binary_size,
            text_compressed = measurement.text_compressed_size,
            binary_compressed = measurement.binary_compressed_size,
            "measured"
        );
        for codec in measurement.expanded() {
            warn!(%shape, count, codec, "compression expanded the payload");
        }

        Ok(measurement)
    }
}
