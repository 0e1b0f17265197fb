use xxhash_rust::xxh3::xxh3_64;

use crate::error::Result;
use crate::record::RecordSet;

/// Bytes produced by one codec for one record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    /// Label of the codec that produced the bytes (`"text"` or `"binary"`).
    pub codec: &'static str,
    pub bytes: Vec<u8>,
}

impl EncodedPayload {
    pub fn new(codec: &'static str, bytes: Vec<u8>) -> Self {
        Self { codec, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// xxhash3-64 of the encoded bytes.
    pub fn checksum(&self) -> u64 {
        xxh3_64(&self.bytes)
    }
}

/// Output of the compressor for exactly one [`EncodedPayload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedPayload {
    pub compressor: &'static str,
    pub bytes: Vec<u8>,
}

impl CompressedPayload {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Serialization strategy under test.
///
/// Each `Encoder`:
/// - Is identified by a stable `label()` that appears in reports.
/// - Must encode the whole record set in one shot; the payload length is
///   the measured size, with no further transformation.
/// - Must fail rather than emit an empty payload for a shape it cannot encode.
pub trait Encoder: Send + Sync {
    fn label(&self) -> &'static str;

    /// Run-constant description for the report (format, layout, schema).
    fn describe(&self) -> String {
        self.label().to_string()
    }

    fn encode(&self, records: &RecordSet) -> Result<EncodedPayload>;
}

/// General-purpose compression stage.
///
/// Settings (level, framing) are fixed at construction and held for the
/// whole run; `settings()` describes them for the report.
pub trait Compressor: Send + Sync {
    fn name(&self) -> &'static str;

    fn settings(&self) -> String;

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>>;

    /// Compress an encoded payload, tagging the result with this compressor.
    fn compress_payload(&self, payload: &EncodedPayload) -> Result<CompressedPayload> {
        Ok(CompressedPayload {
            compressor: self.name(),
            bytes: self.compress(&payload.bytes)?,
        })
    }
}
