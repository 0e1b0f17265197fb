use serbench_core::codec::Compressor;
use serbench_core::error::Result;

/// No-op compressor: returns the payload verbatim.
///
/// Useful as a baseline; every ratio is exactly 1. An empty payload stays
/// empty, so its ratio is undefined and the measurement fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughCompressor;

impl Compressor for PassThroughCompressor {
    fn name(&self) -> &'static str {
        "none"
    }

    fn settings(&self) -> String {
        "verbatim".to_string()
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        Ok(raw.to_vec())
    }
}
