pub mod binary;
pub mod codec;
pub mod error;
pub mod generate;
pub mod measure;
pub mod record;
pub mod runner;

pub use binary::{BinaryCodec, PacketSchema, BINARY_LABEL};
pub use codec::{CompressedPayload, Compressor, EncodedPayload, Encoder};
pub use error::{BenchError, Result};
pub use generate::{checked_count, generate, DEFAULT_MAX_RECORDS};
pub use measure::{compression_ratio, Bench, Measurement};
pub use record::{ComplexRecord, LargeRecord, RecordSet, Shape, SimpleRecord};
pub use runner::RunReport;
