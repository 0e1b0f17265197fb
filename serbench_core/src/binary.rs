use crate::codec::{EncodedPayload, Encoder};
use crate::error::{BenchError, Result};
use crate::record::{ComplexRecord, LargeRecord, RecordSet, Shape, SimpleRecord};

/// Label reported for fixed-schema binary payloads.
pub const BINARY_LABEL: &str = "binary";

/// A pre-declared binary schema: one packet message with a repeated field
/// per record shape.
///
/// Field values are copied verbatim; field names never reach the wire.
/// A schema only overrides the shapes it declares. The defaults reject
/// the rest with [`BenchError::UnsupportedShape`].
pub trait PacketSchema: Send + Sync {
    fn name(&self) -> &'static str;

    /// Schema source text, e.g. a `.proto` declaration.
    fn declaration(&self) -> &'static str;

    fn encode_simple(&self, _records: &[SimpleRecord]) -> Result<Vec<u8>> {
        Err(unsupported(self.name(), Shape::Simple))
    }

    fn encode_complex(&self, _records: &[ComplexRecord]) -> Result<Vec<u8>> {
        Err(unsupported(self.name(), Shape::Complex))
    }

    fn encode_large(&self, _records: &[LargeRecord]) -> Result<Vec<u8>> {
        Err(unsupported(self.name(), Shape::Large))
    }
}

fn unsupported(codec: &'static str, shape: Shape) -> BenchError {
    BenchError::UnsupportedShape { codec, shape }
}

/// Binary codec backed by an injected [`PacketSchema`].
pub struct BinaryCodec<S> {
    schema: S,
}

impl<S: PacketSchema> BinaryCodec<S> {
    pub fn new(schema: S) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }
}

impl<S: PacketSchema> Encoder for BinaryCodec<S> {
    fn label(&self) -> &'static str {
        BINARY_LABEL
    }

    fn describe(&self) -> String {
        format!("{} schema", self.schema.name())
    }

    fn encode(&self, records: &RecordSet) -> Result<EncodedPayload> {
        let bytes = match records {
            RecordSet::Simple(records) => self.schema.encode_simple(records)?,
            RecordSet::Complex(records) => self.schema.encode_complex(records)?,
            RecordSet::Large(records) => self.schema.encode_large(records)?,
        };
        Ok(EncodedPayload::new(BINARY_LABEL, bytes))
    }
}
