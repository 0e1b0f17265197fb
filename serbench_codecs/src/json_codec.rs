use std::io;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter};
use serde_json::Serializer;

use serbench_core::codec::{EncodedPayload, Encoder};
use serbench_core::error::{BenchError, Result};
use serbench_core::record::RecordSet;

/// Label reported for self-describing text payloads.
pub const TEXT_LABEL: &str = "text";

/// Whitespace layout of the JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonLayout {
    /// `", "` between items and `": "` after keys, the layout most
    /// dynamic-language JSON dumpers produce by default.
    #[default]
    Spaced,
    /// No insignificant whitespace at all.
    Compact,
}

impl JsonLayout {
    pub fn name(&self) -> &'static str {
        match self {
            JsonLayout::Spaced => "spaced",
            JsonLayout::Compact => "compact",
        }
    }
}

/// Formatter that writes a single space after `,` and `:`.
#[derive(Debug, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Text codec: the whole record set as one UTF-8 JSON document, field
/// names embedded in every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pub layout: JsonLayout,
}

impl JsonCodec {
    pub fn new(layout: JsonLayout) -> Self {
        Self { layout }
    }

    fn write<F: Formatter>(&self, records: &RecordSet, formatter: F) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl Encoder for JsonCodec {
    fn label(&self) -> &'static str {
        TEXT_LABEL
    }

    fn describe(&self) -> String {
        format!("json ({})", self.layout.name())
    }

    fn encode(&self, records: &RecordSet) -> Result<EncodedPayload> {
        let bytes = match self.layout {
            JsonLayout::Spaced => self.write(records, SpacedFormatter),
            JsonLayout::Compact => self.write(records, CompactFormatter),
        }
        .map_err(|e| BenchError::Encode {
            codec: TEXT_LABEL,
            source: Box::new(e),
        })?;
        Ok(EncodedPayload::new(TEXT_LABEL, bytes))
    }
}
