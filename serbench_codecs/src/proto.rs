//! Protobuf packet schema.
//!
//! The messages are declared with prost derives and mirror [`PROTO_SCHEMA`]
//! tag for tag, so no schema compiler is needed at build time.

use prost::Message;

use serbench_core::binary::PacketSchema;
use serbench_core::error::Result;
use serbench_core::record::{ComplexRecord, LargeRecord, SimpleRecord};

/// Source declaration of the packet schema the messages below implement.
pub const PROTO_SCHEMA: &str = r#"syntax = "proto3";

message SimpleRecord {
  uint32 id = 1;
  string name = 2;
}

message ComplexRecord {
  uint32 id = 1;
  string name = 2;
  string description = 3;
  double value = 4;
  bool isActive = 5;
  repeated string tags = 6;
}

message LargeRecord {
  uint32 id = 1;
  string title = 2;
  string content = 3;
}

message DataPacket {
  repeated SimpleRecord simple_records = 1;
  repeated ComplexRecord complex_records = 2;
  repeated LargeRecord large_records = 3;
}
"#;

#[derive(Clone, PartialEq, Message)]
pub struct SimpleRecordMsg {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct ComplexRecordMsg {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(double, tag = "4")]
    pub value: f64,
    #[prost(bool, tag = "5")]
    pub is_active: bool,
    #[prost(string, repeated, tag = "6")]
    pub tags: Vec<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct LargeRecordMsg {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub content: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct DataPacket {
    #[prost(message, repeated, tag = "1")]
    pub simple_records: Vec<SimpleRecordMsg>,
    #[prost(message, repeated, tag = "2")]
    pub complex_records: Vec<ComplexRecordMsg>,
    #[prost(message, repeated, tag = "3")]
    pub large_records: Vec<LargeRecordMsg>,
}

/// [`PacketSchema`] backed by the prost `DataPacket` message. Declares all
/// three shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProstSchema;

impl PacketSchema for ProstSchema {
    fn name(&self) -> &'static str {
        "protobuf"
    }

    fn declaration(&self) -> &'static str {
        PROTO_SCHEMA
    }

    fn encode_simple(&self, records: &[SimpleRecord]) -> Result<Vec<u8>> {
        let packet = DataPacket {
            simple_records: records
                .iter()
                .map(|r| SimpleRecordMsg {
                    id: r.id,
                    name: r.name.clone(),
                })
                .collect(),
            ..Default::default()
        };
        Ok(packet.encode_to_vec())
    }

    fn encode_complex(&self, records: &[ComplexRecord]) -> Result<Vec<u8>> {
        let packet = DataPacket {
            complex_records: records
                .iter()
                .map(|r| ComplexRecordMsg {
                    id: r.id,
                    name: r.name.clone(),
                    description: r.description.clone(),
                    value: r.value,
                    is_active: r.is_active,
                    tags: r.tags.clone(),
                })
                .collect(),
            ..Default::default()
        };
        Ok(packet.encode_to_vec())
    }

    fn encode_large(&self, records: &[LargeRecord]) -> Result<Vec<u8>> {
        let packet = DataPacket {
            large_records: records
                .iter()
                .map(|r| LargeRecordMsg {
                    id: r.id,
                    title: r.title.clone(),
                    content: r.content.clone(),
                })
                .collect(),
            ..Default::default()
        };
        Ok(packet.encode_to_vec())
    }
}
