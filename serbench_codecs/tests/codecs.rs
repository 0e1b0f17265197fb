use std::io::Read;

use prost::Message;

use serbench_codecs::proto::DataPacket;
use serbench_codecs::{
    compressor_by_name, protobuf_codec, GzipCompressor, JsonCodec, JsonLayout, Lz4BlockCompressor,
    Lz4FrameCompressor, PassThroughCompressor, ProstSchema, ZstdCompressor, PROTO_SCHEMA,
};
use serbench_core::{generate, BenchError, Compressor, Encoder, PacketSchema, Shape};

fn text(layout: JsonLayout, shape: Shape, count: u32) -> String {
    let payload = JsonCodec::new(layout).encode(&generate(shape, count)).unwrap();
    assert_eq!(payload.codec, "text");
    String::from_utf8(payload.bytes).unwrap()
}

// ── text codec ─────────────────────────────────────────────────────────────

#[test]
fn test_json_spaced_layout() {
    assert_eq!(
        text(JsonLayout::Spaced, Shape::Simple, 1),
        r#"{"simple_records": [{"id": 0, "name": "Name0"}]}"#
    );
    assert_eq!(text(JsonLayout::Spaced, Shape::Simple, 10).len(), 300);
}

#[test]
fn test_json_compact_layout() {
    assert_eq!(
        text(JsonLayout::Compact, Shape::Simple, 2),
        r#"{"simple_records":[{"id":0,"name":"Name0"},{"id":1,"name":"Name1"}]}"#
    );
}

#[test]
fn test_json_complex_fields_in_declared_order() {
    let doc = text(JsonLayout::Spaced, Shape::Complex, 4);
    assert!(doc.starts_with(
        r#"{"complex_records": [{"id": 0, "name": "Name0", "description": "Description of record 0", "value": 0.0, "isActive": true, "tags": ["tag0", "tag1", "tag2", "tag3", "tag4"]}"#
    ));
    assert!(doc.contains(r#""value": 3.3000000000000003, "isActive": false"#));
    assert!(doc.ends_with("]}"));
}

#[test]
fn test_json_large_records() {
    let doc = text(JsonLayout::Spaced, Shape::Large, 2);
    assert!(doc.starts_with(r#"{"large_records": [{"id": 0, "title": "Title 0", "content": "<html>Lorem"#));
    assert_eq!(doc.matches("</html>").count(), 2);
}

#[test]
fn test_json_empty_sets() {
    assert_eq!(text(JsonLayout::Spaced, Shape::Complex, 0), r#"{"complex_records": []}"#);
    assert_eq!(text(JsonLayout::Compact, Shape::Large, 0), r#"{"large_records":[]}"#);
}

// ── binary codec ───────────────────────────────────────────────────────────

#[test]
fn test_protobuf_simple_wire_bytes() {
    let payload = protobuf_codec().encode(&generate(Shape::Simple, 1)).unwrap();
    assert_eq!(payload.codec, "binary");
    // simple_records[0] { name: "Name0" }; the zero id is omitted on the wire.
    assert_eq!(payload.bytes, b"\x0a\x07\x12\x05Name0");
    let payload = protobuf_codec().encode(&generate(Shape::Simple, 10)).unwrap();
    assert_eq!(payload.len(), 108);
}

#[test]
fn test_protobuf_packet_decodes_back() {
    for shape in Shape::ALL {
        let payload = protobuf_codec().encode(&generate(shape, 7)).unwrap();
        let packet = DataPacket::decode(payload.bytes.as_slice()).unwrap();
        let lens = (
            packet.simple_records.len(),
            packet.complex_records.len(),
            packet.large_records.len(),
        );
        let expected = match shape {
            Shape::Simple => (7, 0, 0),
            Shape::Complex => (0, 7, 0),
            Shape::Large => (0, 0, 7),
        };
        assert_eq!(lens, expected, "{shape}");
    }

    let payload = protobuf_codec().encode(&generate(Shape::Complex, 4)).unwrap();
    let packet = DataPacket::decode(payload.bytes.as_slice()).unwrap();
    let rec = &packet.complex_records[3];
    assert_eq!(rec.id, 3);
    assert_eq!(rec.description, "Description of record 3");
    assert!(!rec.is_active);
    assert_eq!(rec.tags.len(), 5);
    assert!((rec.value - 3.3).abs() < 1e-9);
}

#[test]
fn test_protobuf_empty_packet_is_zero_bytes() {
    for shape in Shape::ALL {
        let payload = protobuf_codec().encode(&generate(shape, 0)).unwrap();
        assert!(payload.is_empty(), "{shape}");
    }
}

#[test]
fn test_protobuf_is_smaller_than_json() {
    for shape in Shape::ALL {
        let records = generate(shape, 100);
        let text = JsonCodec::default().encode(&records).unwrap();
        let binary = protobuf_codec().encode(&records).unwrap();
        assert!(binary.len() < text.len(), "{shape}");
    }
}

#[test]
fn test_schema_declaration_names_every_message() {
    assert_eq!(ProstSchema.declaration(), PROTO_SCHEMA);
    assert_eq!(protobuf_codec().schema().declaration(), PROTO_SCHEMA);
    for message in ["SimpleRecord", "ComplexRecord", "LargeRecord", "DataPacket"] {
        assert!(PROTO_SCHEMA.contains(&format!("message {message} {{")), "{message}");
    }
    assert!(PROTO_SCHEMA.contains("bool isActive = 5;"));
}

// ── compressors ────────────────────────────────────────────────────────────

fn compressible() -> Vec<u8> {
    JsonCodec::default()
        .encode(&generate(Shape::Large, 50))
        .unwrap()
        .bytes
}

#[test]
fn test_lz4_frame_round_trip() {
    let raw = compressible();
    let compressed = Lz4FrameCompressor.compress(&raw).unwrap();
    assert!(compressed.len() < raw.len() / 4);
    // Standard LZ4 frame magic.
    assert_eq!(&compressed[..4], &[0x04, 0x22, 0x4d, 0x18]);

    let mut out = Vec::new();
    lz4_flex::frame::FrameDecoder::new(compressed.as_slice())
        .read_to_end(&mut out)
        .unwrap();
    assert_eq!(out, raw);
}

#[test]
fn test_lz4_frame_empty_input_still_has_a_frame() {
    let compressed = Lz4FrameCompressor.compress(&[]).unwrap();
    assert!(!compressed.is_empty());
}

#[test]
fn test_lz4_block_round_trip() {
    let raw = compressible();
    let compressed = Lz4BlockCompressor.compress(&raw).unwrap();
    assert_eq!(lz4_flex::decompress_size_prepended(&compressed).unwrap(), raw);
}

#[test]
fn test_zstd_and_gzip_shrink_repetitive_text() {
    let raw = compressible();
    let zstd = ZstdCompressor::default().compress(&raw).unwrap();
    assert_eq!(zstd::decode_all(zstd.as_slice()).unwrap(), raw);
    assert!(zstd.len() < raw.len() / 4);

    let gz = GzipCompressor::default().compress(&raw).unwrap();
    let mut out = Vec::new();
    flate2::read::GzDecoder::new(gz.as_slice())
        .read_to_end(&mut out)
        .unwrap();
    assert_eq!(out, raw);
}

#[test]
fn test_passthrough_is_verbatim() {
    let raw = compressible();
    assert_eq!(PassThroughCompressor.compress(&raw).unwrap(), raw);
}

#[test]
fn test_compressor_by_name() {
    assert_eq!(compressor_by_name("lz4", None).unwrap().name(), "lz4");
    assert_eq!(compressor_by_name("LZ4-Frame", None).unwrap().name(), "lz4");
    assert_eq!(compressor_by_name("lz4-block", None).unwrap().name(), "lz4-block");
    assert_eq!(compressor_by_name("none", None).unwrap().name(), "none");

    let zstd = compressor_by_name("zstd", Some(19)).unwrap();
    assert_eq!(zstd.settings(), "level 19");
    assert_eq!(compressor_by_name("zstd", None).unwrap().settings(), "level 3");
    assert_eq!(compressor_by_name("gzip", Some(9)).unwrap().settings(), "level 9");

    assert!(matches!(
        compressor_by_name("gzip", Some(12)),
        Err(BenchError::InvalidArgument(_))
    ));
    match compressor_by_name("brotli", None) {
        Err(BenchError::InvalidArgument(msg)) => assert!(msg.contains("brotli")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(c) => panic!("unexpected compressor {}", c.name()),
    }
}

#[test]
fn test_out_of_range_levels_are_rejected() {
    for level in [100, -1_000_000] {
        match compressor_by_name("zstd", Some(level)) {
            Err(BenchError::InvalidArgument(msg)) => assert!(msg.contains("zstd level")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(c) => panic!("zstd level {level} accepted with settings '{}'", c.settings()),
        }
    }
    assert!(ZstdCompressor::new(23).is_err());
    assert!(GzipCompressor::new(-1).is_err());
    assert!(GzipCompressor::new(10).is_err());

    // Level bounds themselves stay usable and are reported as given.
    let range = zstd::compression_level_range();
    let max = ZstdCompressor::new(*range.end()).unwrap();
    assert_eq!(max.level(), *range.end());
    assert_eq!(max.settings(), format!("level {}", range.end()));
    assert_eq!(GzipCompressor::new(0).unwrap().settings(), "level 0");
}

#[test]
fn test_level_rejected_for_compressors_without_levels() {
    for name in ["lz4", "lz4-block", "none"] {
        match compressor_by_name(name, Some(5)) {
            Err(BenchError::InvalidArgument(msg)) => assert!(msg.contains("takes no level"), "{msg}"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(c) => panic!("{name} accepted a level: {}", c.settings()),
        }
        assert!(compressor_by_name(name, None).is_ok());
    }
}
