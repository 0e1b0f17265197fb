//! Deterministic synthetic datasets.
//!
//! Every field is derived from the record index alone, so the same
//! `(shape, count)` always yields byte-identical records.

use crate::error::{BenchError, Result};
use crate::record::{ComplexRecord, LargeRecord, RecordSet, Shape, SimpleRecord};

/// Default upper bound on records per measurement.
pub const DEFAULT_MAX_RECORDS: u32 = 1_000_000;

const FILLER: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
const FILLER_REPEAT: usize = 10;
const TAG_COUNT: usize = 5;

/// The text blob shared by every `LargeRecord`.
pub fn large_content() -> String {
    format!("<html>{}</html>", FILLER.repeat(FILLER_REPEAT))
}

pub fn generate(shape: Shape, count: u32) -> RecordSet {
    match shape {
        Shape::Simple => generate_simple(count),
        Shape::Complex => generate_complex(count),
        Shape::Large => generate_large(count),
    }
}

pub fn generate_simple(count: u32) -> RecordSet {
    RecordSet::Simple(
        (0..count)
            .map(|i| SimpleRecord {
                id: i,
                name: format!("Name{i}"),
            })
            .collect(),
    )
}

pub fn generate_complex(count: u32) -> RecordSet {
    RecordSet::Complex(
        (0..count)
            .map(|i| ComplexRecord {
                id: i,
                name: format!("Name{i}"),
                description: format!("Description of record {i}"),
                value: i as f64 * 1.1,
                is_active: i % 2 == 0,
                tags: (0..TAG_COUNT).map(|j| format!("tag{j}")).collect(),
            })
            .collect(),
    )
}

pub fn generate_large(count: u32) -> RecordSet {
    let content = large_content();
    RecordSet::Large(
        (0..count)
            .map(|i| LargeRecord {
                id: i,
                title: format!("Title {i}"),
                content: content.clone(),
            })
            .collect(),
    )
}

/// Validate a caller-supplied record count before anything is generated.
///
/// Rejects negative counts and counts above `max_records`.
pub fn checked_count(requested: i64, max_records: u32) -> Result<u32> {
    if requested < 0 {
        return Err(BenchError::InvalidArgument(format!(
            "record count must be non-negative, got {requested}"
        )));
    }
    if requested > i64::from(max_records) {
        return Err(BenchError::InvalidArgument(format!(
            "record count {requested} exceeds the configured limit of {max_records}"
        )));
    }
    Ok(requested as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_content_is_wrapped_filler() {
        let content = large_content();
        assert!(content.starts_with("<html>Lorem ipsum"));
        assert!(content.ends_with("elit. </html>"));
        assert_eq!(content.len(), "<html>".len() + FILLER.len() * 10 + "</html>".len());
    }

    #[test]
    fn checked_count_bounds() {
        assert_eq!(checked_count(0, 10).unwrap(), 0);
        assert_eq!(checked_count(10, 10).unwrap(), 10);
        assert!(matches!(checked_count(-1, 10), Err(BenchError::InvalidArgument(_))));
        assert!(matches!(checked_count(11, 10), Err(BenchError::InvalidArgument(_))));
    }

    #[test]
    fn complex_fields_follow_index() {
        let RecordSet::Complex(records) = generate_complex(4) else {
            panic!("expected complex records");
        };
        assert_eq!(records[3].name, "Name3");
        assert_eq!(records[3].description, "Description of record 3");
        assert!((records[3].value - 3.3).abs() < 1e-9);
        assert!(!records[3].is_active);
        assert!(records[2].is_active);
        assert_eq!(records[0].tags, ["tag0", "tag1", "tag2", "tag3", "tag4"]);
    }
}
