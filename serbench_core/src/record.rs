use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::BenchError;

/// One of the three fixed record schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    Simple,
    Complex,
    Large,
}

impl Shape {
    /// Every shape, in reporting order.
    pub const ALL: [Shape; 3] = [Shape::Simple, Shape::Complex, Shape::Large];

    pub fn label(&self) -> &'static str {
        match self {
            Shape::Simple => "Simple",
            Shape::Complex => "Complex",
            Shape::Large => "Large",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shape {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                BenchError::InvalidArgument(format!(
                    "unknown shape '{s}'. Valid options: Simple, Complex, Large"
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleRecord {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub value: f64,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargeRecord {
    pub id: u32,
    pub title: String,
    pub content: String,
}

/// The synthetic dataset for one (shape, count) pair.
///
/// Exactly one variant is populated, fixed by the generator that built it.
/// Serializes as a single-key document, e.g. `{"simple_records": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RecordSet {
    #[serde(rename = "simple_records")]
    Simple(Vec<SimpleRecord>),
    #[serde(rename = "complex_records")]
    Complex(Vec<ComplexRecord>),
    #[serde(rename = "large_records")]
    Large(Vec<LargeRecord>),
}

impl RecordSet {
    pub fn shape(&self) -> Shape {
        match self {
            RecordSet::Simple(_) => Shape::Simple,
            RecordSet::Complex(_) => Shape::Complex,
            RecordSet::Large(_) => Shape::Large,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordSet::Simple(records) => records.len(),
            RecordSet::Complex(records) => records.len(),
            RecordSet::Large(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record ids in storage order.
    pub fn ids(&self) -> Vec<u32> {
        match self {
            RecordSet::Simple(records) => records.iter().map(|r| r.id).collect(),
            RecordSet::Complex(records) => records.iter().map(|r| r.id).collect(),
            RecordSet::Large(records) => records.iter().map(|r| r.id).collect(),
        }
    }
}
