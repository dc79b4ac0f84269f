//! The fixed seven-field page visit record.

use crate::generator::GeneratorError;
use crate::value::{RandomValue, ValueRange};
use rand::Rng;
use std::fmt;

/// Number of fields in every record.
pub const FIELD_COUNT: usize = 7;

/// Name and bounds of one record column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub range: ValueRange,
}

/// Column layout shared by every record and both output formats.
pub static RECORD_FIELDS: [FieldDefinition; FIELD_COUNT] = [
    FieldDefinition {
        name: "start_page",
        range: ValueRange::Int {
            min: 1,
            max: 1_000_000_000,
        },
    },
    FieldDefinition {
        name: "user",
        range: ValueRange::Int {
            min: 1,
            max: 100_000_000,
        },
    },
    FieldDefinition {
        name: "ts",
        range: ValueRange::Timestamp {
            start: "2005-01-01 23:56:42",
            end: "2016-01-01 10:50:00",
        },
    },
    FieldDefinition {
        name: "depth",
        range: ValueRange::Int { min: 1, max: 50 },
    },
    FieldDefinition {
        name: "duration",
        range: ValueRange::Int {
            min: 100,
            max: 10_000,
        },
    },
    FieldDefinition {
        name: "transmit",
        range: ValueRange::Int {
            min: 100_000,
            max: 1_000_000_000,
        },
    },
    FieldDefinition {
        name: "type",
        range: ValueRange::Int { min: 1, max: 5 },
    },
];

/// One generated row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<RandomValue>,
}

impl Record {
    /// Generate a record, drawing every field independently from `rng`.
    pub fn generate<R: Rng>(rng: &mut R) -> Result<Self, GeneratorError> {
        let fields = RECORD_FIELDS
            .iter()
            .map(|field| RandomValue::generate(field.name, field.range, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fields })
    }

    /// Column names in declaration order.
    pub fn field_names() -> impl Iterator<Item = &'static str> {
        RECORD_FIELDS.iter().map(|field| field.name)
    }

    /// Comma-joined column names.
    pub fn headers(&self) -> String {
        Self::field_names().collect::<Vec<_>>().join(",")
    }

    /// Comma-joined formatted values, in [`Record::headers`] order.
    pub fn values(&self) -> String {
        self.formatted_values().join(",")
    }

    pub fn formatted_values(&self) -> Vec<String> {
        self.fields.iter().map(ToString::to_string).collect()
    }

    pub fn fields(&self) -> &[RandomValue] {
        &self.fields
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.name(), field)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{GeneratedValue, ValueKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const HEADER: &str = "start_page,user,ts,depth,duration,transmit,type";

    #[test]
    fn test_headers_are_fixed() {
        let mut rng = StdRng::seed_from_u64(42);

        let first = Record::generate(&mut rng).unwrap();
        let second = Record::generate(&mut rng).unwrap();
        assert_eq!(first.headers(), HEADER);
        assert_eq!(first.headers(), second.headers());
    }

    #[test]
    fn test_values_follow_header_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let record = Record::generate(&mut rng).unwrap();

        let values = record.values();
        let columns: Vec<&str> = values.split(',').collect();
        assert_eq!(columns.len(), FIELD_COUNT);

        for (column, field) in columns.iter().zip(record.fields()) {
            assert_eq!(*column, field.to_string());
        }
        let names: Vec<&str> = record.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names.join(","), HEADER);
    }

    #[test]
    fn test_only_ts_is_a_timestamp() {
        let mut rng = StdRng::seed_from_u64(42);
        let record = Record::generate(&mut rng).unwrap();

        for field in record.fields() {
            let expected = if field.name() == "ts" {
                ValueKind::Timestamp
            } else {
                ValueKind::Integer
            };
            assert_eq!(field.kind(), expected, "field {}", field.name());
        }
    }

    #[test]
    fn test_every_field_respects_its_bounds() {
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..1_000 {
            let record = Record::generate(&mut rng).unwrap();
            for (field, definition) in record.fields().iter().zip(RECORD_FIELDS.iter()) {
                match (field.value(), definition.range) {
                    (GeneratedValue::Int(v), ValueRange::Int { min, max }) => {
                        assert!(v >= min && v < max, "{} = {v}", field.name());
                    }
                    (GeneratedValue::Timestamp(dt), ValueRange::Timestamp { start, end }) => {
                        let start = crate::generators::timestamp::parse_timestamp(start).unwrap();
                        let end = crate::generators::timestamp::parse_timestamp(end).unwrap();
                        assert!(dt >= start && dt <= end, "ts = {dt}");
                    }
                    (value, range) => panic!("{value:?} does not match {range:?}"),
                }
            }
        }
    }

    #[test]
    fn test_display_renders_a_map() {
        let mut rng = StdRng::seed_from_u64(42);
        let record = Record::generate(&mut rng).unwrap();

        let rendered = record.to_string();
        assert!(rendered.starts_with("{start_page: "));
        assert!(rendered.contains(", ts: "));
        assert!(rendered.ends_with('}'));
    }
}
