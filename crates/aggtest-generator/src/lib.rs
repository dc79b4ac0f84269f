//! Random record generator for aggtest-gen.
//!
//! This crate produces the "page visit" rows written by the CSV and XML
//! populators. Every draw goes through a caller-owned RNG, so a seeded
//! [`RecordGenerator`] yields the same rows on every run.
//!
//! # Architecture
//!
//! ```text
//! RecordGenerator (seed)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │      Record      │  start_page, user, ts, depth,
//! │                  │  duration, transmit, type
//! └────────┬─────────┘
//!          │ x7
//!          ▼
//!    RandomValue { name, range, value }
//! ```
//!
//! # Example
//!
//! ```rust
//! use aggtest_generator::{Record, RecordGenerator};
//!
//! let mut generator = RecordGenerator::new(42);
//! let record = generator.next_record().unwrap();
//!
//! assert_eq!(
//!     record.headers(),
//!     "start_page,user,ts,depth,duration,transmit,type"
//! );
//! println!("{}", record.values());
//! # let _ = Record::field_names();
//! ```

pub mod generator;
pub mod generators;
pub mod record;
pub mod value;

// Re-exports for convenience
pub use generator::{derive_seed, GeneratorError, RecordGenerator, RecordIterator};
pub use record::{FieldDefinition, Record, FIELD_COUNT, RECORD_FIELDS};
pub use value::{GeneratedValue, RandomValue, ValueKind, ValueRange};
