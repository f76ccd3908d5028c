pub mod deserializers;
pub mod types;

pub use types::{Field, Record, RecordEnvelope, PLACEHOLDER};
