pub mod person;
pub mod stats;

pub use person::PersonRecord;
pub use stats::RecordCounts;
