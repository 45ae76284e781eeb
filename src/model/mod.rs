pub mod field;
pub mod record;

// Re-exports for convenience
pub use field::{Birthday, Field, FieldRule, Name, Phone};
pub use record::Record;
