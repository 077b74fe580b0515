//! Durable storage
//!
//! Flat-file persistence for the authoritative credential state.

pub mod file;
pub mod records;

pub use file::{append_record, load_records, rewrite_records};
pub use records::UserRecord;
