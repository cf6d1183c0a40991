//! Infrastructure Adapters

mod journal;
mod time;

pub use journal::InMemoryTransactionJournal;
pub use time::{FixedTimeSource, SystemTimeSource};
