mod error;
pub mod fs;
pub mod global;
mod record;

pub use error::*;
pub use record::RecordStore;
