pub mod error;

// Barangay domain modules (canonical locations for all wire types)
pub mod common;
pub mod donation;
pub mod profiling;
pub mod summon;

pub use error::*;

// Re-export all domain types
pub use common::*;
pub use donation::*;
pub use profiling::*;
pub use summon::*;
