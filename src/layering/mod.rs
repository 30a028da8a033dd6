//! Layering Module
//!
//! The sample-layering engine:
//! - Selector: thins a directory's samples down to a bounded layer count
//! - Partitioner: spreads the velocity interval over those layers

pub mod partition;
pub mod selector;

pub use partition::{partition, VelocityRange, DEFAULT_INTERLEAVE};
pub use selector::{has_extension, natural_sort, select, DEFAULT_MAX_LAYERS};
