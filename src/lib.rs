//! kitgen - Hydrogen drum kits from folders of samples
//!
//! Every folder of a sample tree that holds samples becomes one instrument
//! of the kit. The samples of a folder become the instrument's layers, each
//! one playing over its own, overlapping, slice of the velocity range.
//!
//! # Pipeline
//!
//! - `kit::tree`: folders in post-order with their files
//! - `layering::selector`: the samples to use, in natural order
//! - `layering::partition`: one velocity window per sample
//! - `kit::assembler`: instruments, with samples placed via a `Materializer`
//! - `kit::serializer`: the `drumkit.xml` document

pub mod cli;
pub mod config;
pub mod error;
pub mod kit;
pub mod layering;
pub mod materialize;

pub use config::KitConfig;
pub use error::{KitError, Result};
