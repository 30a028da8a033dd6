//! Kit Module
//!
//! Turns a tree of sample folders into a Hydrogen drum kit:
//! - Tree scanning in post-order
//! - Instrument assembly and naming
//! - Document model and XML output

pub mod assembler;
pub mod model;
pub mod naming;
pub mod serializer;
pub mod tree;

pub use assembler::{assemble, build_document};
pub use model::{Component, DrumkitDocument, Instrument, InstrumentDefaults, KitInfo, Layer};
pub use naming::NameNormalization;
pub use serializer::serialize;
pub use tree::{scan, SampleDir};
