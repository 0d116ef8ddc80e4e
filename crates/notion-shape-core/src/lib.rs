//! notion-shape-core: record shaping for the Notion source connector.
//!
//! This crate exposes the transformation steps, the registry that names them,
//! and the per-stream pipeline that chains them, plus the shared record types.
//!
//! # Architecture
//!
//! ```text
//! Config ──► Registry ──► Pipeline ──► Host
//!                            │
//!                            └──► RecordTransformation (one per step)
//! ```
//!
//! Everything is synchronous and operates on one record at a time. The host
//! drives a newline-delimited JSON stream through a pipeline; the pipeline is
//! also usable directly by embedders that already hold records in memory.

pub mod config;
pub mod error;
pub mod host;
pub mod pipeline;
pub mod registry;
pub mod transform;
pub mod types;

pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use registry::TransformationRegistry;
pub use transform::{
    NotionBlocksTransformation, NotionPageDatabaseTransformation, NotionUserTransformation,
    RecordTransformation, TransformContext,
};
pub use types::Record;
