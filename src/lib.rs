//! notion-shape: record-shaping transformations for the Notion source connector.
//!
//! This crate re-exports the core layers so that integration tests and
//! benchmarks can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! stdin / file ──► Host ──► Pipeline (per stream) ──► stdout
//!                              │
//!                              └──► Registry ◄── Config
//! ```
//!
//! The `users` stream is the only one with real work to do: bot owners are
//! rewritten so their type-specific payload lives under `bot.owner.info`.

pub use notion_shape_core::{
    config, error, host, pipeline, registry, transform, types, Error, NotionBlocksTransformation,
    NotionPageDatabaseTransformation, NotionUserTransformation, Pipeline, Record,
    RecordTransformation, Result, TransformContext, TransformationRegistry,
};
