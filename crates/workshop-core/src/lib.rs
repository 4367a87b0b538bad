//! Core types for the bad-data-workshop generation framework.
//!
//! This crate provides the foundational types used across the workshop
//! tooling:
//!
//! - [`DbConfig`] / [`BackendKind`] - connection configuration and dialect
//!   capabilities for the supported backends
//! - [`Scale`] - named dataset-size presets mapped to base row counts
//! - [`GenContext`] - the seeded generation context threaded through every
//!   problem generator, making full runs reproducible
//! - [`SqlValue`] / [`SqlType`] - the typed value model rows are built from
//!
//! # Architecture
//!
//! ```text
//! workshop-core (this crate)
//!    │
//!    ├─── synth-data         (value realism; takes the context's RNG)
//!    ├─── db-adapter         (binds SqlValue to driver parameters)
//!    └─── defect-generators  (builds rows of SqlValue per problem)
//! ```

pub mod config;
pub mod context;
pub mod scale;
pub mod values;

// Re-exports for convenience
pub use config::{BackendKind, DbConfig, SCHEMA_NAME};
pub use context::{GenContext, DEFAULT_SEED};
pub use scale::Scale;
pub use values::{SqlType, SqlValue};
