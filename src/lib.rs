//! Orchestration for the bad-data-workshop CLI.
//!
//! The binary wires three commands to the workspace crates:
//!
//! - `setup` connects, creates the namespace, and runs all fifteen
//!   problem generators in order through one seeded context
//! - `teardown` removes every generated object
//! - `diagnose` prints the per-problem diagnostic queries without
//!   touching a database
//!
//! The connection is closed on both the success and failure paths of
//! every command that opens one.

pub mod diagnose;
pub mod setup;
pub mod teardown;

pub use diagnose::run_diagnose;
pub use setup::{populate, run_setup};
pub use teardown::run_teardown;
