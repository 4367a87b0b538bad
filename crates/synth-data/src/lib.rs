//! Synthetic value provider for the bad-data-workshop generators.
//!
//! Every function takes a caller-owned RNG and is fully deterministic for
//! a given RNG state, so datasets built on top of a seeded generator are
//! reproducible run to run. Values are drawn from fixed pools; realism is
//! "plausible at a glance", which is all a training dataset needs.
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let name = synth_data::person::full_name(&mut rng);
//! let email = synth_data::internet::email(&mut rng);
//! assert!(email.contains('@'));
//! # let _ = name;
//! ```

pub mod address;
pub mod company;
pub mod datetime;
pub mod internet;
pub mod locale;
pub mod person;
pub mod text;

pub use locale::Locale;
