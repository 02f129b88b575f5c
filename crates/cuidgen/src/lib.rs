//! Secure, collision-resistant ids for distributed systems.
//!
//! Ids are minted without coordination: each [`Generator`] hashes the current
//! time, fresh entropy, a per-instance counter and a per-instance fingerprint,
//! and prefixes the result with a random letter so that ids never start with
//! a digit.
//!
//! ```no_run
//! use cuidgen::{Generator, GeneratorConfig};
//!
//! let generator = Generator::init(GeneratorConfig::builder().big(true).build())?;
//! let id = generator.next_id()?;
//! assert_eq!(id.as_str().len(), cuidgen::BIG_LENGTH);
//! # Ok::<(), cuidgen::Error>(())
//! ```

mod clock;
pub mod codec;
mod counter;
mod cuid;
pub mod entropy;
pub mod error;
mod fingerprint;
mod generator;
mod global;
mod hash;

pub use clock::{Clock, FixedClock, SystemClock};
pub use counter::{Counter, INITIAL_COUNT_MAX};
pub use cuid::Cuid;
pub use error::{Error, Result};
pub use fingerprint::{create_fingerprint, host_context, FINGERPRINT_LENGTH};
pub use generator::{Generator, GeneratorConfig};
pub use global::create_id;
pub use hash::hash;

/// Length of generated ids when none is configured.
pub const DEFAULT_LENGTH: usize = 24;
/// Length selected by the `big` preset.
pub const BIG_LENGTH: usize = 32;
/// Longest id a generator accepts.
pub const MAX_LENGTH: usize = BIG_LENGTH;
