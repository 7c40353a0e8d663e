//! Seeded dice with advantage/disadvantage modifiers, and Monte Carlo
//! estimates of their expected value and outcome distribution.
//!
//! ```rust
//! use dicesim::defs::d100;
//! use dicesim::{expected_value, Experiment, RollExt};
//!
//! # fn main() -> dicesim::Result<()> {
//! let die = d100(1);
//! let bonus = die.bonus();
//! let mean = expected_value(&bonus, 1000)?;
//! let histogram = Experiment::builder().rolls(10_000).build().histogram(&bonus)?;
//! assert!(mean > 50.5);
//! assert_eq!(histogram.len(), 100);
//! # Ok(())
//! # }
//! ```

pub mod defs;
mod die;
mod histogram;
mod modifier;
mod pool;
mod roll;
mod stats;

pub use die::Die;
pub use histogram::Histogram;
pub use modifier::{Bonus, DoubleDice, Penalty};
pub use pool::DicePool;
pub use roll::{Roll, RollExt};
pub use stats::{expected_value, histogram, outcome_probability, Experiment, Sampling};
use thiserror::Error;

/// A single rolled value.
pub type Outcome = u32;
pub type Seed = u64;
pub type Result<T> = ::core::result::Result<T, Error>;

pub const DEFAULT_EXPECTED_ROLLS: u32 = 1_000;
pub const DEFAULT_PROBABILITY_ROLLS: u32 = 100_000;
pub const HISTOGRAM_MIN: Outcome = 1;
pub const HISTOGRAM_MAX: Outcome = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("a die needs at least one face")]
    ZeroFaces,
    #[error("a dice pool needs at least one member")]
    EmptyPool,
    #[error("at least one roll is required")]
    NoRolls,
    #[error("empty outcome range {min}..={max}")]
    EmptyRange { min: Outcome, max: Outcome },
}
