use std::ops::RangeInclusive;

use bon::Builder;
use tracing::debug;

use crate::histogram::{Histogram, Tally};
use crate::roll::Roll;
use crate::{
    Error, Outcome, Result, DEFAULT_PROBABILITY_ROLLS, HISTOGRAM_MAX, HISTOGRAM_MIN,
};

/// How a histogram draws its samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sampling {
    /// A fresh batch of rolls for every outcome in the range.
    PerOutcome,
    /// One batch of rolls, tallied once for every outcome.
    #[default]
    SinglePass,
}

/// Reusable sampling settings.
#[derive(Clone, Debug, Builder)]
pub struct Experiment {
    #[builder(default = DEFAULT_PROBABILITY_ROLLS)]
    rolls: u32,
    #[builder(default = HISTOGRAM_MIN)]
    min: Outcome,
    #[builder(default = HISTOGRAM_MAX)]
    max: Outcome,
    #[builder(default)]
    sampling: Sampling,
}

impl Default for Experiment {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Experiment {
    #[must_use]
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    #[must_use]
    pub fn range(&self) -> RangeInclusive<Outcome> {
        self.min..=self.max
    }

    #[must_use]
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    pub fn expected_value<R>(&self, source: &R) -> Result<f64>
    where
        R: Roll + ?Sized,
    {
        expected_value(source, self.rolls)
    }

    pub fn outcome_probability<R>(&self, value: Outcome, source: &R) -> Result<f64>
    where
        R: Roll + ?Sized,
    {
        outcome_probability(value, source, self.rolls)
    }

    pub fn histogram<R>(&self, source: &R) -> Result<Histogram>
    where
        R: Roll + ?Sized,
    {
        match self.sampling {
            Sampling::PerOutcome => histogram(source, self.rolls, self.range()),
            Sampling::SinglePass => single_pass(source, self.rolls, self.range()),
        }
    }
}

/// Mean of `rolls` consecutive rolls.
pub fn expected_value<R>(source: &R, rolls: u32) -> Result<f64>
where
    R: Roll + ?Sized,
{
    check_rolls(rolls)?;
    let sum: u64 = (0..rolls).map(|_| u64::from(source.roll())).sum();
    let mean = sum as f64 / f64::from(rolls);
    debug!(rolls, mean, "expected value");
    Ok(mean)
}

/// Share of `rolls` consecutive rolls that come out exactly `value`.
pub fn outcome_probability<R>(value: Outcome, source: &R, rolls: u32) -> Result<f64>
where
    R: Roll + ?Sized,
{
    check_rolls(rolls)?;
    let hits = (0..rolls).filter(|_| source.roll() == value).count();
    Ok(hits as f64 / f64::from(rolls))
}

/// Probability of every outcome in `range`, resampling `rolls` rolls for
/// each outcome.
pub fn histogram<R>(source: &R, rolls: u32, range: RangeInclusive<Outcome>) -> Result<Histogram>
where
    R: Roll + ?Sized,
{
    check_rolls(rolls)?;
    check_range(&range)?;
    let mut observed = Vec::new();
    for value in range.clone() {
        let p = outcome_probability(value, source, rolls)?;
        if p > 0.0 {
            observed.push((value, p));
        }
    }
    debug!(
        rolls,
        start = *range.start(),
        observed = observed.len(),
        "per-outcome histogram"
    );
    Ok(Histogram::new(range, observed))
}

fn single_pass<R>(source: &R, rolls: u32, range: RangeInclusive<Outcome>) -> Result<Histogram>
where
    R: Roll + ?Sized,
{
    check_rolls(rolls)?;
    check_range(&range)?;
    let mut tally = Tally::new();
    let mut missed = 0u64;
    for _ in 0..rolls {
        let k = source.roll();
        if range.contains(&k) {
            *tally.entry(k).or_default() += 1;
        } else {
            missed += 1;
        }
    }
    debug!(
        rolls,
        start = *range.start(),
        observed = tally.len(),
        missed,
        "single-pass histogram"
    );
    Ok(Histogram::from_tally(range, tally, rolls))
}

fn check_rolls(rolls: u32) -> Result<()> {
    if rolls == 0 {
        return Err(Error::NoRolls);
    }
    Ok(())
}

fn check_range(range: &RangeInclusive<Outcome>) -> Result<()> {
    if range.is_empty() {
        return Err(Error::EmptyRange {
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}
