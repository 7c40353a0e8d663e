use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::Outcome;

pub(crate) type Tally = BTreeMap<Outcome, u64>;

/// Empirical probability of each outcome in a contiguous range, ascending.
///
/// Only outcomes that were observed are stored; every other value in the
/// range reads as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    start: Outcome,
    end: Outcome,
    probabilities: BTreeMap<Outcome, f64>,
}

impl Histogram {
    pub(crate) fn new<I>(range: RangeInclusive<Outcome>, probabilities: I) -> Self
    where
        I: IntoIterator<Item = (Outcome, f64)>,
    {
        let (start, end) = range.into_inner();
        debug_assert!(start <= end);
        Self {
            start,
            end,
            probabilities: probabilities
                .into_iter()
                .filter(|(k, p)| *p > 0.0 && (start..=end).contains(k))
                .collect(),
        }
    }

    pub(crate) fn from_tally(range: RangeInclusive<Outcome>, tally: Tally, rolls: u32) -> Self {
        let denom = f64::from(rolls);
        Self::new(
            range,
            tally.into_iter().map(|(k, c)| (k, c as f64 / denom)),
        )
    }

    #[must_use]
    pub fn range(&self) -> RangeInclusive<Outcome> {
        self.start..=self.end
    }

    /// Number of outcomes covered, observed or not.
    #[must_use]
    pub fn len(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Probability of `value`; zero outside the histogram's range.
    #[must_use]
    pub fn probability(&self, value: Outcome) -> f64 {
        self.probabilities.get(&value).copied().unwrap_or(0.0)
    }

    /// Every outcome in the range with its probability, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, f64)> + '_ {
        self.range().map(|k| (k, self.probability(k)))
    }

    /// Only the outcomes with a non-zero probability.
    pub fn observed(&self) -> impl Iterator<Item = (Outcome, f64)> + '_ {
        self.probabilities.iter().map(|(&k, &p)| (k, p))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Mean of the distribution renormalised to the covered range.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }
        Some(self.observed().map(|(k, p)| f64::from(k) * p).sum::<f64>() / total)
    }

    #[must_use]
    pub fn variance(&self) -> Option<f64> {
        let m = self.mean()?;
        let total = self.total();
        Some(
            self.observed()
                .map(|(k, p)| (f64::from(k) - m).powi(2) * p)
                .sum::<f64>()
                / total,
        )
    }

    #[must_use]
    pub fn stddev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    /// Every outcome sharing the highest non-zero probability.
    #[must_use]
    pub fn mode(&self) -> Vec<Outcome> {
        self.observed()
            .max_set_by(|x, y| x.1.total_cmp(&y.1))
            .into_iter()
            .map(|(k, _)| k)
            .collect()
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().map(|(_, p)| p).join(", "))
    }
}
