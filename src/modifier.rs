use std::fmt::{self, Debug};

use crate::roll::Roll;
use crate::Outcome;

/// Advantage: roll the borrowed source twice and keep the higher result.
#[derive(Clone, Copy)]
pub struct Bonus<'a> {
    source: &'a dyn Roll,
}

/// Disadvantage: roll the borrowed source twice and keep the lower result.
#[derive(Clone, Copy)]
pub struct Penalty<'a> {
    source: &'a dyn Roll,
}

/// A penalty roll plus a bonus roll over one shared source.
///
/// Both roles borrow the same source, so a single roll consumes four
/// consecutive draws from it: the first pair feeds the penalty, the second
/// pair the bonus.
#[derive(Clone, Copy)]
pub struct DoubleDice<'a> {
    penalty: Penalty<'a>,
    bonus: Bonus<'a>,
}

impl<'a> Bonus<'a> {
    #[must_use]
    pub fn new(source: &'a dyn Roll) -> Self {
        Self { source }
    }
}

impl<'a> Penalty<'a> {
    #[must_use]
    pub fn new(source: &'a dyn Roll) -> Self {
        Self { source }
    }
}

impl<'a> DoubleDice<'a> {
    #[must_use]
    pub fn new(source: &'a dyn Roll) -> Self {
        Self {
            penalty: Penalty::new(source),
            bonus: Bonus::new(source),
        }
    }

    #[must_use]
    pub fn penalty_role(&self) -> &Penalty<'a> {
        &self.penalty
    }

    #[must_use]
    pub fn bonus_role(&self) -> &Bonus<'a> {
        &self.bonus
    }
}

impl Roll for Bonus<'_> {
    fn roll(&self) -> Outcome {
        let first = self.source.roll();
        let second = self.source.roll();
        first.max(second)
    }
}

impl Roll for Penalty<'_> {
    fn roll(&self) -> Outcome {
        let first = self.source.roll();
        let second = self.source.roll();
        first.min(second)
    }
}

impl Roll for DoubleDice<'_> {
    fn roll(&self) -> Outcome {
        let low = self.penalty.roll();
        low.saturating_add(self.bonus.roll())
    }
}

impl Debug for Bonus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bonus")
    }
}

impl Debug for Penalty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Penalty")
    }
}

impl Debug for DoubleDice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleDice")
            .field("penalty", &self.penalty)
            .field("bonus", &self.bonus)
            .finish()
    }
}
