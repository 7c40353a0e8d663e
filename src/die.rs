use std::cell::RefCell;
use std::fmt::{self, Debug};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::roll::Roll;
use crate::{Error, Outcome, Result, Seed};

/// A fair die with faces `1..=max` and its own seeded generator.
///
/// Cloning snapshots the generator: the clone replays the sequence the
/// original would produce from that point, and the two advance independently.
#[derive(Clone)]
pub struct Die {
    max: Outcome,
    seed: Seed,
    rng: RefCell<StdRng>,
}

impl Die {
    pub fn new(max: Outcome, seed: Seed) -> Result<Self> {
        if max == 0 {
            return Err(Error::ZeroFaces);
        }
        Ok(Self::uniform(max, seed))
    }

    pub(crate) fn uniform(max: Outcome, seed: Seed) -> Self {
        debug_assert_ne!(max, 0);
        Self {
            max,
            seed,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    #[must_use]
    pub fn max(&self) -> Outcome {
        self.max
    }

    #[must_use]
    pub fn seed(&self) -> Seed {
        self.seed
    }
}

impl Roll for Die {
    fn roll(&self) -> Outcome {
        self.rng.borrow_mut().gen_range(1..=self.max)
    }
}

impl Debug for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Die")
            .field("max", &self.max)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_faces_rejected() {
        assert_eq!(Die::new(0, 1).unwrap_err(), Error::ZeroFaces);
    }

    #[test]
    fn test_rolls_stay_in_range() {
        for max in [1, 2, 6, 20, 100] {
            let die = Die::new(max, 42).unwrap();
            for _ in 0..10_000 {
                let x = die.roll();
                assert!((1..=max).contains(&x), "{x} outside 1..={max}");
            }
        }
    }

    #[test]
    fn test_single_face_always_one() {
        let die = Die::new(1, 9).unwrap();
        assert!((0..100).all(|_| die.roll() == 1));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = Die::new(100, 171).unwrap();
        let b = Die::new(100, 171).unwrap();
        let xs: Vec<_> = (0..1000).map(|_| a.roll()).collect();
        let ys: Vec<_> = (0..1000).map(|_| b.roll()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_clone_diverges_from_original() {
        let a = Die::new(100, 19).unwrap();
        a.roll();
        let b = a.clone();
        let first = a.roll();
        a.roll();
        assert_eq!(b.roll(), first);
    }

    #[test]
    fn test_debug_hides_generator() {
        let die = Die::new(6, 5).unwrap();
        assert_eq!(format!("{die:?}"), "Die { max: 6, seed: 5, .. }");
    }
}
