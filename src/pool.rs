use std::fmt::{self, Debug};

use crate::roll::Roll;
use crate::{Error, Outcome, Result};

/// Several roll sources rolled together and summed.
///
/// The pool owns its members. Handing it a cloned [`crate::Die`] gives the
/// pool an independent generator; the original keeps its own.
#[derive(Clone)]
pub struct DicePool<'a> {
    members: Vec<Box<dyn Roll + 'a>>,
}

impl<'a> DicePool<'a> {
    pub fn new<I>(dice: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Roll + 'a,
    {
        Self::from_boxed(
            dice.into_iter()
                .map(|x| Box::new(x) as Box<dyn Roll + 'a>)
                .collect(),
        )
    }

    pub fn from_boxed(members: Vec<Box<dyn Roll + 'a>>) -> Result<Self> {
        if members.is_empty() {
            return Err(Error::EmptyPool);
        }
        Ok(Self { members })
    }

    #[must_use]
    pub fn three<A, B, C>(a: A, b: B, c: C) -> Self
    where
        A: Roll + 'a,
        B: Roll + 'a,
        C: Roll + 'a,
    {
        Self {
            members: vec![Box::new(a), Box::new(b), Box::new(c)],
        }
    }

    pub fn push<R>(&mut self, die: R)
    where
        R: Roll + 'a,
    {
        self.members.push(Box::new(die));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Roll for DicePool<'_> {
    fn roll(&self) -> Outcome {
        self.members
            .iter()
            .fold(0, |acc: Outcome, x| acc.saturating_add(x.roll()))
    }
}

impl Debug for DicePool<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DicePool")
            .field("len", &self.members.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{d100, d6};
    use crate::Die;

    #[test]
    fn test_empty_pool_rejected() {
        let err = DicePool::new(Vec::<Die>::new()).unwrap_err();
        assert_eq!(err, Error::EmptyPool);
        assert_eq!(
            DicePool::from_boxed(Vec::new()).unwrap_err(),
            Error::EmptyPool
        );
    }

    #[test]
    fn test_sum_in_member_order() {
        let (a, b, c) = (d6(5), d6(21), d6(7));
        let pool = DicePool::three(a.clone(), b.clone(), c.clone());
        for _ in 0..100 {
            assert_eq!(pool.roll(), a.roll() + b.roll() + c.roll());
        }
    }

    #[test]
    fn test_pool_owns_independent_copies() {
        let a = d100(171);
        let expected = a.clone();
        let pool = DicePool::new([a.clone()]).unwrap();
        a.roll();
        a.roll();
        assert_eq!(pool.roll(), expected.roll());
    }

    #[test]
    fn test_push_and_range() {
        let mut pool = DicePool::new([d6(1), d6(2)]).unwrap();
        pool.push(d100(3));
        assert_eq!(pool.len(), 3);
        for _ in 0..10_000 {
            let x = pool.roll();
            assert!((3..=112).contains(&x));
        }
    }

    #[test]
    fn test_pool_of_borrowed_sources() {
        let die = d6(11);
        let replay = die.clone();
        let pool = DicePool::new([&die, &die]).unwrap();
        assert_eq!(pool.roll(), replay.roll() + replay.roll());
    }
}
