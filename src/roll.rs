use dyn_clone::DynClone;

use crate::modifier::{Bonus, DoubleDice, Penalty};
use crate::Outcome;

/// Anything that produces an outcome on demand.
///
/// Rolling takes `&self`: a source keeps its generator behind interior
/// mutability, so several wrappers may borrow one source and share its
/// generator state. Sources are single-threaded.
pub trait Roll: DynClone {
    fn roll(&self) -> Outcome;
}

dyn_clone::clone_trait_object!(Roll);

impl<R> Roll for &R
where
    R: Roll + ?Sized,
{
    fn roll(&self) -> Outcome {
        (**self).roll()
    }
}

impl<R> Roll for Box<R>
where
    R: Roll + ?Sized,
    Box<R>: Clone,
{
    fn roll(&self) -> Outcome {
        (**self).roll()
    }
}

/// Modifier combinators available on every sized roll source.
pub trait RollExt: Roll + Sized {
    /// Roll twice, keep the higher.
    fn bonus(&self) -> Bonus<'_> {
        Bonus::new(self)
    }

    /// Roll twice, keep the lower.
    fn penalty(&self) -> Penalty<'_> {
        Penalty::new(self)
    }

    /// Penalty roll plus bonus roll over this source.
    fn double(&self) -> DoubleDice<'_> {
        DoubleDice::new(self)
    }
}

impl<R> RollExt for R where R: Roll {}
