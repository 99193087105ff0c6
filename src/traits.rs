//! Provide traits for different classes of algorithms
//!

use crate::dataset::TrainingStore;
use crate::param_guard::ParamGuard;
use std::error::Error;

/// Fittable algorithms
///
/// A fittable algorithm takes a training store and creates a concept of some kind about it. For
/// tree induction the store is reordered in place while fitting, so it is borrowed mutably and
/// no two fits may run over the same store at the same time.
pub trait Fit<E: Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, store: &mut TrainingStore) -> Result<Self::Object, E>;
}

/// Predict with model
///
/// Models implement this for every input they accept, usually a single feature vector and a
/// matrix with one feature vector per row.
pub trait Predict<X, Y> {
    fn predict(&self, x: X) -> Y;
}

/// Performs checking step and calls `fit` on the checked hyperparameters. If checking failed, the
/// checking error is converted to the original error type of `Fit` and returned.
impl<E, P> Fit<E> for P
where
    P: ParamGuard,
    P::Checked: Fit<E>,
    E: Error + From<crate::error::Error> + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Fit<E>>::Object;

    fn fit(&self, store: &mut TrainingStore) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.fit(store)
    }
}
