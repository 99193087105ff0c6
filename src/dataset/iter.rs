use super::{Example, TrainingStore};

/// Iterates the examples of a store in their current order
pub struct Iter<'a> {
    store: &'a TrainingStore,
    idx: usize,
}

impl<'a> Iter<'a> {
    pub fn new(store: &'a TrainingStore) -> Iter<'a> {
        Iter { store, idx: 0 }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Example<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.store.nsamples() {
            return None;
        }

        let example = Example {
            attributes: self.store.records().row(self.idx),
            label: self.store.targets()[self.idx],
        };
        self.idx += 1;

        Some(example)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.store.nsamples() - self.idx;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}
