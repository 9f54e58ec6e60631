//! Randomness trait definition

/// Source of random indices - allows swapping between seeded and entropy-backed sources
pub trait RandomSource {
    /// Pick an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}
