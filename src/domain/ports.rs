// Port for the randomness used when placing fruit.
pub trait RandomSource {
    // Returns a value in `[0, bound)`. Callers guarantee `bound > 0`.
    fn index_below(&mut self, bound: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn index_below(&mut self, bound: i64) -> i64 {
        (**self).index_below(bound)
    }
}
