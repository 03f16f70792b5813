//! A random number generator that can be shared between threads.
//!
//! Executions running on different threads each need a `&mut impl Rng`. A [`SharedRng`] is a
//! cheaply clonable handle to one underlying generator; every draw takes a lock, so draws from
//! different handles are serialized.

use rand_core::{CryptoRng, RngCore, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A handle to a random number generator shared between threads.
pub struct SharedRng<R> {
    inner: Arc<Mutex<R>>,
}

impl<R> SharedRng<R> {
    /// Share `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, R> {
        // A panic while drawing leaves the generator in a valid state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: SeedableRng> SharedRng<R> {
    /// Share a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(R::from_entropy())
    }
}

impl<R> Clone for SharedRng<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> std::fmt::Debug for SharedRng<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedRng")
    }
}

impl<R: RngCore> RngCore for SharedRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.lock().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.lock().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.lock().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.lock().try_fill_bytes(dest)
    }
}

impl<R: CryptoRng> CryptoRng for SharedRng<R> {}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng};

    #[test]
    fn handles_share_one_stream() {
        let seed = *b"NEVER USE THIS FOR ANYTHING REAL";
        let mut expected = StdRng::from_seed(seed);
        let mut first = SharedRng::new(StdRng::from_seed(seed));
        let mut second = first.clone();

        assert_eq!(first.next_u64(), expected.next_u64());
        assert_eq!(second.next_u64(), expected.next_u64());
        assert_eq!(first.gen::<u32>(), expected.gen::<u32>());
    }

    #[test]
    fn draws_from_many_threads() {
        let rng = SharedRng::<StdRng>::from_entropy();
        let draws: Vec<u64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let mut rng = rng.clone();
                    scope.spawn(move || rng.next_u64())
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });
        assert_eq!(draws.len(), 4);
    }
}
