#[cfg(test)]
pub(crate) mod doubles {
    use rand::{RngCore, SeedableRng, rngs::StdRng};

    use crate::{
        domain::ports::random::RandomSource,
        error::{AppError, ErrRandom},
    };

    /// Replays the same bytes on every call.
    pub(crate) struct FixedSource(pub Vec<u8>);

    impl RandomSource for FixedSource {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), AppError> {
            for (i, b) in dest.iter_mut().enumerate() {
                *b = self.0[i % self.0.len()];
            }
            Ok(())
        }
    }

    pub(crate) struct SeededSource(pub StdRng);

    impl SeededSource {
        pub(crate) fn new(seed: u64) -> Self {
            SeededSource(StdRng::seed_from_u64(seed))
        }
    }

    impl RandomSource for SeededSource {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), AppError> {
            self.0.fill_bytes(dest);
            Ok(())
        }
    }

    pub(crate) struct FailingSource;

    impl RandomSource for FailingSource {
        fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), AppError> {
            Err(AppError::Random(ErrRandom::RandomSourceUnavailable(
                "entropy pool closed".to_string(),
            )))
        }
    }

    pub(crate) fn counting_bytes() -> Vec<u8> {
        (0u8..16).collect()
    }
}
