use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator so a self-play run can be replayed from its logged seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent generator for the `game_index`-th game of a session.
    pub fn for_game(&self, game_index: u64) -> Self {
        Self::new(self.seed.wrapping_add(game_index))
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.random_range(0..9usize), b.random_range(0..9usize));
        }
    }

    #[test]
    fn test_for_game_is_reproducible() {
        let session = SessionRng::new(100);
        assert_eq!(session.for_game(3).seed(), 103);
        let mut a = session.for_game(5);
        let mut b = SessionRng::new(105);
        assert_eq!(a.random_range(0..1000u32), b.random_range(0..1000u32));
    }

    #[test]
    fn test_from_optional_seed_keeps_given_seed() {
        assert_eq!(SessionRng::from_optional_seed(Some(9)).seed(), 9);
    }
}
