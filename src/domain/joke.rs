//! Canned jokes shown to the user while a generation request is in flight

use rand::Rng;

const JOKES: &[&str] = &[
    "Why don't programmers like nature? It has too many bugs.",
    "Why do Java developers wear glasses? Because they don't see sharp.",
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "Why did the developer go broke? Because he used up all his cache.",
    "Why was the computer cold? It left its Windows open.",
];

/// Picks one joke uniformly at random from a fixed corpus
#[derive(Debug, Clone, Copy, Default)]
pub struct JokeSelector;

impl JokeSelector {
    pub fn new() -> Self {
        Self
    }

    /// One uniform draw from the corpus
    pub fn select(&self) -> &'static str {
        self.select_with(&mut rand::thread_rng())
    }

    /// Same draw with an injected RNG, so tests can seed it
    pub fn select_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        JOKES[rng.gen_range(0..JOKES.len())]
    }

    pub fn jokes(&self) -> &'static [&'static str] {
        JOKES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_selection_is_a_corpus_member() {
        let selector = JokeSelector::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let joke = selector.select_with(&mut rng);
            assert!(selector.jokes().contains(&joke));
        }
    }

    #[test]
    fn test_seeded_selection_is_deterministic() {
        let selector = JokeSelector::new();
        let first = selector.select_with(&mut StdRng::seed_from_u64(42));
        let second = selector.select_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_joke_is_reachable() {
        let selector = JokeSelector::new();
        let mut rng = StdRng::seed_from_u64(1);

        let seen: HashSet<&str> = (0..1000).map(|_| selector.select_with(&mut rng)).collect();
        assert_eq!(seen.len(), selector.jokes().len());
    }
}
