// Values - Random primitives for synthesized form input
//
// Generators only ask for primitives (integers, strings, emails, text
// blocks, indices); how they are randomized lives behind `ValueSource` so
// tests can seed or script it.

use parking_lot::Mutex;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Domain used for every generated email address
pub const EMAIL_DOMAIN: &str = "example.com";

/// Words per line in generated multi-line text
const WORDS_PER_LINE: usize = 5;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
];

/// Source of random primitives for generated values.
pub trait ValueSource: Send + Sync {
    /// Random integer in the closed range `[min, max]`
    ///
    /// Returns `min` when the range is empty.
    fn int_in_range(&self, min: i64, max: i64) -> i64;

    /// Random alphanumeric string of exactly `len` characters
    fn string(&self, len: usize) -> String;

    /// Random email address
    fn email(&self) -> String;

    /// Random multi-line text of `len` words
    fn text(&self, len: usize) -> String;

    /// Uniformly random index in `[0, bound)`; 0 when `bound` is 0
    fn index(&self, bound: usize) -> usize;
}

/// [`ValueSource`] backed by a seedable RNG.
pub struct RandomValues {
    rng: Mutex<StdRng>,
}

impl RandomValues {
    /// Creates a source seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a deterministic source, for reproducible test runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomValues {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RandomValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomValues").finish_non_exhaustive()
    }
}

impl ValueSource for RandomValues {
    fn int_in_range(&self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.lock().gen_range(min..=max)
    }

    fn string(&self, len: usize) -> String {
        let mut rng = self.rng.lock();
        (&mut *rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    fn email(&self) -> String {
        format!("{}@{}", self.string(10).to_lowercase(), EMAIL_DOMAIN)
    }

    fn text(&self, len: usize) -> String {
        let mut rng = self.rng.lock();
        let words: Vec<&str> = (0..len)
            .filter_map(|_| WORDS.choose(&mut *rng).copied())
            .collect();
        words
            .chunks(WORDS_PER_LINE)
            .map(|line| line.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.lock().gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_in_range_stays_inside_bounds() {
        let values = RandomValues::seeded(7);
        for _ in 0..500 {
            let n = values.int_in_range(-100, 50);
            assert!((-100..=50).contains(&n), "out of range: {}", n);
        }
    }

    #[test]
    fn test_int_in_range_empty_range_returns_min() {
        let values = RandomValues::seeded(7);
        assert_eq!(values.int_in_range(5, 5), 5);
        assert_eq!(values.int_in_range(9, 3), 9);
    }

    #[test]
    fn test_string_length_and_charset() {
        let values = RandomValues::seeded(1);
        let s = values.string(14);
        assert_eq!(s.chars().count(), 14);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(values.string(0).is_empty());
    }

    #[test]
    fn test_email_uses_fixed_domain() {
        let values = RandomValues::seeded(3);
        let email = values.email();
        let (local, domain) = email.split_once('@').expect("missing @");
        assert_eq!(domain, EMAIL_DOMAIN);
        assert_eq!(local.len(), 10);
    }

    #[test]
    fn test_text_is_multi_line() {
        let values = RandomValues::seeded(11);
        let text = values.text(14);
        assert_eq!(text.split_whitespace().count(), 14);
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let a = RandomValues::seeded(42);
        let b = RandomValues::seeded(42);
        assert_eq!(a.string(20), b.string(20));
        assert_eq!(a.index(1000), b.index(1000));
    }

    #[test]
    fn test_index_bounds() {
        let values = RandomValues::seeded(5);
        assert_eq!(values.index(0), 0);
        assert_eq!(values.index(1), 0);
        for _ in 0..100 {
            assert!(values.index(4) < 4);
        }
    }
}
