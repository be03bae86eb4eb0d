// src/generators/password.rs
use log::{debug, warn};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};

use super::{Alphabet, GeneratorError, Result};
use crate::models::{GenerationConfig, RepairStrategy};

/// Builds passwords from a [`GenerationConfig`] using a cryptographically
/// secure random source. The OS generator is used unless another is injected.
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PasswordGenerator<R>
where
    R: RngCore + CryptoRng,
{
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, config: &GenerationConfig) -> Result<String> {
        let alphabet = Alphabet::from_config(config)?;
        let mut password = alphabet.sample(&mut self.rng, config.length());

        match config.repair() {
            RepairStrategy::Disjoint => self.repair_disjoint(&mut password, config)?,
            RepairStrategy::Legacy => self.repair_legacy(&mut password, config),
        }

        Ok(password.into_iter().collect())
    }

    /// Runs `count` independent generations. A failed item is logged and
    /// skipped; the rest of the batch still runs.
    pub fn generate_many(&mut self, count: usize, config: &GenerationConfig) -> BatchOutcome {
        let results: Vec<Result<String>> = (0..count)
            .map(|_| self.generate_password(config))
            .collect();
        BatchOutcome::from_results(results)
    }

    fn repair_legacy(&mut self, password: &mut [char], config: &GenerationConfig) {
        for class in config.required_classes() {
            if password.iter().any(|c| class.matches(*c)) {
                continue;
            }

            let pos = self.rng.gen_range(0..password.len());
            let reference: Vec<char> = class.reference_set().chars().collect();
            if let Some(c) = reference.choose(&mut self.rng) {
                debug!("Missing {} character, overwriting position {}", class, pos);
                password[pos] = *c;
            }
        }
    }

    fn repair_disjoint(&mut self, password: &mut [char], config: &GenerationConfig) -> Result<()> {
        let required = config.required_classes();
        let insufficient = GeneratorError::InsufficientLength {
            length: password.len(),
            required: required.len(),
        };
        if password.len() < required.len() {
            return Err(insufficient);
        }

        // One occurrence of every class already present stays untouched.
        let mut pinned = vec![false; password.len()];
        let mut missing = Vec::new();
        for class in required {
            let occurrences: Vec<usize> = password
                .iter()
                .enumerate()
                .filter(|(_, c)| class.matches(**c))
                .map(|(i, _)| i)
                .collect();

            match occurrences.choose(&mut self.rng) {
                Some(&pos) => pinned[pos] = true,
                None => missing.push(class),
            }
        }

        for class in missing {
            let free: Vec<usize> = (0..password.len()).filter(|&i| !pinned[i]).collect();
            let pos = *free
                .choose(&mut self.rng)
                .ok_or_else(|| insufficient.clone())?;

            let candidates = class.filtered_set(config.exclude_similar());
            let c = *candidates
                .choose(&mut self.rng)
                .ok_or(GeneratorError::EmptyAlphabet)?;

            debug!("Missing {} character, writing it at position {}", class, pos);
            password[pos] = c;
            pinned[pos] = true;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// 1-based position of the item in the batch.
    pub index: usize,
    pub error: GeneratorError,
}

/// Per-item results of a batch, split into successes and failures.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub passwords: Vec<String>,
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub(crate) fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut outcome = BatchOutcome::default();

        for (i, result) in results.into_iter().enumerate() {
            match result {
                Ok(password) => outcome.passwords.push(password),
                Err(error) => {
                    warn!("Failed to generate password {}: {}", i + 1, error);
                    outcome.failures.push(BatchFailure { index: i + 1, error });
                }
            }
        }

        outcome
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn first_error(&self) -> Option<&GeneratorError> {
        self.failures.first().map(|f| &f.error)
    }

    pub fn into_passwords(self) -> Vec<String> {
        self.passwords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{is_similar, CharClass};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seeded(seed: u64) -> PasswordGenerator<ChaCha20Rng> {
        PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    fn has_class(password: &str, class: CharClass) -> bool {
        password.chars().any(|c| class.matches(c))
    }

    #[test]
    fn test_generated_length_matches_request() {
        let mut generator = seeded(1);
        for length in [4, 5, 8, 12, 16, 64, 128] {
            for exclude in [false, true] {
                let config = GenerationConfig::new(length)
                    .unwrap()
                    .with_exclude_similar(exclude);
                let password = generator.generate_password(&config).unwrap();
                assert_eq!(password.chars().count(), length);
            }
        }
    }

    #[test]
    fn test_os_rng_generator() {
        let mut generator = PasswordGenerator::new();
        let password = generator.generate_password(&GenerationConfig::default()).unwrap();
        assert_eq!(password.len(), 12);
        for class in [CharClass::Uppercase, CharClass::Digit, CharClass::Symbol] {
            assert!(has_class(&password, class));
        }
    }

    #[test]
    fn test_same_seed_same_password() {
        let config = GenerationConfig::default();
        let a = seeded(99).generate_password(&config).unwrap();
        let b = seeded(99).generate_password(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_disjoint_repair_guarantees_every_class_at_min_length() {
        let config = GenerationConfig::new(4).unwrap();
        for seed in 0..2000 {
            let password = seeded(seed).generate_password(&config).unwrap();
            assert_eq!(password.len(), 4);
            for class in config.required_classes() {
                assert!(
                    has_class(&password, class),
                    "seed {}: {:?} lacks {}",
                    seed,
                    password,
                    class
                );
            }
        }
    }

    #[test]
    fn test_disjoint_repair_respects_exclude_similar() {
        for length in [4, 6, 12] {
            let config = GenerationConfig::new(length)
                .unwrap()
                .with_exclude_similar(true);
            for seed in 0..1000 {
                let password = seeded(seed).generate_password(&config).unwrap();
                assert!(
                    !password.chars().any(is_similar),
                    "seed {}: {:?}",
                    seed,
                    password
                );
                for class in config.required_classes() {
                    assert!(has_class(&password, class));
                }
            }
        }
    }

    #[test]
    fn test_disabled_classes_never_appear() {
        let config = GenerationConfig::new(32)
            .unwrap()
            .with_uppercase(false)
            .with_symbols(false);
        for seed in 0..200 {
            let password = seeded(seed).generate_password(&config).unwrap();
            assert!(!has_class(&password, CharClass::Uppercase));
            assert!(!has_class(&password, CharClass::Symbol));
            assert!(has_class(&password, CharClass::Digit));
        }
    }

    #[test]
    fn test_lowercase_only_generation() {
        let config = GenerationConfig::new(10)
            .unwrap()
            .with_uppercase(false)
            .with_digits(false)
            .with_symbols(false);
        for strategy in [RepairStrategy::Disjoint, RepairStrategy::Legacy] {
            let config = config.clone().with_repair(strategy);
            let password = seeded(3).generate_password(&config).unwrap();
            assert_eq!(password.len(), 10);
            assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_disjoint_leaves_complete_password_alone() {
        let mut generator = seeded(5);
        let mut password: Vec<char> = "aB1!".chars().collect();
        generator
            .repair_disjoint(&mut password, &GenerationConfig::default())
            .unwrap();
        assert_eq!(password.iter().collect::<String>(), "aB1!");
    }

    #[test]
    fn test_disjoint_fills_every_position_when_needed() {
        let mut generator = seeded(6);
        let mut password: Vec<char> = "abc".chars().collect();
        generator
            .repair_disjoint(&mut password, &GenerationConfig::default())
            .unwrap();
        let password: String = password.into_iter().collect();
        assert!(has_class(&password, CharClass::Uppercase));
        assert!(has_class(&password, CharClass::Digit));
        assert!(has_class(&password, CharClass::Symbol));
        assert!(!has_class(&password, CharClass::Lowercase));
    }

    #[test]
    fn test_disjoint_fails_fast_when_too_short() {
        let mut generator = seeded(7);
        let mut password = vec!['a', 'b'];
        let err = generator
            .repair_disjoint(&mut password, &GenerationConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            GeneratorError::InsufficientLength {
                length: 2,
                required: 3
            }
        );
        assert_eq!(password, vec!['a', 'b']);
    }

    #[test]
    fn test_legacy_repair_can_reintroduce_similar_chars() {
        let config = GenerationConfig::new(4)
            .unwrap()
            .with_uppercase(false)
            .with_symbols(false)
            .with_exclude_similar(true)
            .with_repair(RepairStrategy::Legacy);

        let reintroduced = (0..3000).any(|seed| {
            let password = seeded(seed).generate_password(&config).unwrap();
            password.chars().any(is_similar)
        });
        assert!(reintroduced);
    }

    #[test]
    fn test_legacy_repair_can_lose_a_class_on_collision() {
        let config = GenerationConfig::new(4)
            .unwrap()
            .with_repair(RepairStrategy::Legacy);

        let under_satisfied = (0..5000).any(|seed| {
            let password = seeded(seed).generate_password(&config).unwrap();
            config
                .required_classes()
                .into_iter()
                .any(|class| !has_class(&password, class))
        });
        assert!(under_satisfied);
    }

    #[test]
    fn test_generate_many_returns_requested_count() {
        let config = GenerationConfig::new(14).unwrap().with_exclude_similar(true);
        let outcome = seeded(11).generate_many(5, &config);
        assert!(outcome.is_complete());
        assert_eq!(outcome.passwords.len(), 5);
        for password in &outcome.passwords {
            assert_eq!(password.len(), 14);
            assert!(!password.chars().any(is_similar));
            for class in config.required_classes() {
                assert!(has_class(password, class));
            }
        }

        assert!(seeded(11).generate_many(0, &config).passwords.is_empty());
    }

    #[test]
    fn test_batch_skips_failed_items() {
        let results = vec![
            Ok("first".to_string()),
            Err(GeneratorError::EmptyAlphabet),
            Ok("third".to_string()),
        ];
        let outcome = BatchOutcome::from_results(results);
        assert!(!outcome.is_complete());
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].index, 2);
        assert_eq!(outcome.first_error(), Some(&GeneratorError::EmptyAlphabet));
        assert_eq!(outcome.into_passwords(), vec!["first", "third"]);
    }
}
