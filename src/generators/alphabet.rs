// src/generators/alphabet.rs
use rand::distributions::{Distribution, Uniform};
use rand::{CryptoRng, RngCore};

use super::{GeneratorError, Result};
use crate::models::{is_similar, GenerationConfig, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

/// The characters eligible for sampling during a single generate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Lowercase first, then uppercase, digits and symbols as enabled, with
    /// similar-looking characters stripped if requested.
    pub fn from_config(config: &GenerationConfig) -> Result<Self> {
        let mut chars: Vec<char> = LOWERCASE.chars().collect();

        if config.use_uppercase() {
            chars.extend(UPPERCASE.chars());
        }
        if config.use_digits() {
            chars.extend(DIGITS.chars());
        }
        if config.use_symbols() {
            chars.extend(SYMBOLS.chars());
        }

        if config.exclude_similar() {
            chars.retain(|c| !is_similar(*c));
        }

        Self::from_chars(chars)
    }

    pub fn from_chars<I>(chars: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Draws `length` characters independently and uniformly, repetition allowed.
    pub fn sample<R>(&self, rng: &mut R, length: usize) -> Vec<char>
    where
        R: RngCore + CryptoRng,
    {
        let dist = Uniform::from(0..self.chars.len());
        (0..length).map(|_| self.chars[dist.sample(rng)]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SIMILAR_CHARS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_full_alphabet_order() {
        let alphabet = Alphabet::from_config(&GenerationConfig::default()).unwrap();
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 32);

        let text: String = alphabet.as_slice().iter().collect();
        assert!(text.starts_with(LOWERCASE));
        assert_eq!(&text[26..52], UPPERCASE);
        assert_eq!(&text[52..62], DIGITS);
        assert_eq!(&text[62..], SYMBOLS);
    }

    #[test]
    fn test_lowercase_only_alphabet() {
        let config = GenerationConfig::new(8)
            .unwrap()
            .with_uppercase(false)
            .with_digits(false)
            .with_symbols(false);
        let alphabet = Alphabet::from_config(&config).unwrap();
        assert_eq!(alphabet.len(), 26);
        assert!(alphabet.as_slice().iter().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_exclude_similar_strips_every_similar_char() {
        let config = GenerationConfig::default().with_exclude_similar(true);
        let alphabet = Alphabet::from_config(&config).unwrap();
        for c in SIMILAR_CHARS.chars() {
            assert!(!alphabet.contains(c), "{} should be excluded", c);
        }
        assert_eq!(alphabet.len(), 94 - SIMILAR_CHARS.len());

        // i, l and o are lowercase too, but 23 letters remain
        let lower_only = config
            .with_uppercase(false)
            .with_digits(false)
            .with_symbols(false);
        assert_eq!(Alphabet::from_config(&lower_only).unwrap().len(), 23);
    }

    #[test]
    fn test_empty_alphabet_is_rejected() {
        assert_eq!(
            Alphabet::from_chars(Vec::new()),
            Err(GeneratorError::EmptyAlphabet)
        );
    }

    #[test]
    fn test_sample_draws_from_alphabet() {
        let alphabet = Alphabet::from_chars("xyz".chars()).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let sampled = alphabet.sample(&mut rng, 64);
        assert_eq!(sampled.len(), 64);
        assert!(sampled.iter().all(|c| alphabet.contains(*c)));
        // all three characters should show up in 64 draws
        for c in ['x', 'y', 'z'] {
            assert!(sampled.contains(&c));
        }
    }

    #[test]
    fn test_sample_is_reproducible_with_same_seed() {
        let alphabet = Alphabet::from_config(&GenerationConfig::default()).unwrap();
        let a = alphabet.sample(&mut ChaCha20Rng::seed_from_u64(42), 20);
        let b = alphabet.sample(&mut ChaCha20Rng::seed_from_u64(42), 20);
        assert_eq!(a, b);
    }
}
