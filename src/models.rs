// src/models.rs
use serde::Serialize;
use std::fmt;

use crate::generators::GeneratorError;

/// Shortest password the generator will produce.
pub const MIN_PASSWORD_LENGTH: usize = 4;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters that are easy to confuse when read or typed by hand.
pub const SIMILAR_CHARS: &str = "il1Lo0O";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Full, unfiltered set of characters belonging to this class.
    pub fn reference_set(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Reference set, minus the similar-looking characters when `exclude_similar` is set.
    pub fn filtered_set(self, exclude_similar: bool) -> Vec<char> {
        self.reference_set()
            .chars()
            .filter(|c| !exclude_similar || !is_similar(*c))
            .collect()
    }

    pub fn of(c: char) -> Option<CharClass> {
        if c.is_ascii_lowercase() {
            Some(CharClass::Lowercase)
        } else if c.is_ascii_uppercase() {
            Some(CharClass::Uppercase)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if SYMBOLS.contains(c) {
            Some(CharClass::Symbol)
        } else {
            None
        }
    }

    pub fn matches(self, c: char) -> bool {
        CharClass::of(c) == Some(self)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Lowercase => write!(f, "lowercase"),
            CharClass::Uppercase => write!(f, "uppercase"),
            CharClass::Digit => write!(f, "digit"),
            CharClass::Symbol => write!(f, "symbol"),
        }
    }
}

pub fn is_similar(c: char) -> bool {
    SIMILAR_CHARS.contains(c)
}

/// How missing character classes are patched after sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepairStrategy {
    /// Each missing class gets its own position. Positions already holding the
    /// only representative of a required class are never overwritten, and the
    /// replacement characters honour `exclude_similar`.
    #[default]
    Disjoint,
    /// Overwrite a random position per missing class using the unfiltered
    /// reference set. Repairs may clobber one another.
    Legacy,
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    use_uppercase: bool,
    use_digits: bool,
    use_symbols: bool,
    exclude_similar: bool,
    repair: RepairStrategy,
}

impl GenerationConfig {
    /// Creates a config with every optional class enabled.
    pub fn new(length: usize) -> Result<Self, GeneratorError> {
        if length < MIN_PASSWORD_LENGTH {
            return Err(GeneratorError::InvalidLength {
                length,
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(Self {
            length,
            use_uppercase: true,
            use_digits: true,
            use_symbols: true,
            exclude_similar: false,
            repair: RepairStrategy::default(),
        })
    }

    pub fn with_uppercase(mut self, enabled: bool) -> Self {
        self.use_uppercase = enabled;
        self
    }

    pub fn with_digits(mut self, enabled: bool) -> Self {
        self.use_digits = enabled;
        self
    }

    pub fn with_symbols(mut self, enabled: bool) -> Self {
        self.use_symbols = enabled;
        self
    }

    pub fn with_exclude_similar(mut self, enabled: bool) -> Self {
        self.exclude_similar = enabled;
        self
    }

    pub fn with_repair(mut self, repair: RepairStrategy) -> Self {
        self.repair = repair;
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn use_uppercase(&self) -> bool {
        self.use_uppercase
    }

    pub fn use_digits(&self) -> bool {
        self.use_digits
    }

    pub fn use_symbols(&self) -> bool {
        self.use_symbols
    }

    pub fn exclude_similar(&self) -> bool {
        self.exclude_similar
    }

    pub fn repair(&self) -> RepairStrategy {
        self.repair
    }

    /// Optional classes that must show up in every generated password, in
    /// alphabet order. Lowercase is never enforced.
    pub fn required_classes(&self) -> Vec<CharClass> {
        let mut classes = Vec::with_capacity(3);
        if self.use_uppercase {
            classes.push(CharClass::Uppercase);
        }
        if self.use_digits {
            classes.push(CharClass::Digit);
        }
        if self.use_symbols {
            classes.push(CharClass::Symbol);
        }
        classes
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            use_uppercase: true,
            use_digits: true,
            use_symbols: true,
            exclude_similar: false,
            repair: RepairStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// One line of generator output as handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordRecord {
    pub index: usize,
    pub password: String,
    pub strength: StrengthLabel,
}

impl PasswordRecord {
    /// Numbers the passwords from 1 and scores each one.
    pub fn from_passwords(passwords: &[String]) -> Vec<PasswordRecord> {
        passwords
            .iter()
            .enumerate()
            .map(|(i, password)| PasswordRecord {
                index: i + 1,
                password: password.clone(),
                strength: crate::generators::calculate_strength(password),
            })
            .collect()
    }
}
