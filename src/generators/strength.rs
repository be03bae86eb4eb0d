// src/generators/strength.rs
use crate::models::{CharClass, StrengthLabel};

/// Raw heuristic score in `0..=6`: up to 2 points for length plus one per
/// character class present.
pub fn strength_score(password: &str) -> u8 {
    let length = password.chars().count();

    let mut score = if length >= 12 {
        2
    } else if length >= 8 {
        1
    } else {
        0
    };

    for class in [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ] {
        if password.chars().any(|c| class.matches(c)) {
            score += 1;
        }
    }

    score
}

// Analyze password strength
pub fn calculate_strength(password: &str) -> StrengthLabel {
    match strength_score(password) {
        s if s >= 6 => StrengthLabel::VeryStrong,
        s if s >= 4 => StrengthLabel::Strong,
        s if s >= 2 => StrengthLabel::Medium,
        _ => StrengthLabel::Weak,
    }
}
