//! Random password generation and a coarse strength heuristic.
//!
//! Characters are drawn uniformly with replacement from the concatenation of
//! the enabled character classes. The RNG is `rand::thread_rng`; nothing
//! here is hardened against an attacker who can observe or influence the
//! process, and the strength label is advisory only.

pub mod strength;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, VaultError};
use crate::types::*;

pub use strength::{classify_strength, Strength};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 32;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// One selectable group of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Digits => c.is_ascii_digit(),
            CharClass::Symbols => SYMBOLS.contains(c),
        }
    }
}

/// Length and character-class selection for [`generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Guarantee at least one character from every enabled class.
    pub require_each_class: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
            require_each_class: false,
        }
    }
}

impl GeneratorConfig {
    /// Check the length bound.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(VaultError::Validation(format!(
                "password length must be between {} and {}, got {}",
                MIN_LENGTH, MAX_LENGTH, self.length
            )));
        }
        Ok(())
    }

    /// The classes characters are drawn from. Falls back to lowercase when
    /// every toggle is off, so this is never empty.
    pub fn effective_classes(&self) -> Vec<CharClass> {
        let toggles = [
            (self.uppercase, CharClass::Uppercase),
            (self.lowercase, CharClass::Lowercase),
            (self.digits, CharClass::Digits),
            (self.symbols, CharClass::Symbols),
        ];
        let classes: Vec<CharClass> = toggles
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, class)| *class)
            .collect();

        if classes.is_empty() {
            vec![CharClass::Lowercase]
        } else {
            classes
        }
    }

    /// Concatenated alphabet of the effective classes.
    pub fn alphabet(&self) -> Vec<char> {
        self.effective_classes()
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }
}

/// Generate a password with the thread-local RNG.
pub fn generate(config: &GeneratorConfig) -> Result<String> {
    generate_with(&mut rand::thread_rng(), config)
}

/// Generate a password from the given RNG.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Result<String> {
    config.validate()?;

    let alphabet = config.alphabet();
    let mut chars: Vec<char> = Vec::with_capacity(config.length);

    if config.require_each_class {
        for class in config.effective_classes() {
            let pool: Vec<char> = class.alphabet().chars().collect();
            chars.push(pool[rng.gen_range(0..pool.len())]);
        }
    }

    while chars.len() < config.length {
        chars.push(alphabet[rng.gen_range(0..alphabet.len())]);
    }

    if config.require_each_class {
        chars.shuffle(rng);
    }

    Ok(chars.into_iter().collect())
}
