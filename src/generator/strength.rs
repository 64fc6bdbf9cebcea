use std::fmt;

use crate::generator::GeneratorConfig;
use crate::types::*;

/// Advisory strength label. Not an entropy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "weak"),
            Strength::Medium => write!(f, "medium"),
            Strength::Strong => write!(f, "strong"),
        }
    }
}

const MEDIUM_LENGTH: usize = 8;
const STRONG_LENGTH: usize = 12;

/// Weak below 8 characters, Medium from 8, Strong from 12 when the password
/// contains at least one character of an enabled class.
pub fn classify_strength(password: &str, config: &GeneratorConfig) -> Strength {
    let length = password.chars().count();

    if length >= STRONG_LENGTH
        && config
            .effective_classes()
            .iter()
            .any(|class| password.chars().any(|c| class.contains(c)))
    {
        return Strength::Strong;
    }

    if length >= MEDIUM_LENGTH {
        Strength::Medium
    } else {
        Strength::Weak
    }
}
