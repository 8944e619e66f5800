//! Identifier generation for new items.
//!
//! Two schemes are available:
//!
//! - [`IdScheme::Uuid`] (default) — a random v4 UUID, hyphenated.
//! - [`IdScheme::Short`] — a 9 character `[0-9a-z]` token. This is the
//!   legacy short-id format, kept for clients that expect it. It has a much
//!   smaller value space and the store does not check it for collisions.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use uuid::Uuid;

/// Length of a [`IdScheme::Short`] token.
pub const SHORT_ID_LEN: usize = 9;

const SHORT_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// How the store assigns ids to newly created items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdScheme {
    #[default]
    Uuid,
    Short,
}

impl IdScheme {
    /// Generate a fresh identifier.
    pub fn generate(&self) -> String {
        match self {
            IdScheme::Uuid => Uuid::new_v4().to_string(),
            IdScheme::Short => short_id(),
        }
    }
}

impl fmt::Display for IdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdScheme::Uuid => write!(f, "uuid"),
            IdScheme::Short => write!(f, "short"),
        }
    }
}

impl FromStr for IdScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdScheme::Uuid),
            "short" => Ok(IdScheme::Short),
            other => Err(format!(
                "unknown id scheme '{}' (expected 'uuid' or 'short')",
                other
            )),
        }
    }
}

fn short_id() -> String {
    let mut rng = rand::thread_rng();
    (0..SHORT_ID_LEN)
        .map(|_| SHORT_ID_ALPHABET[rng.gen_range(0..SHORT_ID_ALPHABET.len())] as char)
        .collect()
}
