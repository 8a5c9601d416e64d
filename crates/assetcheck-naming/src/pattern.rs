//! Structural naming pattern.
//!
//! A conforming name starts with an uppercase ASCII letter, and every
//! underscore is immediately followed by an uppercase ASCII letter or a digit.
//! `PlayerController` and `BP_Player_01` conform; `player`, `Player_controller`,
//! `Player__Controller` and `Player_` do not.

use std::sync::OnceLock;

use regex::Regex;

/// Regex for the structural convention.
///
/// Each underscore consumes the character that follows it, which must be
/// `[A-Z0-9]`; the remainder of a segment is any run of non-underscores.
const NAMING_PATTERN: &str = r"^[A-Z][^_]*(?:_[A-Z0-9][^_]*)*$";

static NAMING_REGEX: OnceLock<Regex> = OnceLock::new();

fn naming_regex() -> &'static Regex {
    NAMING_REGEX.get_or_init(|| Regex::new(NAMING_PATTERN).expect("invalid regex pattern"))
}

/// Returns true if `name` follows the structural naming convention.
pub fn matches_naming_pattern(name: &str) -> bool {
    naming_regex().is_match(name)
}
