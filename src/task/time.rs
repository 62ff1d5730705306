//! Time-of-day validation for task bounds

use regex::Regex;
use std::sync::LazyLock;

/// Two-digit hour, 00-23, and two-digit minute.
static STRICT_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

/// Also accepts a single-digit hour such as `9:30`.
static LENIENT_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(2[0-3]|[01]?[0-9]):[0-5][0-9]$").expect("valid time regex"));

/// How strictly `HH:MM` strings are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// Fixed-width `HH:MM`, so string order equals chronological order
    #[default]
    Strict,
    /// Hour may drop its leading zero
    Lenient,
}

impl TimeFormat {
    pub fn is_valid(&self, time: &str) -> bool {
        match self {
            Self::Strict => STRICT_TIME.is_match(time),
            Self::Lenient => LENIENT_TIME.is_match(time),
        }
    }

    /// Canonical `HH:MM` form of an accepted time, `None` if rejected.
    ///
    /// Stored times must be fixed-width for string comparison to follow
    /// the clock, so a short hour gets its leading zero back.
    pub fn normalize(&self, time: &str) -> Option<String> {
        if !self.is_valid(time) {
            return None;
        }
        if time.len() == 4 {
            Some(format!("0{}", time))
        } else {
            Some(time.to_string())
        }
    }
}

/// Check a time against the strict `HH:MM` form
pub fn is_valid_time(time: &str) -> bool {
    TimeFormat::Strict.is_valid(time)
}
