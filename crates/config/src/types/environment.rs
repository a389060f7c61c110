//! Sumologic deployment selection.
//!
//! Each Sumologic account lives in one deployment, and each deployment has
//! its own API host. `us1` is the historical default and has no region
//! prefix in its hostname.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::SUMOLOGIC_API_DOMAIN;

/// A Sumologic deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Us1,
    Us2,
    Eu,
    Au,
    De,
    Jp,
    Ca,
    In,
    Fed,
}

impl Environment {
    /// All known deployments.
    pub const ALL: [Environment; 9] = [
        Self::Us1,
        Self::Us2,
        Self::Eu,
        Self::Au,
        Self::De,
        Self::Jp,
        Self::Ca,
        Self::In,
        Self::Fed,
    ];

    /// Lowercase short name, as accepted by `SUMOLOGIC_ENVIRONMENT`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us1 => "us1",
            Self::Us2 => "us2",
            Self::Eu => "eu",
            Self::Au => "au",
            Self::De => "de",
            Self::Jp => "jp",
            Self::Ca => "ca",
            Self::In => "in",
            Self::Fed => "fed",
        }
    }

    /// API base URL for this deployment, without a trailing slash.
    pub fn base_url(&self) -> String {
        match self {
            Self::Us1 => format!("https://api.{SUMOLOGIC_API_DOMAIN}/api"),
            other => format!("https://api.{}.{SUMOLOGIC_API_DOMAIN}/api", other.as_str()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|env| env.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|e| e.as_str()).collect();
                format!("unknown environment '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us1_has_no_region_prefix() {
        assert_eq!(Environment::Us1.base_url(), "https://api.sumologic.com/api");
    }

    #[test]
    fn test_regional_base_urls() {
        assert_eq!(Environment::Us2.base_url(), "https://api.us2.sumologic.com/api");
        assert_eq!(Environment::Eu.base_url(), "https://api.eu.sumologic.com/api");
        assert_eq!(Environment::Fed.base_url(), "https://api.fed.sumologic.com/api");
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("EU".parse::<Environment>().unwrap(), Environment::Eu);
        assert_eq!(" us2 ".parse::<Environment>().unwrap(), Environment::Us2);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "mars".parse::<Environment>().unwrap_err();
        assert!(err.contains("mars"));
        assert!(err.contains("us1"));
    }

    #[test]
    fn test_display_round_trips() {
        for env in Environment::ALL {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }
}
