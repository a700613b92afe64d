use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::news::error::InputError;

/// A single search result, passed through exactly as the upstream API returned it.
pub type NewsItem = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Crypto,
    Gold,
}

impl Topic {
    pub const ALL: [Topic; 2] = [Topic::Crypto, Topic::Gold];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Crypto => "crypto",
            Topic::Gold => "gold",
        }
    }

    /// Search query sent upstream for this topic.
    pub fn query(self) -> &'static str {
        match self {
            Topic::Crypto => "cryptocurrency bitcoin ethereum market",
            Topic::Gold => "gold market price trading",
        }
    }
}

impl FromStr for Topic {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "crypto" => Ok(Topic::Crypto),
            "gold" => Ok(Topic::Gold),
            other => Err(InputError::Topic(other.to_string())),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase two-letter country code from the supported list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Country(String);

impl Country {
    pub const SUPPORTED: [&'static str; 10] =
        ["us", "fr", "uk", "de", "ca", "jp", "cn", "in", "br", "au"];

    pub fn parse(code: &str) -> Result<Self, InputError> {
        let normalized = code.to_lowercase();
        if Self::SUPPORTED.contains(&normalized.as_str()) {
            Ok(Self(normalized))
        } else {
            Err(InputError::Country(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Country {
    fn default() -> Self {
        Self("us".to_string())
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
