//! Credit balance as displayed to the user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A credit balance, already formatted for display.
///
/// The console never does arithmetic on credits; the automation backend owns
/// the balance and hands over whatever text it wants shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credits(String);

impl Credits {
    /// Returns the display text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Credits {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Credits {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Credits {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for Credits {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_display_verbatim() {
        assert_eq!(Credits::from("1,250").to_string(), "1,250");
        assert_eq!(Credits::from(42).as_str(), "42");
        assert_eq!(Credits::default().as_str(), "0");
    }
}
