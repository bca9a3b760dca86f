//! Numbered menu enums for the suite console.
//!
//! Each enum has:
//! - a fixed display order (`ALL`) with 1-based menu numbers
//! - a localization key for its label
//! - `FromStr` accepting the menu number (`"1"` or zero-padded `"01"`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing user selections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input did not match any menu option.
    #[error("'{input}' is not a valid {what}")]
    Unknown {
        /// What was being parsed (e.g. "menu choice").
        what: &'static str,
        /// The offending input, trimmed.
        input: String,
    },
}

/// Parses a menu number, accepting surrounding whitespace and leading zeros.
fn parse_number(input: &str) -> Option<usize> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

// ---------------------------------------------------------------------------
// Macro: a fieldless enum with a fixed menu order and a label key per variant.
// ---------------------------------------------------------------------------
macro_rules! define_numbered_enum {
    (
        $(#[$meta:meta])*
        $name:ident, what = $what:expr,
        variants: [
            $( $(#[$vmeta:meta])* ($variant:ident, $key:expr) ),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All variants in menu order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// 1-based position in the menu.
            pub fn number(self) -> usize {
                Self::ALL
                    .iter()
                    .position(|v| *v == self)
                    .map_or(0, |i| i + 1)
            }

            /// Localization key for the menu label.
            pub fn label_key(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )+
                }
            }

            /// Looks up a variant by its 1-based menu number.
            pub fn from_number(n: usize) -> Option<Self> {
                n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_number(s)
                    .and_then(Self::from_number)
                    .ok_or_else(|| ParseError::Unknown {
                        what: $what,
                        input: s.trim().to_string(),
                    })
            }
        }
    };
}

define_numbered_enum! {
    /// Options of the main menu, in display order.
    MenuChoice, what = "menu choice",
    variants: [
        (ExchangeProfile, "menu.exchange_profile"),
        (FollowMission, "menu.follow_mission"),
        (DeleteLinks, "menu.delete_links"),
        (ExchangePage, "menu.exchange_page"),
        (SocialLikes, "menu.twitter_likes"),
        (Exit, "menu.exit"),
        (SwitchLanguage, "menu.switch_language"),
    ]
}

impl MenuChoice {
    /// Returns `true` for the options that hand off to the automation engine.
    pub fn is_automation(self) -> bool {
        !matches!(self, Self::Exit | Self::SwitchLanguage)
    }
}

define_numbered_enum! {
    /// Interface languages, in language-menu order.
    Language, what = "language",
    variants: [
        (English, "menu.language.english"),
        (Indonesian, "menu.language.indonesian"),
    ]
}

impl Language {
    /// ISO 639-1 code used for catalogs and settings.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Indonesian => "id",
        }
    }

    /// Parses a language from its code or English name, case-insensitively.
    ///
    /// Menu numbers are handled by [`FromStr`]; this accepts the textual forms
    /// used in settings files and on the command line.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "id" | "indonesian" | "bahasa" => Some(Self::Indonesian),
            _ => None,
        }
    }

    /// Parses a language from a code, a name or a menu number.
    pub fn parse_any(s: &str) -> Result<Self, ParseError> {
        Self::from_code(s).map_or_else(|| s.parse(), Ok)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_any(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn menu_order_is_fixed() {
        let keys: Vec<_> = MenuChoice::ALL.iter().map(|c| c.label_key()).collect();
        assert_eq!(
            keys,
            vec![
                "menu.exchange_profile",
                "menu.follow_mission",
                "menu.delete_links",
                "menu.exchange_page",
                "menu.twitter_likes",
                "menu.exit",
                "menu.switch_language",
            ]
        );
        assert_eq!(MenuChoice::ExchangeProfile.number(), 1);
        assert_eq!(MenuChoice::SwitchLanguage.number(), 7);
    }

    #[test]
    fn menu_choice_parses_padded_numbers() {
        assert_eq!("6".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!("06".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!(" 07\n".parse::<MenuChoice>(), Ok(MenuChoice::SwitchLanguage));
    }

    #[test]
    fn menu_choice_rejects_out_of_range() {
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("8".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
        assert!("-1".parse::<MenuChoice>().is_err());
        let err = "x1".parse::<MenuChoice>().unwrap_err();
        assert_eq!(err.to_string(), "'x1' is not a valid menu choice");
    }

    #[test]
    fn automation_choices() {
        let automated = MenuChoice::ALL.iter().filter(|c| c.is_automation()).count();
        assert_eq!(automated, 5);
        assert!(!MenuChoice::Exit.is_automation());
        assert!(!MenuChoice::SwitchLanguage.is_automation());
    }

    #[test]
    fn language_parses_codes_names_and_numbers() {
        assert_eq!(Language::parse_any("id"), Ok(Language::Indonesian));
        assert_eq!(Language::parse_any("English"), Ok(Language::English));
        assert_eq!(Language::parse_any("2"), Ok(Language::Indonesian));
        assert!(Language::parse_any("fr").is_err());
    }

    #[test]
    fn language_serializes_as_code() {
        let yaml = serde_yaml::to_string(&Language::Indonesian).unwrap();
        assert_eq!(yaml.trim(), "id");
        let back: Language = serde_yaml::from_str("en").unwrap();
        assert_eq!(back, Language::English);
    }
}
