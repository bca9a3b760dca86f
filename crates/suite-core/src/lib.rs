//! Core value types for the suite console.
//!
//! These types carry what the display layer prints: the credit balance, the
//! connected account, the main-menu options and the interface languages.

pub mod account;
pub mod credits;
pub mod enums;

pub use account::Account;
pub use credits::Credits;
pub use enums::{Language, MenuChoice, ParseError};
