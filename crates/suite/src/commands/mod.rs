//! Command handlers, one module per subcommand.

pub mod completion;
pub mod language;
pub mod preview;
pub mod run;
pub mod version;
