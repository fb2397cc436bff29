//! Configuration loading for quizshelf.
//!
//! Settings live in `~/.config/quizshelf/config.toml`; a missing file means
//! defaults. CLI flags are applied on top by the binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, LoggingConfig, ThemeMode, UiConfig};
