//! Configuration types for proto generation.
//!
//! This module provides configuration structures that control how proto3
//! text is emitted. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`EmitConfig`] - Controls text layout such as indentation.
//! - [`MessagesConfig`] - Controls synthesized wrapper messages.
//!
//! # Example
//!
//! ```
//! # use protogen::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.emit().indent_width(), 4);
//! assert!(!config.messages().deduplicate());
//! ```

use serde::Deserialize;

use protogen_core::code::DEFAULT_INDENT_WIDTH;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Text emission section.
    #[serde(default)]
    emit: EmitConfig,

    /// Wrapper message section.
    #[serde(default)]
    messages: MessagesConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `emit` - Text emission settings.
    /// * `messages` - Wrapper message settings.
    pub fn new(emit: EmitConfig, messages: MessagesConfig) -> Self {
        Self { emit, messages }
    }

    /// Returns the text emission configuration.
    pub fn emit(&self) -> &EmitConfig {
        &self.emit
    }

    /// Returns the wrapper message configuration.
    pub fn messages(&self) -> &MessagesConfig {
        &self.messages
    }
}

/// Text emission configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EmitConfig {
    /// Spaces per indentation level inside blocks.
    #[serde(default = "default_indent_width")]
    indent_width: usize,
}

impl EmitConfig {
    /// Creates a new [`EmitConfig`].
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    /// Returns the number of spaces per indentation level.
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

/// Configuration of the wrapper messages synthesized for scalar responses.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MessagesConfig {
    /// Emit at most one wrapper message per operation.
    ///
    /// Off by default: an operation with several scalar success responses
    /// gets one wrapper per response.
    #[serde(default)]
    deduplicate: bool,
}

impl MessagesConfig {
    /// Creates a new [`MessagesConfig`].
    pub fn new(deduplicate: bool) -> Self {
        Self { deduplicate }
    }

    /// Returns whether duplicate wrapper messages are suppressed.
    pub fn deduplicate(&self) -> bool {
        self.deduplicate
    }
}
