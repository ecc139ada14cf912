//! API layer configuration
//!
//! Contains the run configuration passed explicitly to every entry point.

use llang_config::RenderConfig;

/// Execution configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Text bound (lower-cased) to the reserved arguments identifier
    pub arguments: String,
    /// Output layout
    pub render: RenderConfig,
}

impl RunConfig {
    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = arguments.into();
        self
    }

    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}
