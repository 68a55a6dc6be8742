//! Configuration for the standard module catalogue.

use crate::trace::TracerConfig;

/// Configuration for [`Stdlib`](crate::Stdlib).
///
/// Selects which built-in modules are registered and how their calls are
/// traced.
#[derive(Clone, Debug, Default)]
pub struct StdlibConfig {
    /// Module allow-list. `None` registers every built-in module.
    pub modules: Option<Vec<String>>,

    /// Tracer settings shared by every registered builtin.
    pub trace: TracerConfig,
}

impl StdlibConfig {
    /// Creates a configuration registering every module, untraced.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration registering every module.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a configuration registering every module with tracing on.
    #[must_use]
    pub fn traced() -> Self {
        Self {
            modules: None,
            trace: TracerConfig::new().enabled(),
        }
    }

    /// Builder method to restrict registration to the named modules.
    #[must_use]
    pub fn only<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules = Some(modules.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method to set tracer settings.
    #[must_use]
    pub fn with_trace(mut self, trace: TracerConfig) -> Self {
        self.trace = trace;
        self
    }

    /// Returns true if the named module should be registered.
    #[must_use]
    pub fn includes(&self, module: &str) -> bool {
        self.modules
            .as_ref()
            .is_none_or(|allowed| allowed.iter().any(|m| m == module))
    }
}
