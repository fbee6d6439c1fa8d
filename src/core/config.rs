//! # Hub configuration.
//!
//! Provides [`HubConfig`], passed to [`EventHub::with_config`](crate::EventHub::with_config).

/// Configuration of an [`EventHub`](crate::EventHub).
///
/// ## Field semantics
/// - `true_scope_unbound`: a scope holding the boolean `true` is invoked as unbound
#[derive(Clone, Debug)]
pub struct HubConfig {
    /// Treat a scope holding the boolean `true` as "no scope" at fire time.
    ///
    /// Kept for compatibility with hosts that register `true` to mean "invoke unbound".
    /// When `false`, such a scope is passed to the handler like any other value.
    pub true_scope_unbound: bool,
}

impl Default for HubConfig {
    /// Default configuration:
    ///
    /// - `true_scope_unbound = true` (legacy `true` sentinel honoured)
    fn default() -> Self {
        Self {
            true_scope_unbound: true,
        }
    }
}
