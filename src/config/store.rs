//! Configuration store: active configuration plus the saved catalog.

use super::errors::{ConfigError, ConfigResult};
use super::models::TournamentConfig;

/// Owns the active tournament configuration and the catalog of saved
/// configurations.
///
/// The store itself never touches the clock or the stack registry: callers
/// that switch or replace the active configuration are responsible for
/// resetting dependents afterwards (the session actor does this wiring).
#[derive(Debug, Clone)]
pub struct ConfigStore {
    active: TournamentConfig,
    saved: Vec<TournamentConfig>,
}

impl Default for ConfigStore {
    /// Store seeded with the built-in presets, standard preset active.
    fn default() -> Self {
        Self::new(vec![TournamentConfig::standard(), TournamentConfig::turbo()])
    }
}

impl ConfigStore {
    /// Create a store from a catalog of saved configurations.
    ///
    /// The first catalog entry becomes the active configuration; an empty
    /// catalog falls back to the standard preset.
    pub fn new(saved: Vec<TournamentConfig>) -> Self {
        let active = saved
            .first()
            .cloned()
            .unwrap_or_else(TournamentConfig::standard);
        Self { active, saved }
    }

    /// The active configuration
    pub fn active(&self) -> &TournamentConfig {
        &self.active
    }

    /// The saved catalog, in save order
    pub fn saved(&self) -> &[TournamentConfig] {
        &self.saved
    }

    /// Activate the saved configuration with the given name.
    ///
    /// Returns the newly active configuration, or `ConfigError::NotFound`
    /// with the store left untouched. On success the caller must reset the
    /// clock and the stack registry against the returned configuration.
    pub fn switch_to(&mut self, name: &str) -> ConfigResult<&TournamentConfig> {
        let config = self
            .saved
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or_else(|| ConfigError::NotFound(name.to_string()))?;
        self.active = config;
        Ok(&self.active)
    }

    /// Upsert a configuration into the catalog by name.
    ///
    /// An exact name match is replaced in place; otherwise the configuration
    /// is appended. No shape validation happens here.
    pub fn save(&mut self, config: TournamentConfig) {
        match self.saved.iter_mut().find(|c| c.name == config.name) {
            Some(existing) => *existing = config,
            None => self.saved.push(config),
        }
    }

    /// Replace the active configuration without touching the catalog.
    ///
    /// Used for live edits from a settings surface; callers decide separately
    /// whether to persist the edit via [`ConfigStore::save`].
    pub fn replace_active(&mut self, config: TournamentConfig) {
        self.active = config;
    }
}
