use crate::ports::{ConfigStore, GitPort};

/// Application context holding dependencies for config-backed commands.
pub struct AppContext<S: ConfigStore, G: GitPort> {
    store: S,
    git: G,
}

impl<S: ConfigStore, G: GitPort> AppContext<S, G> {
    /// Create a new application context.
    pub fn new(store: S, git: G) -> Self {
        Self { store, git }
    }

    /// Get a reference to the config store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the git port.
    pub fn git(&self) -> &G {
        &self.git
    }
}
