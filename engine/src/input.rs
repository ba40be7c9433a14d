use std::collections::HashMap;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Intent;

/// Stateless translation from raw platform key identifiers to intents.
/// Whether SPACE pauses or restarts is decided by the engine's run state,
/// never here.
pub struct InputRouter {
    bindings: HashMap<String, Intent>,
}

impl InputRouter {
    /// Builds the routing table from `key -> intent name` bindings.
    /// Unknown intent names are a configuration author's mistake and are
    /// rejected instead of being silently dropped.
    pub fn from_bindings(bindings: &HashMap<String, String>) -> Result<Self, GameError> {
        let mut table = HashMap::new();
        for (key, intent_name) in bindings {
            let intent: Intent = intent_name.parse()?;
            table.insert(key.to_lowercase(), intent);
        }
        Ok(Self { bindings: table })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Self::from_bindings(&config.key_bindings)
    }

    /// Unmapped keys are everyday noise and resolve to nothing.
    pub fn resolve(&self, key: &str) -> Option<Intent> {
        self.bindings.get(&key.to_lowercase()).copied()
    }
}
