//! Installed module snapshot.
//!
//! Built once at startup and never mutated. Module set changes require a
//! restart.

use std::sync::Arc;

use crate::ports::TextModule;

/// Ordered snapshot of installed modules, keyed by module identifier.
#[derive(Clone, Default)]
pub struct ModuleRegistry {
    modules: Vec<(String, Arc<dyn TextModule>)>,
}

impl ModuleRegistry {
    /// Enumeration order is the order of `modules`. Later duplicates of an
    /// identifier are dropped.
    pub fn new(modules: Vec<Arc<dyn TextModule>>) -> Self {
        let mut entries: Vec<(String, Arc<dyn TextModule>)> = Vec::with_capacity(modules.len());
        for module in modules {
            let name = module.name().to_owned();
            if entries.iter().any(|(existing, _)| *existing == name) {
                tracing::warn!(module = %name, "Duplicate module identifier ignored");
                continue;
            }
            entries.push((name, module));
        }
        Self { modules: entries }
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.modules.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// The module every query runs against: the first one enumerated.
    pub fn default_module(&self) -> Option<Arc<dyn TextModule>> {
        self.modules.first().map(|(_, module)| Arc::clone(module))
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.names())
            .finish()
    }
}
