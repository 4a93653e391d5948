//! Library discovery: scan `<library>/mods.d` once at startup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use scripture_core::{ModuleRegistry, TextModule};

use crate::canon::Canon;
use crate::error::StoreError;
use crate::module::YamlModule;
use crate::module_file::ModuleFile;

/// Directory under the library root holding module files.
pub const MODULES_DIR: &str = "mods.d";

/// Immutable snapshot of an installed library.
pub struct Library {
    path: PathBuf,
    registry: Arc<ModuleRegistry>,
    canon: Arc<Canon>,
}

impl Library {
    /// Load every `*.yaml` / `*.yml` module under `<path>/mods.d`.
    ///
    /// A missing module directory is an empty library, not an error. A file
    /// that fails to parse or validate aborts the load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let dir = path.join(MODULES_DIR);

        if !dir.is_dir() {
            tracing::warn!(path = %dir.display(), "Module directory not found; library is empty");
            return Ok(Self::from_modules(path, Vec::new()));
        }

        let mut files = Vec::new();
        let entries = std::fs::read_dir(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
            let file = entry.path();
            let is_yaml = file
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if is_yaml && file.is_file() {
                tracing::debug!(file = %file.display(), "Loading module file");
                files.push(ModuleFile::from_file(&file)?);
            }
        }

        Ok(Self::from_modules(path, files))
    }

    /// Build a library from already-parsed module files.
    pub fn from_modules(path: PathBuf, mut files: Vec<ModuleFile>) -> Self {
        files.sort_by(|a, b| a.name.cmp(&b.name));

        let canon = files
            .first()
            .map(|first| Canon::from_books(&first.books))
            .unwrap_or_default();

        let modules: Vec<Arc<dyn TextModule>> = files
            .into_iter()
            .map(|file| {
                let module = YamlModule::new(file);
                tracing::info!(
                    module = module.name(),
                    description = module.description().unwrap_or(""),
                    books = module.books().count(),
                    "Module installed"
                );
                Arc::new(module) as Arc<dyn TextModule>
            })
            .collect();

        let registry = ModuleRegistry::new(modules);
        tracing::info!(
            path = %path.display(),
            modules = ?registry.names(),
            "Library loaded"
        );

        Self {
            path,
            registry: Arc::new(registry),
            canon: Arc::new(canon),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn registry(&self) -> Arc<ModuleRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn canon(&self) -> Arc<Canon> {
        Arc::clone(&self.canon)
    }
}
