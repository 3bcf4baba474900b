use crate::config::SearchPath;
use rquickjs::loader::{Loader, Resolver};
use rquickjs::{Ctx, Error, Module, Result};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Resolves module names against a [`SearchPath`].
///
/// `./` and `../` names are relative to the importing module, absolute
/// paths are taken as-is, and every other name is tried against the
/// search path templates in order.
pub struct SearchPathResolver {
    search_path: SearchPath,
}

impl SearchPathResolver {
    pub fn new(search_path: SearchPath) -> Self {
        Self { search_path }
    }

    fn candidates(&self, base: &str, name: &str) -> Vec<PathBuf> {
        if name.starts_with("./") || name.starts_with("../") {
            let base_path = Path::new(base);
            let base_dir = if base_path.is_file() {
                base_path.parent().unwrap_or(Path::new("."))
            } else {
                base_path
            };
            vec![base_dir.join(name)]
        } else if Path::new(name).is_absolute() {
            vec![PathBuf::from(name)]
        } else {
            self.search_path.candidates(name)
        }
    }
}

impl Resolver for SearchPathResolver {
    fn resolve(&mut self, _ctx: &Ctx, base: &str, name: &str) -> Result<String> {
        let candidates = self.candidates(base, name);

        if let Some(found) = candidates.iter().find(|path| path.is_file()) {
            // Canonical names keep one module instance per file.
            let canonical = found.canonicalize().unwrap_or_else(|_| found.clone());
            return Ok(canonical.to_string_lossy().into_owned());
        }

        let mut message = format!("module '{name}' not found:");
        for path in &candidates {
            let _ = write!(message, "\n\tno file '{}'", path.display());
        }
        Err(Error::new_resolving_message(base, name, message))
    }
}

/// Loads resolved module files as JavaScript source.
#[derive(Default)]
pub struct FileLoader;

impl Loader for FileLoader {
    fn load<'js>(&mut self, ctx: &Ctx<'js>, name: &str) -> Result<Module<'js>> {
        let source = std::fs::read_to_string(name)
            .map_err(|e| Error::new_loading_message(name, e.to_string()))?;

        Module::declare(ctx.clone(), name, source)
    }
}
