use std::fmt;
use std::path::{MAIN_SEPARATOR, PathBuf};

/// Entry module of the `mboot` binary.
pub const ENTRY_MAIN: &str = "main";
/// Entry module of the `mboot-internal` binary.
pub const ENTRY_INTERNAL: &str = "__main";

/// Templates tried in order when resolving a bare module name.
pub const DEFAULT_SEARCH_PATH: &str = "./?.js;./?.mjs;./?/index.js";

/// Upper bound on the interpreter stack, in bytes.
pub const DEFAULT_MAX_STACK_SIZE: usize = 256 * 1024 * 1024;

pub const ENV_ENTRY: &str = "MBOOT_ENTRY";
pub const ENV_PATH: &str = "MBOOT_PATH";
pub const ENV_TRACE: &str = "MBOOT_TRACE";

/// Ordered list of `?` templates, in the manner of a Lua `package.path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    templates: Vec<String>,
}

impl SearchPath {
    /// Parse a `;`-separated template list. `;;` splices in the default path.
    pub fn parse(spec: &str) -> Self {
        let expanded = spec.replace(";;", &format!(";{DEFAULT_SEARCH_PATH};"));
        let templates = expanded
            .split(';')
            .map(str::trim)
            .filter(|template| !template.is_empty())
            .map(str::to_string)
            .collect();
        Self { templates }
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Candidate files for `name`, with `.` in the name mapped to the path separator.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let stem = name.replace('.', &MAIN_SEPARATOR.to_string());
        self.templates
            .iter()
            .map(|template| PathBuf::from(template.replace('?', &stem)))
            .collect()
    }
}

impl Default for SearchPath {
    fn default() -> Self {
        Self::parse(DEFAULT_SEARCH_PATH)
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.templates.join(";"))
    }
}

#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub entry_module: String,
    pub search_path: SearchPath,
    pub max_stack_size: usize,
    /// Print the exception stack after the error line.
    pub trace: bool,
}

impl LaunchConfig {
    pub fn new(entry_module: impl Into<String>) -> Self {
        Self {
            entry_module: entry_module.into(),
            search_path: SearchPath::default(),
            max_stack_size: DEFAULT_MAX_STACK_SIZE,
            trace: false,
        }
    }

    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    pub fn with_max_stack_size(mut self, max_stack_size: usize) -> Self {
        self.max_stack_size = max_stack_size;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Layer `MBOOT_ENTRY`, `MBOOT_PATH` and `MBOOT_TRACE` over this config.
    pub fn from_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(entry) = lookup(ENV_ENTRY).filter(|entry| !entry.is_empty()) {
            self.entry_module = entry;
        }
        if let Some(path) = lookup(ENV_PATH) {
            self.search_path = SearchPath::parse(&path);
        }
        if let Some(trace) = lookup(ENV_TRACE) {
            self.trace = !trace.is_empty() && trace != "0";
        }
        self
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self::new(ENTRY_MAIN)
    }
}
