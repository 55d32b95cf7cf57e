use std::path::PathBuf;

/// Default path of the runtime crate in generated code.
pub const DEFAULT_RUNTIME_PATH: &str = "::kind_rt";

/// Settings for one generation invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Generated-sources root; each tag gets a subdirectory.
    pub output_root: PathBuf,
    /// Path generated code uses to reach the runtime crate.
    pub runtime_path: String,
    /// Remove files in the tag directories that this invocation did not
    /// produce.
    pub prune_stale: bool,
}

impl GeneratorConfig {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        GeneratorConfig {
            output_root: output_root.into(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_owned(),
            prune_stale: false,
        }
    }

    #[must_use]
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    #[must_use]
    pub fn with_prune_stale(mut self, prune: bool) -> Self {
        self.prune_stale = prune;
        self
    }
}
