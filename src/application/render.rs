//! Render scripts use case

use crate::domain::{CloseMode, Script, TagCatalog};
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, ScriptRepository};
use std::path::{Path, PathBuf};

/// Service for rendering document scripts to markup
pub struct RenderService {
    repository: FileSystemRepository,
    catalog: TagCatalog,
    config_mode: CloseMode,
    mode_override: Option<CloseMode>,
    config_path: Option<PathBuf>,
}

impl RenderService {
    /// Create a render service from the active config
    pub fn new(repository: FileSystemRepository, config: &Config) -> Result<Self> {
        Ok(RenderService {
            repository,
            catalog: config.catalog()?,
            config_mode: config.mode,
            mode_override: None,
            config_path: None,
        })
    }

    /// Force a close mode, ignoring the script's and the config's
    pub fn with_mode(mut self, mode: Option<CloseMode>) -> Self {
        self.mode_override = mode;
        self
    }

    /// Path of the loaded config file, never rendered in batch mode
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Mode a script starts in: override, then script, then config
    pub fn resolve_mode(&self, script: &Script) -> CloseMode {
        self.mode_override
            .or(script.mode)
            .unwrap_or(self.config_mode)
    }

    pub fn render_script(&self, script: &Script) -> Result<String> {
        let mode = self.resolve_mode(script);
        tracing::debug!(%mode, steps = script.steps.len(), "rendering script");
        script.execute(&self.catalog, mode)
    }

    pub fn render_str(&self, contents: &str) -> Result<String> {
        let script = Script::parse(contents)?;
        self.render_script(&script)
    }

    pub fn render_file(&self, input: &Path) -> Result<String> {
        let script = self.repository.load_script(input)?;
        self.render_script(&script)
    }

    /// Render `input` and write the result to `output`
    pub fn render_to_file(&self, input: &Path, output: &Path) -> Result<()> {
        let rendered = self.render_file(input)?;
        self.repository.write_output(output, &rendered)?;
        tracing::debug!(input = %input.display(), output = %output.display(), "wrote output");
        Ok(())
    }

    /// Render every script below `dir` next to its source.
    ///
    /// Stops at the first script that fails. Returns the written paths.
    pub fn render_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let scripts = self
            .repository
            .list_scripts(dir, self.config_path.as_deref())?;
        if scripts.is_empty() {
            tracing::warn!(dir = %dir.display(), "no scripts found");
        }

        let mut written = Vec::with_capacity(scripts.len());
        for script in scripts {
            let output = FileSystemRepository::output_path_for(&script);
            if let Err(e) = self.render_to_file(&script, &output) {
                tracing::warn!(script = %script.display(), error = %e, "render failed");
                return Err(e);
            }
            written.push(output);
        }

        Ok(written)
    }
}
