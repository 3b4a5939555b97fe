//! File system access for document scripts and rendered output

use crate::domain::Script;
use crate::error::{Result, TagstackError};
use crate::infrastructure::config::CONFIG_FILE;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension given to rendered output in batch mode
pub const OUTPUT_EXTENSION: &str = "html";

/// Abstract source of scripts and sink for rendered text
pub trait ScriptRepository {
    /// Load and parse a script file
    fn load_script(&self, path: &Path) -> Result<Script>;

    /// Write rendered text, creating parent directories as needed
    fn write_output(&self, path: &Path, contents: &str) -> Result<()>;

    /// Every script file below `dir`, sorted, leaving out `exclude` (the
    /// active config file) wherever it sits and whatever it is named
    fn list_scripts(&self, dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>>;
}

/// File system implementation of ScriptRepository
#[derive(Debug, Clone, Default)]
pub struct FileSystemRepository;

impl FileSystemRepository {
    pub fn new() -> Self {
        FileSystemRepository
    }

    /// Output path used for `script` in batch mode (`page.toml` -> `page.html`)
    pub fn output_path_for(script: &Path) -> PathBuf {
        script.with_extension(OUTPUT_EXTENSION)
    }

    fn is_script(path: &Path) -> bool {
        let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
        let is_config = path.file_name().and_then(|n| n.to_str()) == Some(CONFIG_FILE);
        is_toml && !is_config
    }
}

impl ScriptRepository for FileSystemRepository {
    fn load_script(&self, path: &Path) -> Result<Script> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagstackError::InputNotFound(path.to_path_buf())
            } else {
                TagstackError::Io(e)
            }
        })?;

        Script::parse(&contents).map_err(|e| match e {
            TagstackError::Script(msg) => {
                TagstackError::Script(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    fn write_output(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, contents).map_err(TagstackError::Io)
    }

    fn list_scripts(&self, dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(TagstackError::InputNotFound(dir.to_path_buf()));
        }

        let excluded = exclude.and_then(|path| fs::canonicalize(path).ok());

        let walker = WalkDir::new(dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut scripts = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() || !Self::is_script(entry.path()) {
                continue;
            }
            if excluded.is_some() && fs::canonicalize(entry.path()).ok() == excluded {
                tracing::debug!(path = %entry.path().display(), "skipping active config");
                continue;
            }
            scripts.push(entry.into_path());
        }

        scripts.sort();
        Ok(scripts)
    }
}
