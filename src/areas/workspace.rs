use crate::artifacts::tokens::TokenMode;
use anyhow::Context;
use std::path::Path;

/// The directory relative file arguments are resolved against.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        Ok(content)
    }

    pub fn read_tokens(&self, file_path: &Path, mode: TokenMode) -> anyhow::Result<Vec<String>> {
        let content = self.read_file(file_path)?;
        Ok(mode.split(&content))
    }
}
