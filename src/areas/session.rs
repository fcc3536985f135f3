use crate::areas::workspace::Workspace;
use crate::artifacts::diff::algorithm::{Algorithm, DiffOptions};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Everything a command needs: where files live, where output goes and the
/// diff strategy, which keeps its scratch buffers across diffs.
pub struct Session {
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
    algorithm: RefCell<Algorithm>,
    options: DiffOptions,
}

impl Session {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        options: DiffOptions,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Session {
            workspace: Workspace::new(path.into_boxed_path()),
            writer: RefCell::new(writer),
            algorithm: RefCell::new(options.into()),
            options,
        })
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn algorithm(&'_ self) -> RefMut<'_, Algorithm> {
        self.algorithm.borrow_mut()
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }
}
