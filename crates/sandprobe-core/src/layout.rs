use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const DELETE_FIXTURE: &str = "delete probe fixture\n";
const READ_FIXTURE: &str = "read probe fixture\n";
const SCRIPT_FIXTURE: &str = "#!/bin/sh\necho probe script ran\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeLayout {
    root: PathBuf,
}

impl ProbeLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn delete_target(&self) -> PathBuf {
        self.root.join("testDelete.txt")
    }

    pub fn read_target(&self) -> PathBuf {
        self.root.join("testRead.txt")
    }

    pub fn write_target(&self) -> PathBuf {
        self.root.join("testWrite.txt")
    }

    pub fn script_path(&self) -> PathBuf {
        self.root.join("testExecute.sh")
    }

    pub fn provision(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create {}", self.root.display()))?;

        let delete_target = self.delete_target();
        fs::write(&delete_target, DELETE_FIXTURE)
            .with_context(|| format!("failed to write {}", delete_target.display()))?;

        let read_target = self.read_target();
        fs::write(&read_target, READ_FIXTURE)
            .with_context(|| format!("failed to write {}", read_target.display()))?;

        let script = self.script_path();
        fs::write(&script, SCRIPT_FIXTURE)
            .with_context(|| format!("failed to write {}", script.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
                .with_context(|| format!("failed to mark {} executable", script.display()))?;
        }

        Ok(())
    }
}
