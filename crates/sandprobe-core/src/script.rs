use std::path::Path;
use std::process::Command;

use crate::error::ProbeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRun {
    pub exit_code: Option<i32>,
    pub stdout: String,
}

impl ScriptRun {
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub fn run_script(script: &Path) -> Result<ScriptRun, ProbeError> {
    let mut command = Command::new(script);
    if let Some(parent) = script.parent() {
        if !parent.as_os_str().is_empty() {
            command.current_dir(parent);
        }
    }

    let output = command.output().map_err(|source| ProbeError::Launch {
        command: script.to_path_buf(),
        source,
    })?;

    Ok(ScriptRun {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string(),
    })
}
