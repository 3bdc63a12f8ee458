use std::path::Path;

use sandprobe_core::{
    delete_file, read_file, reserve_memory, run_script, write_file, ProbeKind, ProbeLayout,
    ProbeOutcome, ProbeReport,
};

const WRITE_PROBE_CONTENTS: &str = "write probe payload\n";
const MEMORY_PROBE_BYTES: usize = 1024 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRun {
    pub report: ProbeReport,
    pub line: String,
}

impl ProbeRun {
    pub fn print(&self) {
        match self.report.outcome {
            ProbeOutcome::Succeeded => println!("{}", self.line),
            ProbeOutcome::Failed => eprintln!("{}", self.line),
        }
    }
}

pub fn run_delete_probe(target: &Path) -> ProbeRun {
    match delete_file(target) {
        Ok(()) => ProbeRun {
            report: ProbeReport::succeeded(ProbeKind::Delete),
            line: format!("deleted {}", target.display()),
        },
        Err(err) => ProbeRun {
            report: ProbeReport::failed(ProbeKind::Delete, &err),
            line: format!("cannot delete {}: {err}", target.display()),
        },
    }
}

pub fn run_read_probe(target: &Path) -> ProbeRun {
    match read_file(target) {
        Ok(contents) => ProbeRun {
            report: ProbeReport::succeeded_with_detail(
                ProbeKind::Read,
                format!("{} bytes", contents.len()),
            ),
            line: format!("read {} bytes from {}", contents.len(), target.display()),
        },
        Err(err) => ProbeRun {
            report: ProbeReport::failed(ProbeKind::Read, &err),
            line: format!("cannot read {}: {err}", target.display()),
        },
    }
}

pub fn run_write_probe(target: &Path) -> ProbeRun {
    match write_file(target, WRITE_PROBE_CONTENTS) {
        Ok(()) => ProbeRun {
            report: ProbeReport::succeeded(ProbeKind::Write),
            line: format!("wrote {}", target.display()),
        },
        Err(err) => ProbeRun {
            report: ProbeReport::failed(ProbeKind::Write, &err),
            line: format!("cannot write {}: {err}", target.display()),
        },
    }
}

pub fn run_execute_probe(script: &Path) -> ProbeRun {
    match run_script(script) {
        Ok(run) if run.succeeded() => ProbeRun {
            report: if run.stdout.is_empty() {
                ProbeReport::succeeded(ProbeKind::Execute)
            } else {
                ProbeReport::succeeded_with_detail(ProbeKind::Execute, run.stdout)
            },
            line: format!("executed {}", script.display()),
        },
        Ok(run) => {
            let detail = match run.exit_code {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            };
            ProbeRun {
                line: format!("{} failed: {detail}", script.display()),
                report: ProbeReport::failed_with_detail(ProbeKind::Execute, detail),
            }
        }
        Err(err) => ProbeRun {
            report: ProbeReport::failed(ProbeKind::Execute, &err),
            line: format!("cannot execute {}: {err}", script.display()),
        },
    }
}

pub fn run_memory_probe() -> ProbeRun {
    match reserve_memory(MEMORY_PROBE_BYTES) {
        Ok(capacity) => ProbeRun {
            report: ProbeReport::succeeded_with_detail(
                ProbeKind::Memory,
                format!("{capacity} bytes reserved"),
            ),
            line: format!("reserved {capacity} bytes"),
        },
        Err(err) => ProbeRun {
            report: ProbeReport::failed(ProbeKind::Memory, &err),
            line: format!("cannot reserve {MEMORY_PROBE_BYTES} bytes: {err}"),
        },
    }
}

pub fn run_all_probes(layout: &ProbeLayout) -> Vec<ProbeRun> {
    vec![
        run_delete_probe(&layout.delete_target()),
        run_read_probe(&layout.read_target()),
        run_write_probe(&layout.write_target()),
        run_execute_probe(&layout.script_path()),
        run_memory_probe(),
    ]
}
