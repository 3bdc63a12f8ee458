mod console;
mod flows;

pub use console::{outcome_status, render_status_line, resolve_output_style, OutputStyle};
pub use flows::{
    run_all_probes, run_delete_probe, run_execute_probe, run_memory_probe, run_read_probe,
    run_write_probe, ProbeRun,
};
