use std::io::{stdout, IsTerminal};

use sandprobe_cli::{outcome_status, render_status_line, resolve_output_style, run_all_probes};
use sandprobe_core::ProbeLayout;

const PROBE_ROOT: &str = "/tmp";

fn main() {
    let style = resolve_output_style(stdout().is_terminal());
    let layout = ProbeLayout::new(PROBE_ROOT);
    if let Err(err) = layout.provision() {
        eprintln!("{err:#}");
    }
    for run in run_all_probes(&layout) {
        let message = format!("{}: {}", run.report.probe.as_str(), run.line);
        println!(
            "{}",
            render_status_line(style, outcome_status(run.report.outcome), &message)
        );
    }
}
