use sandprobe_cli::run_all_probes;
use sandprobe_core::{ProbeLayout, ProbeReport};

const PROBE_ROOT: &str = "/tmp";

fn main() {
    let layout = ProbeLayout::new(PROBE_ROOT);
    if let Err(err) = layout.provision() {
        eprintln!("{err:#}");
    }
    let reports: Vec<ProbeReport> = run_all_probes(&layout)
        .into_iter()
        .map(|run| run.report)
        .collect();
    match serde_json::to_string(&reports) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("cannot serialize probe reports: {err}"),
    }
}
