use std::path::Path;

use sandprobe_cli::run_execute_probe;

const SCRIPT_PATH: &str = "/tmp/testExecute.sh";

fn main() {
    run_execute_probe(Path::new(SCRIPT_PATH)).print();
}
