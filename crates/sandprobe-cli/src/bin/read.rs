use std::path::Path;

use sandprobe_cli::run_read_probe;

const TARGET_PATH: &str = "/tmp/testRead.txt";

fn main() {
    run_read_probe(Path::new(TARGET_PATH)).print();
}
