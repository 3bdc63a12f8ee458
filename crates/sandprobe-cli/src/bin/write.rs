use std::path::Path;

use sandprobe_cli::run_write_probe;

const TARGET_PATH: &str = "/tmp/testWrite.txt";

fn main() {
    run_write_probe(Path::new(TARGET_PATH)).print();
}
