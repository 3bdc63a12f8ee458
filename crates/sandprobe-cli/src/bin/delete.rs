use std::path::Path;

use sandprobe_cli::run_delete_probe;

const TARGET_PATH: &str = "/tmp/testDelete.txt";

fn main() {
    run_delete_probe(Path::new(TARGET_PATH)).print();
}
