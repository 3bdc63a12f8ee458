use sandprobe_cli::run_memory_probe;

fn main() {
    run_memory_probe().print();
}
