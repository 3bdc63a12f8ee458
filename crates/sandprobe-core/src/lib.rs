mod error;
mod fs_probes;
mod layout;
mod memory;
mod report;
mod script;

pub use error::ProbeError;
pub use fs_probes::{delete_file, read_file, write_file};
pub use layout::ProbeLayout;
pub use memory::reserve_memory;
pub use report::{ProbeKind, ProbeOutcome, ProbeReport};
pub use script::{run_script, ScriptRun};
