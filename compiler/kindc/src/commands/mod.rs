//! Command implementations.
//!
//! Each command returns whether it succeeded; the binary maps failure to
//! exit status 1.

mod dump;
mod explain;
mod extract;
mod generate;
mod options;
mod report;

pub use dump::{dump_archive, format_archive};
pub use explain::explain_error;
pub use extract::run_extract;
pub use generate::{load_archives, run_generate};
pub use options::{
    parse_extract_args, parse_generate_args, ExtractOptions, GenerateOptions, OutputFormat,
    OutputOptions,
};
pub use report::emit_diagnostics;
