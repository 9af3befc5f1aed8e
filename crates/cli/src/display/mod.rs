pub mod formatter;

pub use formatter::{GenerationSummary, format_diagnostic, print_summary};
