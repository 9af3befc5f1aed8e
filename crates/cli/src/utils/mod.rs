pub mod file;

pub use file::{collect_inputs, source_file_name, unique_output_key, write_source};
