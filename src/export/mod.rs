//! Export of the merged result table.

mod csv;

pub use self::csv::{export_csv, output_path, write_csv};
