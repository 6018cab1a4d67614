pub mod parser;

pub use parser::{ensure_supported, read_sheet_file, SUPPORTED_EXTENSIONS};
