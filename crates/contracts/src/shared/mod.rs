pub mod calculation;
pub mod config;
pub mod form_schema;
pub mod macro_converter;
pub mod placeholders;
pub mod preview;
pub mod storage;
pub mod tabular;
pub mod value;
