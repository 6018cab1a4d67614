pub mod a001_template;
pub mod common;
