pub mod a001_template;
