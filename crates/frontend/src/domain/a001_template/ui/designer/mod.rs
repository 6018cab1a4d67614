pub mod canvas;
pub mod code_views;
pub mod import_dialog;
pub mod macro_dialog;
pub mod properties;
pub mod ribbon;
pub mod samples_dialog;
pub mod view;
pub mod view_model;

pub use view::TemplateDesigner;
