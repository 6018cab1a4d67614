pub mod create;
pub mod designer;
pub mod element_view;
pub mod list;
pub mod usage;
