pub mod clipboard;
pub mod excel_importer;
pub mod export;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
pub mod print;
pub mod storage;
