pub mod aggregate;
pub mod editor;
pub mod element;
pub mod palette;
pub mod repository;
pub mod samples;

pub use aggregate::{
    NewTemplate, Scripts, Template, TemplateCategory, TemplateId, TemplatePatch,
    DEFAULT_TEMPLATE_NAME,
};
pub use editor::{EditorState, ElementPatch};
pub use element::{
    ChartType, Element, ElementContent, ElementId, ElementKind, Position, Size,
};
pub use repository::TemplateRepository;
pub use samples::SampleKind;
