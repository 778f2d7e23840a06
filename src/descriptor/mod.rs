pub mod parameter;
pub mod schema;

pub use parameter::{ChoiceValue, TemplateParameter};
pub use schema::{TemplateDescriptor, TemplateTags};
