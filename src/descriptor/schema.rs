use serde::{Deserialize, Serialize};

use super::parameter::TemplateParameter;

/// Declarative tags on a template, one typed field per matchable dimension.
///
/// Classifications stay an open string list; their domain is genuinely
/// unbounded (e.g. "Web", "Console", "Cloud").
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TemplateTags {
    pub language: Option<String>,
    pub context: Option<String>,
    pub author: Option<String>,

    #[serde(default)]
    pub baselines: Vec<String>,

    #[serde(default)]
    pub classifications: Vec<String>,
}

/// Everything the resolution engine knows about one registered template.
///
/// Descriptors are produced by an external discovery subsystem and are
/// read-only here. Templates sharing a non-empty `group_identity` are
/// variants of the same logical template (typically one per language);
/// `precedence` picks the default variant among otherwise-tied group members.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateDescriptor {
    pub identity: String,

    #[serde(default)]
    pub group_identity: Option<String>,

    pub name: String,

    #[serde(default)]
    pub short_names: Vec<String>,

    #[serde(default)]
    pub precedence: i32,

    #[serde(default)]
    pub parameters: Vec<TemplateParameter>,

    #[serde(default)]
    pub tags: TemplateTags,
}

impl TemplateDescriptor {
    pub fn new(identity: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            group_identity: None,
            name: name.into(),
            short_names: Vec::new(),
            precedence: 0,
            parameters: Vec::new(),
            tags: TemplateTags::default(),
        }
    }

    pub fn with_group_identity(mut self, group: impl Into<String>) -> Self {
        self.group_identity = Some(group.into());
        self
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_names.push(short_name.into());
        self
    }

    pub fn with_precedence(mut self, precedence: i32) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn with_parameter(mut self, parameter: TemplateParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.tags.language = Some(language.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.tags.context = Some(context.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.tags.author = Some(author.into());
        self
    }

    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.tags.baselines.push(baseline.into());
        self
    }

    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.tags.classifications.push(classification.into());
        self
    }

    /// Case-insensitive lookup of a declared parameter.
    pub fn find_parameter(&self, name: &str) -> Option<&TemplateParameter> {
        self.parameters
            .iter()
            .find(|p| p.name.to_lowercase() == name.to_lowercase())
    }
}
