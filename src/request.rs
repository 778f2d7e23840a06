use serde::{Deserialize, Serialize};

/// What the user asked for: an optional name fragment, optional per-dimension
/// filter values, and raw parameter name/value pairs.
///
/// Parameter names are matched case-insensitively; values are carried as raw
/// strings with no coercion. An empty-string criterion is treated the same as
/// an absent one.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolutionRequest {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    language: Option<String>,

    #[serde(default)]
    context: Option<String>,

    #[serde(default)]
    baseline: Option<String>,

    #[serde(default)]
    classification: Option<String>,

    #[serde(default)]
    author: Option<String>,

    #[serde(default)]
    parameters: Vec<(String, String)>,
}

impl ResolutionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = Some(baseline.into());
        self
    }

    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Add a parameter name/value pair, replacing any earlier pair whose name
    /// matches case-insensitively.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.parameters
            .retain(|(existing, _)| existing.to_lowercase() != name.to_lowercase());
        self.parameters.push((name, value.into()));
        self
    }

    pub fn name(&self) -> Option<&str> {
        supplied(&self.name)
    }

    pub fn language(&self) -> Option<&str> {
        supplied(&self.language)
    }

    pub fn context(&self) -> Option<&str> {
        supplied(&self.context)
    }

    pub fn baseline(&self) -> Option<&str> {
        supplied(&self.baseline)
    }

    pub fn classification(&self) -> Option<&str> {
        supplied(&self.classification)
    }

    pub fn author(&self) -> Option<&str> {
        supplied(&self.author)
    }

    /// Supplied parameters in insertion order, with raw names preserved.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

fn supplied(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}
