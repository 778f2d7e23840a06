use serde::{Deserialize, Serialize};

/// One legal value of a choice parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChoiceValue {
    pub value: String,
    pub description: Option<String>,
}

impl ChoiceValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    pub fn described(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: Some(description.into()),
        }
    }
}

/// A parameter declared by a template.
///
/// A parameter without `choices` is free-form: any supplied value is accepted
/// during resolution and validated by the instantiation layer instead. A
/// choice parameter restricts the value to its enumerated set, with
/// case-insensitive prefix shorthand resolved at match time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateParameter {
    pub name: String,

    #[serde(default)]
    pub default: Option<String>,

    #[serde(default)]
    pub choices: Option<Vec<ChoiceValue>>,
}

impl TemplateParameter {
    pub fn free_form(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            choices: None,
        }
    }

    pub fn choice(
        name: impl Into<String>,
        choices: impl IntoIterator<Item = ChoiceValue>,
    ) -> Self {
        Self {
            name: name.into(),
            default: None,
            choices: Some(choices.into_iter().collect()),
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn is_choice(&self) -> bool {
        self.choices.is_some()
    }
}
