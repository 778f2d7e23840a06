use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::descriptor::TemplateDescriptor;
use crate::error::{Result, TenonError};

/// An immutable, ordered snapshot of registered templates.
///
/// Validation happens once at construction so the resolution path stays
/// total: a `Corpus` that exists is a corpus every request can be resolved
/// against. Callers are responsible for not mutating the snapshot while a
/// resolution call reads it; `Corpus` itself exposes no mutation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "Vec<TemplateDescriptor>")]
#[serde(into = "Vec<TemplateDescriptor>")]
pub struct Corpus {
    templates: Vec<TemplateDescriptor>,
}

impl Corpus {
    pub fn new(templates: Vec<TemplateDescriptor>) -> Result<Self> {
        let mut identities = HashSet::new();
        for template in &templates {
            validate_descriptor(template)?;
            if !identities.insert(template.identity.to_lowercase()) {
                return Err(TenonError::DuplicateIdentity {
                    identity: template.identity.clone(),
                });
            }
        }
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateDescriptor> {
        self.templates.iter()
    }
}

impl TryFrom<Vec<TemplateDescriptor>> for Corpus {
    type Error = TenonError;

    fn try_from(templates: Vec<TemplateDescriptor>) -> Result<Self> {
        Self::new(templates)
    }
}

impl From<Corpus> for Vec<TemplateDescriptor> {
    fn from(corpus: Corpus) -> Self {
        corpus.templates
    }
}

fn validate_descriptor(template: &TemplateDescriptor) -> Result<()> {
    if template.identity.is_empty() {
        return Err(TenonError::EmptyIdentity {
            name: template.name.clone(),
        });
    }
    if template.name.is_empty() {
        return Err(TenonError::EmptyName {
            identity: template.identity.clone(),
        });
    }

    let mut parameter_names = HashSet::new();
    for parameter in &template.parameters {
        if !parameter_names.insert(parameter.name.to_lowercase()) {
            return Err(TenonError::DuplicateParameter {
                identity: template.identity.clone(),
                parameter: parameter.name.clone(),
            });
        }
        if let Some(choices) = &parameter.choices {
            if choices.is_empty() {
                return Err(TenonError::EmptyChoiceSet {
                    identity: template.identity.clone(),
                    parameter: parameter.name.clone(),
                });
            }
        }
    }

    Ok(())
}
