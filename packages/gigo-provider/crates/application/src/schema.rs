use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Int,
}

/// A single value rendered for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Int(i64),
    String(String),
}

impl AttributeValue {
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            AttributeValue::Int(_) => AttributeType::Int,
            AttributeValue::String(_) => AttributeType::String,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            AttributeValue::Int(_) => None,
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Int(i64::from(value))
    }
}

pub type AttributeMap = BTreeMap<String, AttributeValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSchema {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: AttributeType,
    pub computed: bool,
    pub description: &'static str,
}

impl AttributeSchema {
    /// A read-only attribute filled in by the provider.
    pub const fn computed(name: &'static str, ty: AttributeType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            computed: true,
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSourceSchema {
    pub name: String,
    pub description: &'static str,
    pub attributes: Vec<AttributeSchema>,
}

impl DataSourceSchema {
    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Checks that `attributes` holds exactly the declared attributes with their declared types.
    pub fn validate(&self, attributes: &AttributeMap) -> Result<(), ProviderError> {
        let mismatch = |attribute: &str| ProviderError::SchemaMismatch {
            data_source: self.name.clone(),
            attribute: attribute.to_string(),
        };

        for (name, value) in attributes {
            match self.attribute(name) {
                Some(attr) if attr.ty == value.attribute_type() => {}
                _ => return Err(mismatch(name)),
            }
        }

        match self
            .attributes
            .iter()
            .find(|attr| !attributes.contains_key(attr.name))
        {
            Some(missing) => Err(mismatch(missing.name)),
            None => Ok(()),
        }
    }
}
