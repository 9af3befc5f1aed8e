use serde::{Deserialize, Serialize};
use std::fmt;

use super::member::{Accessibility, MemberSymbol};
use super::type_ref::{TypeRef, join_metadata_name};
use crate::impl_case_insensitive_deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl_case_insensitive_deserialize!(
    TypeKind,
    Class => "class",
    Struct => "struct",
    Interface => "interface",
    Enum => "enum",
    Delegate => "delegate",
);

/// A type declared in the compilation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSymbol {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub containing_types: Vec<String>,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub base_type: Option<TypeRef>,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterSymbol>,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    #[serde(default)]
    pub members: Vec<MemberSymbol>,
    /// Declaring syntax; absent when the host could not map the symbol back to source
    #[serde(default)]
    pub syntax: Option<SyntaxInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntaxInfo {
    /// Raw trivia (comments, whitespace) preceding the declaration
    #[serde(default)]
    pub leading_trivia: String,
    #[serde(default)]
    pub file: Option<String>,
}

impl TypeSymbol {
    pub fn metadata_name(&self) -> String {
        join_metadata_name(&self.namespace, &self.containing_types, &self.name)
    }

    /// Cref spelling of the type, e.g. `Shop.Repository{T}`
    pub fn cref_name(&self) -> String {
        let base = self.metadata_name();
        if self.type_parameters.is_empty() {
            base
        } else {
            let names: Vec<&str> = self.type_parameters.iter().map(|p| p.name.as_str()).collect();
            format!("{}{{{}}}", base, names.join(", "))
        }
    }
}

/// A generic type parameter with its constraints in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParameterSymbol {
    pub name: String,
    #[serde(default)]
    pub constraints: Vec<ConstraintSymbol>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintSymbol {
    Class {
        #[serde(default)]
        nullable: bool,
    },
    Struct,
    Unmanaged,
    #[serde(rename = "notnull")]
    NotNull,
    New,
    Type {
        #[serde(rename = "type")]
        ty: TypeRef,
    },
}

/// An attribute application with its constructor arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeData {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<AttributeArgument>,
}

/// Positional when `name` is absent, otherwise a named argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeArgument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<ConstantValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Text(String),
}

impl ConstantValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstantValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConstantValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Bool(value) => write!(f, "{value}"),
            ConstantValue::Integer(value) => write!(f, "{value}"),
            ConstantValue::Unsigned(value) => write!(f, "{value}"),
            ConstantValue::Text(value) => f.write_str(value),
        }
    }
}

impl AttributeData {
    /// Attribute name without namespace qualification or `Attribute` suffix
    pub fn short_name(&self) -> &str {
        let unqualified = self.name.rsplit('.').next().unwrap_or(&self.name);
        let unqualified = unqualified.strip_prefix("global::").unwrap_or(unqualified);
        match unqualified.strip_suffix("Attribute") {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => unqualified,
        }
    }

    pub fn matches(&self, configured_name: &str) -> bool {
        let configured = configured_name
            .strip_suffix("Attribute")
            .filter(|s| !s.is_empty())
            .unwrap_or(configured_name);
        self.short_name() == configured
    }

    /// Argument bound to the constructor parameter `name` at `position`
    pub fn argument(&self, name: &str, position: usize) -> Option<&ConstantValue> {
        if let Some(named) = self
            .arguments
            .iter()
            .find(|arg| arg.name.as_deref() == Some(name))
        {
            return named.value.as_ref();
        }
        self.arguments
            .iter()
            .filter(|arg| arg.name.is_none())
            .nth(position)
            .and_then(|arg| arg.value.as_ref())
    }
}

/// Whether any attribute in `attributes` is the one configured as `name`
pub fn has_attribute(attributes: &[AttributeData], name: &str) -> bool {
    attributes.iter().any(|attr| attr.matches(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute(name: &str, arguments: Vec<AttributeArgument>) -> AttributeData {
        AttributeData {
            name: name.to_string(),
            arguments,
        }
    }

    #[test]
    fn test_attribute_name_matching() {
        let plain = attribute("GenerateAutomaticInterface", vec![]);
        let suffixed = attribute("AutomaticInterface.GenerateAutomaticInterfaceAttribute", vec![]);
        let global = attribute("global::AutomaticInterface.GenerateAutomaticInterface", vec![]);
        let other = attribute("GenerateAutomaticInterfaceExtra", vec![]);

        assert!(plain.matches("GenerateAutomaticInterface"));
        assert!(suffixed.matches("GenerateAutomaticInterface"));
        assert!(global.matches("GenerateAutomaticInterfaceAttribute"));
        assert!(!other.matches("GenerateAutomaticInterface"));
    }

    #[test]
    fn test_attribute_arguments_named_win_over_positional() {
        let attr = attribute(
            "GenerateAutomaticInterface",
            vec![
                AttributeArgument {
                    name: None,
                    value: Some(ConstantValue::Text("Positional".to_string())),
                },
                AttributeArgument {
                    name: Some("interfaceName".to_string()),
                    value: Some(ConstantValue::Text("ISpecial".to_string())),
                },
            ],
        );

        assert_eq!(
            attr.argument("namespaceName", 0).and_then(ConstantValue::as_str),
            Some("Positional")
        );
        assert_eq!(
            attr.argument("interfaceName", 1).and_then(ConstantValue::as_str),
            Some("ISpecial")
        );
        assert_eq!(attr.argument("asInternal", 2), None);
    }

    #[test]
    fn test_cref_name_includes_type_parameters() {
        let symbol: TypeSymbol = serde_json::from_str(
            r#"{ "name": "Repository", "namespace": "Shop",
                 "type_parameters": [ { "name": "T" }, { "name": "TKey" } ] }"#,
        )
        .unwrap();
        assert_eq!(symbol.kind, TypeKind::Class);
        assert_eq!(symbol.cref_name(), "Shop.Repository{T, TKey}");
    }
}
