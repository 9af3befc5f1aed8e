use serde::Serialize;

use super::member_fact::{MemberKind, SetKind};

/// Access modifier of a generated interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    #[default]
    Public,
    Internal,
}

impl AccessLevel {
    pub fn keyword(self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Internal => "internal",
        }
    }
}

/// A generic parameter with its constraint clause already rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTypeParameter {
    pub name: String,
    pub constraints: Vec<String>,
}

impl RenderedTypeParameter {
    /// `where T : class, new()`, or `None` when unconstrained
    pub fn where_clause(&self) -> Option<String> {
        if self.constraints.is_empty() {
            None
        } else {
            Some(format!("where {} : {}", self.name, self.constraints.join(", ")))
        }
    }
}

/// Shape of one interface member, with every type already spelled out
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberDeclaration {
    Property {
        type_text: String,
        name: String,
        has_get: bool,
        set_kind: SetKind,
    },
    Method {
        return_type: String,
        name: String,
        type_parameters: Vec<RenderedTypeParameter>,
        parameters: Vec<String>,
    },
    Event {
        type_text: String,
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceMember {
    pub kind: MemberKind,
    /// Doc comment lines, each starting with `///`
    pub documentation: Vec<String>,
    pub declaration: MemberDeclaration,
}

/// Everything needed to emit one interface, in emission order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceModel {
    /// Empty for the global namespace
    pub namespace: String,
    pub name: String,
    pub access: AccessLevel,
    /// Metadata name of the class the interface was projected from
    pub source_class: String,
    pub documentation: Vec<String>,
    pub type_parameters: Vec<RenderedTypeParameter>,
    pub members: Vec<InterfaceMember>,
    /// Whether the unit must opt into nullable reference types
    pub nullable_context: bool,
}

impl InterfaceModel {
    pub fn is_global_namespace(&self) -> bool {
        self.namespace.is_empty()
    }

    /// `Namespace.IName`, or just `IName` in the global namespace
    pub fn qualified_name(&self) -> String {
        if self.is_global_namespace() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}
