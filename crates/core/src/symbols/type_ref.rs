use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A reference to a type as the host's semantic model resolved it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// A resolved class, struct, interface, enum or delegate
    Named(NamedType),
    /// A generic type parameter of the class or of a method
    TypeParameter {
        name: String,
        #[serde(default)]
        nullable: bool,
    },
    Array {
        element: Box<TypeRef>,
        #[serde(default = "default_rank")]
        rank: u32,
        #[serde(default)]
        nullable: bool,
    },
    Tuple {
        elements: Vec<TupleElement>,
        #[serde(default)]
        nullable: bool,
    },
    /// A name the host could not bind, typically an interface that is
    /// generated in the same pass and does not exist yet
    Unresolved {
        name: String,
        #[serde(default)]
        type_arguments: Vec<TypeRef>,
        #[serde(default)]
        nullable: bool,
    },
}

fn default_rank() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedType {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub containing_types: Vec<String>,
    pub name: String,
    #[serde(default)]
    pub type_arguments: Vec<TypeRef>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub is_value_type: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TupleElement {
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub name: Option<String>,
}

impl NamedType {
    /// Dotted name used to look the type up in a compilation
    pub fn metadata_name(&self) -> String {
        join_metadata_name(&self.namespace, &self.containing_types, &self.name)
    }

    /// `System.Nullable<T>`, the value-type form of `T?`
    pub fn is_nullable_value_type(&self) -> bool {
        self.namespace == "System" && self.name == "Nullable" && self.type_arguments.len() == 1
    }
}

impl TypeRef {
    pub fn named(namespace: &str, name: &str) -> Self {
        TypeRef::Named(NamedType {
            namespace: namespace.to_string(),
            containing_types: Vec::new(),
            name: name.to_string(),
            type_arguments: Vec::new(),
            nullable: false,
            is_value_type: false,
        })
    }

    pub fn value_type(namespace: &str, name: &str) -> Self {
        match Self::named(namespace, name) {
            TypeRef::Named(named) => TypeRef::Named(NamedType {
                is_value_type: true,
                ..named
            }),
            other => other,
        }
    }

    pub fn type_parameter(name: &str) -> Self {
        TypeRef::TypeParameter {
            name: name.to_string(),
            nullable: false,
        }
    }

    pub fn unresolved(name: &str) -> Self {
        TypeRef::Unresolved {
            name: name.to_string(),
            type_arguments: Vec::new(),
            nullable: false,
        }
    }

    /// Replace the type arguments of a named or unresolved type
    pub fn with_arguments(self, arguments: Vec<TypeRef>) -> Self {
        match self {
            TypeRef::Named(named) => TypeRef::Named(NamedType {
                type_arguments: arguments,
                ..named
            }),
            TypeRef::Unresolved { name, nullable, .. } => TypeRef::Unresolved {
                name,
                type_arguments: arguments,
                nullable,
            },
            other => other,
        }
    }

    /// Mark this reference with a nullable annotation (`T?`)
    pub fn annotated(self) -> Self {
        self.with_nullable(true)
    }

    pub fn with_nullable(self, value: bool) -> Self {
        match self {
            TypeRef::Named(named) => TypeRef::Named(NamedType {
                nullable: value,
                ..named
            }),
            TypeRef::TypeParameter { name, .. } => TypeRef::TypeParameter {
                name,
                nullable: value,
            },
            TypeRef::Array { element, rank, .. } => TypeRef::Array {
                element,
                rank,
                nullable: value,
            },
            TypeRef::Tuple { elements, .. } => TypeRef::Tuple {
                elements,
                nullable: value,
            },
            TypeRef::Unresolved {
                name,
                type_arguments,
                ..
            } => TypeRef::Unresolved {
                name,
                type_arguments,
                nullable: value,
            },
        }
    }

    /// Whether this node itself carries a nullable annotation.
    ///
    /// `System.Nullable<T>` counts as annotated since it is how the host
    /// spells `int?`.
    pub fn is_annotated(&self) -> bool {
        match self {
            TypeRef::Named(named) => named.nullable || named.is_nullable_value_type(),
            TypeRef::TypeParameter { nullable, .. }
            | TypeRef::Array { nullable, .. }
            | TypeRef::Tuple { nullable, .. }
            | TypeRef::Unresolved { nullable, .. } => *nullable,
        }
    }

    pub fn is_value_type(&self) -> bool {
        match self {
            TypeRef::Named(named) => named.is_value_type,
            TypeRef::Tuple { .. } => true,
            _ => false,
        }
    }

    /// Direct children of this node: type arguments, array element, tuple elements
    pub fn children(&self) -> Vec<&TypeRef> {
        match self {
            TypeRef::Named(named) => named.type_arguments.iter().collect(),
            TypeRef::Unresolved { type_arguments, .. } => type_arguments.iter().collect(),
            TypeRef::Array { element, .. } => vec![element.as_ref()],
            TypeRef::Tuple { elements, .. } => elements.iter().map(|e| &e.ty).collect(),
            TypeRef::TypeParameter { .. } => Vec::new(),
        }
    }

    /// Substitute type parameters, as when reading members of a constructed base type
    pub fn substitute(&self, map: &HashMap<String, TypeRef>) -> TypeRef {
        if map.is_empty() {
            return self.clone();
        }
        match self {
            TypeRef::TypeParameter { name, nullable } => match map.get(name) {
                // `T?` over a value-type argument stays the plain value type
                Some(replacement) if *nullable && !replacement.is_value_type() => {
                    replacement.clone().annotated()
                }
                Some(replacement) => replacement.clone(),
                None => self.clone(),
            },
            TypeRef::Named(named) => TypeRef::Named(NamedType {
                type_arguments: named
                    .type_arguments
                    .iter()
                    .map(|arg| arg.substitute(map))
                    .collect(),
                ..named.clone()
            }),
            TypeRef::Array {
                element,
                rank,
                nullable,
            } => TypeRef::Array {
                element: Box::new(element.substitute(map)),
                rank: *rank,
                nullable: *nullable,
            },
            TypeRef::Tuple { elements, nullable } => TypeRef::Tuple {
                elements: elements
                    .iter()
                    .map(|e| TupleElement {
                        ty: e.ty.substitute(map),
                        name: e.name.clone(),
                    })
                    .collect(),
                nullable: *nullable,
            },
            TypeRef::Unresolved {
                name,
                type_arguments,
                nullable,
            } => TypeRef::Unresolved {
                name: name.clone(),
                type_arguments: type_arguments.iter().map(|arg| arg.substitute(map)).collect(),
                nullable: *nullable,
            },
        }
    }
}

pub(crate) fn join_metadata_name(namespace: &str, containing: &[String], name: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(containing.len() + 2);
    if !namespace.is_empty() {
        parts.push(namespace);
    }
    parts.extend(containing.iter().map(String::as_str));
    parts.push(name);
    parts.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_named_with_defaults() {
        let ty: TypeRef = serde_json::from_str(
            r#"{ "kind": "named", "namespace": "System.Threading.Tasks", "name": "Task",
                 "type_arguments": [ { "kind": "named", "namespace": "System", "name": "String", "nullable": true } ] }"#,
        )
        .unwrap();

        let TypeRef::Named(named) = &ty else {
            panic!("expected named type, got {ty:?}");
        };
        assert_eq!(named.metadata_name(), "System.Threading.Tasks.Task");
        assert!(!named.nullable);
        assert!(named.type_arguments[0].is_annotated());
    }

    #[test]
    fn test_nullable_value_type_counts_as_annotated() {
        let ty = TypeRef::value_type("System", "Nullable")
            .with_arguments(vec![TypeRef::value_type("System", "Int32")]);
        assert!(ty.is_annotated());
    }

    #[test]
    fn test_substitute_keeps_annotation_for_reference_types() {
        let mut map = HashMap::new();
        map.insert("T".to_string(), TypeRef::named("System", "String"));
        map.insert("V".to_string(), TypeRef::value_type("System", "Int32"));

        let list = TypeRef::named("System.Collections.Generic", "List")
            .with_arguments(vec![TypeRef::type_parameter("T").annotated()]);
        let substituted = list.substitute(&map);
        assert_eq!(
            substituted,
            TypeRef::named("System.Collections.Generic", "List")
                .with_arguments(vec![TypeRef::named("System", "String").annotated()])
        );

        let value = TypeRef::type_parameter("V").annotated().substitute(&map);
        assert_eq!(value, TypeRef::value_type("System", "Int32"));
    }

    #[test]
    fn test_metadata_name_in_global_namespace() {
        assert_eq!(join_metadata_name("", &[], "Widget"), "Widget");
        assert_eq!(
            join_metadata_name("Shop", &["Outer".to_string()], "Inner"),
            "Shop.Outer.Inner"
        );
    }
}
