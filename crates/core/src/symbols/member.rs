use serde::{Deserialize, Serialize};

use super::type_ref::TypeRef;
use super::type_symbol::{AttributeData, ConstantValue, TypeParameterSymbol};
use crate::impl_case_insensitive_deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    #[default]
    Private,
    PrivateProtected,
    Protected,
    Internal,
    ProtectedInternal,
    Public,
    NotApplicable,
}

impl_case_insensitive_deserialize!(
    Accessibility,
    Private => "private",
    PrivateProtected => "private_protected",
    Protected => "protected",
    Internal => "internal",
    ProtectedInternal => "protected_internal",
    Public => "public",
    NotApplicable => "not_applicable",
);

/// How a parameter is passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
    In,
}

impl_case_insensitive_deserialize!(
    RefKind,
    None => "none",
    Ref => "ref",
    Out => "out",
    In => "in",
);

/// How a method or property returns its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnRefKind {
    #[default]
    None,
    Ref,
    RefReadonly,
}

impl_case_insensitive_deserialize!(
    ReturnRefKind,
    None => "none",
    Ref => "ref",
    RefReadonly => "ref_readonly",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    StaticConstructor,
    PropertyGet,
    PropertySet,
    EventAdd,
    EventRemove,
    Operator,
    Conversion,
    Destructor,
    ExplicitInterfaceImplementation,
}

impl_case_insensitive_deserialize!(
    MethodKind,
    Ordinary => "ordinary",
    Constructor => "constructor",
    StaticConstructor => "static_constructor",
    PropertyGet => "property_get",
    PropertySet => "property_set",
    EventAdd => "event_add",
    EventRemove => "event_remove",
    Operator => "operator",
    Conversion => "conversion",
    Destructor => "destructor",
    ExplicitInterfaceImplementation => "explicit_interface_implementation",
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessorSymbol {
    /// `None` when the accessor has no modifier of its own and shares the property's
    #[serde(default)]
    pub accessibility: Option<Accessibility>,
    #[serde(default)]
    pub is_init: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySymbol {
    pub name: String,
    #[serde(default)]
    pub verbatim: bool,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_indexer: bool,
    #[serde(default)]
    pub is_override: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub ref_kind: ReturnRefKind,
    #[serde(default)]
    pub getter: Option<AccessorSymbol>,
    #[serde(default)]
    pub setter: Option<AccessorSymbol>,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    #[serde(default)]
    pub leading_trivia: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSymbol {
    pub name: String,
    #[serde(default)]
    pub verbatim: bool,
    #[serde(default)]
    pub method_kind: MethodKind,
    pub return_type: TypeRef,
    #[serde(default)]
    pub ref_kind: ReturnRefKind,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_override: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterSymbol>,
    #[serde(default)]
    pub parameters: Vec<ParameterSymbol>,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    #[serde(default)]
    pub leading_trivia: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSymbol {
    pub name: String,
    #[serde(default)]
    pub verbatim: bool,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_override: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
    #[serde(default)]
    pub leading_trivia: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSymbol {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeData>,
}

/// A member declared directly on a type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberSymbol {
    Property(PropertySymbol),
    Method(MethodSymbol),
    Event(EventSymbol),
    Field(FieldSymbol),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSymbol {
    pub name: String,
    /// The source spelled the name as `@name`
    #[serde(default)]
    pub verbatim: bool,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub ref_kind: RefKind,
    #[serde(default)]
    pub is_params: bool,
    #[serde(default)]
    pub default_value: Option<DefaultValueSymbol>,
}

/// Explicit default value of an optional parameter, as the host describes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefaultValueSymbol {
    Null,
    Bool {
        value: bool,
    },
    String {
        value: String,
    },
    Char {
        value: char,
    },
    /// Raw underlying value of an enum-typed default
    Enum {
        #[serde(rename = "type")]
        ty: TypeRef,
        value: ConstantValue,
    },
    /// `default` / `default(T)` for a struct-typed parameter
    Default,
    /// Text produced by the host's constant formatter
    Other {
        text: String,
        #[serde(default)]
        textual: bool,
    },
}
