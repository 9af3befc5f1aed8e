use serde::Serialize;

use super::generic::GenericParameterFact;
use crate::symbols::{Accessibility, RefKind, ReturnRefKind, TypeRef};

/// Kind of interface member, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Property,
    Method,
    Event,
}

/// Setter exposure of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    NoSet,
    Always,
    InitOnly,
}

/// Normalized record for one member found while walking a class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberFact {
    pub kind: MemberKind,
    pub name: String,
    pub verbatim: bool,
    pub accessibility: Accessibility,
    pub is_static: bool,
    pub is_indexer: bool,
    pub is_override: bool,
    pub is_new: bool,
    /// Identity of the member across the inheritance chain
    pub signature_key: String,
    /// Cref of the type that declares the member, e.g. `App.Base{T}`
    pub declaring_type: String,
    pub documentation: String,
    pub ignore: bool,
    pub signature: MemberSignature,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MemberSignature {
    Property {
        #[serde(rename = "type")]
        ty: TypeRef,
        has_get: bool,
        set_kind: SetKind,
        ref_kind: ReturnRefKind,
    },
    Method {
        return_type: TypeRef,
        ref_kind: ReturnRefKind,
        type_parameters: Vec<GenericParameterFact>,
        parameters: Vec<ParameterFact>,
    },
    Event {
        #[serde(rename = "type")]
        ty: TypeRef,
    },
}

impl MemberSignature {
    pub fn kind(&self) -> MemberKind {
        match self {
            MemberSignature::Property { .. } => MemberKind::Property,
            MemberSignature::Method { .. } => MemberKind::Method,
            MemberSignature::Event { .. } => MemberKind::Event,
        }
    }
}

impl MemberFact {
    /// Every type the member's declaration mentions
    pub fn type_refs(&self) -> Vec<&TypeRef> {
        match &self.signature {
            MemberSignature::Property { ty, .. } | MemberSignature::Event { ty } => vec![ty],
            MemberSignature::Method {
                return_type,
                parameters,
                ..
            } => std::iter::once(return_type)
                .chain(parameters.iter().map(|p| &p.ty))
                .collect(),
        }
    }

    /// Generic parameters declared by the member itself
    pub fn type_parameters(&self) -> &[GenericParameterFact] {
        match &self.signature {
            MemberSignature::Method {
                type_parameters, ..
            } => type_parameters,
            _ => &[],
        }
    }

    /// A property whose accessors are all hidden exposes nothing
    pub fn has_public_accessor(&self) -> bool {
        match &self.signature {
            MemberSignature::Property {
                has_get, set_kind, ..
            } => *has_get || *set_kind != SetKind::NoSet,
            _ => true,
        }
    }
}

/// How an argument is passed to a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassingMode {
    Value,
    Ref,
    Out,
    In,
}

impl PassingMode {
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            PassingMode::Value => None,
            PassingMode::Ref => Some("ref"),
            PassingMode::Out => Some("out"),
            PassingMode::In => Some("in"),
        }
    }
}

impl From<RefKind> for PassingMode {
    fn from(kind: RefKind) -> Self {
        match kind {
            RefKind::None => PassingMode::Value,
            RefKind::Ref => PassingMode::Ref,
            RefKind::Out => PassingMode::Out,
            RefKind::In => PassingMode::In,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterFact {
    pub name: String,
    pub verbatim: bool,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Type as written on the declaring class, before base-type arguments
    /// were substituted; documentation references point at this one
    pub declared_ty: TypeRef,
    pub mode: PassingMode,
    pub is_params: bool,
    pub default_value: DefaultValue,
}

/// Default value descriptor of an optional parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    None,
    Null,
    Bool(bool),
    String(String),
    Char(char),
    EnumLiteral { ty: TypeRef, value: String },
    StructDefault(TypeRef),
    Other { text: String, textual: bool },
}
