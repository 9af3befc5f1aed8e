pub mod generic;
pub mod interface_model;
pub mod member_fact;

// Re-export commonly used types
pub use generic::{GenericConstraint, GenericParameterFact};
pub use interface_model::{
    AccessLevel, InterfaceMember, InterfaceModel, MemberDeclaration, RenderedTypeParameter,
};
pub use member_fact::{
    DefaultValue, MemberFact, MemberKind, MemberSignature, ParameterFact, PassingMode, SetKind,
};
