//! Host-side symbol graph handed to the generator
//!
//! The host compiler's front end resolves source into this model; the
//! generator only ever reads it.

pub mod compilation;
pub mod display;
pub mod member;
pub mod type_ref;
pub mod type_symbol;

pub use compilation::{ChainLink, Compilation, OBJECT_TYPE};
pub use display::{CSharpDisplay, DisplayFormat, SymbolDisplay};
pub use member::{
    AccessorSymbol, Accessibility, DefaultValueSymbol, EventSymbol, FieldSymbol, MemberSymbol,
    MethodKind, MethodSymbol, ParameterSymbol, PropertySymbol, RefKind, ReturnRefKind,
};
pub use type_ref::{NamedType, TupleElement, TypeRef};
pub use type_symbol::{
    AttributeArgument, AttributeData, ConstantValue, ConstraintSymbol, SyntaxInfo, TypeKind,
    TypeParameterSymbol, TypeSymbol, has_attribute,
};
