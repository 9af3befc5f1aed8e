//! Type rendering, forward-reference resolution and literal spelling

pub mod identifiers;
pub mod literals;
pub mod universe;

use lru::LruCache;
use std::num::NonZeroUsize;

use crate::symbols::{DisplayFormat, NamedType, SymbolDisplay, TupleElement, TypeRef};
use crate::types::{GenericConstraint, GenericParameterFact, RenderedTypeParameter};

pub use identifiers::{escape_identifier, is_keyword};
pub use literals::{quote_char, quote_string, render_default_value};
pub use universe::InterfaceNameUniverse;

const CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Renders type references to C# text for one candidate.
///
/// Holds a memo of rendered strings keyed by the immutable `TypeRef`; a
/// renderer is created per candidate and dropped with it.
pub struct TypeRenderer<'a> {
    display: &'a dyn SymbolDisplay,
    universe: &'a InterfaceNameUniverse,
    fully_qualified: LruCache<TypeRef, String>,
    cref: LruCache<TypeRef, String>,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(display: &'a dyn SymbolDisplay, universe: &'a InterfaceNameUniverse) -> Self {
        Self {
            display,
            universe,
            fully_qualified: LruCache::new(CACHE_CAPACITY),
            cref: LruCache::new(CACHE_CAPACITY),
        }
    }

    /// Declaration spelling: `global::`-qualified, nullable annotations kept
    pub fn render_type(&mut self, ty: &TypeRef) -> String {
        self.render(ty, DisplayFormat::FullyQualified)
    }

    /// Documentation reference spelling: `{}` type arguments, no `global::`, no `?`
    pub fn render_cref(&mut self, ty: &TypeRef) -> String {
        self.render(ty, DisplayFormat::Cref)
    }

    pub fn render_type_parameter(&mut self, parameter: &GenericParameterFact) -> RenderedTypeParameter {
        let constraints = parameter
            .constraints
            .iter()
            .map(|constraint| match constraint {
                GenericConstraint::ReferenceType { nullable: false } => "class".to_string(),
                GenericConstraint::ReferenceType { nullable: true } => "class?".to_string(),
                GenericConstraint::ValueType => "struct".to_string(),
                GenericConstraint::Unmanaged => "unmanaged".to_string(),
                GenericConstraint::NotNull => "notnull".to_string(),
                GenericConstraint::Type { ty } => self.render_type(ty),
                GenericConstraint::Constructor => "new()".to_string(),
            })
            .collect();

        RenderedTypeParameter {
            name: parameter.name.clone(),
            constraints,
        }
    }

    fn render(&mut self, ty: &TypeRef, format: DisplayFormat) -> String {
        let cache = match format {
            DisplayFormat::FullyQualified => &mut self.fully_qualified,
            DisplayFormat::Cref => &mut self.cref,
        };
        if let Some(rendered) = cache.get(ty) {
            return rendered.clone();
        }

        let rendered = self.compose(ty, format);
        let cache = match format {
            DisplayFormat::FullyQualified => &mut self.fully_qualified,
            DisplayFormat::Cref => &mut self.cref,
        };
        cache.put(ty.clone(), rendered.clone());
        rendered
    }

    fn compose(&mut self, ty: &TypeRef, format: DisplayFormat) -> String {
        let annotate = |text: String, nullable: bool| match format {
            DisplayFormat::FullyQualified if nullable => format!("{text}?"),
            _ => text,
        };

        match ty {
            TypeRef::Named(named) => {
                if let Some(inner) = nullable_value_argument(named) {
                    let inner = self.render(inner, format);
                    return annotate(inner, true);
                }
                let head = self.display.type_name(named, format);
                let text = self.with_arguments(head, &named.type_arguments, format);
                annotate(text, named.nullable)
            }
            TypeRef::TypeParameter { name, nullable } => annotate(name.clone(), *nullable),
            TypeRef::Array {
                element,
                rank,
                nullable,
            } => {
                let element = self.render(element, format);
                let commas = ",".repeat(rank.saturating_sub(1) as usize);
                annotate(format!("{element}[{commas}]"), *nullable)
            }
            TypeRef::Tuple { elements, nullable } => {
                let text = self.render_tuple(elements, format);
                annotate(text, *nullable)
            }
            TypeRef::Unresolved {
                name,
                type_arguments,
                nullable,
            } => {
                let head = match self.universe.resolve_forward_reference(name) {
                    Some(found) if format == DisplayFormat::FullyQualified => {
                        format!("global::{found}")
                    }
                    Some(found) => found.to_string(),
                    None => {
                        tracing::debug!("Type {} did not resolve, keeping the bare name", name);
                        name.clone()
                    }
                };
                let text = self.with_arguments(head, type_arguments, format);
                annotate(text, *nullable)
            }
        }
    }

    fn with_arguments(&mut self, head: String, arguments: &[TypeRef], format: DisplayFormat) -> String {
        if arguments.is_empty() {
            return head;
        }
        let rendered: Vec<String> = arguments.iter().map(|arg| self.render(arg, format)).collect();
        match format {
            DisplayFormat::FullyQualified => format!("{head}<{}>", rendered.join(", ")),
            DisplayFormat::Cref => format!("{head}{{{}}}", rendered.join(", ")),
        }
    }

    fn render_tuple(&mut self, elements: &[TupleElement], format: DisplayFormat) -> String {
        match format {
            DisplayFormat::FullyQualified => {
                let parts: Vec<String> = elements
                    .iter()
                    .map(|element| {
                        let ty = self.render(&element.ty, format);
                        match &element.name {
                            Some(name) => format!("{ty} {name}"),
                            None => ty,
                        }
                    })
                    .collect();
                format!("({})", parts.join(", "))
            }
            DisplayFormat::Cref => {
                let parts: Vec<String> = elements
                    .iter()
                    .map(|element| self.render(&element.ty, format))
                    .collect();
                format!("System.ValueTuple{{{}}}", parts.join(", "))
            }
        }
    }
}

fn nullable_value_argument(named: &NamedType) -> Option<&TypeRef> {
    if named.is_nullable_value_type() {
        named.type_arguments.first()
    } else {
        None
    }
}

/// Whether the type, or any type nested inside it, carries a nullable annotation
pub fn is_nullable(ty: &TypeRef) -> bool {
    ty.is_annotated() || ty.children().into_iter().any(is_nullable)
}

/// Whether a generic parameter's constraints require nullable-aware mode
pub fn constraints_are_nullable(parameter: &GenericParameterFact) -> bool {
    parameter
        .constraints
        .iter()
        .any(|constraint| matches!(constraint, GenericConstraint::ReferenceType { nullable: true }))
        || parameter.constraint_types().any(is_nullable)
}
