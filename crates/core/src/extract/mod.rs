//! Symbol facts extraction: walk a class and its bases into filtered,
//! deduplicated member facts

pub mod attributes;
pub mod documentation;
pub mod signature;

use indexmap::IndexMap;
use indexmap::map::Entry;
use std::collections::HashMap;

use crate::error::Result;
use crate::symbols::{
    Accessibility, AccessorSymbol, ChainLink, Compilation, DefaultValueSymbol, EventSymbol,
    MemberSymbol, MethodKind, MethodSymbol, ParameterSymbol, PropertySymbol, SymbolDisplay,
    TypeRef, TypeSymbol, has_attribute,
};
use crate::types::{
    DefaultValue, GenericParameterFact, MemberFact, MemberKind, MemberSignature, ParameterFact,
    SetKind,
};

pub use attributes::GenerationOptions;
pub use documentation::extract_documentation;
pub use signature::signature_key;

/// Turns a class symbol into the member facts its interface is built from
pub struct FactExtractor<'a> {
    compilation: &'a Compilation,
    display: &'a dyn SymbolDisplay,
    ignore_attribute: &'a str,
}

impl<'a> FactExtractor<'a> {
    pub fn new(
        compilation: &'a Compilation,
        display: &'a dyn SymbolDisplay,
        ignore_attribute: &'a str,
    ) -> Self {
        Self {
            compilation,
            display,
            ignore_attribute,
        }
    }

    /// Walk `class` and its base classes, most derived first, keeping the
    /// first public instance member per `(kind, signature key)`.
    ///
    /// Facts come back in chain order, then declaration order.
    pub fn extract(&self, class: &TypeSymbol) -> Result<Vec<MemberFact>> {
        let chain = self.compilation.base_chain(class)?;
        let mut retained: IndexMap<(MemberKind, String), MemberFact> = IndexMap::new();

        for link in &chain {
            for member in &link.symbol.members {
                let Some(fact) = self.fact_for(member, link) else {
                    continue;
                };
                if let Some(reason) = exclusion_reason(&fact) {
                    tracing::debug!(
                        "Skipping {:?} {}.{}: {}",
                        fact.kind,
                        link.symbol.metadata_name(),
                        fact.name,
                        reason
                    );
                    continue;
                }

                match retained.entry((fact.kind, fact.signature_key.clone())) {
                    Entry::Vacant(slot) => {
                        slot.insert(fact);
                    }
                    Entry::Occupied(mut slot) => {
                        let winner = slot.get_mut();
                        tracing::debug!(
                            "{} on {} shadows the declaration on {}",
                            winner.signature_key,
                            winner.declaring_type,
                            fact.declaring_type
                        );
                        // an undocumented override reads the docs of what it shadows
                        if winner.documentation.is_empty() && (winner.is_override || winner.is_new) {
                            winner.documentation = fact.documentation;
                        }
                    }
                }
            }
        }

        Ok(retained.into_values().collect())
    }

    fn fact_for(&self, member: &MemberSymbol, link: &ChainLink<'_>) -> Option<MemberFact> {
        let declaring_type = link.symbol.cref_name();
        let substitution = &link.substitution;

        let fact = match member {
            MemberSymbol::Property(property) => self.property_fact(property, declaring_type, substitution),
            MemberSymbol::Method(method) => {
                if method.method_kind != MethodKind::Ordinary {
                    return None;
                }
                self.method_fact(method, declaring_type, substitution)
            }
            MemberSymbol::Event(event) => self.event_fact(event, declaring_type, substitution),
            MemberSymbol::Field(_) => return None,
        };
        Some(fact)
    }

    fn property_fact(
        &self,
        property: &PropertySymbol,
        declaring_type: String,
        substitution: &HashMap<String, TypeRef>,
    ) -> MemberFact {
        let accessor_is_public = |accessor: &AccessorSymbol| {
            accessor.accessibility.unwrap_or(property.accessibility) == Accessibility::Public
        };
        let has_get = property.getter.as_ref().is_some_and(accessor_is_public);
        let set_kind = match &property.setter {
            Some(setter) if accessor_is_public(setter) && setter.is_init => SetKind::InitOnly,
            Some(setter) if accessor_is_public(setter) => SetKind::Always,
            _ => SetKind::NoSet,
        };

        let signature = MemberSignature::Property {
            ty: property.ty.substitute(substitution),
            has_get,
            set_kind,
            ref_kind: property.ref_kind,
        };

        MemberFact {
            kind: MemberKind::Property,
            signature_key: signature_key(&property.name, &signature, self.display),
            name: property.name.clone(),
            verbatim: property.verbatim,
            accessibility: property.accessibility,
            is_static: property.is_static,
            is_indexer: property.is_indexer,
            is_override: property.is_override,
            is_new: property.is_new,
            declaring_type,
            documentation: documentation_of(property.leading_trivia.as_deref()),
            ignore: has_attribute(&property.attributes, self.ignore_attribute),
            signature,
        }
    }

    fn method_fact(
        &self,
        method: &MethodSymbol,
        declaring_type: String,
        substitution: &HashMap<String, TypeRef>,
    ) -> MemberFact {
        // a method type parameter shadows a class type parameter of the same name
        let substitution: HashMap<String, TypeRef> = substitution
            .iter()
            .filter(|(name, _)| !method.type_parameters.iter().any(|p| &p.name == *name))
            .map(|(name, ty)| (name.clone(), ty.clone()))
            .collect();
        let substitution = &substitution;

        let signature = MemberSignature::Method {
            return_type: method.return_type.substitute(substitution),
            ref_kind: method.ref_kind,
            type_parameters: method
                .type_parameters
                .iter()
                .map(|parameter| GenericParameterFact::from_symbol(parameter, substitution))
                .collect(),
            parameters: method
                .parameters
                .iter()
                .map(|parameter| parameter_fact(parameter, substitution))
                .collect(),
        };

        MemberFact {
            kind: MemberKind::Method,
            signature_key: signature_key(&method.name, &signature, self.display),
            name: method.name.clone(),
            verbatim: method.verbatim,
            accessibility: method.accessibility,
            is_static: method.is_static,
            is_indexer: false,
            is_override: method.is_override,
            is_new: method.is_new,
            declaring_type,
            documentation: documentation_of(method.leading_trivia.as_deref()),
            ignore: has_attribute(&method.attributes, self.ignore_attribute),
            signature,
        }
    }

    fn event_fact(
        &self,
        event: &EventSymbol,
        declaring_type: String,
        substitution: &HashMap<String, TypeRef>,
    ) -> MemberFact {
        let signature = MemberSignature::Event {
            ty: event.ty.substitute(substitution),
        };

        MemberFact {
            kind: MemberKind::Event,
            signature_key: signature_key(&event.name, &signature, self.display),
            name: event.name.clone(),
            verbatim: event.verbatim,
            accessibility: event.accessibility,
            is_static: event.is_static,
            is_indexer: false,
            is_override: event.is_override,
            is_new: event.is_new,
            declaring_type,
            documentation: documentation_of(event.leading_trivia.as_deref()),
            ignore: has_attribute(&event.attributes, self.ignore_attribute),
            signature,
        }
    }
}

fn exclusion_reason(fact: &MemberFact) -> Option<&'static str> {
    if fact.accessibility != Accessibility::Public {
        Some("not public")
    } else if fact.is_static {
        Some("static")
    } else if fact.is_indexer {
        Some("indexer")
    } else if fact.ignore {
        Some("ignore marker")
    } else if !fact.has_public_accessor() {
        Some("no public accessor")
    } else {
        None
    }
}

fn documentation_of(trivia: Option<&str>) -> String {
    trivia.map(extract_documentation).unwrap_or_default()
}

fn parameter_fact(parameter: &ParameterSymbol, substitution: &HashMap<String, TypeRef>) -> ParameterFact {
    let ty = parameter.ty.substitute(substitution);
    let default_value = match &parameter.default_value {
        None => DefaultValue::None,
        Some(DefaultValueSymbol::Null) => DefaultValue::Null,
        Some(DefaultValueSymbol::Bool { value }) => DefaultValue::Bool(*value),
        Some(DefaultValueSymbol::String { value }) => DefaultValue::String(value.clone()),
        Some(DefaultValueSymbol::Char { value }) => DefaultValue::Char(*value),
        Some(DefaultValueSymbol::Enum { ty, value }) => DefaultValue::EnumLiteral {
            ty: ty.substitute(substitution),
            value: value.to_string(),
        },
        Some(DefaultValueSymbol::Default) => DefaultValue::StructDefault(ty.clone()),
        Some(DefaultValueSymbol::Other { text, textual }) => DefaultValue::Other {
            text: text.clone(),
            textual: *textual,
        },
    };

    ParameterFact {
        name: parameter.name.clone(),
        verbatim: parameter.verbatim,
        mode: parameter.ref_kind.into(),
        is_params: parameter.is_params,
        default_value,
        ty,
        declared_ty: parameter.ty.clone(),
    }
}
