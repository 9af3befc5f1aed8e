use serde::Serialize;
use std::collections::HashMap;

use crate::symbols::{ConstraintSymbol, TypeParameterSymbol, TypeRef};

/// A generic parameter and its constraints in emission order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericParameterFact {
    pub name: String,
    pub constraints: Vec<GenericConstraint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenericConstraint {
    ReferenceType { nullable: bool },
    ValueType,
    Unmanaged,
    NotNull,
    Type {
        #[serde(rename = "type")]
        ty: TypeRef,
    },
    Constructor,
}

impl GenericConstraint {
    /// Position in a `where` clause; the compiler rejects `new()` anywhere but last
    fn rank(&self) -> u8 {
        match self {
            GenericConstraint::ReferenceType { .. } => 0,
            GenericConstraint::ValueType => 1,
            GenericConstraint::Unmanaged => 2,
            GenericConstraint::NotNull => 3,
            GenericConstraint::Type { .. } => 4,
            GenericConstraint::Constructor => 5,
        }
    }
}

impl GenericParameterFact {
    /// Build the fact from a host symbol, ordering constraints canonically.
    ///
    /// Type constraints keep their declared order relative to each other.
    pub fn from_symbol(symbol: &TypeParameterSymbol, substitution: &HashMap<String, TypeRef>) -> Self {
        let mut constraints: Vec<GenericConstraint> = symbol
            .constraints
            .iter()
            .map(|constraint| match constraint {
                ConstraintSymbol::Class { nullable } => GenericConstraint::ReferenceType {
                    nullable: *nullable,
                },
                ConstraintSymbol::Struct => GenericConstraint::ValueType,
                ConstraintSymbol::Unmanaged => GenericConstraint::Unmanaged,
                ConstraintSymbol::NotNull => GenericConstraint::NotNull,
                ConstraintSymbol::New => GenericConstraint::Constructor,
                ConstraintSymbol::Type { ty } => GenericConstraint::Type {
                    ty: ty.substitute(substitution),
                },
            })
            .collect();
        constraints.sort_by_key(GenericConstraint::rank);

        Self {
            name: symbol.name.clone(),
            constraints,
        }
    }

    pub fn constraint_types(&self) -> impl Iterator<Item = &TypeRef> {
        self.constraints.iter().filter_map(|c| match c {
            GenericConstraint::Type { ty } => Some(ty),
            _ => None,
        })
    }
}
