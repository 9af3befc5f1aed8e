use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use super::type_ref::TypeRef;
use super::type_symbol::TypeSymbol;
use crate::error::{Error, Result};

/// Metadata name of the universal root type; the chain walk stops before it
pub const OBJECT_TYPE: &str = "System.Object";

/// The resolved symbol graph of one compilation pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Compilation {
    #[serde(default)]
    pub assembly_name: Option<String>,
    /// Candidate metadata names found by the host's attribute discovery
    #[serde(default)]
    pub candidates: Option<Vec<String>>,
    #[serde(default)]
    pub types: Vec<TypeSymbol>,
    #[serde(skip)]
    index: OnceLock<HashMap<String, usize>>,
}

/// One step of an inheritance chain walk
#[derive(Debug, Clone)]
pub struct ChainLink<'a> {
    pub symbol: &'a TypeSymbol,
    /// Type arguments the derived type supplied for this type's parameters
    pub substitution: HashMap<String, TypeRef>,
}

impl Compilation {
    pub fn new(types: Vec<TypeSymbol>) -> Self {
        Self {
            types,
            ..Default::default()
        }
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn index(&self) -> &HashMap<String, usize> {
        self.index.get_or_init(|| {
            let mut index = HashMap::with_capacity(self.types.len());
            for (position, symbol) in self.types.iter().enumerate() {
                // first declaration wins, like partial types merged by the host
                index.entry(symbol.metadata_name()).or_insert(position);
            }
            index
        })
    }

    pub fn get_type(&self, metadata_name: &str) -> Option<&TypeSymbol> {
        self.index()
            .get(metadata_name)
            .and_then(|&position| self.types.get(position))
    }

    /// Walk from `symbol` through its base classes, most derived first.
    ///
    /// The walk ends before `System.Object`, and at the first base type the
    /// compilation does not declare.
    pub fn base_chain<'a>(&'a self, symbol: &'a TypeSymbol) -> Result<Vec<ChainLink<'a>>> {
        let mut chain = vec![ChainLink {
            symbol,
            substitution: HashMap::new(),
        }];
        let mut visited = HashSet::from([symbol.metadata_name()]);

        loop {
            let Some(current) = chain.last() else {
                break;
            };
            let Some(TypeRef::Named(base)) = current.symbol.base_type.as_ref() else {
                break;
            };

            let base_name = base.metadata_name();
            if base_name == OBJECT_TYPE {
                break;
            }
            let Some(base_symbol) = self.get_type(&base_name) else {
                tracing::debug!(
                    "Base type {} of {} is not part of the compilation, stopping chain walk",
                    base_name,
                    current.symbol.metadata_name()
                );
                break;
            };
            if !visited.insert(base_name.clone()) {
                return Err(Error::SymbolError(format!(
                    "cyclic inheritance detected at {} while walking {}",
                    base_name,
                    symbol.metadata_name()
                )));
            }

            // arguments are expressed in terms of the derived type's own parameters
            let substitution = base_symbol
                .type_parameters
                .iter()
                .zip(base.type_arguments.iter())
                .map(|(param, arg)| (param.name.clone(), arg.substitute(&current.substitution)))
                .collect();

            chain.push(ChainLink {
                symbol: base_symbol,
                substitution,
            });
        }

        Ok(chain)
    }
}
