/// Qualified names of every interface generated in the current pass.
///
/// Computed once by the batch driver before any candidate is projected and
/// only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceNameUniverse {
    names: Vec<String>,
}

impl InterfaceNameUniverse {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Find the single generated interface whose qualified name ends with `.bare`.
    ///
    /// Zero or several matches yield `None`; the caller keeps the bare name.
    /// Interfaces in the global namespace have no separator and never match.
    pub fn resolve_forward_reference(&self, bare: &str) -> Option<&str> {
        let suffix = format!(".{bare}");
        let mut matches = self.names.iter().filter(|name| name.ends_with(&suffix));

        match (matches.next(), matches.next()) {
            (Some(found), None) => Some(found.as_str()),
            (Some(_), Some(_)) => {
                tracing::debug!("Forward reference {} is ambiguous, leaving it unresolved", bare);
                None
            }
            _ => None,
        }
    }
}

impl FromIterator<String> for InterfaceNameUniverse {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(names: &[&str]) -> InterfaceNameUniverse {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_single_match_resolves() {
        let universe = universe(&["Shop.IOrder", "Shop.Billing.IInvoice"]);
        assert_eq!(universe.resolve_forward_reference("IInvoice"), Some("Shop.Billing.IInvoice"));
    }

    #[test]
    fn test_ambiguous_match_stays_unresolved() {
        let universe = universe(&["Shop.IOrder", "Legacy.IOrder"]);
        assert_eq!(universe.resolve_forward_reference("IOrder"), None);
    }

    #[test]
    fn test_suffix_must_follow_a_separator() {
        let universe = universe(&["Shop.IBigOrder"]);
        assert_eq!(universe.resolve_forward_reference("IOrder"), None);
        assert_eq!(universe.resolve_forward_reference("IBigOrder"), Some("Shop.IBigOrder"));
    }

    #[test]
    fn test_global_namespace_names_never_match() {
        let universe = universe(&["IOrder"]);
        assert_eq!(universe.resolve_forward_reference("IOrder"), None);
    }
}
