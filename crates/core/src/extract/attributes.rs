use crate::symbols::{AttributeData, ConstantValue, TypeSymbol};
use crate::types::AccessLevel;

/// Constructor parameter names of the generation marker, in positional order
pub const NAMESPACE_PARAMETER: &str = "namespaceName";
pub const INTERFACE_PARAMETER: &str = "interfaceName";
pub const AS_INTERNAL_PARAMETER: &str = "asInternal";

/// Per-class settings read from the generation marker's arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub namespace_name: Option<String>,
    pub interface_name: Option<String>,
    pub as_internal: bool,
}

impl GenerationOptions {
    /// Read the options of the first attribute matching `attribute_name`.
    ///
    /// A class without the attribute gets the defaults.
    pub fn from_symbol(symbol: &TypeSymbol, attribute_name: &str) -> Self {
        symbol
            .attributes
            .iter()
            .find(|attr| attr.matches(attribute_name))
            .map(Self::from_attribute)
            .unwrap_or_default()
    }

    pub fn from_attribute(attribute: &AttributeData) -> Self {
        let text = |name: &str, position: usize| {
            attribute
                .argument(name, position)
                .and_then(ConstantValue::as_str)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            namespace_name: text(NAMESPACE_PARAMETER, 0),
            interface_name: text(INTERFACE_PARAMETER, 1),
            as_internal: attribute
                .argument(AS_INTERNAL_PARAMETER, 2)
                .and_then(ConstantValue::as_bool)
                .unwrap_or(false),
        }
    }

    /// Namespace override, or the class's own namespace
    pub fn namespace_for(&self, symbol: &TypeSymbol) -> String {
        self.namespace_name
            .clone()
            .unwrap_or_else(|| symbol.namespace.clone())
    }

    /// Interface name override, or `I` + class name
    pub fn interface_name_for(&self, symbol: &TypeSymbol) -> String {
        self.interface_name
            .clone()
            .unwrap_or_else(|| format!("I{}", symbol.name))
    }

    pub fn access(&self) -> AccessLevel {
        if self.as_internal {
            AccessLevel::Internal
        } else {
            AccessLevel::Public
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(attributes: &str) -> TypeSymbol {
        serde_json::from_str(&format!(
            r#"{{ "name": "Order", "namespace": "Shop", "attributes": {attributes} }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_defaults_without_arguments() {
        let symbol = symbol(r#"[ { "name": "GenerateAutomaticInterface" } ]"#);
        let options = GenerationOptions::from_symbol(&symbol, "GenerateAutomaticInterface");

        assert_eq!(options, GenerationOptions::default());
        assert_eq!(options.namespace_for(&symbol), "Shop");
        assert_eq!(options.interface_name_for(&symbol), "IOrder");
        assert_eq!(options.access(), AccessLevel::Public);
    }

    #[test]
    fn test_positional_and_named_arguments() {
        let symbol = symbol(
            r#"[ { "name": "GenerateAutomaticInterfaceAttribute", "arguments": [
                { "value": "Custom.Contracts" },
                { "value": "  " },
                { "name": "asInternal", "value": true }
            ] } ]"#,
        );
        let options = GenerationOptions::from_symbol(&symbol, "GenerateAutomaticInterface");

        assert_eq!(options.namespace_for(&symbol), "Custom.Contracts");
        // blank override falls back to the derived name
        assert_eq!(options.interface_name_for(&symbol), "IOrder");
        assert_eq!(options.access(), AccessLevel::Internal);
    }

    #[test]
    fn test_named_interface_override() {
        let symbol = symbol(
            r#"[ { "name": "GenerateAutomaticInterface", "arguments": [
                { "name": "interfaceName", "value": "IOrderContract" }
            ] } ]"#,
        );
        let options = GenerationOptions::from_symbol(&symbol, "GenerateAutomaticInterface");

        assert_eq!(options.interface_name_for(&symbol), "IOrderContract");
        assert_eq!(options.namespace_for(&symbol), "Shop");
    }
}
