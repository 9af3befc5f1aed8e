use super::CodeWriter;
use crate::extract::attributes::{AS_INTERNAL_PARAMETER, INTERFACE_PARAMETER, NAMESPACE_PARAMETER};

const ATTRIBUTE_NAMESPACE: &str = "AutomaticInterface";

/// Class name for a configured attribute name, which may omit the suffix
fn attribute_class_name(configured: &str) -> String {
    if configured.ends_with("Attribute") {
        configured.to_string()
    } else {
        format!("{configured}Attribute")
    }
}

fn write_attribute(summary: &str, usage: &str, class_name: &str, constructor_parameters: &str) -> String {
    let mut writer = CodeWriter::new();
    writer.line("// <auto-generated />").line("using System;").blank();
    writer.line(&format!("namespace {ATTRIBUTE_NAMESPACE}")).open_block();
    writer
        .line("/// <summary>")
        .line(&format!("/// {summary}"))
        .line("/// </summary>")
        .line(&format!("[AttributeUsage({usage})]"))
        .line(&format!("internal sealed class {class_name} : Attribute"))
        .open_block();
    writer.line(&format!("internal {class_name}({constructor_parameters}) {{ }}"));
    writer.close_block().close_block();
    writer.finish()
}

/// Source of the generation marker, named after the configured attribute
pub fn generation_attribute_source(attribute_name: &str) -> String {
    write_attribute(
        "Use source generator to automatically create a Interface from this class",
        "AttributeTargets.Class",
        &attribute_class_name(attribute_name),
        &format!(
            "string {NAMESPACE_PARAMETER} = \"\", string {INTERFACE_PARAMETER} = \"\", bool {AS_INTERNAL_PARAMETER} = false"
        ),
    )
}

/// Source of the ignore marker for properties, methods and events
pub fn ignore_attribute_source(ignore_attribute_name: &str) -> String {
    write_attribute(
        "Ignore this member in a generated Interface from this class",
        "AttributeTargets.Method | AttributeTargets.Property | AttributeTargets.Event",
        &attribute_class_name(ignore_attribute_name),
        "",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_attribute_uses_configured_name() {
        let source = generation_attribute_source("MakeInterface");
        assert!(source.starts_with("// <auto-generated />\nusing System;\n\nnamespace AutomaticInterface\n{\n"));
        assert!(source.contains("    internal sealed class MakeInterfaceAttribute : Attribute\n"));
        assert!(source.contains(
            "        internal MakeInterfaceAttribute(string namespaceName = \"\", string interfaceName = \"\", bool asInternal = false) { }\n"
        ));
        assert!(source.ends_with("    }\n}\n"));
    }

    #[test]
    fn test_ignore_attribute_has_no_parameters() {
        let source = ignore_attribute_source("IgnoreAutomaticInterfaceAttribute");
        assert!(source.contains("internal IgnoreAutomaticInterfaceAttribute() { }"));
        assert!(source.contains("[AttributeUsage(AttributeTargets.Method | AttributeTargets.Property | AttributeTargets.Event)]"));
    }
}
