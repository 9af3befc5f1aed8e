use super::type_ref::NamedType;

/// Policy for spelling a type name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayFormat {
    /// `global::`-qualified, valid in any namespace context
    FullyQualified,
    /// Qualified without `global::`, for documentation references
    Cref,
}

/// Type-display service provided by the host.
///
/// Implementations spell the head of a resolved named type (no type
/// arguments, no nullable annotation); composing arguments, arrays and
/// annotations is the renderer's job.
pub trait SymbolDisplay: Send + Sync {
    fn type_name(&self, named: &NamedType, format: DisplayFormat) -> String;
}

/// Display rules of the C# compiler's fully qualified format
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpDisplay;

impl CSharpDisplay {
    pub fn keyword_for(namespace: &str, name: &str) -> Option<&'static str> {
        if namespace != "System" {
            return None;
        }
        let keyword = match name {
            "Boolean" => "bool",
            "Byte" => "byte",
            "SByte" => "sbyte",
            "Char" => "char",
            "Decimal" => "decimal",
            "Double" => "double",
            "Single" => "float",
            "Int16" => "short",
            "UInt16" => "ushort",
            "Int32" => "int",
            "UInt32" => "uint",
            "Int64" => "long",
            "UInt64" => "ulong",
            "IntPtr" => "nint",
            "UIntPtr" => "nuint",
            "Object" => "object",
            "String" => "string",
            "Void" => "void",
            _ => return None,
        };
        Some(keyword)
    }
}

impl SymbolDisplay for CSharpDisplay {
    fn type_name(&self, named: &NamedType, format: DisplayFormat) -> String {
        if named.containing_types.is_empty() {
            if let Some(keyword) = Self::keyword_for(&named.namespace, &named.name) {
                return keyword.to_string();
            }
        }

        let qualified = named.metadata_name();
        match format {
            DisplayFormat::FullyQualified => format!("global::{qualified}"),
            DisplayFormat::Cref => qualified,
        }
    }
}
