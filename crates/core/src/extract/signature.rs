use crate::symbols::{DisplayFormat, SymbolDisplay, TypeRef};
use crate::types::{MemberSignature, PassingMode};

/// Canonical identity of a member across an inheritance chain.
///
/// Properties and events are identified by name. Methods add their generic
/// arity and parameter types with passing mode; method type parameters are
/// spelled by position (`!!0`) so `M<T>(T)` and `M<U>(U)` collide. Nullable
/// annotations are left out because they do not distinguish signatures.
pub fn signature_key(name: &str, signature: &MemberSignature, display: &dyn SymbolDisplay) -> String {
    match signature {
        MemberSignature::Property { .. } | MemberSignature::Event { .. } => name.to_string(),
        MemberSignature::Method {
            type_parameters,
            parameters,
            ..
        } => {
            let method_parameters: Vec<&str> =
                type_parameters.iter().map(|p| p.name.as_str()).collect();
            let parameters: Vec<String> = parameters
                .iter()
                .map(|parameter| {
                    let ty = key_type(&parameter.ty, &method_parameters, display);
                    match parameter.mode {
                        PassingMode::Value => ty,
                        mode => format!("{} {ty}", mode.keyword().unwrap_or_default()),
                    }
                })
                .collect();

            if method_parameters.is_empty() {
                format!("{name}({})", parameters.join(", "))
            } else {
                format!("{name}`{}({})", method_parameters.len(), parameters.join(", "))
            }
        }
    }
}

fn key_type(ty: &TypeRef, method_parameters: &[&str], display: &dyn SymbolDisplay) -> String {
    let arguments = |arguments: &[TypeRef]| -> String {
        if arguments.is_empty() {
            String::new()
        } else {
            let rendered: Vec<String> = arguments
                .iter()
                .map(|arg| key_type(arg, method_parameters, display))
                .collect();
            format!("<{}>", rendered.join(", "))
        }
    };

    match ty {
        TypeRef::Named(named) => format!(
            "{}{}",
            display.type_name(named, DisplayFormat::FullyQualified),
            arguments(&named.type_arguments)
        ),
        TypeRef::TypeParameter { name, .. } => {
            match method_parameters.iter().position(|p| *p == name.as_str()) {
                Some(index) => format!("!!{index}"),
                None => name.clone(),
            }
        }
        TypeRef::Array { element, rank, .. } => format!(
            "{}[{}]",
            key_type(element, method_parameters, display),
            ",".repeat(rank.saturating_sub(1) as usize)
        ),
        TypeRef::Tuple { elements, .. } => {
            let rendered: Vec<String> = elements
                .iter()
                .map(|element| key_type(&element.ty, method_parameters, display))
                .collect();
            format!("({})", rendered.join(", "))
        }
        TypeRef::Unresolved {
            name,
            type_arguments,
            ..
        } => format!("{name}{}", arguments(type_arguments)),
    }
}
