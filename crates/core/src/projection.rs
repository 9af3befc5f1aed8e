//! Member projection: how a retained member fact is shaped as an interface member

use crate::config::DocumentationMode;
use crate::render::{TypeRenderer, escape_identifier, render_default_value};
use crate::symbols::ReturnRefKind;
use crate::types::{
    InterfaceMember, MemberDeclaration, MemberFact, MemberSignature, ParameterFact, PassingMode,
};

pub fn project_member(
    fact: &MemberFact,
    renderer: &mut TypeRenderer<'_>,
    mode: DocumentationMode,
) -> InterfaceMember {
    let name = escape_identifier(&fact.name, fact.verbatim);

    let declaration = match &fact.signature {
        MemberSignature::Property {
            ty,
            has_get,
            set_kind,
            ref_kind,
        } => MemberDeclaration::Property {
            type_text: with_ref_prefix(*ref_kind, renderer.render_type(ty)),
            name,
            has_get: *has_get,
            set_kind: *set_kind,
        },
        MemberSignature::Method {
            return_type,
            ref_kind,
            type_parameters,
            parameters,
        } => MemberDeclaration::Method {
            return_type: with_ref_prefix(*ref_kind, renderer.render_type(return_type)),
            name,
            type_parameters: type_parameters
                .iter()
                .map(|parameter| renderer.render_type_parameter(parameter))
                .collect(),
            parameters: parameters
                .iter()
                .map(|parameter| render_parameter(parameter, renderer))
                .collect(),
        },
        MemberSignature::Event { ty } => MemberDeclaration::Event {
            type_text: renderer.render_type(ty),
            name,
        },
    };

    InterfaceMember {
        kind: fact.kind,
        documentation: member_documentation(fact, renderer, mode),
        declaration,
    }
}

/// `ref int count = 0`, `params string[] items`, `@event`, ...
pub fn render_parameter(parameter: &ParameterFact, renderer: &mut TypeRenderer<'_>) -> String {
    let mut text = String::new();
    if let Some(keyword) = parameter.mode.keyword() {
        text.push_str(keyword);
        text.push(' ');
    }
    if parameter.is_params {
        text.push_str("params ");
    }
    text.push_str(&renderer.render_type(&parameter.ty));
    text.push(' ');
    text.push_str(&escape_identifier(&parameter.name, parameter.verbatim));

    if let Some(default) = render_default_value(&parameter.default_value, renderer) {
        text.push_str(" = ");
        text.push_str(&default);
    }
    text
}

/// Cref of the class member a fact came from, e.g. `App.Store{T}.Save(ref T)`
pub fn member_cref(fact: &MemberFact, renderer: &mut TypeRenderer<'_>) -> String {
    let name = escape_identifier(&fact.name, fact.verbatim);
    match &fact.signature {
        MemberSignature::Method {
            type_parameters,
            parameters,
            ..
        } => {
            let generics = if type_parameters.is_empty() {
                String::new()
            } else {
                let names: Vec<&str> = type_parameters.iter().map(|p| p.name.as_str()).collect();
                format!("{{{}}}", names.join(", "))
            };
            let parameters: Vec<String> = parameters
                .iter()
                .map(|parameter| {
                    let ty = renderer.render_cref(&parameter.declared_ty);
                    match parameter.mode {
                        PassingMode::Value => ty,
                        mode => format!("{} {ty}", mode.keyword().unwrap_or_default()),
                    }
                })
                .collect();
            format!(
                "{}.{}{}({})",
                fact.declaring_type,
                name,
                generics,
                parameters.join(", ")
            )
        }
        _ => format!("{}.{}", fact.declaring_type, name),
    }
}

fn member_documentation(
    fact: &MemberFact,
    renderer: &mut TypeRenderer<'_>,
    mode: DocumentationMode,
) -> Vec<String> {
    if mode == DocumentationMode::Copy && !fact.documentation.is_empty() {
        return fact.documentation.lines().map(str::to_string).collect();
    }
    vec![format!(
        "/// <inheritdoc cref=\"{}\" />",
        member_cref(fact, renderer)
    )]
}

fn with_ref_prefix(kind: ReturnRefKind, type_text: String) -> String {
    match kind {
        ReturnRefKind::None => type_text,
        ReturnRefKind::Ref => format!("ref {type_text}"),
        ReturnRefKind::RefReadonly => format!("ref readonly {type_text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::InterfaceNameUniverse;
    use crate::symbols::{Accessibility, CSharpDisplay, TypeRef};
    use crate::types::{DefaultValue, MemberKind, SetKind};

    fn fact(name: &str, signature: MemberSignature) -> MemberFact {
        MemberFact {
            kind: signature.kind(),
            name: name.to_string(),
            verbatim: false,
            accessibility: Accessibility::Public,
            is_static: false,
            is_indexer: false,
            is_override: false,
            is_new: false,
            signature_key: name.to_string(),
            declaring_type: "App.Svc".to_string(),
            documentation: "/// <summary>Docs</summary>".to_string(),
            ignore: false,
            signature,
        }
    }

    fn parameter(name: &str, ty: TypeRef, mode: PassingMode, default_value: DefaultValue) -> ParameterFact {
        ParameterFact {
            name: name.to_string(),
            verbatim: false,
            declared_ty: ty.clone(),
            ty,
            mode,
            is_params: false,
            default_value,
        }
    }

    #[test]
    fn test_render_parameter_variants() {
        let universe = InterfaceNameUniverse::default();
        let mut renderer = TypeRenderer::new(&CSharpDisplay, &universe);

        let by_ref = parameter(
            "count",
            TypeRef::value_type("System", "Int32"),
            PassingMode::Ref,
            DefaultValue::None,
        );
        assert_eq!(render_parameter(&by_ref, &mut renderer), "ref int count");

        let keyword_name = parameter(
            "class",
            TypeRef::named("System", "String").annotated(),
            PassingMode::Value,
            DefaultValue::Null,
        );
        assert_eq!(
            render_parameter(&keyword_name, &mut renderer),
            "string? @class = null"
        );

        let mut items = parameter(
            "items",
            TypeRef::Array {
                element: Box::new(TypeRef::named("System", "Object")),
                rank: 1,
                nullable: false,
            },
            PassingMode::Value,
            DefaultValue::None,
        );
        items.is_params = true;
        assert_eq!(render_parameter(&items, &mut renderer), "params object[] items");
    }

    #[test]
    fn test_method_documentation_modes() {
        let universe = InterfaceNameUniverse::default();
        let mut renderer = TypeRenderer::new(&CSharpDisplay, &universe);
        let method = fact(
            "Load",
            MemberSignature::Method {
                return_type: TypeRef::value_type("System", "Void"),
                ref_kind: ReturnRefKind::None,
                type_parameters: vec![],
                parameters: vec![parameter(
                    "result",
                    TypeRef::named("System.Collections.Generic", "List")
                        .with_arguments(vec![TypeRef::named("System", "String").annotated()]),
                    PassingMode::Out,
                    DefaultValue::None,
                )],
            },
        );

        let inherited = project_member(&method, &mut renderer, DocumentationMode::Inherit);
        assert_eq!(
            inherited.documentation,
            vec![
                "/// <inheritdoc cref=\"App.Svc.Load(out System.Collections.Generic.List{string})\" />"
                    .to_string()
            ]
        );

        let copied = project_member(&method, &mut renderer, DocumentationMode::Copy);
        assert_eq!(copied.documentation, vec!["/// <summary>Docs</summary>".to_string()]);
    }

    #[test]
    fn test_ref_readonly_property() {
        let universe = InterfaceNameUniverse::default();
        let mut renderer = TypeRenderer::new(&CSharpDisplay, &universe);
        let property = fact(
            "Current",
            MemberSignature::Property {
                ty: TypeRef::value_type("System", "Int32"),
                has_get: true,
                set_kind: SetKind::NoSet,
                ref_kind: ReturnRefKind::RefReadonly,
            },
        );

        let member = project_member(&property, &mut renderer, DocumentationMode::Inherit);
        assert_eq!(member.kind, MemberKind::Property);
        assert_eq!(
            member.declaration,
            MemberDeclaration::Property {
                type_text: "ref readonly int".to_string(),
                name: "Current".to_string(),
                has_get: true,
                set_kind: SetKind::NoSet,
            }
        );
        assert_eq!(
            member.documentation,
            vec!["/// <inheritdoc cref=\"App.Svc.Current\" />".to_string()]
        );
    }

    #[test]
    fn test_cref_escapes_keyword_member_names() {
        let universe = InterfaceNameUniverse::default();
        let mut renderer = TypeRenderer::new(&CSharpDisplay, &universe);
        let mut method = fact(
            "class",
            MemberSignature::Method {
                return_type: TypeRef::value_type("System", "Void"),
                ref_kind: ReturnRefKind::None,
                type_parameters: vec![],
                parameters: vec![],
            },
        );
        method.verbatim = true;

        assert_eq!(member_cref(&method, &mut renderer), "App.Svc.@class()");

        let member = project_member(&method, &mut renderer, DocumentationMode::Inherit);
        assert_eq!(
            member.documentation,
            vec!["/// <inheritdoc cref=\"App.Svc.@class()\" />".to_string()]
        );
    }
}
