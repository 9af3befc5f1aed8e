//! Text emission for interface models and marker attributes

pub mod attributes;
pub mod writer;

use crate::types::{InterfaceMember, InterfaceModel, MemberDeclaration, RenderedTypeParameter, SetKind};

pub use attributes::{generation_attribute_source, ignore_attribute_source};
pub use writer::CodeWriter;

/// Tool name stamped into `GeneratedCode` attributes
pub const GENERATOR_NAME: &str = "AutomaticInterface";
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

const HEADER: [&str; 7] = [
    "//--------------------------------------------------------------------------------------------------",
    "// <auto-generated>",
    "//     This code was generated by a tool.",
    "//",
    "//     Changes to this file may cause incorrect behavior and will be lost if the code is regenerated.",
    "// </auto-generated>",
    "//--------------------------------------------------------------------------------------------------",
];

/// Render a complete, standalone compilation unit for `model`
pub fn render_interface(model: &InterfaceModel) -> String {
    let mut writer = CodeWriter::new();
    writer.lines(HEADER).blank();

    if model.nullable_context {
        writer.line("#nullable enable");
    }

    let namespaced = !model.is_global_namespace();
    if namespaced {
        writer.line(&format!("namespace {}", model.namespace));
        writer.open_block();
    }

    writer.lines(&model.documentation);
    writer.line(&format!(
        "[global::System.CodeDom.Compiler.GeneratedCode(\"{GENERATOR_NAME}\", \"{GENERATOR_VERSION}\")]"
    ));
    writer.line(&format!(
        "{} partial interface {}{}{}",
        model.access.keyword(),
        model.name,
        generic_list(&model.type_parameters),
        where_clauses(&model.type_parameters)
    ));
    writer.open_block();

    for (index, member) in model.members.iter().enumerate() {
        if index > 0 {
            writer.blank();
        }
        write_member(&mut writer, member);
    }

    writer.close_block();
    if namespaced {
        writer.close_block();
    }
    if model.nullable_context {
        writer.line("#nullable restore");
    }

    writer.finish()
}

fn write_member(writer: &mut CodeWriter, member: &InterfaceMember) {
    writer.lines(&member.documentation);
    writer.line(&declaration_text(&member.declaration));
}

/// The member line itself, without documentation
pub fn declaration_text(declaration: &MemberDeclaration) -> String {
    match declaration {
        MemberDeclaration::Property {
            type_text,
            name,
            has_get,
            set_kind,
        } => {
            let mut accessors = Vec::with_capacity(2);
            if *has_get {
                accessors.push("get;");
            }
            match set_kind {
                SetKind::Always => accessors.push("set;"),
                SetKind::InitOnly => accessors.push("init;"),
                SetKind::NoSet => {}
            }
            format!("{type_text} {name} {{ {} }}", accessors.join(" "))
        }
        MemberDeclaration::Method {
            return_type,
            name,
            type_parameters,
            parameters,
        } => format!(
            "{return_type} {name}{}({}){};",
            generic_list(type_parameters),
            parameters.join(", "),
            where_clauses(type_parameters)
        ),
        MemberDeclaration::Event { type_text, name } => format!("event {type_text} {name};"),
    }
}

fn generic_list(parameters: &[RenderedTypeParameter]) -> String {
    if parameters.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    format!("<{}>", names.join(", "))
}

fn where_clauses(parameters: &[RenderedTypeParameter]) -> String {
    parameters
        .iter()
        .filter_map(RenderedTypeParameter::where_clause)
        .map(|clause| format!(" {clause}"))
        .collect()
}
