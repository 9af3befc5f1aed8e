use std::fmt::Write;

use super::TypeRenderer;
use crate::types::DefaultValue;

/// Expression text for a parameter default, or `None` when the parameter is required
pub fn render_default_value(value: &DefaultValue, renderer: &mut TypeRenderer<'_>) -> Option<String> {
    let text = match value {
        DefaultValue::None => return None,
        DefaultValue::Null => "null".to_string(),
        DefaultValue::Bool(true) => "true".to_string(),
        DefaultValue::Bool(false) => "false".to_string(),
        DefaultValue::String(text) => quote_string(text),
        DefaultValue::Char(c) => quote_char(*c),
        // enum literals of small underlying types are not self-describing
        DefaultValue::EnumLiteral { ty, value } => {
            format!("({})({})", renderer.render_type(ty), value)
        }
        DefaultValue::StructDefault(ty) => format!("default({})", renderer.render_type(ty)),
        DefaultValue::Other { text, textual: true } => quote_string(text),
        DefaultValue::Other { text, textual: false } => text.clone(),
    };
    Some(text)
}

pub fn quote_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            _ => push_escaped(&mut quoted, c),
        }
    }
    quoted.push('"');
    quoted
}

pub fn quote_char(c: char) -> String {
    let mut quoted = String::with_capacity(4);
    quoted.push('\'');
    match c {
        '\'' => quoted.push_str("\\'"),
        _ => push_escaped(&mut quoted, c),
    }
    quoted.push('\'');
    quoted
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\0' => out.push_str("\\0"),
        '\u{7}' => out.push_str("\\a"),
        '\u{8}' => out.push_str("\\b"),
        '\u{c}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{b}' => out.push_str("\\v"),
        c if c.is_control() => {
            let _ = write!(out, "\\u{:04X}", c as u32);
        }
        c => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::InterfaceNameUniverse;
    use crate::symbols::{CSharpDisplay, TypeRef};

    fn render(value: DefaultValue) -> Option<String> {
        let universe = InterfaceNameUniverse::default();
        let mut renderer = TypeRenderer::new(&CSharpDisplay, &universe);
        render_default_value(&value, &mut renderer)
    }

    #[test]
    fn test_keyword_defaults() {
        assert_eq!(render(DefaultValue::None), None);
        assert_eq!(render(DefaultValue::Null).as_deref(), Some("null"));
        assert_eq!(render(DefaultValue::Bool(true)).as_deref(), Some("true"));
        assert_eq!(render(DefaultValue::Bool(false)).as_deref(), Some("false"));
    }

    #[test]
    fn test_enum_default_is_cast() {
        let value = DefaultValue::EnumLiteral {
            ty: TypeRef::value_type("App", "Mode"),
            value: "2".to_string(),
        };
        assert_eq!(render(value).as_deref(), Some("(global::App.Mode)(2)"));
    }

    #[test]
    fn test_struct_default() {
        let value = DefaultValue::StructDefault(TypeRef::value_type("System", "DateTime"));
        assert_eq!(render(value).as_deref(), Some("default(global::System.DateTime)"));
    }

    #[test]
    fn test_other_is_quoted_only_when_textual() {
        let number = DefaultValue::Other {
            text: "1.5".to_string(),
            textual: false,
        };
        let text = DefaultValue::Other {
            text: "abc".to_string(),
            textual: true,
        };
        assert_eq!(render(number).as_deref(), Some("1.5"));
        assert_eq!(render(text).as_deref(), Some("\"abc\""));
    }

    #[test]
    fn test_string_and_char_escaping() {
        assert_eq!(quote_string(r#"say "hi"\n"#), r#""say \"hi\"\\n""#);
        assert_eq!(quote_string("line\nbreak"), r#""line\nbreak""#);
        assert_eq!(quote_char('\''), r"'\''");
        assert_eq!(quote_char('"'), "'\"'");
        assert_eq!(quote_char('\t'), r"'\t'");
    }
}
