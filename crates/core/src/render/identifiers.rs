/// Reserved words of C#; contextual keywords are valid identifiers and not listed
const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Spell an identifier so it survives re-parsing.
///
/// Keywords, and names the source wrote as `@name`, get the `@` prefix back.
pub fn escape_identifier(name: &str, verbatim: bool) -> String {
    let bare = name.strip_prefix('@').unwrap_or(name);
    if verbatim || bare.len() != name.len() || is_keyword(bare) {
        format!("@{bare}")
    } else {
        bare.to_string()
    }
}
