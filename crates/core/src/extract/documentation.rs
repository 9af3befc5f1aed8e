use regex::Regex;
use std::sync::LazyLock;

/// A run of `///` lines (but not `////` comments), or one `/** ... */` block
static DOC_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:^[ \t]*///(?:[^/\r\n][^\r\n]*)?(?:\r?\n|$))+|/\*\*(?s:.*?)\*/")
        .expect("doc block pattern is valid")
});

/// Extract the documentation comment nearest to a declaration from its
/// leading trivia.
///
/// Lines come back trimmed and joined with `\n`; continuation lines of a
/// `/** */` block keep a single leading space so the stars stay aligned.
/// Trivia without a doc comment yields an empty string.
pub fn extract_documentation(trivia: &str) -> String {
    let Some(block) = DOC_BLOCK_RE.find_iter(trivia).last() else {
        return String::new();
    };
    let text = block.as_str();

    if text.trim_start().starts_with("/**") {
        text.lines()
            .enumerate()
            .map(|(index, line)| {
                let line = line.trim();
                if index == 0 {
                    line.to_string()
                } else {
                    format!(" {line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
