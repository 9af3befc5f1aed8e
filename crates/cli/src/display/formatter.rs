use autointerface_core::{Diagnostic, Severity};
use std::path::PathBuf;

/// What one `generate` invocation produced
#[derive(Debug, Default)]
pub struct GenerationSummary {
    pub compilations: usize,
    pub interfaces: usize,
    pub attributes: usize,
    pub written: Vec<PathBuf>,
}

pub fn print_summary(summary: &GenerationSummary) {
    println!(
        "✅ Generated {} interfaces from {} compilations",
        summary.interfaces, summary.compilations
    );
    if summary.attributes > 0 {
        println!("   • {} marker attribute sources", summary.attributes);
    }
    for path in &summary.written {
        println!("   • {}", path.display());
    }
}

/// `error AI0001: ...`, the way compilers print diagnostics
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    format!("{severity} {}: {}", diagnostic.id, diagnostic.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_diagnostic() {
        let diagnostic = Diagnostic {
            id: "AI0001".to_string(),
            severity: Severity::Error,
            message: "boom".to_string(),
        };
        assert_eq!(format_diagnostic(&diagnostic), "error AI0001: boom");
    }
}
