//! Rendering helpers: human-readable text output and the JSON report.

use classort_types::Diagnostic;
use classort_types::report::{ClassortReport, ReportFinding, ToolInfo};

/// 1-based (line, column) of a byte offset. Columns count characters, so
/// multi-byte identifiers don't skew positions.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|at| at + 1).unwrap_or(0);
    let column = source[line_start..offset].chars().count() + 1;
    (line, column)
}

/// Findings for one file, ready for inspection and reporting.
#[derive(Debug, Clone)]
pub struct FileFindings {
    pub path: String,
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
    pub sequences_checked: usize,
}

/// One line per finding: `path:line:col: message_id: message`.
pub fn render_text(findings: &FileFindings) -> String {
    let mut out = String::new();
    for diagnostic in &findings.diagnostics {
        let (line, column) = line_col(&findings.source, diagnostic.span.start);
        out.push_str(&format!(
            "{}:{}:{}: {}: {}{}\n",
            findings.path,
            line,
            column,
            diagnostic.kind.message_id(),
            diagnostic.kind.message(),
            if diagnostic.is_fixable() {
                " (fixable)"
            } else {
                ""
            },
        ));
    }
    out
}

pub fn build_report(tool: ToolInfo, files: &[FileFindings]) -> ClassortReport {
    let mut report = ClassortReport::new(tool);
    for file in files {
        report.summary.files_scanned += 1;
        report.summary.sequences_checked += file.sequences_checked as u64;
        for diagnostic in &file.diagnostics {
            let (line, column) = line_col(&file.source, diagnostic.span.start);
            report.summary.findings_total += 1;
            if diagnostic.is_fixable() {
                report.summary.fixable += 1;
            }
            report.findings.push(ReportFinding {
                path: file.path.clone(),
                line,
                column,
                message_id: diagnostic.kind.message_id().to_string(),
                message: diagnostic.kind.message(),
                fixable: diagnostic.is_fixable(),
            });
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::{FileFindings, build_report, line_col, render_text};
    use classort_types::report::ToolInfo;
    use classort_types::{Diagnostic, DiagnosticKind, Span};

    #[test]
    fn line_col_is_one_based() {
        let src = "ab\ncd\nef";
        assert_eq!(line_col(src, 0), (1, 1));
        assert_eq!(line_col(src, 1), (1, 2));
        assert_eq!(line_col(src, 3), (2, 1));
        assert_eq!(line_col(src, 7), (3, 2));
        assert_eq!(line_col(src, 999), (3, 3));
    }

    #[test]
    fn text_lines_locate_findings() {
        let findings = FileFindings {
            path: "src/app.tsx".to_string(),
            source: "const x = 1;\ncn(\"w-4\", \"flex\")\n".to_string(),
            diagnostics: vec![Diagnostic {
                span: Span::new(13, 30),
                kind: DiagnosticKind::UnorderedSequence {
                    expected: "Layout → Structure".to_string(),
                },
                fix: None,
            }],
            sequences_checked: 1,
        };
        let text = render_text(&findings);
        assert!(text.starts_with("src/app.tsx:2:1: unordered_sequence:"));
    }

    #[test]
    fn report_summarizes_counts() {
        let findings = FileFindings {
            path: "a.tsx".to_string(),
            source: "cn()".to_string(),
            diagnostics: vec![],
            sequences_checked: 3,
        };
        let report = build_report(
            ToolInfo {
                name: "classort".to_string(),
                version: None,
            },
            &[findings],
        );
        assert_eq!(report.summary.files_scanned, 1);
        assert_eq!(report.summary.sequences_checked, 3);
        assert_eq!(report.summary.findings_total, 0);
    }
}
