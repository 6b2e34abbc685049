use serde::{Deserialize, Serialize};

/// Top-level JSON report envelope (`classort.report.v1`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassortReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub summary: ReportSummary,

    #[serde(default)]
    pub findings: Vec<ReportFinding>,

    /// Escape hatch for host-specific extensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ClassortReport {
    pub fn new(tool: ToolInfo) -> Self {
        Self {
            schema: crate::schema::CLASSORT_REPORT_V1.to_string(),
            tool,
            summary: ReportSummary::default(),
            findings: vec![],
            data: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub files_scanned: u64,
    pub sequences_checked: u64,
    pub findings_total: u64,
    pub fixable: u64,
}

/// One finding, located for human and machine consumers alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFinding {
    pub path: String,
    /// 1-based.
    pub line: usize,
    /// 1-based.
    pub column: usize,
    pub message_id: String,
    pub message: String,
    pub fixable: bool,
}
