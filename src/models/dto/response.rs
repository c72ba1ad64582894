use serde::Serialize;

use crate::models::domain::{CategoryBands, FeedbackReport, ScoreBand};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeyValidationResponse {
    pub valid: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportResponse {
    pub format: &'static str,
    pub content: String,
}

impl ExportResponse {
    pub fn markdown(content: String) -> Self {
        Self {
            format: "markdown",
            content,
        }
    }
}

/// Feedback report with its score bands spelled out for the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReportResponse {
    #[serde(flatten)]
    pub report: FeedbackReport,
    pub overall_band: ScoreBand,
    pub category_bands: CategoryBands,
}

impl From<FeedbackReport> for FeedbackReportResponse {
    fn from(report: FeedbackReport) -> Self {
        Self {
            overall_band: report.overall_band(),
            category_bands: report.details.bands(),
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_response_markdown() {
        let response = ExportResponse::markdown("# Title".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["format"], "markdown");
        assert_eq!(json["content"], "# Title");
    }
}
