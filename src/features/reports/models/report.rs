use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Report category offered by the submission form
///
/// The store keeps categories as opaque strings; this enum only classifies
/// them for display and aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportCategory {
    Environmental,
    Property,
    Health,
    Compensation,
    Social,
    Other,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 6] = [
        ReportCategory::Environmental,
        ReportCategory::Property,
        ReportCategory::Health,
        ReportCategory::Compensation,
        ReportCategory::Social,
        ReportCategory::Other,
    ];

    /// Classify a stored category value.
    ///
    /// Accepts both form slugs ("property") and display labels
    /// ("Property Damage"), case-insensitively. Anything else is `Other`.
    pub fn classify(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "environmental" => ReportCategory::Environmental,
            "property" | "property damage" => ReportCategory::Property,
            "health" | "health & safety" => ReportCategory::Health,
            "compensation" => ReportCategory::Compensation,
            "social" | "social impact" => ReportCategory::Social,
            _ => ReportCategory::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportCategory::Environmental => "Environmental",
            ReportCategory::Property => "Property Damage",
            ReportCategory::Health => "Health & Safety",
            ReportCategory::Compensation => "Compensation",
            ReportCategory::Social => "Social Impact",
            ReportCategory::Other => "Other",
        }
    }
}

/// Report severity offered by the submission form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportSeverity {
    /// Parse a stored severity value, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(ReportSeverity::Low),
            "medium" => Some(ReportSeverity::Medium),
            "high" => Some(ReportSeverity::High),
            "critical" => Some(ReportSeverity::Critical),
            _ => None,
        }
    }
}

/// A community grievance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Reference number, `GR-<year>-<suffix>`
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub location: String,
    pub category: String,
    pub severity: String,
    pub title: String,
    pub description: String,
    pub date_occurred: NaiveDate,
    pub status: String,
    pub date_submitted: NaiveDate,
}

/// Caller-supplied report data; id, status and submission date are assigned by the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub location: String,
    pub category: String,
    pub severity: String,
    pub title: String,
    pub description: String,
    pub date_occurred: NaiveDate,
}

impl Report {
    pub fn from_new(id: String, data: NewReport, status: &str, date_submitted: NaiveDate) -> Self {
        Self {
            id,
            name: data.name,
            phone: data.phone,
            email: data.email,
            location: data.location,
            category: data.category,
            severity: data.severity,
            title: data.title,
            description: data.description,
            date_occurred: data.date_occurred,
            status: status.to_string(),
            date_submitted,
        }
    }

    pub fn category_kind(&self) -> ReportCategory {
        ReportCategory::classify(&self.category)
    }

    pub fn severity_level(&self) -> Option<ReportSeverity> {
        ReportSeverity::parse(&self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_classify_slugs_and_labels() {
        assert_eq!(
            ReportCategory::classify("environmental"),
            ReportCategory::Environmental
        );
        assert_eq!(
            ReportCategory::classify("Property Damage"),
            ReportCategory::Property
        );
        assert_eq!(
            ReportCategory::classify("Health & Safety"),
            ReportCategory::Health
        );
        assert_eq!(ReportCategory::classify("SOCIAL"), ReportCategory::Social);
        assert_eq!(ReportCategory::classify("mystery"), ReportCategory::Other);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!(ReportSeverity::parse("High"), Some(ReportSeverity::High));
        assert_eq!(
            ReportSeverity::parse(" critical "),
            Some(ReportSeverity::Critical)
        );
        assert_eq!(ReportSeverity::parse("urgent"), None);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = Report {
            id: "GR-2024-089".to_string(),
            name: "Kwame A.".to_string(),
            phone: "+233123456789".to_string(),
            email: None,
            location: "Konongo, Ashanti Region".to_string(),
            category: "Environmental".to_string(),
            severity: "High".to_string(),
            title: "Water contamination".to_string(),
            description: "Runoff".to_string(),
            date_occurred: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            status: "Under Review".to_string(),
            date_submitted: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dateOccurred"], "2024-01-10");
        assert_eq!(json["dateSubmitted"], "2024-01-15");
        assert!(json["email"].is_null());
    }
}
