use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::ReportCategory;

/// A location ranked by number of unresolved reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotspotDto {
    pub location: String,
    pub issues: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCountDto {
    pub category: ReportCategory,
    pub label: String,
    pub count: i64,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total_reports: i64,
    /// Reports not yet resolved
    pub active_cases: i64,
    pub resolved: i64,
    pub critical_issues: i64,
    /// Top locations by unresolved report count
    pub hotspots: Vec<HotspotDto>,
    /// One entry per category, zero counts included
    pub by_category: Vec<CategoryCountDto>,
    pub generated_at: DateTime<Utc>,
}
