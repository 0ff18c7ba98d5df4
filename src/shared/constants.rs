// =============================================================================
// REPORTS
// =============================================================================

/// Prefix of every grievance reference number (GR-<year>-<suffix>)
pub const REPORT_ID_PREFIX: &str = "GR";

/// Status assigned to every newly submitted report
pub const STATUS_UNDER_REVIEW: &str = "Under Review";

pub const STATUS_RESOLVED: &str = "Resolved";

// =============================================================================
// ASSISTANT
// =============================================================================

/// Number of prior conversation entries forwarded to the completion service
pub const MAX_HISTORY_MESSAGES: usize = 10;

pub const COMPLETION_MAX_TOKENS: u32 = 500;

pub const COMPLETION_TEMPERATURE: f32 = 0.7;

// =============================================================================
// EXPORT / DASHBOARD
// =============================================================================

pub const EXPORT_FILENAME: &str = "mining-reports.csv";

/// Maximum number of hotspots returned by the dashboard summary
pub const HOTSPOT_LIMIT: usize = 5;
