use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    /// Always "OK" while the process is serving
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
}
