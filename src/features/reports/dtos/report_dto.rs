use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::NewReport;
use crate::shared::validation::PHONE_REGEX;

/// Request DTO for submitting a grievance
///
/// Category and severity are free strings; the form offers
/// environmental | property | health | compensation | social | other and
/// low | medium | high | critical.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDto {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(regex(
        path = *PHONE_REGEX,
        message = "Phone must contain only digits, spaces or hyphens"
    ))]
    pub phone: String,

    /// Optional contact email; an empty string is treated as absent
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Location is required"))]
    pub location: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub severity: String,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 10000,
        message = "Description must be 1-10000 characters"
    ))]
    pub description: String,

    pub date_occurred: NaiveDate,
}

impl CreateReportDto {
    /// Treat a blank email the way the web form sends it: as no email
    pub fn normalized(mut self) -> Self {
        if self.email.as_deref().is_some_and(|e| e.trim().is_empty()) {
            self.email = None;
        }
        self
    }
}

impl From<CreateReportDto> for NewReport {
    fn from(dto: CreateReportDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            location: dto.location,
            category: dto.category,
            severity: dto.severity,
            title: dto.title,
            description: dto.description,
            date_occurred: dto.date_occurred,
        }
    }
}

/// Response DTO for a created report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportCreatedDto {
    /// Reference number to quote in follow-ups
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::report_form_json;

    #[test]
    fn test_form_body_deserializes_and_validates() {
        let dto: CreateReportDto = serde_json::from_value(report_form_json()).unwrap();
        let dto = dto.normalized();

        assert!(dto.email.is_none());
        assert!(dto.validate().is_ok());
        assert_eq!(dto.date_occurred, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_missing_title_fails_validation() {
        let mut body = report_form_json();
        body["title"] = serde_json::json!("");
        let dto: CreateReportDto = serde_json::from_value(body).unwrap();

        let err = dto.normalized().validate().unwrap_err();
        assert!(err.field_errors().contains_key("title"));
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let mut body = report_form_json();
        body["email"] = serde_json::json!("not-an-email");
        let dto: CreateReportDto = serde_json::from_value(body).unwrap();

        let err = dto.normalized().validate().unwrap_err();
        assert!(err.field_errors().contains_key("email"));
    }

    #[test]
    fn test_unknown_category_is_accepted() {
        let mut body = report_form_json();
        body["category"] = serde_json::json!("galamsey");
        let dto: CreateReportDto = serde_json::from_value(body).unwrap();

        assert!(dto.normalized().validate().is_ok());
    }
}
