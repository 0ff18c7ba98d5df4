#[cfg(test)]
use crate::features::reports::models::NewReport;

#[cfg(test)]
use fake::{
    faker::{
        address::en::CityName,
        internet::en::SafeEmail,
        lorem::en::{Paragraph, Sentence},
        name::en::Name,
    },
    Fake,
};

#[cfg(test)]
const CATEGORIES: [&str; 6] = [
    "environmental",
    "property",
    "health",
    "compensation",
    "social",
    "other",
];

#[cfg(test)]
const SEVERITIES: [&str; 4] = ["low", "medium", "high", "critical"];

/// Random but well-formed report data for store tests
#[cfg(test)]
pub fn fake_new_report() -> NewReport {
    let category = CATEGORIES[(0..CATEGORIES.len()).fake::<usize>()];
    let severity = SEVERITIES[(0..SEVERITIES.len()).fake::<usize>()];
    let days_ago: i64 = (0i64..365).fake();

    NewReport {
        name: Name().fake(),
        phone: "+233123456789".to_string(),
        email: Some(SafeEmail().fake()),
        location: format!("{}, Ashanti Region", CityName().fake::<String>()),
        category: category.to_string(),
        severity: severity.to_string(),
        title: Sentence(3..7).fake(),
        description: Paragraph(1..3).fake(),
        date_occurred: chrono::Utc::now().date_naive() - chrono::Duration::days(days_ago),
    }
}

/// Report submission body in the JSON shape the web form posts
#[cfg(test)]
pub fn report_form_json() -> serde_json::Value {
    serde_json::json!({
        "name": Name().fake::<String>(),
        "phone": "+233 24 123 4567",
        "email": "",
        "location": "Konongo, Ashanti Region",
        "category": "environmental",
        "severity": "high",
        "title": "River turned brown after dredging",
        "description": "Dredging upstream has made the river unusable for drinking.",
        "dateOccurred": "2024-02-01"
    })
}
