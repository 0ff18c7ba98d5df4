use chrono::NaiveDate;

use crate::features::reports::models::Report;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Demo grievances loaded into the store at startup, most recent first
pub fn demo_reports() -> Vec<Report> {
    vec![
        Report {
            id: "GR-2024-089".to_string(),
            title: "Water contamination from mining runoff".to_string(),
            location: "Konongo, Ashanti Region".to_string(),
            category: "Environmental".to_string(),
            severity: "High".to_string(),
            status: "Under Review".to_string(),
            date_occurred: date(2024, 1, 10),
            date_submitted: date(2024, 1, 15),
            name: "Kwame A.".to_string(),
            phone: "+233123456789".to_string(),
            email: None,
            description: "Mining activities have contaminated our water sources, making them unsafe for consumption.".to_string(),
        },
        Report {
            id: "GR-2024-088".to_string(),
            title: "Excessive dust affecting respiratory health".to_string(),
            location: "Obuasi, Ashanti Region".to_string(),
            category: "Health & Safety".to_string(),
            severity: "Medium".to_string(),
            status: "In Progress".to_string(),
            date_occurred: date(2024, 1, 12),
            date_submitted: date(2024, 1, 14),
            name: "Ama B.".to_string(),
            phone: "+233123456790".to_string(),
            email: Some("ama.b@email.com".to_string()),
            description: "Heavy machinery operations create excessive dust that affects our breathing and health.".to_string(),
        },
        Report {
            id: "GR-2024-087".to_string(),
            title: "Property damage from blasting operations".to_string(),
            location: "Tarkwa, Western Region".to_string(),
            category: "Property Damage".to_string(),
            severity: "High".to_string(),
            status: "Resolved".to_string(),
            date_occurred: date(2024, 1, 8),
            date_submitted: date(2024, 1, 13),
            name: "Kofi C.".to_string(),
            phone: "+233123456791".to_string(),
            email: None,
            description: "Blasting activities have caused cracks in our buildings and property damage.".to_string(),
        },
        Report {
            id: "GR-2024-086".to_string(),
            title: "Unpaid compensation for land acquisition".to_string(),
            location: "Prestea, Western Region".to_string(),
            category: "Compensation".to_string(),
            severity: "Critical".to_string(),
            status: "Escalated".to_string(),
            date_occurred: date(2024, 1, 5),
            date_submitted: date(2024, 1, 12),
            name: "Akua D.".to_string(),
            phone: "+233123456792".to_string(),
            email: Some("akua.d@email.com".to_string()),
            description: "We have not received promised compensation for our land that was acquired for mining operations.".to_string(),
        },
    ]
}
