//! CSV rendering of grievance reports.

use crate::features::reports::models::Report;

pub const CSV_HEADER: &str = "ID,Title,Location,Category,Severity,Status,Date Occurred,Date Submitted,Reporter Name,Phone,Email,Description";

/// Quote a free-text field when it contains a delimiter, quote or line break.
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn report_row(report: &Report) -> String {
    [
        report.id.clone(),
        escape_field(&report.title),
        escape_field(&report.location),
        report.category.clone(),
        report.severity.clone(),
        report.status.clone(),
        report.date_occurred.to_string(),
        report.date_submitted.to_string(),
        escape_field(&report.name),
        escape_field(&report.phone),
        escape_field(report.email.as_deref().unwrap_or_default()),
        escape_field(&report.description),
    ]
    .join(",")
}

/// Render `reports` in the given order, one line per report after the header.
pub fn reports_to_csv(reports: &[Report]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(reports.iter().map(report_row))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::demo_reports;

    #[test]
    fn test_escape_field_doubles_quotes() {
        assert_eq!(escape_field(r#"He said "stop""#), r#""He said ""stop""""#);
    }

    #[test]
    fn test_escape_field_quotes_delimiters() {
        assert_eq!(escape_field("Tarkwa, Western"), "\"Tarkwa, Western\"");
        assert_eq!(escape_field("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(escape_field("plain text"), "plain text");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(reports_to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn test_rows_follow_input_order() {
        let reports = demo_reports();
        let csv = reports_to_csv(&reports);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), reports.len() + 1);
        assert_eq!(lines[0], CSV_HEADER);
        for (line, report) in lines[1..].iter().zip(&reports) {
            assert!(line.starts_with(&format!("{},", report.id)));
        }
    }

    #[test]
    fn test_row_columns() {
        let mut report = demo_reports().remove(0);
        report.title = r#"He said "stop""#.to_string();
        report.location = "Obuasi, Ashanti Region".to_string();
        report.email = None;

        let row = report_row(&report);
        assert!(row.contains(r#","He said ""stop""","Obuasi, Ashanti Region","#));
        assert!(row.contains(&format!(
            ",{},{},{},",
            report.category, report.severity, report.status
        )));
        assert!(row.contains(&format!(",{},,", report.phone)));
    }
}
