mod csv_formatter;

pub use csv_formatter::reports_to_csv;

#[cfg(test)]
pub use csv_formatter::CSV_HEADER;
