use crate::domain::model::StaffRecord;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct JsonExport<'a> {
    exported_at: DateTime<Utc>,
    count: usize,
    records: &'a [StaffRecord],
}

pub fn records_to_json(records: &[StaffRecord]) -> Result<String> {
    let export = JsonExport {
        exported_at: Utc::now(),
        count: records.len(),
        records,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// CSV with one row per record; absent fields render as empty cells.
pub fn records_to_csv(records: &[StaffRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "source_url", "room", "office_hour", "email"])?;

    for record in records {
        writer.write_record([
            record.name.as_str(),
            record.source_url.as_str(),
            record.room.as_deref().unwrap_or(""),
            record.office_hour.as_deref().unwrap_or(""),
            record.email.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    Ok(String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?)
}
