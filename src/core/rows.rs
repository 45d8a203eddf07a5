use crate::domain::model::Record;
use crate::utils::error::Result;
use std::collections::HashMap;

/// Parses raw CSV content into records, keyed by the header line.
///
/// The first line names the fields; every following non-empty line becomes
/// one record in file order. Blank lines produce no record. A row whose
/// field count disagrees with the header is a fatal parse error — no
/// partial result is returned. A header-only file parses to an empty list;
/// deciding what that means is left to the caller.
pub fn parse(content: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let mut fields = HashMap::new();
        for (name, value) in headers.iter().zip(row.iter()) {
            fields.insert(name.to_string(), value.to_string());
        }
        records.push(Record::new(fields));
    }

    tracing::debug!("parsed {} records from input", records.len());
    Ok(records)
}

/// Serializes records back to CSV with columns sorted by name. Parsing the
/// output yields the same record sequence.
pub fn write(records: &[Record]) -> Result<String> {
    let mut columns: Vec<&str> = match records.first() {
        Some(first) => first.fields.keys().map(String::as_str).collect(),
        None => return Ok(String::new()),
    };
    columns.sort_unstable();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&columns)?;
    for record in records {
        let row: Vec<&str> = columns
            .iter()
            .map(|c| record.fields.get(*c).map(String::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
