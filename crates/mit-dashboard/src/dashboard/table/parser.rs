use std::io::Read;

use super::{RawTable, TableSpec};

/// Reads a published export: skips the banner rows, takes the next record as the header,
/// filters columns per `spec` and drops rows whose kept cells are all blank.
pub fn parse_table<R: Read>(reader: R, spec: &TableSpec) -> Result<RawTable, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv_reader.records().skip(spec.skip_rows);

    let header = match records.next() {
        Some(record) => record?,
        None => return Ok(RawTable::default()),
    };

    let columns: Vec<(usize, String)> = header
        .iter()
        .map(clean_header)
        .enumerate()
        .filter(|(_, name)| spec.keeps_column(name))
        .collect();

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        let cells: Vec<Option<String>> = columns
            .iter()
            .map(|(index, _)| {
                record
                    .get(*index)
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
            })
            .collect();

        if cells.iter().all(Option::is_none) {
            continue;
        }
        rows.push(cells);
    }

    let headers = columns.into_iter().map(|(_, name)| name).collect();
    Ok(RawTable::new(headers, rows))
}

fn clean_header(value: &str) -> String {
    value.replace('\u{feff}', "").trim().to_string()
}
