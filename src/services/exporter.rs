use anyhow::Context;

use crate::domain::record::ClassifiedRecord;

pub const CSV_HEADER: [&str; 5] = ["Rank", "Keyword", "Title", "URL", "Contains Month"];

pub const BULK_EXPORT_FILENAME: &str = "bulk_scan_results.csv";

/// Serializes records to a CSV blob with a header row. Field order matches
/// `CSV_HEADER`; quoting and escaping are the csv crate's defaults.
pub fn export_csv(records: &[ClassifiedRecord]) -> anyhow::Result<Vec<u8>> {
    let mut buffer = Vec::new();

    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer
            .write_record(CSV_HEADER)
            .context("Failed to write CSV header")?;

        for record in records {
            writer
                .write_record([
                    record.rank.to_string().as_str(),
                    record.keyword.as_str(),
                    record.title.as_str(),
                    record.url.as_str(),
                    if record.contains_month { "true" } else { "false" },
                ])
                .context("Failed to write CSV record")?;
        }

        writer.flush().context("Failed to flush CSV writer")?;
    }

    Ok(buffer)
}

/// Download filename for a single-keyword export, derived from the keyword.
pub fn single_export_filename(keyword: &str) -> String {
    let slug: String = keyword
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let slug = slug.trim_matches('_');

    match slug.is_empty() {
        true => "scan_results.csv".to_string(),
        false => format!("{}_results.csv", slug),
    }
}
