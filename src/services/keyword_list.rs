use crate::domain::search_query::InputError;

/// Reads keywords out of an uploaded tabular file: first column only, first
/// row treated as a header, blank cells skipped.
pub fn parse_keyword_list(data: &[u8]) -> Result<Vec<String>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let mut keywords = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|e| InputError::UnreadableKeywordList(e.to_string()))?;

        if let Some(cell) = row.get(0) {
            let keyword = cell.trim();
            if !keyword.is_empty() {
                keywords.push(keyword.to_string());
            }
        }
    }

    if keywords.is_empty() {
        return Err(InputError::EmptyKeywordList);
    }

    Ok(keywords)
}
