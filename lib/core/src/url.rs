// Id extraction from graph store resource URLs.
//
// Example node URL: "http://localhost:7474/db/data/node/1700" -> id "1700".

/// Returns the final path segment of `url`, trimmed of whitespace.
///
/// Trailing separators are ignored, so `.../node/7/` and `.../node/7` both
/// yield `7`. The result is not validated as numeric; callers treat it as an
/// opaque id.
pub fn extract_id(url: &str) -> &str {
    let trimmed = url.trim().trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(pos) => trimmed[pos + 1..].trim(),
        None => trimmed,
    }
}

/// Builds the node resource URL `<base>/node/<id>`.
pub fn node_url(base_url: &str, id: &str) -> String {
    format!("{}/node/{}", base_url.trim().trim_end_matches('/'), id.trim())
}
