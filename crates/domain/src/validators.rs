pub fn validate_host(host: &str) -> Result<(), String> {
    if host.is_empty() {
        return Err("Host cannot be empty".to_string());
    }
    if host.len() > 253 {
        return Err("Host cannot exceed 253 characters".to_string());
    }
    if host.chars().any(|c| c.is_whitespace()) {
        return Err("Host cannot contain whitespace".to_string());
    }
    Ok(())
}

/// Region identifiers are the directory's lowercase country/region tokens
/// (e.g. "us", "de", "kz"); they end up in a URL path segment.
pub fn validate_region(region: &str) -> Result<(), String> {
    if region.is_empty() {
        return Err("Region cannot be empty".to_string());
    }
    if !region
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(format!(
            "Region '{}' may only contain letters, digits and '-'",
            region
        ));
    }
    Ok(())
}
