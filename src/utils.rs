use std::time::Duration;

/// Lowercases and trims a free-text query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub fn format_millis(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_query_trims_and_lowercases() {
        assert_eq!(normalize_query("  MaDrId \n"), "madrid");
    }

    #[test]
    fn normalize_query_handles_accents() {
        assert_eq!(normalize_query("MÁLAGA"), "málaga");
    }

    #[test]
    fn normalize_query_blank_is_empty() {
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn format_millis_rounds_down() {
        assert_eq!(format_millis(Duration::from_micros(1_999)), "1ms");
        assert_eq!(format_millis(Duration::from_secs(2)), "2000ms");
    }
}
