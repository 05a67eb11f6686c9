use chrono::{DateTime, NaiveDateTime, Utc};

use crate::errors::{ClientError, Result};

/// 解析命令行传入的截止时间
///
/// 接受 RFC 3339（带时区）或 `YYYY-MM-DD HH:MM`（按 UTC 解释）。
pub fn parse_datetime(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = raw.parse::<DateTime<Utc>>() {
        return Ok(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        return Ok(naive.and_utc());
    }
    Err(ClientError::date_parse(format!(
        "Cannot parse '{raw}'. Use RFC 3339 (2025-09-25T23:59:00Z) or 'YYYY-MM-DD HH:MM' (UTC)."
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_datetime("2025-09-25T23:59:00Z").expect("should parse");
        assert_eq!(dt.to_rfc3339(), "2025-09-25T23:59:00+00:00");
    }

    #[test]
    fn test_parse_simple_format_as_utc() {
        let dt = parse_datetime("2025-09-25 23:59").expect("should parse");
        assert_eq!(dt.to_rfc3339(), "2025-09-25T23:59:00+00:00");
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_datetime("next friday").is_err());
    }
}
