mod table;

pub use table::Table;

/// 统一的时间展示格式
pub fn format_datetime(dt: &chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// 可选时间展示，缺失显示 "-"
pub fn format_opt_datetime(dt: &Option<chrono::DateTime<chrono::Utc>>) -> String {
    match dt {
        Some(dt) => format_datetime(dt),
        None => "-".to_string(),
    }
}

/// 可选字符串展示，缺失显示 "-"
pub fn format_opt(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => "-".to_string(),
    }
}
