use serde::Deserialize;

// 后端错误响应的统一负载，形如 {"detail": "..."}
#[derive(Debug, Clone, Deserialize)]
pub struct DetailMessage {
    pub detail: String,
}

impl DetailMessage {
    /// 从响应体中尽力提取人类可读的错误信息
    ///
    /// 后端大多数错误返回 `{"detail": "..."}`；表单校验错误则返回
    /// 字段到消息列表的映射。两种都解析不出来时退回原始文本。
    pub fn extract(body: &str) -> Option<String> {
        if let Ok(payload) = serde_json::from_str::<DetailMessage>(body) {
            return Some(payload.detail);
        }
        // 字段级校验错误：{"username": ["..."], "email": ["..."]}
        if let Ok(map) =
            serde_json::from_str::<std::collections::BTreeMap<String, Vec<String>>>(body)
        {
            let joined = map
                .into_iter()
                .map(|(field, msgs)| format!("{}: {}", field, msgs.join("; ")))
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail() {
        let body = r#"{"detail": "Invalid join code."}"#;
        assert_eq!(
            DetailMessage::extract(body),
            Some("Invalid join code.".to_string())
        );
    }

    #[test]
    fn test_extract_field_errors() {
        let body = r#"{"password": ["Passwords must match."]}"#;
        assert_eq!(
            DetailMessage::extract(body),
            Some("password: Passwords must match.".to_string())
        );
    }

    #[test]
    fn test_extract_garbage_returns_none() {
        assert_eq!(DetailMessage::extract("<html>502</html>"), None);
    }
}
