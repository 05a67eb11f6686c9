//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_client_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClientError {
            $($variant(String),)*
        }

        impl ClientError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClientError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClientError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClientError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClientError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClientError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_client_errors! {
    Network("E001", "Network Error"),
    Authentication("E002", "Authentication Error"),
    Authorization("E003", "Authorization Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Api("E006", "API Error"),
    Serialization("E007", "Serialization Error"),
    Credential("E008", "Credential Store Error"),
    Config("E009", "Configuration Error"),
    FileOperation("E010", "File Operation Error"),
    DateParse("E011", "Date Parse Error"),
}

impl ClientError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClientError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClientError {
    fn from(err: chrono::ParseError) -> Self {
        ClientError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClientError::network("test").code(), "E001");
        assert_eq!(ClientError::authentication("test").code(), "E002");
        assert_eq!(ClientError::validation("test").code(), "E004");
        assert_eq!(ClientError::not_found("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClientError::authentication("test").error_type(),
            "Authentication Error"
        );
        assert_eq!(
            ClientError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ClientError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = ClientError::not_found("Course 42 does not exist");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Course 42 does not exist"));
    }
}
