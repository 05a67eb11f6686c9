//! 远程 API 客户端
//!
//! 唯一的 HTTP 边界：所有请求从这里发出，自动附带已保存的
//! Bearer 凭证。服务端拒绝凭证（401）时清除本地凭证，绝不静默重试；
//! 任何类别的失败都不做自动重试或退避。

use std::path::Path;
use std::sync::Arc;

use reqwest::multipart;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::{ClientError, Result};
use crate::models::DetailMessage;
use crate::models::submissions::requests::SubmissionForm;
use crate::session::CredentialStore;

pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    max_upload_size: usize,
    credentials: Arc<CredentialStore>,
}

/// 按 HTTP 状态码归类为客户端错误
///
/// 401 → 认证失败；403 → 权限不足；404 → 资源不存在；
/// 400/409 → 表单校验或冲突（带服务端 detail 信息）；其余 → API 错误。
fn classify(status: StatusCode, body: &str) -> ClientError {
    let detail = DetailMessage::extract(body);
    match status {
        StatusCode::UNAUTHORIZED => ClientError::authentication(
            detail.unwrap_or_else(|| "Credential missing, expired or invalid".to_string()),
        ),
        StatusCode::FORBIDDEN => ClientError::authorization(
            detail.unwrap_or_else(|| "You do not have permission to perform this action".to_string()),
        ),
        StatusCode::NOT_FOUND => {
            ClientError::not_found(detail.unwrap_or_else(|| "Resource not found".to_string()))
        }
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
            ClientError::validation(detail.unwrap_or_else(|| "Request rejected by server".to_string()))
        }
        other => ClientError::api(
            detail.unwrap_or_else(|| format!("Server returned unexpected status {other}")),
        ),
    }
}

impl RemoteClient {
    pub fn new(config: &AppConfig, credentials: Arc<CredentialStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.api.timeout))
            .connect_timeout(std::time::Duration::from_secs(config.api.connect_timeout))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url().to_string(),
            max_upload_size: config.api.max_upload_size,
            credentials,
        })
    }

    /// 资源路径拼接为完整 URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // 附带凭证并发送，失败状态映射为 ClientError
    async fn send(&self, mut builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        if let Some(token) = self.credentials.access_token() {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = classify(status, &body);
        if status == StatusCode::UNAUTHORIZED {
            // 凭证被服务端拒绝：清除本地凭证，交由用户重新登录
            debug!("Server rejected credential, clearing local session");
            self.credentials.clear();
        }
        Err(err)
    }

    /// GET 读取资源
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.json().await?)
    }

    /// POST 创建资源
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    /// POST 无响应体的动作（如标记通知已读）
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        self.send(self.http.post(self.url(path))).await?;
        Ok(())
    }

    /// PUT 整体更新资源
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    /// PATCH 部分更新资源
    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self.send(self.http.patch(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    /// DELETE 删除资源
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    /// POST multipart 表单（首次提交作业）
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &SubmissionForm,
    ) -> Result<T> {
        let form = self.build_submission_form(form).await?;
        let response = self
            .send(self.http.post(self.url(path)).multipart(form))
            .await?;
        Ok(response.json().await?)
    }

    /// PATCH multipart 表单（重新提交作业）
    pub async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &SubmissionForm,
    ) -> Result<T> {
        let form = self.build_submission_form(form).await?;
        let response = self
            .send(self.http.patch(self.url(path)).multipart(form))
            .await?;
        Ok(response.json().await?)
    }

    // 组装提交表单：可选文件 + 可选附言
    async fn build_submission_form(&self, form: &SubmissionForm) -> Result<multipart::Form> {
        let mut parts = multipart::Form::new();
        if let Some(path) = &form.file {
            parts = parts.part("file", self.file_part(path).await?);
        }
        if let Some(description) = &form.description {
            parts = parts.text("description", description.clone());
        }
        Ok(parts)
    }

    async fn file_part(&self, path: &Path) -> Result<multipart::Part> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ClientError::file_operation(format!("{}: {e}", path.display())))?;
        if bytes.len() > self.max_upload_size {
            return Err(ClientError::validation(format!(
                "File {} exceeds the upload limit of {} bytes",
                path.display(),
                self.max_upload_size
            )));
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "submission.bin".to_string());
        Ok(multipart::Part::bytes(bytes).file_name(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::responses::TokenPair;
    use crate::models::users::entities::User;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn client() -> RemoteClient {
        let mut config = AppConfig::load().expect("default config should load");
        config.api.base_url = "http://example.com/api/".to_string();
        let credentials = Arc::new(CredentialStore::open(
            std::env::temp_dir().join("assignment-cli-client-test/credentials.json"),
        ));
        RemoteClient::new(&config, credentials).expect("client should build")
    }

    fn temp_path(prefix: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "{}-{}/credentials.json",
            prefix,
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock")
                .as_nanos()
        ))
    }

    // 本地起一个只会回 401 的服务，返回其 API 基础地址
    async fn spawn_unauthorized_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind local listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let body = r#"{"detail": "Token expired"}"#;
                let response = format!(
                    "HTTP/1.1 401 Unauthorized\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });
        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn test_rejected_credential_is_cleared_not_retried() {
        // 服务端拒绝凭证：错误归类为认证失败，本地凭证随即被清除
        let base_url = spawn_unauthorized_server().await;
        let credentials = Arc::new(CredentialStore::open(temp_path("assignment-cli-401")));
        credentials
            .store(TokenPair {
                access: "stale-access".to_string(),
                refresh: "stale-refresh".to_string(),
            })
            .expect("store");
        assert!(credentials.is_present());

        let mut config = AppConfig::load().expect("default config should load");
        config.api.base_url = base_url;
        let client = RemoteClient::new(&config, credentials.clone()).expect("client should build");

        let result: Result<User> = client.get("auth/me/").await;
        let err = result.expect_err("401 must surface as an error");
        assert_eq!(err.code(), ClientError::authentication("").code());
        assert_eq!(err.message(), "Token expired");
        assert!(!credentials.is_present());
    }

    #[test]
    fn test_url_joining() {
        let client = client();
        assert_eq!(client.url("auth/me/"), "http://example.com/api/auth/me/");
        assert_eq!(client.url("/courses/"), "http://example.com/api/courses/");
    }

    #[test]
    fn test_classify_authentication() {
        let err = classify(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.code(), ClientError::authentication("").code());
    }

    #[test]
    fn test_classify_validation_with_detail() {
        let err = classify(StatusCode::BAD_REQUEST, r#"{"detail": "Join code is required."}"#);
        assert_eq!(err.code(), ClientError::validation("").code());
        assert_eq!(err.message(), "Join code is required.");
    }

    #[test]
    fn test_classify_conflict_is_validation() {
        let err = classify(StatusCode::CONFLICT, r#"{"detail": "Duplicate join code."}"#);
        assert_eq!(err.code(), ClientError::validation("").code());
    }

    #[test]
    fn test_classify_not_found() {
        let err = classify(StatusCode::NOT_FOUND, r#"{"detail": "Invalid join code."}"#);
        assert_eq!(err.code(), ClientError::not_found("").code());
        assert_eq!(err.message(), "Invalid join code.");
    }

    #[test]
    fn test_classify_server_error_keeps_status() {
        let err = classify(StatusCode::BAD_GATEWAY, "<html>502</html>");
        assert_eq!(err.code(), ClientError::api("").code());
        assert!(err.message().contains("502"));
    }
}
