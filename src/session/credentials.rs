use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::errors::{ClientError, Result};
use crate::models::auth::responses::TokenPair;

/// 凭证存储
///
/// 令牌对保存在一个 JSON 文件里；内存中的副本用读写锁保护。
/// 并发请求只读取访问令牌，仅 login/logout（用户手动、串行触发）
/// 会写入。
pub struct CredentialStore {
    path: PathBuf,
    tokens: RwLock<Option<TokenPair>>,
}

impl CredentialStore {
    /// 打开凭证存储，若文件存在则加载其中的令牌对
    ///
    /// 文件损坏按无凭证处理并删除，不让一次坏写入卡死后续登录。
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let tokens = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<TokenPair>(&raw) {
                Ok(pair) => Some(pair),
                Err(e) => {
                    debug!("Discarding corrupt credential file {}: {}", path.display(), e);
                    let _ = std::fs::remove_file(&path);
                    None
                }
            },
            Err(_) => None,
        };
        Self {
            path,
            tokens: RwLock::new(tokens),
        }
    }

    /// 是否存在已保存的凭证
    pub fn is_present(&self) -> bool {
        self.tokens.read().expect("credential lock poisoned").is_some()
    }

    /// 当前访问令牌
    pub fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .expect("credential lock poisoned")
            .as_ref()
            .map(|pair| pair.access.clone())
    }

    /// 保存令牌对并写入磁盘
    pub fn store(&self, pair: TokenPair) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ClientError::credential(format!("{}: {e}", parent.display())))?;
            }
        }
        let raw = serde_json::to_string_pretty(&pair)?;
        std::fs::write(&self.path, raw)
            .map_err(|e| ClientError::credential(format!("{}: {e}", self.path.display())))?;
        *self.tokens.write().expect("credential lock poisoned") = Some(pair);
        Ok(())
    }

    /// 同步清除凭证（内存与磁盘），不发任何远程请求
    pub fn clear(&self) {
        *self.tokens.write().expect("credential lock poisoned") = None;
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                debug!("Failed to remove credential file {}: {}", self.path.display(), e);
            }
        }
    }
}
