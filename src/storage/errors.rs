use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),
    #[error("序列化错误: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("存储不可用: {0}")]
    Unavailable(String),
}
