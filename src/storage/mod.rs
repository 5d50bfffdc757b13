use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, warn};

pub mod errors;

use errors::StorageError;

// 窄接口的键值存储能力，以依赖注入的方式交给上层，
// 读不到一律当作"没有数据"，由调用方自行兜底。
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ------------------------------------------------------------------

// 纯内存实现，测试和演示用
#[derive(Default)]
pub struct MemoryStore {
    map: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).map(|v| v.value().clone())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ------------------------------------------------------------------

// 落盘实现：整个存储是一个 JSON 文件里的字符串字典。
// 写入时先写临时文件再改名，避免写一半留下损坏文件。
pub struct JsonFileStore {
    path: PathBuf,
    cache: DashMap<String, String>,
}

impl JsonFileStore {
    pub async fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let cache = DashMap::new();

        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => {
                    debug!("从 {:?} 加载了 {} 条记录", path, map.len());
                    for (k, v) in map {
                        cache.insert(k, v);
                    }
                }
                Err(e) => {
                    // 文件损坏按空库处理
                    warn!("存储文件 {:?} 解析失败，按空数据处理: {}", path, e);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("存储文件 {:?} 不存在，首次写入时创建", path);
            }
            Err(e) => {
                warn!("读取存储文件 {:?} 失败，按空数据处理: {}", path, e);
            }
        }

        Self { path, cache }
    }

    async fn flush(&self) -> Result<(), StorageError> {
        let snapshot: HashMap<String, String> = self
            .cache
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        let raw = serde_json::to_string_pretty(&snapshot)?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KvStore for JsonFileStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key).map(|v| v.value().clone())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.cache.insert(key.to_string(), value.to_string());
        self.flush().await
    }
}
