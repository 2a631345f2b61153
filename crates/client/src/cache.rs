//! 离线缓存
//!
//! 以规范化的查询词为 key 保存最近一次成功的搜索结果。
//! 可选地持久化到 JSON 文件：先写临时文件再重命名，避免中途崩溃留下半截文件。
//! 同一缓存的多次写入串行执行，每次使用独立的临时文件名。

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use mandi_domain::PriceRecord;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::Result;

/// 缓存条目
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub records: Vec<PriceRecord>,
    pub cached_at: DateTime<Utc>,
}

/// 搜索结果离线缓存
#[derive(Debug, Default)]
pub struct OfflineCache {
    entries: DashMap<String, CacheEntry>,
    path: Option<PathBuf>,
    /// 串行化文件写入
    write_lock: Mutex<()>,
}

impl OfflineCache {
    /// 仅内存缓存
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// 从文件加载缓存，文件不存在时返回空缓存
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = DashMap::new();

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let stored: BTreeMap<String, CacheEntry> = serde_json::from_slice(&bytes)?;
                info!(path = %path.display(), entries = stored.len(), "已加载离线缓存");
                for (key, entry) in stored {
                    entries.insert(key, entry);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "缓存文件不存在，使用空缓存");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self {
            entries,
            path: Some(path),
            write_lock: Mutex::new(()),
        })
    }

    /// 查询词规范化：去除首尾空白并转小写
    pub fn normalize(query: &str) -> String {
        query.trim().to_lowercase()
    }

    /// 写入（覆盖）某个查询词的结果
    pub fn insert(&self, query: &str, records: Vec<PriceRecord>) {
        self.entries.insert(
            Self::normalize(query),
            CacheEntry {
                records,
                cached_at: Utc::now(),
            },
        );
    }

    /// 读取某个查询词的缓存条目
    pub fn get(&self, query: &str) -> Option<CacheEntry> {
        self.entries
            .get(&Self::normalize(query))
            .map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 持久化到文件；纯内存缓存时直接返回
    pub async fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let _guard = self.write_lock.lock().await;

        // 持锁后再取快照，保证后写入的文件包含先前所有条目
        let snapshot: BTreeMap<String, CacheEntry> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = temp_path(path);
        if let Err(e) = write_then_rename(&tmp, path, bytes).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e);
        }

        debug!(path = %path.display(), entries = snapshot.len(), "离线缓存已写入");
        Ok(())
    }
}

/// 与目标文件同目录的唯一临时文件名，保证 rename 不跨文件系统
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cache".to_string());
    path.with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4()))
}

async fn write_then_rename(tmp: &Path, path: &Path, bytes: Vec<u8>) -> Result<()> {
    tokio::fs::write(tmp, bytes).await?;
    tokio::fs::rename(tmp, path).await?;
    Ok(())
}
