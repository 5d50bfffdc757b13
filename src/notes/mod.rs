use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

pub mod models;

use crate::storage::KvStore;
use models::Note;

// 存储键的命名空间前缀
pub const NOTES_KEY_PREFIX: &str = "course-notes";

// (课程, 课时) 对应的存储键
pub fn notes_key(course_id: u32, lesson_id: u32) -> String {
    format!("{}-{}-{}", NOTES_KEY_PREFIX, course_id, lesson_id)
}

// 某个课时的笔记列表，追加式，可按ID删除。
// 内存中的列表是本次会话的权威数据，写穿失败只记日志不报错。
pub struct NoteBook {
    course_id: u32,
    lesson_id: u32,
    notes: Vec<Note>,
    store: Arc<dyn KvStore>,
}

impl NoteBook {
    // 从存储加载，读不到或反序列化失败都按空列表处理
    pub async fn load(course_id: u32, lesson_id: u32, store: Arc<dyn KvStore>) -> Self {
        let key = notes_key(course_id, lesson_id);
        let notes = match store.get(&key).await {
            Some(raw) => match serde_json::from_str::<Vec<Note>>(&raw) {
                Ok(notes) => notes,
                Err(e) => {
                    warn!("笔记数据 {} 反序列化失败，按空列表处理: {}", key, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!("加载笔记 {}: {} 条", key, notes.len());
        Self {
            course_id,
            lesson_id,
            notes,
            store,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn find(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    // 添加一条笔记并写穿存储。空白文本是空操作，返回 None。
    pub async fn add_note(&mut self, text: &str, at_seconds: u32) -> Option<Note> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let now = Utc::now();
        // 同一毫秒内连续添加时保证ID仍然严格递增
        let id = self
            .notes
            .last()
            .map(|n| n.id + 1)
            .unwrap_or_default()
            .max(now.timestamp_millis());

        let note = Note {
            id,
            text: trimmed.to_string(),
            at_seconds,
            created_at: now,
        };
        self.notes.push(note.clone());
        self.persist().await;
        Some(note)
    }

    // 按ID删除并重新持久化，返回是否删除了内容
    pub async fn delete_note(&mut self, id: i64) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return false;
        }
        self.persist().await;
        true
    }

    async fn persist(&self) {
        let key = notes_key(self.course_id, self.lesson_id);
        let raw = match serde_json::to_string(&self.notes) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("笔记序列化失败: {}", e);
                return;
            }
        };
        // 写失败不打断用户操作，内存列表仍然有效
        if let Err(e) = self.store.set(&key, &raw).await {
            warn!("笔记写入存储失败 ({}): {}", key, e);
        }
    }
}
