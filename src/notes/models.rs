use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

// 一条学习笔记，挂在 (课程, 课时) 上
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    // 创建时间戳（毫秒）作为ID
    pub id: i64,
    pub text: String,
    // 记笔记时的播放位置（秒），跳转回放用
    pub at_seconds: u32,
    pub created_at: DateTime<Utc>,
}
