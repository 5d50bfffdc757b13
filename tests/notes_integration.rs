use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use course_player::catalog::models::{Course, Lesson};
use course_player::notes::{NoteBook, notes_key};
use course_player::player::controller::LessonPlaybackController;
use course_player::player::events::PlayerEvents;
use course_player::player::models::NavTarget;
use course_player::storage::errors::StorageError;
use course_player::storage::{JsonFileStore, KvStore, MemoryStore};

// 写入必定失败的存储，用于验证内存列表的权威性
struct FailingStore;

#[async_trait]
impl KvStore for FailingStore {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }
    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("测试存储不可写".to_string()))
    }
}

#[tokio::test]
async fn test_note_round_trip() {
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());

    // (course=7, lesson=2) 上从空列表加一条笔记
    let mut book = NoteBook::load(7, 2, store.clone()).await;
    assert!(book.notes().is_empty());

    let note = book.add_note("key insight", 42).await.expect("应添加成功");
    assert_eq!(note.text, "key insight");
    assert_eq!(note.at_seconds, 42);

    // 持久化后的列表应该只有这一条
    let reloaded = NoteBook::load(7, 2, store.clone()).await;
    assert_eq!(reloaded.notes().len(), 1);
    assert_eq!(reloaded.notes()[0], note);

    // 删除后重新加载为空列表
    let mut book = NoteBook::load(7, 2, store.clone()).await;
    assert!(book.delete_note(note.id).await);
    let reloaded = NoteBook::load(7, 2, store).await;
    assert!(reloaded.notes().is_empty());
}

#[tokio::test]
async fn test_storage_key_is_namespaced() {
    let store = Arc::new(MemoryStore::new());
    let mut book = NoteBook::load(7, 2, store.clone()).await;
    book.add_note("检查存储键", 1).await.unwrap();

    assert_eq!(notes_key(7, 2), "course-notes-7-2");
    assert!(store.get("course-notes-7-2").await.is_some());
    assert!(store.get("course-notes-7-3").await.is_none());
}

#[tokio::test]
async fn test_blank_note_is_rejected() {
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    let mut book = NoteBook::load(1, 1, store.clone()).await;

    assert!(book.add_note("", 10).await.is_none());
    assert!(book.add_note("   \t  ", 10).await.is_none());
    assert!(book.notes().is_empty());
    // 空操作不会产生持久化写入
    assert!(store.get(&notes_key(1, 1)).await.is_none());
}

#[tokio::test]
async fn test_note_text_is_trimmed_and_ids_increase() {
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    let mut book = NoteBook::load(1, 1, store).await;

    let first = book.add_note("  第一条  ", 5).await.unwrap();
    let second = book.add_note("第二条", 8).await.unwrap();
    assert_eq!(first.text, "第一条");
    // 同一毫秒内连续添加也要保证ID严格递增
    assert!(second.id > first.id);
    assert_eq!(book.find(first.id).unwrap().at_seconds, 5);
}

#[tokio::test]
async fn test_memory_list_survives_write_failure() {
    let store: Arc<dyn KvStore> = Arc::new(FailingStore);
    let mut book = NoteBook::load(1, 1, store).await;

    // 写穿失败不报错，内存里的列表仍然是本次会话的权威数据
    let note = book.add_note("写失败也要保住", 3).await.expect("内存添加应成功");
    assert_eq!(book.notes().len(), 1);
    assert!(book.delete_note(note.id).await);
    assert!(book.notes().is_empty());
}

#[tokio::test]
async fn test_json_file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");

    {
        let store: Arc<dyn KvStore> = Arc::new(JsonFileStore::open(&path).await);
        let mut book = NoteBook::load(3, 1, store).await;
        book.add_note("持久化检查", 30).await.unwrap();
    }

    let store: Arc<dyn KvStore> = Arc::new(JsonFileStore::open(&path).await);
    let book = NoteBook::load(3, 1, store).await;
    assert_eq!(book.notes().len(), 1);
    assert_eq!(book.notes()[0].text, "持久化检查");
}

#[tokio::test]
async fn test_corrupted_store_file_is_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    tokio::fs::write(&path, "这不是JSON{{{{").await.unwrap();

    let store: Arc<dyn KvStore> = Arc::new(JsonFileStore::open(&path).await);
    let book = NoteBook::load(3, 1, store).await;
    assert!(book.notes().is_empty());
}

// ------------------------------------------------------------------
// 笔记跳转

#[derive(Default)]
struct RecordingEvents {
    progress: Mutex<Vec<(u32, u32, u32, u32)>>,
}

impl PlayerEvents for RecordingEvents {
    fn on_progress(&self, course_id: u32, lesson_id: u32, elapsed: u32, total: u32) {
        self.progress
            .lock()
            .unwrap()
            .push((course_id, lesson_id, elapsed, total));
    }
    fn on_complete(&self, _: u32, _: u32) {}
    fn on_navigate(&self, _: NavTarget) {}
}

fn demo_course() -> Course {
    Course {
        id: 9,
        title: "跳转测试".to_string(),
        instructor: "测试讲师".to_string(),
        category: "测试".to_string(),
        rating: None,
        students: None,
        duration: "10分钟".to_string(),
        price: None,
        original_price: None,
        lessons: vec![Lesson {
            id: 1,
            title: "唯一课时".to_string(),
            duration: "5:00".to_string(),
        }],
        description: String::new(),
        tags: vec![],
        is_paid: false,
        certification: None,
    }
}

#[tokio::test]
async fn test_jump_to_note_position_reports_progress() {
    let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
    let mut book = NoteBook::load(9, 1, store).await;
    let note = book.add_note("回看这里", 42).await.unwrap();

    let events = Arc::new(RecordingEvents::default());
    let mut controller =
        LessonPlaybackController::new(demo_course(), 1, None, events.clone()).unwrap();

    controller.jump_to_seconds(book.find(note.id).unwrap().at_seconds);
    assert_eq!(controller.elapsed_seconds(), 42);
    // 跳转是显式的进度上报边界
    assert_eq!(*events.progress.lock().unwrap(), vec![(9, 1, 42, 300)]);
}
