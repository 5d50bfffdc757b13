use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("课程 {course_id} 中未找到课时: {lesson_id}")]
    LessonNotFound { course_id: u32, lesson_id: u32 },
    #[error("课程没有任何课时: {0}")]
    EmptyCourse(u32),
}
