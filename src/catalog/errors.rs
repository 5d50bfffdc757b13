use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("未找到课程: {0}")]
    CourseNotFound(u32),
    #[error("课程 {course_id} 中未找到课时: {lesson_id}")]
    LessonNotFound { course_id: u32, lesson_id: u32 },
}
