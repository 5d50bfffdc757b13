use tracing::debug;

pub mod data;
pub mod errors;
pub mod models;
pub mod recommend;

use errors::CatalogError;
use models::Course;

// 只读课程目录的访问入口
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    // 使用内置的静态课程数据
    pub fn new() -> Self {
        Self {
            courses: data::COURSES.clone(),
        }
    }

    // 测试和演示时可以注入自定义数据
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    // 全量课程列表（顺序即展示顺序）
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    pub fn find_course(&self, id: u32) -> Result<&Course, CatalogError> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .ok_or(CatalogError::CourseNotFound(id))
    }

    // 按分类过滤（精确匹配，忽略大小写）
    pub fn filter_by_category(&self, category: &str) -> Vec<&Course> {
        let wanted = category.to_lowercase();
        self.courses
            .iter()
            .filter(|c| c.category.to_lowercase() == wanted)
            .collect()
    }

    // 全文检索：按空白拆分查询词，词与词之间、字段与字段之间都是 OR 关系，
    // 匹配方式为忽略大小写的子串包含。空查询返回全部课程。
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if terms.is_empty() {
            return self.courses.iter().collect();
        }

        let hits: Vec<&Course> = self
            .courses
            .iter()
            .filter(|c| terms.iter().any(|t| course_matches(c, t)))
            .collect();
        debug!("检索 \"{}\" 命中 {} 门课程", query, hits.len());
        hits
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// 单个查询词是否命中课程的任一可检索字段
fn course_matches(course: &Course, term: &str) -> bool {
    course.title.to_lowercase().contains(term)
        || course.instructor.to_lowercase().contains(term)
        || course.description.to_lowercase().contains(term)
        || course.category.to_lowercase().contains(term)
        || course.tags.iter().any(|tag| tag.to_lowercase().contains(term))
        || course
            .certification
            .as_ref()
            .is_some_and(|cert| cert.to_lowercase().contains(term))
}
