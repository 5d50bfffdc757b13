use serde::{Deserialize, Serialize};

// 评分缺失时的展示默认值
pub const DEFAULT_RATING: f32 = 4.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub category: String,
    // 评分和学习人数可能缺失，展示时走显式的默认值解析
    pub rating: Option<f32>,
    pub students: Option<u32>,
    pub duration: String,
    pub price: Option<f32>,
    pub original_price: Option<f32>,
    pub lessons: Vec<Lesson>,
    pub description: String,
    pub tags: Vec<String>,
    pub is_paid: bool,
    pub certification: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32, // 课程内唯一
    pub title: String,
    pub duration: String, // "M:SS" / "MM:SS" / "H:MM:SS"
}

impl Course {
    // 缺失评分时的展示值
    pub fn display_rating(&self) -> f32 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    // 缺失学习人数时的展示值
    pub fn display_students(&self) -> u32 {
        self.students.unwrap_or(0)
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    // 按课时ID查找，返回其在课时列表中的位置
    pub fn lesson_index(&self, lesson_id: u32) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == lesson_id)
    }

    pub fn find_lesson(&self, lesson_id: u32) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }
}
