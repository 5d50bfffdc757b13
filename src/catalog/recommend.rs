use itertools::Itertools;

use super::models::Course;

// 推荐位默认数量
pub const DEFAULT_LIMIT: usize = 4;

// 相关课程推荐：排除当前课程，同分类优先，组内按展示评分降序，按ID去重后截断。
// 纯函数，方便单独测试。
pub fn related_courses<'a>(
    courses: &'a [Course],
    current: &Course,
    limit: usize,
) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|c| c.id != current.id)
        .sorted_by(|a, b| {
            let same_a = a.category == current.category;
            let same_b = b.category == current.category;
            same_b
                .cmp(&same_a)
                .then_with(|| b.display_rating().total_cmp(&a.display_rating()))
        })
        .unique_by(|c| c.id)
        .take(limit)
        .collect()
}
