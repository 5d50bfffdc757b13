use course_player::catalog::errors::CatalogError;
use course_player::catalog::{Catalog, recommend};

// ------------------------------------------------------------------
// 检索

#[test]
fn test_search_python_matches_all_fields() {
    let catalog = Catalog::new();
    let hits: Vec<u32> = catalog.search("python").iter().map(|c| c.id).collect();
    // 标题、标签、简介里含 python 的课程都要命中，其余全部排除
    assert_eq!(hits, vec![1, 2, 5]);
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = Catalog::new();
    let lower: Vec<u32> = catalog.search("python").iter().map(|c| c.id).collect();
    let upper: Vec<u32> = catalog.search("PYTHON").iter().map(|c| c.id).collect();
    assert_eq!(lower, upper);

    let hits: Vec<u32> = catalog.search("Rust").iter().map(|c| c.id).collect();
    assert_eq!(hits, vec![7]);
}

#[test]
fn test_search_terms_are_or_combined() {
    let catalog = Catalog::new();
    let hits: Vec<u32> = catalog.search("python rust").iter().map(|c| c.id).collect();
    assert_eq!(hits, vec![1, 2, 5, 7]);
}

#[test]
fn test_search_matches_instructor_and_certification() {
    let catalog = Catalog::new();
    let by_instructor: Vec<u32> = catalog.search("王立群").iter().map(|c| c.id).collect();
    assert_eq!(by_instructor, vec![1]);

    let by_cert: Vec<u32> = catalog.search("数据分析师").iter().map(|c| c.id).collect();
    assert_eq!(by_cert, vec![2]);
}

#[test]
fn test_blank_query_returns_everything() {
    let catalog = Catalog::new();
    assert_eq!(catalog.search("").len(), catalog.all().len());
    assert_eq!(catalog.search("   ").len(), catalog.all().len());
}

#[test]
fn test_search_without_hits_is_empty() {
    let catalog = Catalog::new();
    assert!(catalog.search("不存在的关键词xyz").is_empty());
}

#[test]
fn test_injected_course_list() {
    let catalog = Catalog::with_courses(vec![]);
    assert!(catalog.all().is_empty());
    assert!(catalog.search("python").is_empty());
}

// ------------------------------------------------------------------
// 目录访问

#[test]
fn test_filter_by_category() {
    let catalog = Catalog::new();
    let hits: Vec<u32> = catalog
        .filter_by_category("编程开发")
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(hits, vec![1, 3, 7]);
    assert!(catalog.filter_by_category("不存在的分类").is_empty());
}

#[test]
fn test_find_course() {
    let catalog = Catalog::new();
    assert_eq!(catalog.find_course(5).unwrap().title, "机器学习导论");
    assert!(matches!(
        catalog.find_course(404),
        Err(CatalogError::CourseNotFound(404))
    ));
}

#[test]
fn test_lesson_ids_unique_within_each_course() {
    let catalog = Catalog::new();
    for course in catalog.all() {
        let mut ids: Vec<u32> = course.lessons.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), course.lessons.len(), "课程 {} 课时ID重复", course.id);
    }
}

#[test]
fn test_display_defaults_for_missing_fields() {
    let catalog = Catalog::new();
    // 课程4没有评分和学习人数，展示时走显式默认值
    let course = catalog.find_course(4).unwrap();
    assert!(course.rating.is_none());
    assert_eq!(course.display_rating(), 4.5);
    assert_eq!(course.display_students(), 0);
}

// ------------------------------------------------------------------
// 推荐

#[test]
fn test_related_courses_prefers_same_category() {
    let catalog = Catalog::new();
    let current = catalog.find_course(1).unwrap();
    let recs: Vec<u32> = recommend::related_courses(catalog.all(), current, 4)
        .iter()
        .map(|c| c.id)
        .collect();
    // 同分类（7: 4.7, 3: 4.4）优先，其余按展示评分降序（5: 4.9, 2: 4.6）
    assert_eq!(recs, vec![7, 3, 5, 2]);
}

#[test]
fn test_related_courses_excludes_current_and_respects_limit() {
    let catalog = Catalog::new();
    let current = catalog.find_course(1).unwrap();
    let recs = recommend::related_courses(catalog.all(), current, 2);
    assert_eq!(recs.len(), 2);
    assert!(recs.iter().all(|c| c.id != current.id));
}
