use lazy_static::lazy_static;

use super::models::{Course, Lesson};

// 内置的静态课程目录（只读数据源）
lazy_static! {
    pub static ref COURSES: Vec<Course> = build_courses();
}

fn lesson(id: u32, title: &str, duration: &str) -> Lesson {
    Lesson {
        id,
        title: title.to_string(),
        duration: duration.to_string(),
    }
}

fn build_courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "Python 零基础入门".to_string(),
            instructor: "王立群".to_string(),
            category: "编程开发".to_string(),
            rating: Some(4.8),
            students: Some(12840),
            duration: "6小时30分".to_string(),
            price: Some(99.0),
            original_price: Some(199.0),
            lessons: vec![
                lesson(1, "环境搭建与 Hello World", "8:24"),
                lesson(2, "变量与基本类型", "12:30"),
                lesson(3, "流程控制", "15:07"),
                lesson(4, "函数与模块", "21:45"),
                lesson(5, "综合小项目", "1:02:18"),
            ],
            description: "面向完全没有编程经验的学员，从安装 Python 开始，一步一步写出第一个小项目。".to_string(),
            tags: vec!["python".to_string(), "入门".to_string(), "编程".to_string()],
            is_paid: true,
            certification: Some("Python 初级认证".to_string()),
        },
        Course {
            id: 2,
            title: "Python 数据分析实战".to_string(),
            instructor: "陈思雨".to_string(),
            category: "数据科学".to_string(),
            rating: Some(4.6),
            students: Some(8312),
            duration: "9小时15分".to_string(),
            price: Some(159.0),
            original_price: Some(299.0),
            lessons: vec![
                lesson(1, "NumPy 基础", "18:02"),
                lesson(2, "Pandas 数据清洗", "24:40"),
                lesson(3, "可视化入门", "19:55"),
                lesson(4, "实战：电商数据分析", "1:10:00"),
            ],
            description: "用真实数据集带你完成从清洗到可视化的完整分析流程。".to_string(),
            tags: vec!["python".to_string(), "pandas".to_string(), "数据分析".to_string()],
            is_paid: true,
            certification: Some("数据分析师认证".to_string()),
        },
        Course {
            id: 3,
            title: "Web 前端开发基础".to_string(),
            instructor: "李默".to_string(),
            category: "编程开发".to_string(),
            rating: Some(4.4),
            students: Some(20133),
            duration: "8小时".to_string(),
            price: None,
            original_price: None,
            lessons: vec![
                lesson(1, "HTML 结构", "10:12"),
                lesson(2, "CSS 布局", "16:48"),
                lesson(3, "JavaScript 入门", "22:30"),
                // 时长缺损的脏数据，解析时回退到默认时长
                lesson(4, "页面实战", "unknown"),
            ],
            description: "免费公开课，覆盖 HTML、CSS 与 JavaScript 的基础知识。".to_string(),
            tags: vec!["前端".to_string(), "javascript".to_string(), "html".to_string()],
            is_paid: false,
            certification: None,
        },
        Course {
            id: 4,
            title: "UI 设计思维".to_string(),
            instructor: "赵一凡".to_string(),
            category: "设计".to_string(),
            rating: None,
            students: None,
            duration: "4小时20分".to_string(),
            price: Some(79.0),
            original_price: Some(129.0),
            lessons: vec![
                lesson(1, "设计原则概览", "9:30"),
                lesson(2, "配色与排版", "14:21"),
                lesson(3, "组件化设计", "17:44"),
            ],
            description: "从视觉原则到组件体系，帮助开发者建立基本的设计判断力。".to_string(),
            tags: vec!["设计".to_string(), "ui".to_string()],
            is_paid: true,
            certification: None,
        },
        Course {
            id: 5,
            title: "机器学习导论".to_string(),
            instructor: "周正".to_string(),
            category: "数据科学".to_string(),
            rating: Some(4.9),
            students: Some(5402),
            duration: "12小时".to_string(),
            price: Some(259.0),
            original_price: Some(399.0),
            lessons: vec![
                lesson(1, "什么是机器学习", "11:05"),
                lesson(2, "线性回归", "28:17"),
                lesson(3, "分类与聚类", "33:02"),
                lesson(4, "模型评估", "26:40"),
                lesson(5, "实战：用 Python 训练第一个模型", "1:18:30"),
            ],
            description: "数学门槛友好的机器学习入门课，示例代码全部使用 Python 实现。".to_string(),
            tags: vec!["机器学习".to_string(), "python".to_string(), "ai".to_string()],
            is_paid: true,
            certification: Some("机器学习入门认证".to_string()),
        },
        Course {
            id: 6,
            title: "高效时间管理".to_string(),
            instructor: "孙晓".to_string(),
            category: "职场技能".to_string(),
            rating: Some(4.2),
            students: Some(15260),
            duration: "2小时45分".to_string(),
            price: None,
            original_price: None,
            lessons: vec![
                lesson(1, "认识你的时间", "7:50"),
                lesson(2, "优先级四象限", "12:15"),
                lesson(3, "番茄工作法实践", "10:05"),
            ],
            description: "免费职场课程，用三个课时建立可落地的时间管理习惯。".to_string(),
            tags: vec!["效率".to_string(), "职场".to_string()],
            is_paid: false,
            certification: None,
        },
        Course {
            id: 7,
            title: "Rust 系统编程进阶".to_string(),
            instructor: "何江".to_string(),
            category: "编程开发".to_string(),
            rating: Some(4.7),
            students: Some(3120),
            duration: "10小时30分".to_string(),
            price: Some(199.0),
            original_price: Some(349.0),
            lessons: vec![
                lesson(1, "所有权回顾", "15:40"),
                lesson(2, "并发与异步", "2:30"),
                lesson(3, "Unsafe 的边界", "27:33"),
            ],
            description: "面向有一定基础的开发者，深入所有权、并发模型与 unsafe 代码的工程实践。".to_string(),
            tags: vec!["rust".to_string(), "系统编程".to_string()],
            is_paid: true,
            certification: Some("Rust 进阶认证".to_string()),
        },
    ]
}
