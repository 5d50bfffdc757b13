use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::time::Duration;
use tracing::{debug, info};

use course_player::catalog::models::Course;
use course_player::catalog::{Catalog, recommend};
use course_player::common::logger::PrettyLogger;
use course_player::notes::NoteBook;
use course_player::player::events::PlayerEvents;
use course_player::player::models::{NavTarget, PlayerPhase};
use course_player::player::{LessonPlaybackController, PlayerSession};
use course_player::storage::JsonFileStore;
use course_player::{log_error, log_info, log_success};

mod cli;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// CLI 会话的事件接收端：进度走日志，结课/导航用标志位通知主循环
struct CliEvents {
    course_ended: AtomicBool,
    back_to_list: AtomicBool,
}

impl CliEvents {
    fn new() -> Self {
        Self {
            course_ended: AtomicBool::new(false),
            back_to_list: AtomicBool::new(false),
        }
    }
}

impl PlayerEvents for CliEvents {
    fn on_progress(&self, course_id: u32, lesson_id: u32, elapsed: u32, total: u32) {
        debug!(
            "进度上报: 课程={} 课时={} {}/{}秒",
            course_id, lesson_id, elapsed, total
        );
    }

    fn on_complete(&self, course_id: u32, lesson_id: u32) {
        info!("课时完成上报: 课程={} 课时={}", course_id, lesson_id);
    }

    fn on_navigate(&self, target: NavTarget) {
        match target {
            NavTarget::Lesson { lesson_id, .. } => {
                debug!("切换课时: {}", lesson_id);
            }
            NavTarget::EndOfCourse { course_id } => {
                info!("课程 {} 结束", course_id);
                self.course_ended.store(true, Ordering::SeqCst);
            }
            NavTarget::CourseList => {
                self.back_to_list.store(true, Ordering::SeqCst);
            }
        }
    }
}

// 列出课程
fn list_courses(courses: &[&Course]) {
    PrettyLogger::title("课程目录");
    for course in courses {
        PrettyLogger::course_info(course);
    }
    PrettyLogger::separator();
}

// 模拟播放会话，播完（或整课结束）后返回
async fn run_playback(
    session: &mut PlayerSession,
    events: &CliEvents,
    auto_advance: bool,
) {
    session.set_auto_advance(auto_advance).await;
    session.play().await;

    let controller = session.controller();
    let mut bar: Option<indicatif::ProgressBar> = None;
    let mut current_lesson = 0u32;

    loop {
        tokio::time::sleep(Duration::from_millis(40)).await;
        let view = { controller.lock().await.render() };

        // 换课时了，重建进度条
        if view.lesson_id != current_lesson {
            if let Some(pb) = bar.take() {
                pb.finish_and_clear();
            }
            current_lesson = view.lesson_id;
            PrettyLogger::lesson_info(&view.lesson_title, &view.total_clock);
            let pb = indicatif::ProgressBar::new(view.total_seconds as u64);
            pb.set_style(
                indicatif::ProgressStyle::with_template(
                    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}秒",
                )
                .unwrap()
                .progress_chars("#>-"),
            );
            bar = Some(pb);
        }
        if let Some(pb) = &bar {
            pb.set_position(view.elapsed_seconds as u64);
        }

        if events.course_ended.load(Ordering::SeqCst) {
            break;
        }
        if !auto_advance && view.phase == PlayerPhase::Finished {
            break;
        }
    }

    if let Some(pb) = bar.take() {
        pb.finish_and_clear();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数
    let args = cli::Cli::parse();

    // 初始化日志
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let catalog = Catalog::new();

    // 检索 / 分类浏览模式
    if let Some(query) = &args.search {
        let hits = catalog.search(query);
        log_info!("检索 \"{}\" 命中 {} 门课程", query, hits.len());
        list_courses(&hits);
        return Ok(());
    }
    if let Some(category) = &args.category {
        let hits = catalog.filter_by_category(category);
        log_info!("分类 \"{}\" 下共 {} 门课程", category, hits.len());
        list_courses(&hits);
        return Ok(());
    }

    // 未指定课程时展示目录
    let Some(course_id) = args.course else {
        list_courses(&catalog.all().iter().collect::<Vec<_>>());
        log_info!("使用 --course <ID> 开始学习某门课程");
        return Ok(());
    };

    // 课程不存在时给出可恢复的提示，而不是报错退出
    let course = match catalog.find_course(course_id) {
        Ok(course) => course.clone(),
        Err(e) => {
            log_error!("{}", e);
            list_courses(&catalog.all().iter().collect::<Vec<_>>());
            return Ok(());
        }
    };

    PrettyLogger::title(&course.title);
    println!("{}", course.description.bright_black());
    if let Some(cert) = &course.certification {
        log_info!("完成课程可获得: {}", cert);
    }

    let Some(first_lesson) = course.lessons.first() else {
        log_error!("课程 {} 没有任何课时", course.id);
        return Ok(());
    };
    let lesson_id = args.lesson.unwrap_or(first_lesson.id);
    let speed = args.speed.max(1) as u64;

    // 笔记落盘存储
    let store = Arc::new(JsonFileStore::open(&args.notes_file).await);
    let events = Arc::new(CliEvents::new());

    let controller =
        LessonPlaybackController::new(course.clone(), lesson_id, None, events.clone())?;
    let mut session = PlayerSession::with_timings(
        controller,
        events.clone(),
        Duration::from_millis((1000 / speed).max(1)),
        Duration::from_millis((2000 / speed).max(1)),
        Duration::from_millis((5000 / speed).max(1)),
    );

    info!("开始学习: << {} >>", course.title);
    run_playback(&mut session, &events, args.auto_advance).await;

    // 记一条演示笔记并展示该课时的全部笔记
    let (final_lesson, final_elapsed) = {
        let controller = session.controller();
        let c = controller.lock().await;
        (c.current_lesson_id(), c.elapsed_seconds())
    };
    let mut notebook = NoteBook::load(course.id, final_lesson, store).await;
    if let Some(note) = notebook.add_note("重点：课后复习本节示例代码", final_elapsed).await {
        log_success!("已记录笔记 #{} (位于 {} 秒处)", note.id, note.at_seconds);
        // 演示按笔记位置回看
        session.jump_to(note.at_seconds).await;
    }
    log_info!("本课时共有 {} 条笔记", notebook.notes().len());

    // 整课播完时展示结课倒计时
    if events.course_ended.load(Ordering::SeqCst) {
        log_info!("即将返回课程目录 ...");
        session.open_end_prompt();
        while !events.back_to_list.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
    session.close();

    // 相关课程推荐
    PrettyLogger::title("相关课程推荐");
    for rec in recommend::related_courses(catalog.all(), &course, recommend::DEFAULT_LIMIT) {
        PrettyLogger::course_info(rec);
    }

    PrettyLogger::course_summary(vec![
        format!("课程: {}", course.title),
        format!("讲师: {}", course.instructor),
    ]);
    Ok(())
}
