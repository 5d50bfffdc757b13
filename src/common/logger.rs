use colored::*;

use crate::catalog::models::Course;

/// 漂亮的终端输出工具
pub struct PrettyLogger;

impl PrettyLogger {
    /// 显示成功消息
    pub fn success(message: impl AsRef<str>) {
        println!("{} {}", "✓".green().bold(), message.as_ref());
    }

    /// 显示信息消息
    pub fn info(message: impl AsRef<str>) {
        println!("{} {}", "ℹ".blue().bold(), message.as_ref());
    }

    /// 显示警告消息
    pub fn warning(message: impl AsRef<str>) {
        println!("{} {}", "⚠".yellow().bold(), message.as_ref());
    }

    /// 显示错误消息
    pub fn error(message: impl AsRef<str>) {
        println!("{} {}", "✗".red().bold(), message.as_ref());
    }

    /// 显示步骤开始
    pub fn step_start(step: impl AsRef<str>) {
        println!("\n{} {}", "▶".cyan().bold(), step.as_ref().bold());
    }

    /// 显示步骤完成
    pub fn step_complete(step: impl AsRef<str>) {
        println!("{} {}", "✓".green().bold(), step.as_ref().green());
    }

    /// 显示播放进度
    pub fn playback_progress(lesson: impl AsRef<str>, progress: f64) {
        let bar_width = 30;
        let filled = ((progress * bar_width as f64) as usize).min(bar_width);
        let empty = bar_width - filled;

        let bar = format!(
            "[{}{}] {:.1}%",
            "█".repeat(filled).green(),
            "░".repeat(empty).bright_black(),
            progress * 100.0
        );

        println!("{} {} {}", "▶".blue().bold(), lesson.as_ref(), bar);
    }

    /// 显示课程条目
    pub fn course_info(course: &Course) {
        let price = if course.is_paid {
            course
                .price
                .map(|p| format!("¥{:.0}", p))
                .unwrap_or_else(|| "付费".to_string())
        } else {
            "免费".to_string()
        };
        println!(
            "{} [{}] {} - {} ({}) ★{:.1} {}人 {}",
            "📚".bold(),
            course.id,
            course.title.bold(),
            course.instructor,
            course.category.cyan(),
            course.display_rating(),
            course.display_students(),
            price.yellow()
        );
    }

    /// 显示课时信息
    pub fn lesson_info(title: impl AsRef<str>, clock: impl AsRef<str>) {
        println!(
            "{} {} ({})",
            "🎬".magenta().bold(),
            title.as_ref().bold(),
            clock.as_ref().cyan()
        );
    }

    /// 显示分割线
    pub fn separator() {
        println!("{}", "─".repeat(50).bright_black());
    }

    /// 显示标题
    pub fn title(text: impl AsRef<str>) {
        let text = text.as_ref();
        let padding = 48usize.saturating_sub(text.len()) / 2;
        let line = "─".repeat(padding);
        println!(
            "{} {} {}",
            line.bright_black(),
            text.bold(),
            "─".repeat(48usize.saturating_sub(padding + text.len())).bright_black()
        );
    }

    /// 显示学习完成总结
    pub fn course_summary(items: Vec<impl AsRef<str>>) {
        println!("\n{}", "🎉 学习完成！".green().bold());
        for item in items {
            println!("  {}", item.as_ref());
        }
    }
}

/// 便捷宏用于漂亮的日志输出
#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::success(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::info(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::warning(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::error(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_step {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::step_start(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_complete {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::step_complete(format!($($arg)*))
    };
}
