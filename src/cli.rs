use clap::Parser;
use std::path::PathBuf;

/// 课程目录与模拟播放工具
#[derive(Parser, Debug)]
#[command(name = "cplayer")]
#[command(version = "1.0")]
#[command(author = "rpeng252@gmail.com")]
#[command(about = "一个简单的课程目录与模拟播放工具", long_about = None)]
pub struct Cli {
    /// 要学习的课程ID（不指定时列出课程目录）
    #[arg(long, value_name = "ID")]
    pub course: Option<u32>,

    /// 起始课时ID（默认从第一个课时开始）
    #[arg(long, value_name = "ID")]
    pub lesson: Option<u32>,

    /// 检索关键词（匹配标题/讲师/简介/标签/分类/认证）
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// 按分类浏览课程
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// 播完自动连播下一课时
    #[arg(long, default_value_t = false)]
    pub auto_advance: bool,

    /// 模拟播放加速倍率 (1 = 实时)
    #[arg(long, value_name = "N")]
    #[arg(default_value_t = 60)]
    #[arg(help = "模拟播放加速倍率，例如 60 表示1分钟课时1秒播完")]
    pub speed: u32,

    /// 笔记存储文件
    #[arg(long, value_name = "FILE")]
    #[arg(default_value = "notes.json")]
    pub notes_file: PathBuf,

    /// 输出调试日志
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
