use serde::{Deserialize, Serialize};

// 播放状态机的四个状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPhase {
    // 暂停中（初始状态）
    Paused,
    // 播放中，每个模拟秒走一次tick
    Playing,
    // 已播完，等待自动连播的缓冲延迟
    Advancing,
    // 本课时已播完（向前seek可重新进入播放）
    Finished,
}

// 导航回调的目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    // 切换到某门课程的某个课时
    Lesson { course_id: u32, lesson_id: u32 },
    // 最后一个课时播完，整门课结束
    EndOfCourse { course_id: u32 },
    // 返回课程列表
    CourseList,
}

// tick 的结果，交给外层驱动决定是否要调度连播
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    // 非播放状态，本次tick没有效果
    Idle,
    // 正常前进了一个模拟秒
    Progressed,
    // 播放到结尾并停住
    Finished,
    // 播放到结尾，开启了自动连播，等待缓冲延迟后切换
    AdvancePending,
}

// 外部恢复的播放进度，totalSeconds 与当前解析值不一致时整体作废
#[derive(Debug, Clone, Copy)]
pub struct RestoredProgress {
    pub elapsed_seconds: u32,
    pub total_seconds: u32,
}

// 渲染用的视图快照
#[derive(Debug, Clone, Serialize)]
pub struct PlaybackView {
    pub course_title: String,
    pub lesson_id: u32,
    pub lesson_title: String,
    pub elapsed_seconds: u32,
    pub total_seconds: u32,
    pub elapsed_clock: String,
    pub total_clock: String,
    pub progress_percent: f64,
    pub phase: PlayerPhase,
    pub auto_advance: bool,
    pub is_first_lesson: bool,
    pub is_last_lesson: bool,
}
