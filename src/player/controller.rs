use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::models::{Course, Lesson};

use super::duration::{format_clock, parse_duration};
use super::errors::PlayerError;
use super::events::PlayerEvents;
use super::models::{NavTarget, PlaybackView, PlayerPhase, RestoredProgress, TickOutcome};

// 进度上报的间隔（模拟秒）
pub const PROGRESS_REPORT_EVERY: u32 = 5;
// 播放比例达到该阈值视为完成
pub const COMPLETION_RATIO: f64 = 0.95;

// 单个课时视图的模拟播放状态机。
// 自身完全同步、确定性，不持有任何定时器；
// 定时驱动由外层的 PlayerSession 负责。
pub struct LessonPlaybackController {
    course: Course,
    lesson_index: usize,
    elapsed: u32,
    total: u32,
    phase: PlayerPhase,
    auto_advance: bool,
    // 本次课时访问是否已经上报过完成
    completion_fired: bool,
    events: Arc<dyn PlayerEvents>,
}

impl LessonPlaybackController {
    pub fn new(
        course: Course,
        lesson_id: u32,
        restored: Option<RestoredProgress>,
        events: Arc<dyn PlayerEvents>,
    ) -> Result<Self, PlayerError> {
        if course.lessons.is_empty() {
            return Err(PlayerError::EmptyCourse(course.id));
        }
        let lesson_index =
            course
                .lesson_index(lesson_id)
                .ok_or(PlayerError::LessonNotFound {
                    course_id: course.id,
                    lesson_id,
                })?;

        let total = parse_duration(&course.lessons[lesson_index].duration);
        // 恢复的进度必须和重新解析出的总时长一致，否则按过期数据丢弃
        let elapsed = match restored {
            Some(r) if r.total_seconds == total => r.elapsed_seconds.min(total),
            Some(r) => {
                debug!(
                    "丢弃过期的播放进度: 存储总时长 {} != 当前总时长 {}",
                    r.total_seconds, total
                );
                0
            }
            None => 0,
        };

        Ok(Self {
            course,
            lesson_index,
            elapsed,
            total,
            phase: PlayerPhase::Paused,
            auto_advance: false,
            completion_fired: false,
            events,
        })
    }

    // ------------------------------------------------------------------
    // 播放控制

    pub fn play(&mut self) {
        // 已经播完的课时上按播放是空操作
        if self.elapsed >= self.total {
            return;
        }
        self.phase = PlayerPhase::Playing;
    }

    pub fn pause(&mut self) {
        if self.phase != PlayerPhase::Playing {
            return;
        }
        // 暂停是显式的进度上报边界
        self.report_progress();
        self.phase = PlayerPhase::Paused;
    }

    // 播放中每个模拟秒走一次
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != PlayerPhase::Playing {
            return TickOutcome::Idle;
        }

        self.elapsed = (self.elapsed + 1).min(self.total);

        if self.elapsed % PROGRESS_REPORT_EVERY == 0 {
            self.report_progress();
        }
        self.maybe_fire_completion();

        if self.elapsed == self.total {
            if self.auto_advance {
                self.phase = PlayerPhase::Advancing;
                TickOutcome::AdvancePending
            } else {
                self.phase = PlayerPhase::Finished;
                TickOutcome::Finished
            }
        } else {
            TickOutcome::Progressed
        }
    }

    // 按百分比定位（0-100），不改变播放/暂停状态
    pub fn seek(&mut self, percent: f64) {
        let pct = percent.clamp(0.0, 100.0);
        let target = (pct / 100.0 * self.total as f64).round() as u32;
        self.jump_to_seconds(target);
    }

    // 定位到绝对秒数（笔记跳转也走这里）
    pub fn jump_to_seconds(&mut self, seconds: u32) {
        self.elapsed = seconds.min(self.total);
        // 跨过阈值时重新评估完成规则（每次访问仍然至多上报一次）
        self.maybe_fire_completion();
        // 从已播完状态向前回退，重新回到可播放的暂停态
        if self.phase == PlayerPhase::Finished && self.elapsed < self.total {
            self.phase = PlayerPhase::Paused;
        }
        self.report_progress();
    }

    // 手动标记完成：走和自然播完一致的连播/结课逻辑
    pub fn mark_complete(&mut self) -> TickOutcome {
        if matches!(self.phase, PlayerPhase::Finished | PlayerPhase::Advancing) {
            return TickOutcome::Idle;
        }
        self.elapsed = self.total;
        self.maybe_fire_completion();
        if self.auto_advance {
            self.phase = PlayerPhase::Advancing;
            TickOutcome::AdvancePending
        } else {
            self.phase = PlayerPhase::Finished;
            TickOutcome::Finished
        }
    }

    // ------------------------------------------------------------------
    // 课时切换

    pub fn next_lesson(&mut self) {
        if self.lesson_index + 1 >= self.course.lessons.len() {
            return; // 已是最后一个课时
        }
        self.switch_to(self.lesson_index + 1, false);
    }

    pub fn previous_lesson(&mut self) {
        if self.lesson_index == 0 {
            return; // 已是第一个课时
        }
        self.switch_to(self.lesson_index - 1, false);
    }

    // 结束 Advancing 状态：切到下一课时，或者在最后一课时上报整课结束
    pub fn settle_advance(&mut self) {
        if self.phase != PlayerPhase::Advancing {
            return;
        }
        if self.lesson_index + 1 < self.course.lessons.len() {
            self.switch_to(self.lesson_index + 1, self.auto_advance);
        } else {
            self.phase = PlayerPhase::Finished;
            info!("课程 {} 全部课时播放完毕", self.course.id);
            self.events.on_navigate(NavTarget::EndOfCourse {
                course_id: self.course.id,
            });
        }
    }

    // 切换课时：进度归零，总时长一律从新课时重新解析，完成标记重置
    fn switch_to(&mut self, index: usize, playing: bool) {
        self.lesson_index = index;
        self.elapsed = 0;
        self.total = parse_duration(&self.course.lessons[index].duration);
        self.completion_fired = false;
        self.phase = if playing {
            PlayerPhase::Playing
        } else {
            PlayerPhase::Paused
        };
        let lesson_id = self.course.lessons[index].id;
        debug!(
            "切换到课时 {} ({}), 总时长 {} 秒",
            lesson_id, self.course.lessons[index].title, self.total
        );
        self.events.on_navigate(NavTarget::Lesson {
            course_id: self.course.id,
            lesson_id,
        });
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }

    // ------------------------------------------------------------------
    // 状态读取

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn current_lesson(&self) -> &Lesson {
        &self.course.lessons[self.lesson_index]
    }

    pub fn current_lesson_id(&self) -> u32 {
        self.current_lesson().id
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed
    }

    pub fn total_seconds(&self) -> u32 {
        self.total
    }

    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlayerPhase::Playing
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn is_first_lesson(&self) -> bool {
        self.lesson_index == 0
    }

    pub fn is_last_lesson(&self) -> bool {
        self.lesson_index + 1 == self.course.lessons.len()
    }

    // 渲染用快照
    pub fn render(&self) -> PlaybackView {
        let lesson = self.current_lesson();
        PlaybackView {
            course_title: self.course.title.clone(),
            lesson_id: lesson.id,
            lesson_title: lesson.title.clone(),
            elapsed_seconds: self.elapsed,
            total_seconds: self.total,
            elapsed_clock: format_clock(self.elapsed),
            total_clock: format_clock(self.total),
            progress_percent: self.elapsed as f64 / self.total as f64 * 100.0,
            phase: self.phase,
            auto_advance: self.auto_advance,
            is_first_lesson: self.is_first_lesson(),
            is_last_lesson: self.is_last_lesson(),
        }
    }

    // ------------------------------------------------------------------

    fn report_progress(&self) {
        self.events.on_progress(
            self.course.id,
            self.current_lesson_id(),
            self.elapsed,
            self.total,
        );
    }

    fn maybe_fire_completion(&mut self) {
        if self.completion_fired {
            return;
        }
        if self.elapsed as f64 / self.total as f64 >= COMPLETION_RATIO {
            self.completion_fired = true;
            debug!(
                "课时 {} 达到完成阈值 ({}/{})",
                self.current_lesson_id(),
                self.elapsed,
                self.total
            );
            self.events
                .on_complete(self.course.id, self.current_lesson_id());
        }
    }
}
