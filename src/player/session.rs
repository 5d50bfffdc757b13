use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{Duration, interval, sleep};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::controller::LessonPlaybackController;
use super::events::PlayerEvents;
use super::models::{NavTarget, TickOutcome};

// 模拟播放的默认节拍：每秒一个tick
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);
// 自动连播前的缓冲延迟
pub const ADVANCE_SETTLE_DELAY: Duration = Duration::from_secs(2);
// 结课弹窗的倒计时，超时后自动返回课程列表
pub const END_PROMPT_COUNTDOWN: Duration = Duration::from_secs(5);

// 播放会话：持有状态机和它的全部定时器。
// 不变式：任意时刻至多一个tick源存活；离开播放态、切换课时、
// 关闭会话时，对应的定时器必须被确定性地取消，
// 不允许遗留的定时器继续修改已被替换的状态。
pub struct PlayerSession {
    controller: Arc<Mutex<LessonPlaybackController>>,
    events: Arc<dyn PlayerEvents>,
    tick_interval: Duration,
    settle_delay: Duration,
    prompt_countdown: Duration,
    // 当前tick任务的取消句柄（连播缓冲延迟也挂在同一个句柄上）
    driver_cancel: Option<CancellationToken>,
    // 结课弹窗倒计时的取消句柄，独立于tick任务
    prompt_cancel: Option<CancellationToken>,
}

impl PlayerSession {
    pub fn new(controller: LessonPlaybackController, events: Arc<dyn PlayerEvents>) -> Self {
        Self::with_timings(
            controller,
            events,
            DEFAULT_TICK_INTERVAL,
            ADVANCE_SETTLE_DELAY,
            END_PROMPT_COUNTDOWN,
        )
    }

    // 演示和测试时可以加速节拍
    pub fn with_timings(
        controller: LessonPlaybackController,
        events: Arc<dyn PlayerEvents>,
        tick_interval: Duration,
        settle_delay: Duration,
        prompt_countdown: Duration,
    ) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            events,
            tick_interval,
            settle_delay,
            prompt_countdown,
            driver_cancel: None,
            prompt_cancel: None,
        }
    }

    // 状态机的共享句柄（读取视图状态等）
    pub fn controller(&self) -> Arc<Mutex<LessonPlaybackController>> {
        Arc::clone(&self.controller)
    }

    // ------------------------------------------------------------------
    // 传输控制：每个操作都先停掉旧状态的定时器，再做状态转移

    pub async fn play(&mut self) {
        let playing = {
            let mut c = self.controller.lock().await;
            c.play();
            c.is_playing()
        };
        if playing {
            self.spawn_driver(false);
        }
    }

    pub async fn pause(&mut self) {
        self.stop_driver();
        self.controller.lock().await.pause();
    }

    pub async fn seek(&mut self, percent: f64) {
        // seek 不改变播放状态，tick源保持不动
        self.controller.lock().await.seek(percent);
    }

    pub async fn jump_to(&mut self, seconds: u32) {
        self.controller.lock().await.jump_to_seconds(seconds);
    }

    pub async fn next_lesson(&mut self) {
        // 旧课时的定时器必须先停，避免它继续修改新课时的状态
        self.stop_driver();
        self.controller.lock().await.next_lesson();
    }

    pub async fn previous_lesson(&mut self) {
        self.stop_driver();
        self.controller.lock().await.previous_lesson();
    }

    pub async fn mark_complete(&mut self) {
        self.stop_driver();
        let outcome = self.controller.lock().await.mark_complete();
        if outcome == TickOutcome::AdvancePending {
            self.spawn_driver(true);
        }
    }

    pub async fn set_auto_advance(&mut self, enabled: bool) {
        self.controller.lock().await.set_auto_advance(enabled);
    }

    // 关闭会话：取消所有定时器
    pub fn close(&mut self) {
        self.stop_driver();
        self.dismiss_end_prompt();
    }

    // ------------------------------------------------------------------
    // 结课弹窗倒计时

    // 打开结课弹窗：倒计时结束后自动导航回课程列表
    pub fn open_end_prompt(&mut self) {
        self.dismiss_end_prompt();
        let token = CancellationToken::new();
        self.prompt_cancel = Some(token.clone());
        let events = Arc::clone(&self.events);
        let countdown = self.prompt_countdown;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("结课弹窗被关闭，取消自动导航");
                }
                _ = sleep(countdown) => {
                    events.on_navigate(NavTarget::CourseList);
                }
            }
        });
    }

    pub fn dismiss_end_prompt(&mut self) {
        if let Some(token) = self.prompt_cancel.take() {
            token.cancel();
        }
    }

    // ------------------------------------------------------------------

    fn stop_driver(&mut self) {
        if let Some(token) = self.driver_cancel.take() {
            token.cancel();
        }
    }

    // 启动tick任务。pending_settle 为真时表示状态机已处于 Advancing，
    // 先走一次缓冲延迟再继续。
    fn spawn_driver(&mut self, pending_settle: bool) {
        self.stop_driver(); // 至多一个tick源
        let token = CancellationToken::new();
        self.driver_cancel = Some(token.clone());

        let controller = Arc::clone(&self.controller);
        let tick_interval = self.tick_interval;
        let settle_delay = self.settle_delay;

        tokio::spawn(async move {
            let mut ticker = interval(tick_interval);
            // interval 的第一次tick立即返回，消费掉
            ticker.tick().await;

            if pending_settle {
                if !settle_and_continue(&controller, &token, settle_delay).await {
                    return;
                }
                ticker.reset();
            }

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let outcome = { controller.lock().await.tick() };
                        match outcome {
                            TickOutcome::Finished | TickOutcome::Idle => break,
                            TickOutcome::AdvancePending => {
                                if !settle_and_continue(&controller, &token, settle_delay).await {
                                    break;
                                }
                                ticker.reset();
                            }
                            TickOutcome::Progressed => {}
                        }
                    }
                }
            }
        });
    }
}

impl Drop for PlayerSession {
    fn drop(&mut self) {
        self.close();
    }
}

// 缓冲延迟后结束 Advancing。返回是否应继续tick（切到新课时且在播放中）。
async fn settle_and_continue(
    controller: &Arc<Mutex<LessonPlaybackController>>,
    token: &CancellationToken,
    settle_delay: Duration,
) -> bool {
    tokio::select! {
        _ = token.cancelled() => return false,
        _ = sleep(settle_delay) => {}
    }
    let mut c = controller.lock().await;
    c.settle_advance();
    c.is_playing()
}
