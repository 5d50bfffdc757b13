use super::models::NavTarget;

// 播放器对外的副作用回调，全部是同步的 fire-and-forget，
// 由宿主注入，播放器不关心回调内部做了什么。
pub trait PlayerEvents: Send + Sync {
    // 播放进度上报 (课程ID, 课时ID, 已播放秒数, 总秒数)
    fn on_progress(&self, course_id: u32, lesson_id: u32, elapsed: u32, total: u32);
    // 课时完成上报，每次课时访问至多触发一次
    fn on_complete(&self, course_id: u32, lesson_id: u32);
    // 导航请求（切换课时 / 课程结束 / 返回列表）
    fn on_navigate(&self, target: NavTarget);
}

// 空实现，不关心回调的场景使用
pub struct NoopEvents;

impl PlayerEvents for NoopEvents {
    fn on_progress(&self, _: u32, _: u32, _: u32, _: u32) {}
    fn on_complete(&self, _: u32, _: u32) {}
    fn on_navigate(&self, _: NavTarget) {}
}
