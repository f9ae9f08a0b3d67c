//! 帧计数器
//!
//! FrameCounter 在连续的一秒窗口内累计帧数，
//! 并以最近一个已完成窗口的帧数作为 FPS 报告。

use crate::core::clock::{MonotonicClock, TimeSource};
use crate::{meter_debug, meter_trace};

/// 统计窗口长度（毫秒），不可配置
pub const WINDOW_MS: f64 = 1000.0;

/// 一秒窗口帧计数器
///
/// 每帧调用一次 [`sample`](Self::sample)。窗口内只累计计数，
/// 经过时间达到 [`WINDOW_MS`] 的那一帧关闭窗口：把累计值快照为 FPS，
/// 计数清零，并以该帧的时间戳开启新窗口。
///
/// 第一个窗口完成之前 FPS 为 0。两次调用间隔超过一个窗口时，
/// 窗口在这次调用时直接关闭，不做超时补偿，也不补算错过的窗口。
///
/// # 示例
///
/// ```
/// use frame_meter::core::clock::ManualClock;
/// use frame_meter::meter::FrameCounter;
///
/// let clock = ManualClock::new();
/// let mut counter = FrameCounter::with_clock(clock.clone());
///
/// clock.set(500.0);
/// assert_eq!(counter.sample(), 0);
///
/// clock.set(1000.0);
/// assert_eq!(counter.sample(), 2);
/// ```
#[derive(Debug)]
pub struct FrameCounter<C: TimeSource = MonotonicClock> {
    clock: C,
    window_start: f64,
    frame_count: u32,
    last_fps: u32,
}

impl FrameCounter<MonotonicClock> {
    /// 使用系统单调时钟创建计数器
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for FrameCounter<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TimeSource> FrameCounter<C> {
    /// 使用注入的时间源创建计数器，当前时刻作为第一个窗口的起点
    pub fn with_clock(clock: C) -> Self {
        let window_start = clock.now_ms();
        meter_debug!(window_start, "Frame counter created");
        Self {
            clock,
            window_start,
            frame_count: 0,
            last_fps: 0,
        }
    }

    /// 记录一帧，返回最近一个完整窗口的 FPS
    pub fn sample(&mut self) -> u32 {
        let now = self.clock.now_ms();
        self.frame_count += 1;
        let elapsed = now - self.window_start;

        if elapsed >= WINDOW_MS {
            self.last_fps = self.frame_count;
            self.frame_count = 0;
            self.window_start = now;
            meter_trace!(fps = self.last_fps, elapsed_ms = elapsed, "Window closed");
        }

        self.last_fps
    }

    /// 最近一个完整窗口的 FPS
    pub fn fps(&self) -> u32 {
        self.last_fps
    }

    /// 当前窗口已累计的帧数
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// 当前窗口的起始时间（毫秒）
    pub fn window_start(&self) -> f64 {
        self.window_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;

    fn counter_at_zero() -> (ManualClock, FrameCounter<ManualClock>) {
        let clock = ManualClock::new();
        let counter = FrameCounter::with_clock(clock.clone());
        (clock, counter)
    }

    #[test]
    fn test_initial_state() {
        let clock = ManualClock::starting_at(250.0);
        let counter = FrameCounter::with_clock(clock);

        assert_eq!(counter.fps(), 0);
        assert_eq!(counter.frame_count(), 0);
        assert_eq!(counter.window_start(), 250.0);
    }

    #[test]
    fn test_zero_until_first_window_completes() {
        let (clock, mut counter) = counter_at_zero();

        for t in (0..1000).step_by(10) {
            clock.set(t as f64);
            assert_eq!(counter.sample(), 0);
        }
        assert_eq!(counter.frame_count(), 100);

        clock.set(1000.0);
        assert_eq!(counter.sample(), 101);
    }

    #[test]
    fn test_sixty_frames_then_close() {
        let (clock, mut counter) = counter_at_zero();

        for i in 0..60 {
            clock.set(i as f64 * 1000.0 / 60.0);
            assert_eq!(counter.sample(), 0);
        }
        assert_eq!(counter.frame_count(), 60);

        // 关闭窗口的这一帧本身也计入
        clock.set(1001.0);
        assert_eq!(counter.sample(), 61);
        assert_eq!(counter.frame_count(), 0);
        assert_eq!(counter.window_start(), 1001.0);
    }

    #[test]
    fn test_stale_snapshot_until_next_close() {
        let (clock, mut counter) = counter_at_zero();

        clock.set(400.0);
        counter.sample();
        clock.set(1000.0);
        assert_eq!(counter.sample(), 2);

        for t in [1010.0, 1500.0, 1999.0] {
            clock.set(t);
            assert_eq!(counter.sample(), 2);
        }
        assert_eq!(counter.frame_count(), 3);

        clock.set(2000.0);
        assert_eq!(counter.sample(), 4);
    }

    #[test]
    fn test_repeated_calls_within_window_return_same_value() {
        let (clock, mut counter) = counter_at_zero();
        clock.set(1000.0);
        let closed = counter.sample();

        clock.set(1300.0);
        let values: Vec<u32> = (0..10).map(|_| counter.sample()).collect();
        assert!(values.iter().all(|&v| v == closed));
        assert_eq!(counter.fps(), closed);
    }

    #[test]
    fn test_exact_boundary_closes_window() {
        let (clock, mut counter) = counter_at_zero();

        clock.set(999.999);
        assert_eq!(counter.sample(), 0);

        clock.set(1000.0);
        assert_eq!(counter.sample(), 2);
        assert_eq!(counter.window_start(), 1000.0);
    }

    #[test]
    fn test_scenario_500_1000_1200() {
        let (clock, mut counter) = counter_at_zero();

        clock.set(500.0);
        assert_eq!(counter.sample(), 0);
        assert_eq!(counter.frame_count(), 1);

        clock.set(1000.0);
        assert_eq!(counter.sample(), 2);
        assert_eq!(counter.frame_count(), 0);
        assert_eq!(counter.window_start(), 1000.0);

        clock.set(1200.0);
        assert_eq!(counter.sample(), 2);
        assert_eq!(counter.frame_count(), 1);
    }

    #[test]
    fn test_long_pause_closes_once_without_catch_up() {
        let (clock, mut counter) = counter_at_zero();

        clock.set(100.0);
        counter.sample();
        clock.set(200.0);
        counter.sample();

        clock.set(5200.0);
        assert_eq!(counter.sample(), 3);
        assert_eq!(counter.window_start(), 5200.0);

        clock.set(5300.0);
        assert_eq!(counter.sample(), 3);
        assert_eq!(counter.frame_count(), 1);
    }

    #[test]
    fn test_closure_clock() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let mut counter = FrameCounter::with_clock(move || handle.now_ms());

        clock.set(1500.0);
        assert_eq!(counter.sample(), 1);
    }

    #[test]
    fn test_system_clock_starts_at_zero_fps() {
        let mut counter = FrameCounter::new();
        assert_eq!(counter.sample(), 0);
        assert_eq!(counter.frame_count(), 1);
    }
}
