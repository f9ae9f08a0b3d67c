//! 时间源模块
//!
//! 帧计数器不直接读取系统时钟，而是依赖一个注入的 [`TimeSource`]，
//! 返回单调递增的毫秒时间戳。
//!
//! - [`MonotonicClock`]：基于 `std::time::Instant` 的系统单调时钟
//! - [`ManualClock`]：手动推进的时钟，用于测试和回放
//! - 任意 `Fn() -> f64` 闭包也可以直接作为时间源
//!
//! # 使用示例
//!
//! ```
//! use frame_meter::core::clock::{ManualClock, TimeSource};
//!
//! let clock = ManualClock::new();
//! clock.advance(16.0);
//! assert_eq!(clock.now_ms(), 16.0);
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// 单调时间源
///
/// 返回值单位为毫秒。实现必须保证两次读取之间不会倒退，
/// 计数器不对非单调时钟做任何处理。
pub trait TimeSource {
    /// 当前时间（毫秒）
    fn now_ms(&self) -> f64;
}

impl<F> TimeSource for F
where
    F: Fn() -> f64,
{
    fn now_ms(&self) -> f64 {
        self()
    }
}

/// 系统单调时钟
///
/// 以创建时刻为零点，返回经过的毫秒数。
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// 创建新的单调时钟，零点为当前时刻
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// 手动时钟
///
/// 克隆出的实例共享同一个时间戳：把一个副本交给计数器，
/// 另一个留在调用方用来推进时间。仅限单线程使用。
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// 创建时间为 0 的手动时钟
    pub fn new() -> Self {
        Self::starting_at(0.0)
    }

    /// 创建从指定时间开始的手动时钟
    pub fn starting_at(ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(ms)),
        }
    }

    /// 设置当前时间（毫秒）
    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    /// 将时间向前推进 `ms` 毫秒
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl TimeSource for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
