//! frame_meter - 轻量级帧率计数器
//!
//! 在连续的一秒窗口内统计帧数，报告最近一个已完成窗口的帧数作为 FPS。
//! 适合作为渲染循环或更新循环中的低开销性能埋点。
//!
//! # 模块结构
//!
//! - `core`: 基础设施（时间源、日志、配置、错误处理）
//! - `meter`: 帧计数器
//!
//! # 使用示例
//!
//! ```no_run
//! use frame_meter::meter::FrameCounter;
//!
//! let mut counter = FrameCounter::new();
//! loop {
//!     // 渲染一帧 ...
//!     let fps = counter.sample();
//!     # let _ = fps;
//!     # break;
//! }
//! ```

pub mod core;
pub mod meter;
