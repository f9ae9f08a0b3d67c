//! 帧率测量模块
//!
//! 提供轻量级的帧率统计，适合直接放在渲染循环或更新循环中每帧调用。
//!
//! - `counter`：一秒窗口帧计数器

mod counter;

pub use counter::{FrameCounter, WINDOW_MS};
