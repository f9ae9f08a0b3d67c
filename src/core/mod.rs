//! 核心功能模块
//!
//! 提供帧计数器之外的基础设施：时间源、日志系统、配置管理和错误处理。
//!
//! # 模块组织
//!
//! - `clock`：单调时间源抽象，可注入用于测试
//! - `log`：日志系统，提供结构化的日志记录功能
//! - `config`：配置管理，支持从配置文件加载演示程序设置
//! - `error`：错误处理，定义统一的错误类型

pub mod clock;
pub mod log;
pub mod config;
pub mod error;

// 重新导出常用类型，方便使用
pub use clock::{TimeSource, MonotonicClock, ManualClock};
pub use error::{Result, FrameMeterError, ConfigError};
pub use config::{Config, DemoConfig, LoggingConfig, LogLevel};
