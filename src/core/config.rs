//! 配置管理模块
//!
//! 提供演示程序配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! 帧计数器本身没有任何可配置项（窗口固定为 1000ms），
//! 这里的配置只作用于演示循环和日志系统。
//!
//! # 配置文件格式 (frame_meter.toml)
//!
//! ```toml
//! [demo]
//! target_fps = 60
//! run_seconds = 3
//! report_on_change_only = true
//!
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! log_file = "frame_meter.log"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::error::{ConfigError, Result};

/// 目标帧率上限
const MAX_TARGET_FPS: u32 = 1000;

/// 程序配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 演示循环配置
    #[serde(default)]
    pub demo: DemoConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 演示循环配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 模拟的目标帧率
    #[serde(default = "default_target_fps")]
    pub target_fps: u32,

    /// 运行时长（秒）
    #[serde(default = "default_run_seconds")]
    pub run_seconds: u32,

    /// 只在 FPS 变化时输出日志
    #[serde(default = "default_report_on_change_only")]
    pub report_on_change_only: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

// 默认值函数
fn default_target_fps() -> u32 { 60 }
fn default_run_seconds() -> u32 { 3 }
fn default_report_on_change_only() -> bool { true }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "frame_meter.log".to_string() }

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            target_fps: default_target_fps(),
            run_seconds: default_run_seconds(),
            report_on_change_only: default_report_on_change_only(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl DemoConfig {
    /// 单帧的目标间隔
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }

    /// 总运行时长
    pub fn run_duration(&self) -> Duration {
        Duration::from_secs(self.run_seconds as u64)
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use frame_meter::core::Config;
    ///
    /// let config = Config::from_file("frame_meter.toml")?;
    /// # Ok::<(), frame_meter::core::FrameMeterError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在或无法解析则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--fps <value>`: 设置目标帧率
    /// - `--seconds <value>`: 设置运行时长
    /// - `--verbose`: 日志级别降为 debug
    ///
    /// 无法解析的值会被忽略，保留原配置。
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        if let Some(fps) = parse_flag_value(&args, "--fps") {
            self.demo.target_fps = fps;
        }

        if let Some(seconds) = parse_flag_value(&args, "--seconds") {
            self.demo.run_seconds = seconds;
        }

        if args.iter().any(|a| a == "--verbose") {
            self.logging.level = LogLevel::Debug;
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.demo.target_fps == 0 || self.demo.target_fps > MAX_TARGET_FPS {
            return Err(ConfigError::InvalidValue {
                field: "demo.target_fps".to_string(),
                reason: format!("Target FPS must be between 1 and {}", MAX_TARGET_FPS),
            }.into());
        }

        if self.demo.run_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "demo.run_seconds".to_string(),
                reason: "Run duration must be at least 1 second".to_string(),
            }.into());
        }

        Ok(())
    }
}

fn parse_flag_value(args: &[String], flag: &str) -> Option<u32> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1)?.parse().ok()
}
