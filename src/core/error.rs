//! 错误处理模块
//!
//! 定义了 frame_meter 中使用的统一错误类型。
//!
//! 帧计数器本身不会失败，错误只出现在外围设施中：
//! 配置文件的加载与校验、日志系统的安装。

use std::fmt;

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, FrameMeterError>;

/// frame_meter 的错误类型
#[derive(Debug)]
pub enum FrameMeterError {
    /// 配置错误
    Config(ConfigError),

    /// IO 错误
    Io(std::io::Error),

    /// 日志系统错误
    Log(String),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

impl fmt::Display for FrameMeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameMeterError::Config(e) => write!(f, "Configuration error: {}", e),
            FrameMeterError::Io(e) => write!(f, "IO error: {}", e),
            FrameMeterError::Log(msg) => write!(f, "Log error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for FrameMeterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameMeterError::Io(e) => Some(e),
            FrameMeterError::Config(e) => Some(e),
            FrameMeterError::Log(_) => None,
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for FrameMeterError {
    fn from(err: std::io::Error) -> Self {
        FrameMeterError::Io(err)
    }
}

impl From<ConfigError> for FrameMeterError {
    fn from(err: ConfigError) -> Self {
        FrameMeterError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_display() {
        let err: FrameMeterError = ConfigError::InvalidValue {
            field: "demo.target_fps".to_string(),
            reason: "must be greater than 0".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for 'demo.target_fps': must be greater than 0"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_source() {
        let err = FrameMeterError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(matches!(err, FrameMeterError::Io(_)));
        assert_eq!(err.source().map(|e| e.to_string()), Some("disk".to_string()));
    }
}
