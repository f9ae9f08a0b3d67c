//! frame_meter - 帧率计数器演示程序
//!
//! 以固定目标帧率驱动一个模拟的渲染循环，每帧调用 `FrameCounter::sample()`，
//! 并把测得的 FPS 输出到日志。
//!
//! # 使用方法
//!
//! ```bash
//! # 使用配置文件（frame_meter.toml，不存在时使用默认值）
//! cargo run
//!
//! # 命令行覆盖
//! cargo run -- --fps 144 --seconds 5 --verbose
//! ```

use std::time::Instant;

use anyhow::Context;
use frame_meter::core::{log, Config, DemoConfig};
use frame_meter::meter::FrameCounter;
use frame_meter::{app_info, app_warn};

const CONFIG_PATH: &str = "frame_meter.toml";

/// 测得的 FPS 低于目标的该比例时输出警告
const LOW_FPS_RATIO: f64 = 0.9;

/// 演示循环的统计结果
#[derive(Debug, Default)]
struct DemoSummary {
    frames: u64,
    windows: u32,
    last_fps: u32,
}

/// 程序入口
///
/// # 初始化流程
///
/// 1. 加载配置文件并应用命令行参数
/// 2. 验证配置
/// 3. 初始化日志系统
/// 4. 运行演示循环
fn main() -> anyhow::Result<()> {
    let mut config = Config::from_file_or_default(CONFIG_PATH);
    config.apply_args(std::env::args());
    config.validate().context("Invalid configuration")?;

    let log_file = if config.logging.file_output {
        Some(config.logging.log_file.as_str())
    } else {
        None
    };
    log::init_logger(config.logging.level, config.logging.file_output, log_file)
        .context("Failed to initialize logger")?;

    app_info!(version = env!("CARGO_PKG_VERSION"), "frame_meter starting");
    app_info!(
        target_fps = config.demo.target_fps,
        run_seconds = config.demo.run_seconds,
        report_on_change_only = config.demo.report_on_change_only,
        "Demo configuration"
    );

    let summary = run_demo(&config.demo);

    app_info!(
        frames = summary.frames,
        windows = summary.windows,
        last_fps = summary.last_fps,
        "Demo finished"
    );
    Ok(())
}

/// 按目标帧率运行模拟循环，直到达到配置的时长
fn run_demo(demo: &DemoConfig) -> DemoSummary {
    let interval = demo.frame_interval();
    let run_for = demo.run_duration();
    let low_fps = (demo.target_fps as f64 * LOW_FPS_RATIO) as u32;

    let mut counter = FrameCounter::new();
    let mut summary = DemoSummary::default();
    let mut previous_fps = counter.fps();
    let mut window_start = counter.window_start();

    let started = Instant::now();
    while started.elapsed() < run_for {
        let frame_start = Instant::now();

        let fps = counter.sample();
        summary.frames += 1;

        let window_closed = counter.window_start() != window_start;
        if window_closed {
            window_start = counter.window_start();
            summary.windows += 1;

            if fps < low_fps {
                app_warn!(fps, target_fps = demo.target_fps, "Frame rate below target");
            }
        }

        let report = if demo.report_on_change_only {
            fps != previous_fps
        } else {
            window_closed
        };
        if report {
            app_info!(fps, "Frame rate");
        }
        previous_fps = fps;

        // 睡掉本帧剩余的时间
        if let Some(rest) = interval.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    summary.last_fps = counter.fps();
    summary
}
