//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `interactive`: 交互式计算会话（省略子命令时的默认行为）
//! - `calc`: 单次计算
//! - `detectors`: 列出探测器预设目录
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: calc

pub mod calc;

use clap::{Parser, Subcommand};

/// Qcalc - X 射线散射几何计算器
#[derive(Parser)]
#[command(name = "qcalc")]
#[command(version)]
#[command(about = "An interactive X-ray scattering geometry calculator", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive calculator session (default)
    Interactive,

    /// Compute the accessible 2θ/q range once from command-line parameters
    Calc(calc::CalcArgs),

    /// List the built-in detector presets
    Detectors,
}
