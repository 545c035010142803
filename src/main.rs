//! # Qcalc - X 射线散射几何计算器
//!
//! 在光子能量、波长与散射几何量（2θ、q、d）之间进行交互式换算，
//! 输入为样品-探测器距离、束流挡块半径和探测器预设。
//!
//! ## 子命令
//! - `interactive` - 交互式计算会话（默认）
//! - `calc` - 单次计算，参数由命令行给出
//! - `detectors` - 列出探测器预设目录
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── physics/  (换算与几何引擎)
//!   │     ├── models/   (数据模型)
//!   │     └── store/    (响应式参数存储)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod physics;
mod store;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    // 未指定子命令时进入交互式会话
    let command = cli.command.unwrap_or(Commands::Interactive);

    if let Err(e) = commands::run(command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
