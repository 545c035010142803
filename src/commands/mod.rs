//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `store/`, `models/`, `utils/`
//! - 子模块: calc, detectors, interactive, view

pub mod calc;
pub mod detectors;
pub mod interactive;
pub mod view;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Interactive => interactive::execute(),
        Commands::Calc(args) => calc::execute(args),
        Commands::Detectors => detectors::execute(),
    }
}
