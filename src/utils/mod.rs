//! # 工具函数模块
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 使用
//! - 子模块: output

pub mod output;
