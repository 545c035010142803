//! # 物理计算模块
//!
//! 提供光束参数换算与散射几何解析功能。
//!
//! ## 子模块
//! - `conversion`: 能量↔波长、2θ↔q 纯函数换算库
//! - `geometry`: 可测角度/q 范围解析引擎
//!
//! ## 依赖关系
//! - 被 `store/` 和 `commands/` 使用
//! - 使用 `models/` 的数据模型

pub mod conversion;
pub mod geometry;
