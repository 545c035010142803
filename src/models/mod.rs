//! # 数据模型模块
//!
//! 定义光束、几何、探测器与结果快照的数据模型。
//!
//! ## 依赖关系
//! - 被 `physics/`, `store/`, `commands/` 使用
//! - 子模块: state, detector

pub mod detector;
pub mod state;

pub use detector::DetectorSpec;
pub use state::{BeamState, GeometryState, ResultSnapshot};
