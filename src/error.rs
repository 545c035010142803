//! # 统一错误处理模块
//!
//! 定义 Qcalc 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Qcalc 统一错误类型
#[derive(Error, Debug)]
pub enum QcalcError {
    // ─────────────────────────────────────────────────────────────
    // 输入域错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid input: {name} must be {constraint}, got {value}")]
    InvalidInput {
        name: &'static str,
        constraint: &'static str,
        value: f64,
    },

    #[error("q = {q:.4} nm⁻¹ is not reachable at wavelength {wavelength:.6} nm (λq/4π exceeds 1)")]
    OutOfRange { q: f64, wavelength: f64 },

    // ─────────────────────────────────────────────────────────────
    // 探测器目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown detector preset: {0}")]
    UnknownDetector(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 终端 I/O
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal I/O error")]
    TerminalError(#[from] std::io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, QcalcError>;
