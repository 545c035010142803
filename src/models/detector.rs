//! # 探测器预设目录
//!
//! 提供固定的探测器预设表及按名称查找。
//!
//! ## 数据来源
//! 厂商手册公称值（MarCCD、Dectris Pilatus 系列）
//!
//! ## 依赖关系
//! - 被 `physics/geometry.rs`, `store/`, `commands/` 使用
//! - 纯静态数据，无外部依赖（除 error.rs）

use crate::error::{QcalcError, Result};

/// 探测器预设
///
/// 选定后不可变，切换预设时整体替换。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorSpec {
    /// 预设名称
    pub name: &'static str,
    /// 像素阵列尺寸（行, 列）
    pub shape_pixels: (u32, u32),
    /// 像素边长（mm），> 0
    pub pixel_size_mm: f64,
}

impl DetectorSpec {
    /// 全对角线长度（mm）：sqrt((rows·px)² + (cols·px)²)
    pub fn diagonal_mm(&self) -> f64 {
        let (rows, cols) = self.shape_pixels;
        let h = f64::from(rows) * self.pixel_size_mm;
        let w = f64::from(cols) * self.pixel_size_mm;
        (h * h + w * w).sqrt()
    }

    /// 半对角线长度（mm），中心到边角的延伸量
    pub fn half_diagonal_mm(&self) -> f64 {
        self.diagonal_mm() / 2.0
    }
}

/// 探测器预设目录（有序，固定三项）
pub static DETECTOR_CATALOG: &[DetectorSpec] = &[
    DetectorSpec {
        name: "MarCCD",
        shape_pixels: (2048, 2048),
        pixel_size_mm: 0.079,
    },
    DetectorSpec {
        name: "Pilatus1M",
        shape_pixels: (981, 1043),
        pixel_size_mm: 0.172,
    },
    DetectorSpec {
        name: "Pilatus300k",
        shape_pixels: (487, 619),
        pixel_size_mm: 0.172,
    },
];

/// 按名称查找预设（不区分大小写）
pub fn find_detector(name: &str) -> Result<&'static DetectorSpec> {
    DETECTOR_CATALOG
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| QcalcError::UnknownDetector(name.to_string()))
}

/// 目录中的预设名称，保持目录顺序
pub fn detector_names() -> Vec<&'static str> {
    DETECTOR_CATALOG.iter().map(|d| d.name).collect()
}
