//! # detectors 子命令实现
//!
//! 打印探测器预设目录。
//!
//! ## 依赖关系
//! - 使用 `models/detector.rs` 的静态目录
//! - 使用 `tabled` 渲染

use crate::error::Result;
use crate::models::detector::DETECTOR_CATALOG;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 探测器目录表格行
#[derive(Tabled)]
struct DetectorRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Pixels")]
    pixels: String,
    #[tabled(rename = "Pixel size (mm)")]
    pixel_size: String,
    #[tabled(rename = "Diagonal (mm)")]
    diagonal: String,
}

/// 列出全部预设
pub fn execute() -> Result<()> {
    output::print_header("Detector Presets");

    let rows: Vec<DetectorRow> = DETECTOR_CATALOG
        .iter()
        .map(|d| DetectorRow {
            name: d.name,
            pixels: format!("{}×{}", d.shape_pixels.0, d.shape_pixels.1),
            pixel_size: format!("{:.3}", d.pixel_size_mm),
            diagonal: format!("{:.2}", d.diagonal_mm()),
        })
        .collect();

    println!("{}", Table::new(&rows));
    Ok(())
}
