//! # calc 子命令 CLI 定义
//!
//! 单次计算：全部输入由命令行标志给出，默认值取自交互式会话的
//! 启动默认（能量 12.4 keV，距离 200 mm，挡块 5 mm，MarCCD）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calc.rs`

use clap::Args;

/// calc 子命令参数
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Photon energy in keV (mutually exclusive with --wavelength)
    #[arg(short, long, conflicts_with = "wavelength")]
    pub energy: Option<f64>,

    /// X-ray wavelength in nm
    #[arg(short, long)]
    pub wavelength: Option<f64>,

    /// Sample-to-detector distance in mm
    #[arg(short, long, default_value_t = 200.0)]
    pub distance: f64,

    /// Beamstop radius in mm (0 = no beamstop)
    #[arg(short, long, default_value_t = 5.0)]
    pub beamstop: f64,

    /// Detector preset name (see `qcalc detectors`)
    #[arg(long, default_value = "MarCCD")]
    pub detector: String,
}
