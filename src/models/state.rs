//! # 光束与几何状态模型
//!
//! 定义输入状态（光束、几何）和派生的只读结果快照。
//!
//! ## 不变量
//! - BeamState: wavelength_nm = HC_KEV_NM / energy_kev 恒成立，
//!   能量与波长是同一量的两种单位，只能通过构造函数成对更新
//!
//! ## 依赖关系
//! - 被 `physics/geometry.rs` 和 `store/` 使用
//! - 使用 `physics/conversion.rs` 维持光束不变量

use crate::error::Result;
use crate::physics::conversion;

/// 光束状态：能量与波长互为换算，始终一致
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamState {
    /// 光子能量（keV），> 0
    pub energy_kev: f64,
    /// 波长（nm），> 0
    pub wavelength_nm: f64,
}

impl BeamState {
    /// 由能量编辑创建，波长随之换算
    pub fn from_energy(energy_kev: f64) -> Result<Self> {
        let wavelength_nm = conversion::energy_to_wavelength_nm(energy_kev)?;
        Ok(BeamState {
            energy_kev,
            wavelength_nm,
        })
    }

    /// 由波长编辑创建，能量随之换算
    pub fn from_wavelength(wavelength_nm: f64) -> Result<Self> {
        let energy_kev = conversion::wavelength_to_energy_kev(wavelength_nm)?;
        Ok(BeamState {
            energy_kev,
            wavelength_nm,
        })
    }
}

/// 几何状态：两个独立的用户输入
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryState {
    /// 样品-探测器距离（mm），> 0
    pub distance_mm: f64,
    /// 束流挡块半径（mm），≥ 0
    pub beamstop_radius_mm: f64,
}

/// 派生结果快照，只读视图
///
/// 每次任一上游输入变化都整体重算，绝不部分过期。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultSnapshot {
    /// 最小可测散射角 2θ（度），挡块阴影边界
    pub tth_min_deg: f64,
    /// 中心到边缘的最大 2θ（度），取半对角线
    pub tth_max_from_center_deg: f64,
    /// 全对角线的最大 2θ（度），居中光束的真实上限
    pub tth_max_full_diagonal_deg: f64,
    /// 最小可测 q（nm⁻¹）
    pub q_min_inv_nm: f64,
    /// 中心到边缘的最大 q（nm⁻¹）
    pub q_max_from_center_inv_nm: f64,
    /// 全对角线的最大 q（nm⁻¹）
    pub q_max_full_diagonal_inv_nm: f64,
    /// 最大可分辨 d 间距（nm），d = 1/q_min；无挡块时为 ∞
    pub d_max_nm: f64,
}
