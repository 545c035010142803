//! # 光束参数换算库
//!
//! 能量↔波长、散射角↔动量转移的纯函数换算，无副作用。
//!
//! ## 公式
//! - λ(nm) = h·c / (E·1000·e) · 1e9
//! - q = 4π/λ · sin(2θ/2)
//! - 2θ = 2·asin(λq/4π)
//!
//! ## 常数来源
//! CODATA 2018 推荐值（2019 年 SI 定义后 h、c、e 均为精确值）
//!
//! ## 依赖关系
//! - 被 `physics/geometry.rs` 和 `commands/` 调用
//! - 纯函数，无外部模块依赖（除 error.rs）

use crate::error::{QcalcError, Result};

use std::f64::consts::PI;

/// Planck 常数 h（J·s）
pub const PLANCK_H: f64 = 6.626_070_15e-34;

/// 真空光速 c（m/s）
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// 基本电荷 e（C）
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// 换算因子 hc/e（keV·nm）：λ(nm) = HC_KEV_NM / E(keV)
pub const HC_KEV_NM: f64 = PLANCK_H * SPEED_OF_LIGHT / ELEMENTARY_CHARGE * 1e9 / 1e3;

/// 光子能量（keV）转波长（nm）
///
/// 能量必须为有限正值，否则返回 `InvalidInput`
/// （非正能量没有物理意义，不允许静默产生 inf/NaN）。
pub fn energy_to_wavelength_nm(energy_kev: f64) -> Result<f64> {
    if !energy_kev.is_finite() || energy_kev <= 0.0 {
        return Err(QcalcError::InvalidInput {
            name: "energy (keV)",
            constraint: "a finite positive value",
            value: energy_kev,
        });
    }
    Ok(HC_KEV_NM / energy_kev)
}

/// 波长（nm）转光子能量（keV），上函数的逆
pub fn wavelength_to_energy_kev(wavelength_nm: f64) -> Result<f64> {
    if !wavelength_nm.is_finite() || wavelength_nm <= 0.0 {
        return Err(QcalcError::InvalidInput {
            name: "wavelength (nm)",
            constraint: "a finite positive value",
            value: wavelength_nm,
        });
    }
    Ok(HC_KEV_NM / wavelength_nm)
}

/// 散射角 2θ（弧度）转动量转移 q（nm⁻¹）
///
/// q = 4π/λ · sin(2θ/2)。调用方保证 λ > 0（BeamState 不变量）。
pub fn scattering_angle_to_q(tth_rad: f64, wavelength_nm: f64) -> f64 {
    4.0 * PI / wavelength_nm * (tth_rad / 2.0).sin()
}

/// 动量转移 q（nm⁻¹）转散射角 2θ（弧度）
///
/// 2θ = 2·asin(λq/4π)。当 |λq/4π| > 1 时该方程无实数解
/// （q 超出该波长下可达的最大值），返回 `OutOfRange`。
pub fn q_to_scattering_angle(q_inv_nm: f64, wavelength_nm: f64) -> Result<f64> {
    let sin_theta = wavelength_nm * q_inv_nm / (4.0 * PI);
    if sin_theta.abs() > 1.0 {
        return Err(QcalcError::OutOfRange {
            q: q_inv_nm,
            wavelength: wavelength_nm,
        });
    }
    Ok(2.0 * sin_theta.asin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_hc_factor() {
        assert_abs_diff_eq!(HC_KEV_NM, 1.23984198, epsilon = 1e-7);
    }

    #[test]
    fn test_energy_12_4_kev() {
        // 12.4 keV 是同步辐射常用能量点，波长应接近 0.1 nm
        let wl = energy_to_wavelength_nm(12.4).unwrap();
        assert_abs_diff_eq!(wl, 0.09998, epsilon = 1e-3);
    }

    #[test]
    fn test_energy_wavelength_round_trip() {
        for &e in &[0.1, 1.0, 8.04, 12.4, 17.4, 100.0, 500.0] {
            let wl = energy_to_wavelength_nm(e).unwrap();
            let back = wavelength_to_energy_kev(wl).unwrap();
            assert_relative_eq!(back, e, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_invalid_energy_rejected() {
        assert!(energy_to_wavelength_nm(0.0).is_err());
        assert!(energy_to_wavelength_nm(-1.0).is_err());
        assert!(energy_to_wavelength_nm(f64::NAN).is_err());
        assert!(energy_to_wavelength_nm(f64::INFINITY).is_err());
    }

    #[test]
    fn test_invalid_wavelength_rejected() {
        assert!(wavelength_to_energy_kev(0.0).is_err());
        assert!(wavelength_to_energy_kev(-0.1).is_err());
        assert!(wavelength_to_energy_kev(f64::NAN).is_err());
    }

    #[test]
    fn test_angle_q_round_trip() {
        let wavelength = 0.09998725680096795; // 12.4 keV
        for &tth in &[1e-4, 0.01, 0.025, 0.5, 1.0, 2.0, 3.0] {
            let q = scattering_angle_to_q(tth, wavelength);
            let back = q_to_scattering_angle(q, wavelength).unwrap();
            assert_relative_eq!(back, tth, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_q_zero_gives_zero_angle() {
        let tth = q_to_scattering_angle(0.0, 0.1).unwrap();
        assert_eq!(tth, 0.0);
    }

    #[test]
    fn test_q_beyond_limit_out_of_range() {
        // q_max = 4π/λ（对应 2θ = π），超出即无实数解
        let wavelength = 0.1;
        let q_max = 4.0 * PI / wavelength;
        assert!(q_to_scattering_angle(q_max * 1.001, wavelength).is_err());
        // 恰好在极限上仍有解（2θ = π）
        let tth = q_to_scattering_angle(q_max, wavelength).unwrap();
        assert_relative_eq!(tth, PI, max_relative = 1e-12);
    }
}
