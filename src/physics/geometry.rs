//! # 散射几何解析引擎
//!
//! 由束流挡块半径、样品-探测器距离和探测器尺寸计算可测的
//! 角度/q 范围（最小值、中心到边缘、全对角线三档）。
//!
//! ## 算法概述
//! 1. 2θ_min = atan(r_bs / L)，挡块阴影以下的 q 不可测
//! 2. 2θ_max = atan(extent / L)，extent 取半对角线（中心到边缘）
//!    与全对角线（角到角，居中光束的真实最大可测角）各算一次
//! 3. 三个角度经 `conversion::scattering_angle_to_q` 转为 q
//! 4. d_max = 1/q_min（本工具约定 d = 1/q）
//!
//! ## 依赖关系
//! - 被 `store/` 调用
//! - 使用 `physics/conversion.rs` 做角度→q 换算
//! - 使用 `models/` 的 BeamState, GeometryState, DetectorSpec

use crate::error::{QcalcError, Result};
use crate::models::{BeamState, DetectorSpec, GeometryState, ResultSnapshot};
use crate::physics::conversion;

/// 束流挡块造成的最小可测散射角（弧度）
///
/// 2θ_min = atan(r_bs / L)。半径为 0 时返回 0（无挡块遮挡）。
pub fn min_scattering_angle(beamstop_radius_mm: f64, distance_mm: f64) -> Result<f64> {
    check_distance(distance_mm)?;
    if !beamstop_radius_mm.is_finite() || beamstop_radius_mm < 0.0 {
        return Err(QcalcError::InvalidInput {
            name: "beamstop radius (mm)",
            constraint: "a finite non-negative value",
            value: beamstop_radius_mm,
        });
    }
    Ok((beamstop_radius_mm / distance_mm).atan())
}

/// 探测器延伸量对应的最大可测散射角（弧度）
///
/// 2θ_max = atan(extent / L)。extent 为半对角线或全对角线。
pub fn max_scattering_angle(extent_mm: f64, distance_mm: f64) -> Result<f64> {
    check_distance(distance_mm)?;
    Ok((extent_mm / distance_mm).atan())
}

/// 由当前光束、几何与探测器状态解析出完整结果快照
///
/// 波长每次重算只从 BeamState 读取一次，不重复由能量推导。
/// 任一步失败则不产生快照，调用方状态保持不变。
pub fn resolve(
    beam: &BeamState,
    geometry: &GeometryState,
    detector: &DetectorSpec,
) -> Result<ResultSnapshot> {
    let wavelength_nm = beam.wavelength_nm;

    let tth_min = min_scattering_angle(geometry.beamstop_radius_mm, geometry.distance_mm)?;
    let tth_edge = max_scattering_angle(detector.half_diagonal_mm(), geometry.distance_mm)?;
    let tth_full = max_scattering_angle(detector.diagonal_mm(), geometry.distance_mm)?;

    let q_min = conversion::scattering_angle_to_q(tth_min, wavelength_nm);
    let q_edge = conversion::scattering_angle_to_q(tth_edge, wavelength_nm);
    let q_full = conversion::scattering_angle_to_q(tth_full, wavelength_nm);

    // 挡块半径为 0 时 q_min = 0，d 无上界
    let d_max_nm = if q_min > 0.0 { 1.0 / q_min } else { f64::INFINITY };

    Ok(ResultSnapshot {
        tth_min_deg: tth_min.to_degrees(),
        tth_max_from_center_deg: tth_edge.to_degrees(),
        tth_max_full_diagonal_deg: tth_full.to_degrees(),
        q_min_inv_nm: q_min,
        q_max_from_center_inv_nm: q_edge,
        q_max_full_diagonal_inv_nm: q_full,
        d_max_nm,
    })
}

/// 距离必须为有限正值，L = 0 时角度无定义
fn check_distance(distance_mm: f64) -> Result<()> {
    if !distance_mm.is_finite() || distance_mm <= 0.0 {
        return Err(QcalcError::InvalidInput {
            name: "distance (mm)",
            constraint: "a finite positive value",
            value: distance_mm,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::detector;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_beamstop_gives_zero_angle() {
        for &d in &[1.0, 200.0, 5000.0] {
            assert_eq!(min_scattering_angle(0.0, d).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_beamstop_shadow_scenario() {
        // r = 5 mm, L = 200 mm → 2θ_min = atan(1/40) ≈ 0.0250 rad ≈ 1.432°
        let tth = min_scattering_angle(5.0, 200.0).unwrap();
        assert_abs_diff_eq!(tth, 0.0250, epsilon = 1e-4);
        assert_abs_diff_eq!(tth.to_degrees(), 1.432, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_distance_rejected() {
        assert!(min_scattering_angle(5.0, 0.0).is_err());
        assert!(max_scattering_angle(100.0, 0.0).is_err());
        assert!(max_scattering_angle(100.0, -10.0).is_err());
        assert!(max_scattering_angle(100.0, f64::NAN).is_err());
    }

    #[test]
    fn test_negative_beamstop_rejected() {
        assert!(min_scattering_angle(-1.0, 200.0).is_err());
    }

    #[test]
    fn test_max_angle_monotonic_in_distance() {
        // 固定延伸量，距离越远最大角越小
        let extent = 120.0;
        let mut prev = max_scattering_angle(extent, 50.0).unwrap();
        for &d in &[100.0, 200.0, 400.0, 800.0] {
            let tth = max_scattering_angle(extent, d).unwrap();
            assert!(tth < prev, "expected decreasing angle at distance {}", d);
            prev = tth;
        }
    }

    #[test]
    fn test_max_angle_monotonic_in_extent() {
        // 固定距离，延伸量越大最大角越大
        let distance = 200.0;
        let mut prev = max_scattering_angle(10.0, distance).unwrap();
        for &e in &[50.0, 123.0, 246.0, 500.0] {
            let tth = max_scattering_angle(e, distance).unwrap();
            assert!(tth > prev, "expected increasing angle at extent {}", e);
            prev = tth;
        }
    }

    #[test]
    fn test_resolve_pilatus1m_scenario() {
        // Pilatus1M (981×1043 px, 0.172 mm/px), L = 200 mm
        let beam = BeamState::from_energy(12.4).unwrap();
        let geometry = GeometryState {
            distance_mm: 200.0,
            beamstop_radius_mm: 5.0,
        };
        let det = detector::find_detector("Pilatus1M").unwrap();

        let snap = resolve(&beam, &geometry, det).unwrap();

        // 对角线 sqrt((981·0.172)² + (1043·0.172)²) ≈ 246.28 mm
        assert_abs_diff_eq!(det.diagonal_mm(), 246.28, epsilon = 0.01);
        // 2θ_max(全对角线) = atan(246.28/200) ≈ 0.889 rad ≈ 50.9°
        assert_abs_diff_eq!(snap.tth_max_full_diagonal_deg, 50.92, epsilon = 0.05);
        // 中心到边缘档取半对角线，必然小于全对角线档
        assert!(snap.tth_max_from_center_deg < snap.tth_max_full_diagonal_deg);
        assert!(snap.q_max_from_center_inv_nm < snap.q_max_full_diagonal_inv_nm);
        // q_min 对应挡块阴影，d_max = 1/q_min
        assert!(snap.q_min_inv_nm > 0.0);
        assert_abs_diff_eq!(snap.d_max_nm, 1.0 / snap.q_min_inv_nm, epsilon = 1e-12);
    }

    #[test]
    fn test_resolve_without_beamstop_has_unbounded_d() {
        let beam = BeamState::from_energy(12.4).unwrap();
        let geometry = GeometryState {
            distance_mm: 200.0,
            beamstop_radius_mm: 0.0,
        };
        let det = detector::find_detector("MarCCD").unwrap();

        let snap = resolve(&beam, &geometry, det).unwrap();
        assert_eq!(snap.q_min_inv_nm, 0.0);
        assert!(snap.d_max_nm.is_infinite());
    }
}
