//! # 结果表格渲染
//!
//! 将存储的输入状态与结果快照渲染为终端表格，
//! 表示层只读取快照，不持有独立状态。
//!
//! ## 依赖关系
//! - 被 `commands/calc.rs` 和 `commands/interactive.rs` 使用
//! - 使用 `tabled` crate 和 `utils/output.rs`

use crate::models::ResultSnapshot;
use crate::store::ParameterStore;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 输入参数表格行
#[derive(Tabled)]
struct ParameterRow {
    #[tabled(rename = "Parameter")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 结果表格行：每个量的最小值与两档最大值
#[derive(Tabled)]
struct RangeRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Min (beamstop)")]
    min: String,
    #[tabled(rename = "Max (center-to-edge)")]
    max_edge: String,
    #[tabled(rename = "Max (full diagonal)")]
    max_full: String,
}

/// 打印当前输入参数
pub fn print_inputs(store: &ParameterStore) {
    let beam = store.beam();
    let geometry = store.geometry();
    let det = store.detector();

    let rows = vec![
        ParameterRow {
            name: "Energy (keV)".to_string(),
            value: format!("{:.4}", beam.energy_kev),
        },
        ParameterRow {
            name: "Wavelength (nm)".to_string(),
            value: format!("{:.6}", beam.wavelength_nm),
        },
        ParameterRow {
            name: "Distance (mm)".to_string(),
            value: format!("{:.2}", geometry.distance_mm),
        },
        ParameterRow {
            name: "Beamstop radius (mm)".to_string(),
            value: format!("{:.2}", geometry.beamstop_radius_mm),
        },
        ParameterRow {
            name: "Detector".to_string(),
            value: format!(
                "{} ({}×{} px, {} mm/px)",
                det.name, det.shape_pixels.0, det.shape_pixels.1, det.pixel_size_mm
            ),
        },
    ];

    println!("{}", Table::new(&rows));
}

/// 打印结果快照
pub fn print_results(snapshot: &ResultSnapshot) {
    let rows = vec![
        RangeRow {
            quantity: "2θ (°)".to_string(),
            min: format!("{:.4}", snapshot.tth_min_deg),
            max_edge: format!("{:.4}", snapshot.tth_max_from_center_deg),
            max_full: format!("{:.4}", snapshot.tth_max_full_diagonal_deg),
        },
        RangeRow {
            quantity: "q (nm⁻¹)".to_string(),
            min: format!("{:.4}", snapshot.q_min_inv_nm),
            max_edge: format!("{:.4}", snapshot.q_max_from_center_inv_nm),
            max_full: format!("{:.4}", snapshot.q_max_full_diagonal_inv_nm),
        },
    ];

    println!("{}", Table::new(&rows));
    output::print_info(&format!(
        "Largest resolvable d-spacing: {} nm (d = 1/q)",
        fmt_d(snapshot.d_max_nm)
    ));
    if snapshot.q_min_inv_nm == 0.0 {
        output::print_warning("Beamstop radius is 0: no lower q bound");
    }
}

/// d 间距格式化，无挡块时为 ∞
fn fmt_d(d_nm: f64) -> String {
    if d_nm.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.4}", d_nm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_d() {
        assert_eq!(fmt_d(f64::INFINITY), "∞");
        assert_eq!(fmt_d(0.6366), "0.6366");
    }
}
