//! # interactive 子命令实现
//!
//! 逐行读取用户命令的交互式会话。每个命令映射为存储的一次迁移，
//! 迁移成功后重新渲染结果表格；失败只打印错误，会话继续，
//! 存储保持上一个一致快照。
//!
//! ## 命令
//! - `energy <keV>` / `e` - 设置光子能量
//! - `wavelength <nm>` / `wl` - 设置波长
//! - `distance <mm>` / `dist` - 设置样品-探测器距离
//! - `beamstop <mm>` / `bs` - 设置挡块半径
//! - `detector <name>` / `det` - 切换探测器预设
//! - `detectors` - 列出预设目录
//! - `angle <q>` - 查询给定 q 在当前波长下的 2θ 与 d
//! - `show` / `s` - 重新打印输入与结果
//! - `help` / `?` - 命令说明
//! - `quit` / `exit` / `q` - 退出
//!
//! ## 依赖关系
//! - 使用 `store/` 执行迁移
//! - 使用 `commands/view.rs`、`commands/detectors.rs` 渲染
//! - 使用 `console` crate 读取终端输入

use crate::commands::{detectors, view};
use crate::error::{QcalcError, Result};
use crate::models::detector::detector_names;
use crate::physics::conversion;
use crate::store::ParameterStore;
use crate::utils::output;

use console::Term;

/// 一条命令处理后的会话走向
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Continue,
    Quit,
}

/// 启动交互式会话
pub fn execute() -> Result<()> {
    output::print_header("Scattering Geometry Calculator");

    let mut store = ParameterStore::new()?;
    view::print_inputs(&store);
    view::print_results(store.snapshot());
    output::print_info("Type 'help' for the command list, 'quit' to exit");

    let term = Term::stdout();
    loop {
        term.write_str("qcalc> ")?;
        let line = term.read_line()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match run_command(&mut store, line) {
            Ok(Action::Quit) => break,
            Ok(Action::Continue) => {}
            Err(e) => output::print_error(&e.to_string()),
        }
    }

    Ok(())
}

/// 解析并执行一条命令
///
/// 迁移失败的错误向上传播，由会话循环打印；存储状态不变。
fn run_command(store: &mut ParameterStore, line: &str) -> Result<Action> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or("");
    let arg = parts.next();

    match verb {
        "energy" | "e" => {
            store.set_energy(parse_value(arg, "energy in keV")?)?;
            print_update(store);
        }
        "wavelength" | "wl" => {
            store.set_wavelength(parse_value(arg, "wavelength in nm")?)?;
            print_update(store);
        }
        "distance" | "dist" => {
            store.set_distance(parse_value(arg, "distance in mm")?)?;
            print_update(store);
        }
        "beamstop" | "bs" => {
            store.set_beamstop_radius(parse_value(arg, "beamstop radius in mm")?)?;
            print_update(store);
        }
        "detector" | "det" => {
            let name = arg.ok_or_else(|| {
                QcalcError::InvalidArgument(format!(
                    "missing detector name; available: {}",
                    detector_names().join(", ")
                ))
            })?;
            store.set_detector(name)?;
            print_update(store);
        }
        "detectors" => detectors::execute()?,
        "angle" => {
            let q = parse_value(arg, "q in nm⁻¹")?;
            print_angle_for_q(store, q)?;
        }
        "show" | "s" => {
            view::print_inputs(store);
            view::print_results(store.snapshot());
        }
        "help" | "?" => print_help(),
        "quit" | "exit" | "q" => return Ok(Action::Quit),
        _ => {
            return Err(QcalcError::InvalidArgument(format!(
                "unknown command '{}'; type 'help' for the command list",
                verb
            )))
        }
    }

    Ok(Action::Continue)
}

/// 迁移成功后的统一回显
fn print_update(store: &ParameterStore) {
    output::print_success("Parameters updated");
    view::print_inputs(store);
    view::print_results(store.snapshot());
}

/// 给定 q 在当前波长下的散射角与 d 间距
fn print_angle_for_q(store: &ParameterStore, q_inv_nm: f64) -> Result<()> {
    if !q_inv_nm.is_finite() || q_inv_nm <= 0.0 {
        return Err(QcalcError::InvalidInput {
            name: "q (nm⁻¹)",
            constraint: "a finite positive value",
            value: q_inv_nm,
        });
    }

    let wavelength_nm = store.beam().wavelength_nm;
    let tth_rad = conversion::q_to_scattering_angle(q_inv_nm, wavelength_nm)?;

    output::print_info(&format!(
        "q = {:.4} nm⁻¹ → 2θ = {:.4}° ({:.6} rad), d = {:.4} nm",
        q_inv_nm,
        tth_rad.to_degrees(),
        tth_rad,
        1.0 / q_inv_nm
    ));
    Ok(())
}

/// 解析数值参数
fn parse_value(arg: Option<&str>, what: &str) -> Result<f64> {
    let token = arg
        .ok_or_else(|| QcalcError::InvalidArgument(format!("missing value: expected {}", what)))?;
    token.parse::<f64>().map_err(|_| {
        QcalcError::InvalidArgument(format!("expected a number for {}, got '{}'", what, token))
    })
}

/// 打印命令说明
fn print_help() {
    output::print_separator();
    println!("  energy <keV>      (e)    set photon energy");
    println!("  wavelength <nm>   (wl)   set wavelength");
    println!("  distance <mm>     (dist) set sample-to-detector distance");
    println!("  beamstop <mm>     (bs)   set beamstop radius (0 = none)");
    println!("  detector <name>   (det)  select detector preset");
    println!("  detectors                list detector presets");
    println!("  angle <q>                2θ and d for a q value (nm⁻¹)");
    println!("  show              (s)    reprint inputs and results");
    println!("  help              (?)    this message");
    println!("  quit              (q)    exit");
    output::print_separator();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_run_command_sets_energy() {
        let mut store = ParameterStore::new().unwrap();
        let action = run_command(&mut store, "energy 10").unwrap();
        assert_eq!(action, Action::Continue);
        assert_relative_eq!(store.beam().energy_kev, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_run_command_aliases() {
        let mut store = ParameterStore::new().unwrap();
        run_command(&mut store, "wl 0.154").unwrap();
        run_command(&mut store, "dist 500").unwrap();
        run_command(&mut store, "bs 2.5").unwrap();
        run_command(&mut store, "det pilatus300k").unwrap();

        assert_relative_eq!(store.beam().wavelength_nm, 0.154, max_relative = 1e-12);
        assert_eq!(store.geometry().distance_mm, 500.0);
        assert_eq!(store.geometry().beamstop_radius_mm, 2.5);
        assert_eq!(store.detector().name, "Pilatus300k");
    }

    #[test]
    fn test_run_command_quit() {
        let mut store = ParameterStore::new().unwrap();
        assert_eq!(run_command(&mut store, "quit").unwrap(), Action::Quit);
        assert_eq!(run_command(&mut store, "q").unwrap(), Action::Quit);
    }

    #[test]
    fn test_unknown_command_rejected_without_mutation() {
        let mut store = ParameterStore::new().unwrap();
        let before = *store.snapshot();

        assert!(run_command(&mut store, "bogus 1").is_err());
        assert!(run_command(&mut store, "energy abc").is_err());
        assert!(run_command(&mut store, "energy").is_err());

        assert_eq!(*store.snapshot(), before);
    }

    #[test]
    fn test_failed_transition_keeps_session_state() {
        let mut store = ParameterStore::new().unwrap();
        let before = *store.snapshot();

        assert!(run_command(&mut store, "distance 0").is_err());
        assert!(run_command(&mut store, "detector Unknown").is_err());

        assert_eq!(*store.snapshot(), before);
        assert_eq!(store.detector().name, "MarCCD");
    }

    #[test]
    fn test_angle_query_out_of_range() {
        let store = ParameterStore::new().unwrap();
        // 默认波长约 0.1 nm，q_max = 4π/λ ≈ 125.7 nm⁻¹
        assert!(print_angle_for_q(&store, 500.0).is_err());
        assert!(print_angle_for_q(&store, 10.0).is_ok());
        assert!(print_angle_for_q(&store, -1.0).is_err());
    }
}
