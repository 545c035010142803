//! # calc 子命令实现
//!
//! 由命令行参数做一次完整计算并打印输入与结果表格。
//!
//! ## 依赖关系
//! - 使用 `cli/calc.rs` 定义的 CalcArgs
//! - 使用 `store/` 执行迁移
//! - 使用 `commands/view.rs` 渲染

use crate::cli::calc::CalcArgs;
use crate::commands::view;
use crate::error::Result;
use crate::store::{ParameterStore, ENERGY_DEFAULT_KEV};
use crate::utils::output;

/// 执行单次计算
pub fn execute(args: CalcArgs) -> Result<()> {
    output::print_header("Scattering Geometry Calculation");

    let mut store = ParameterStore::new()?;
    store.set_detector(&args.detector)?;
    store.set_distance(args.distance)?;
    store.set_beamstop_radius(args.beamstop)?;

    // --energy 与 --wavelength 互斥（clap 保证），缺省用默认能量
    if let Some(wavelength) = args.wavelength {
        store.set_wavelength(wavelength)?;
    } else {
        store.set_energy(args.energy.unwrap_or(ENERGY_DEFAULT_KEV))?;
    }

    view::print_inputs(&store);
    view::print_results(store.snapshot());
    Ok(())
}
