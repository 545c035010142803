//! # 响应式参数存储
//!
//! 持有全部输入字段的当前值，任一输入变化时整体重算派生量，
//! 对外只暴露一致的快照。
//!
//! ## 事务语义
//! 每个 setter 是一次完整的原子迁移：
//! 校验 → 构造候选状态 → 整体重算 → 提交。
//! 任一步失败即中止，已有状态（含上次快照）保持不变，
//! 错误同步返回给调用方。
//!
//! ## 并发
//! 单线程同步模型，迁移只经由 `&mut self` 进行；
//! 跨线程共享时需由调用方加锁串行化。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `physics/geometry.rs` 重算快照
//! - 使用 `models/` 的数据模型

use crate::error::Result;
use crate::models::{detector, BeamState, DetectorSpec, GeometryState, ResultSnapshot};
use crate::physics::geometry;

/// 默认光子能量（keV）
pub const ENERGY_DEFAULT_KEV: f64 = 12.4;
/// 默认样品-探测器距离（mm）
pub const DISTANCE_DEFAULT_MM: f64 = 200.0;
/// 默认束流挡块半径（mm）
pub const BEAMSTOP_RADIUS_DEFAULT_MM: f64 = 5.0;
/// 默认探测器预设（目录第一项）
pub const DETECTOR_DEFAULT: &str = "MarCCD";

/// 参数存储：全部状态的唯一持有者
///
/// 表示层不保留独立副本，只读取快照并调用 setter。
#[derive(Debug, Clone)]
pub struct ParameterStore {
    beam: BeamState,
    geometry: GeometryState,
    detector: &'static DetectorSpec,
    snapshot: ResultSnapshot,
}

impl ParameterStore {
    /// 以默认参数创建存储并计算初始快照
    pub fn new() -> Result<Self> {
        let beam = BeamState::from_energy(ENERGY_DEFAULT_KEV)?;
        let geometry = GeometryState {
            distance_mm: DISTANCE_DEFAULT_MM,
            beamstop_radius_mm: BEAMSTOP_RADIUS_DEFAULT_MM,
        };
        let detector = detector::find_detector(DETECTOR_DEFAULT)?;
        let snapshot = geometry::resolve(&beam, &geometry, detector)?;
        Ok(ParameterStore {
            beam,
            geometry,
            detector,
            snapshot,
        })
    }

    // ─────────────────────────────────────────────────────────────
    // 迁移（每个都是原子更新）
    // ─────────────────────────────────────────────────────────────

    /// 能量编辑：换算波长并整体重算
    pub fn set_energy(&mut self, energy_kev: f64) -> Result<()> {
        let beam = BeamState::from_energy(energy_kev)?;
        let snapshot = geometry::resolve(&beam, &self.geometry, self.detector)?;
        self.beam = beam;
        self.snapshot = snapshot;
        Ok(())
    }

    /// 波长编辑：换算能量并整体重算
    pub fn set_wavelength(&mut self, wavelength_nm: f64) -> Result<()> {
        let beam = BeamState::from_wavelength(wavelength_nm)?;
        let snapshot = geometry::resolve(&beam, &self.geometry, self.detector)?;
        self.beam = beam;
        self.snapshot = snapshot;
        Ok(())
    }

    /// 距离编辑：校验在 resolve 内完成（> 0）
    pub fn set_distance(&mut self, distance_mm: f64) -> Result<()> {
        let geometry = GeometryState {
            distance_mm,
            ..self.geometry
        };
        let snapshot = geometry::resolve(&self.beam, &geometry, self.detector)?;
        self.geometry = geometry;
        self.snapshot = snapshot;
        Ok(())
    }

    /// 挡块半径编辑：校验在 resolve 内完成（≥ 0）
    pub fn set_beamstop_radius(&mut self, beamstop_radius_mm: f64) -> Result<()> {
        let geometry = GeometryState {
            beamstop_radius_mm,
            ..self.geometry
        };
        let snapshot = geometry::resolve(&self.beam, &geometry, self.detector)?;
        self.geometry = geometry;
        self.snapshot = snapshot;
        Ok(())
    }

    /// 切换探测器预设：查目录失败则当前选择不变
    pub fn set_detector(&mut self, name: &str) -> Result<()> {
        let det = detector::find_detector(name)?;
        let snapshot = geometry::resolve(&self.beam, &self.geometry, det)?;
        self.detector = det;
        self.snapshot = snapshot;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // 查询
    // ─────────────────────────────────────────────────────────────

    /// 当前结果快照
    pub fn snapshot(&self) -> &ResultSnapshot {
        &self.snapshot
    }

    /// 当前光束状态
    pub fn beam(&self) -> &BeamState {
        &self.beam
    }

    /// 当前几何状态
    pub fn geometry(&self) -> &GeometryState {
        &self.geometry
    }

    /// 当前探测器预设
    pub fn detector(&self) -> &DetectorSpec {
        self.detector
    }
}
