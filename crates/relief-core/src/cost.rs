//! Need-based connection costing for camp heads

use crate::model::{INFINITE, Need, Weight};
use serde::{Deserialize, Serialize};

/// Field measurements a camp head enters for one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostInputs {
    pub distance: i64,
    pub water_level: i64,
}

/// Factors turning need, water level and distance into a weight.
///
/// Higher average need at the two endpoints lowers the cost, so urgent
/// camps are preferred when the backbone is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    pub base: Weight,
    pub need_factor: i64,
    pub water_level_factor: i64,
    pub distance_factor: i64,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            base: (i32::MAX / 2) as Weight,
            need_factor: 1000,
            water_level_factor: 100,
            distance_factor: 10,
        }
    }
}

impl CostModel {
    /// Weight of a connection between camps with needs `src_need` and `dest_need`.
    ///
    /// The result is clamped to `[0, INFINITE)` so it is always a known,
    /// non-negative cost.
    pub fn weight(&self, src_need: Need, dest_need: Need, inputs: CostInputs) -> Weight {
        let average_need = src_need.saturating_add(dest_need) / 2;
        self.base
            .saturating_sub(self.need_factor.saturating_mul(average_need))
            .saturating_add(inputs.water_level.saturating_mul(self.water_level_factor))
            .saturating_add(inputs.distance.saturating_mul(self.distance_factor))
            .clamp(0, INFINITE - 1)
    }
}
