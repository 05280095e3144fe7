use crate::domain::WorldSettings;

use super::perf_stats::StepStats;
use super::WorldCore;

pub(super) fn create_world_core(settings: WorldSettings) -> WorldCore {
    WorldCore {
        bodies: Vec::with_capacity(64),
        joints: Vec::new(),
        settings,
        next_id: 0,
        frame: 0,
        perf_enabled: false,
        perf_stats: StepStats::default(),
    }
}
