use crate::core::utils::pair_mut;
use crate::systems::{bound_test, resolve_collision, test_collision};

use super::settings::resolve_params;
use super::WorldCore;

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct SweepOutcome {
    pub(super) sweeps: u32,
    pub(super) pairs_tested: u32,
    pub(super) contacts_found: u32,
    pub(super) contacts_resolved: u32,
}

/// Iterative collision relaxation.
///
/// Every sweep re-tests all unordered pairs in descending index order and
/// resolves contacts immediately (Gauss-Seidel style). Stops at the first
/// sweep that resolves nothing, or after `collision_iterations` sweeps.
/// This is best-effort stacking support, not an exact contact solver.
pub(super) fn collision_sweep(world: &mut WorldCore) -> SweepOutcome {
    let params = resolve_params(world);
    let max_sweeps = world.settings.collision_iterations;
    let bodies = &mut world.bodies;
    let n = bodies.len();

    let mut outcome = SweepOutcome::default();
    let mut settled = false;

    for _ in 0..max_sweeps {
        outcome.sweeps += 1;
        let mut resolved_any = false;

        for i in (0..n).rev() {
            for j in (i + 1..n).rev() {
                let (a, b) = pair_mut(bodies, i, j);
                if a.is_static() && b.is_static() {
                    continue;
                }
                if !bound_test(a, b) {
                    continue;
                }

                outcome.pairs_tested += 1;
                let Some(info) = test_collision(a, b) else {
                    continue;
                };
                outcome.contacts_found += 1;

                // normal from the lower index toward the higher one
                let info = info.oriented(a.center(), b.center());
                if resolve_collision(a, b, &info, &params) {
                    outcome.contacts_resolved += 1;
                    resolved_any = true;
                }
            }
        }

        if !resolved_any {
            settled = true;
            break;
        }
    }

    if !settled && max_sweeps > 0 {
        log::trace!("collision sweep budget ({}) exhausted without settling", max_sweeps);
    }
    outcome
}
