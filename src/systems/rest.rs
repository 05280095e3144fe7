use crate::domain::Body;

/// Advance rest-time bookkeeping for every movable body.
///
/// The solver never reads this back; hosts use it to cull or skip
/// drawing bodies that have settled.
pub fn track_rest(bodies: &mut [Body], fps: f32) {
    let dt = 1.0 / fps;
    for body in bodies.iter_mut().filter(|b| !b.is_static()) {
        body.track_rest(dt);
    }
}
