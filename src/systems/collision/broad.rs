use crate::domain::Body;

/// Bounding-circle rejection: true when the bounding circles touch
#[inline]
pub fn bound_test(a: &Body, b: &Body) -> bool {
    (b.center() - a.center()).length() <= a.bounds() + b.bounds()
}
