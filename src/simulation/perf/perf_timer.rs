/// Instant source: `Date.now()` in the browser, a monotonic clock natively
#[cfg(target_arch = "wasm32")]
type Clock = f64;
#[cfg(not(target_arch = "wasm32"))]
type Clock = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Clock {
    js_sys::Date::now()
}
#[cfg(not(target_arch = "wasm32"))]
fn now() -> Clock {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn millis_since(start: Clock) -> f64 {
    js_sys::Date::now() - start
}
#[cfg(not(target_arch = "wasm32"))]
fn millis_since(start: Clock) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch that costs nothing while perf metrics are off
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: Option<Clock>,
}

impl PerfTimer {
    pub(crate) fn start_if(enabled: bool) -> Self {
        PerfTimer { start: enabled.then(now) }
    }

    /// Milliseconds since start, or 0 for a disabled timer
    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.start.map_or(0.0, millis_since)
    }
}

#[cfg(test)]
mod tests {
    use super::PerfTimer;

    #[test]
    fn disabled_timer_reports_zero() {
        assert_eq!(PerfTimer::start_if(false).elapsed_ms(), 0.0);
    }

    #[test]
    fn enabled_timer_is_non_negative() {
        assert!(PerfTimer::start_if(true).elapsed_ms() >= 0.0);
    }
}
