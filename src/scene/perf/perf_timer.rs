//! Wall-clock sampling for the `relax_ms` stat. `Instant` is unavailable on
//! wasm32, so the browser build reads `Date.now()` instead.

pub(crate) struct LayoutTimer {
    #[cfg(target_arch = "wasm32")]
    started_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started: std::time::Instant,
}

impl LayoutTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            LayoutTimer { started_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            LayoutTimer { started: std::time::Instant::now() }
        }
    }

    /// Milliseconds since `start()`, as recorded into `LayoutStats`.
    pub(crate) fn sample_ms(self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.started_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started.elapsed().as_secs_f64() * 1000.0
        }
    }
}
