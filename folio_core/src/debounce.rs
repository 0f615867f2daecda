//! Debounce for high-frequency handlers.
//!
//! Time is passed in as milliseconds so the same logic runs against
//! `performance.now()` in the browser and plain numbers in tests.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Run on the first call of a burst, then stay quiet until `wait` ms pass
    /// without a call.
    Leading,
    /// Run once, `wait` ms after the last call of a burst.
    Trailing,
}

#[derive(Debug, Clone)]
pub struct Debounce {
    wait_ms: f64,
    edge: Edge,
    quiet_at: Option<f64>,
    pending: bool,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(10.0, Edge::Leading)
    }
}

impl Debounce {
    pub fn new(wait_ms: f64, edge: Edge) -> Self {
        Self {
            wait_ms,
            edge,
            quiet_at: None,
            pending: false,
        }
    }

    /// Register a call at `now_ms`. Returns `true` when the handler should
    /// run immediately.
    pub fn call(&mut self, now_ms: f64) -> bool {
        let idle = self.quiet_at.is_none_or(|at| now_ms >= at);
        self.quiet_at = Some(now_ms + self.wait_ms);
        match self.edge {
            Edge::Leading => idle,
            Edge::Trailing => {
                self.pending = true;
                false
            }
        }
    }

    /// Advance to `now_ms`. Returns `true` when a trailing call is due.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let Some(at) = self.quiet_at else {
            return false;
        };
        if now_ms < at {
            return false;
        }
        self.quiet_at = None;
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_fires_first_call_of_burst() {
        let mut debounce = Debounce::default();
        assert!(debounce.call(0.0));
        assert!(!debounce.call(4.0));
        assert!(!debounce.call(12.0));
        // 10ms of quiet after the call at 12.
        assert!(!debounce.call(21.0));
        assert!(debounce.call(31.5));
        assert!(!debounce.poll(100.0));
    }

    #[test]
    fn trailing_fires_after_quiet_period() {
        let mut debounce = Debounce::new(10.0, Edge::Trailing);
        assert!(!debounce.call(0.0));
        assert!(!debounce.call(5.0));
        assert!(!debounce.poll(14.0));
        assert!(debounce.poll(15.0));
        assert!(!debounce.poll(40.0));
    }

    #[test]
    fn poll_without_calls_is_quiet() {
        let mut debounce = Debounce::new(10.0, Edge::Trailing);
        assert!(!debounce.poll(1_000.0));
    }
}
