//! Debounce guard for user-triggered transitions.
//!
//! Pointer and touch handlers can fire the same activation twice in quick
//! succession. A dispatch is accepted only when the debounce window since the
//! last accepted dispatch has elapsed *and* no cooldown token is outstanding.
//! The host releases the token after `cooldown_ms` (a timer in the browser)
//! and must call [`Dispatcher::teardown`] when the owner goes away so a late
//! timer cannot act on a dead lesson.

pub const DEBOUNCE_WINDOW_MS: f64 = 200.0;
pub const COOLDOWN_MS: f64 = 400.0;

/// Proof that a dispatch was accepted. Releasing it ends the cooldown.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "the dispatcher stays busy until the token is released"]
pub struct CooldownToken {
    generation: u64,
}

impl CooldownToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// Too soon after the previous accepted dispatch.
    WithinWindow,
    /// A previous dispatch is still cooling down.
    InFlight,
    /// The owner has been torn down.
    TornDown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dispatcher {
    window_ms: f64,
    cooldown_ms: f64,
    last_accepted_ms: Option<f64>,
    in_flight: Option<u64>,
    next_generation: u64,
    torn_down: bool,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW_MS, COOLDOWN_MS)
    }
}

impl Dispatcher {
    pub fn new(window_ms: f64, cooldown_ms: f64) -> Self {
        Self {
            window_ms: window_ms.max(0.0),
            cooldown_ms: cooldown_ms.max(0.0),
            last_accepted_ms: None,
            in_flight: None,
            next_generation: 0,
            torn_down: false,
        }
    }

    pub fn cooldown_ms(&self) -> f64 {
        self.cooldown_ms
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Claim the dispatcher at monotonic time `now_ms`.
    pub fn try_acquire(&mut self, now_ms: f64) -> Result<CooldownToken, Rejected> {
        if self.torn_down {
            return Err(Rejected::TornDown);
        }
        if self.in_flight.is_some() {
            return Err(Rejected::InFlight);
        }
        if let Some(last) = self.last_accepted_ms {
            // A clock that went backwards counts as no time elapsed.
            let elapsed = (now_ms - last).max(0.0);
            if elapsed < self.window_ms {
                return Err(Rejected::WithinWindow);
            }
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        self.last_accepted_ms = Some(now_ms);
        self.in_flight = Some(generation);
        Ok(CooldownToken { generation })
    }

    /// Run `action` if the dispatch is accepted. The returned token must be
    /// handed back through [`Dispatcher::release`] once the cooldown ends.
    pub fn dispatch<T>(
        &mut self,
        now_ms: f64,
        action: impl FnOnce() -> T,
    ) -> Result<(T, CooldownToken), Rejected> {
        let token = self.try_acquire(now_ms)?;
        Ok((action(), token))
    }

    /// End the cooldown for `token`. Returns `false` for a stale token, which
    /// is ignored.
    pub fn release(&mut self, token: CooldownToken) -> bool {
        if self.in_flight == Some(token.generation) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Refuse every later dispatch and forget any outstanding token.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.in_flight = None;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_fire_runs_once() {
        let mut d = Dispatcher::default();
        let mut runs = 0;
        let first = d.dispatch(0.0, || runs += 1);
        let second = d.dispatch(120.0, || runs += 1);
        assert!(first.is_ok());
        assert_eq!(second.unwrap_err(), Rejected::InFlight);
        assert_eq!(runs, 1);
    }

    #[test]
    fn test_window_applies_after_release() {
        let mut d = Dispatcher::default();
        let (_, token) = d.dispatch(0.0, || ()).unwrap();
        assert!(d.release(token));
        assert_eq!(d.try_acquire(150.0).unwrap_err(), Rejected::WithinWindow);
        assert!(d.try_acquire(200.0).is_ok());
    }

    #[test]
    fn test_in_flight_blocks_past_window() {
        let mut d = Dispatcher::default();
        let token = d.try_acquire(0.0).unwrap();
        // Window has elapsed but the cooldown has not been released yet.
        assert_eq!(d.try_acquire(300.0).unwrap_err(), Rejected::InFlight);
        assert!(d.release(token));
        assert!(d.try_acquire(450.0).is_ok());
    }

    #[test]
    fn test_stale_token_ignored() {
        let mut d = Dispatcher::default();
        let old = d.try_acquire(0.0).unwrap();
        let stale = CooldownToken { generation: old.generation() };
        assert!(d.release(old));
        let current = d.try_acquire(500.0).unwrap();
        assert!(!d.release(stale));
        assert!(d.is_busy());
        assert!(d.release(current));
    }

    #[test]
    fn test_teardown_refuses_everything() {
        let mut d = Dispatcher::default();
        let token = d.try_acquire(0.0).unwrap();
        d.teardown();
        assert!(!d.is_busy());
        // The cooldown timer firing late must not revive anything.
        assert!(!d.release(token));
        let mut ran = false;
        assert_eq!(d.dispatch(10_000.0, || ran = true).unwrap_err(), Rejected::TornDown);
        assert!(!ran);
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut d = Dispatcher::default();
        let token = d.try_acquire(1_000.0).unwrap();
        d.release(token);
        assert_eq!(d.try_acquire(500.0).unwrap_err(), Rejected::WithinWindow);
    }
}
