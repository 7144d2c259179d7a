use crate::flow::{CooldownToken, Dispatcher, Rejected};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use std::time::Duration;

/// Monotonic milliseconds, falling back to wall-clock time when the
/// Performance API is missing.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// [`Dispatcher`] bound to browser timers and to the owning component's
/// lifetime. The pending cooldown is cleared and the dispatcher torn down when
/// the component is disposed.
#[derive(Clone, Copy)]
pub struct DebouncedDispatch {
    inner: StoredValue<Dispatcher>,
    pending: StoredValue<Option<CooldownToken>>,
    timer: StoredValue<Option<TimeoutHandle>>,
}

impl DebouncedDispatch {
    pub fn new(window_ms: f64, cooldown_ms: f64) -> Self {
        let this = Self {
            inner: store_value(Dispatcher::new(window_ms, cooldown_ms)),
            pending: store_value(None),
            timer: store_value(None),
        };
        on_cleanup(move || this.teardown());
        this
    }

    /// Run `action` now if the dispatcher accepts it, then schedule the
    /// cooldown release.
    pub fn run(&self, action: impl FnOnce()) -> Result<(), Rejected> {
        let token = self
            .inner
            .try_update_value(|d| d.try_acquire(now_ms()))
            .unwrap_or(Err(Rejected::TornDown))?;
        self.pending.set_value(Some(token));

        action();
        self.schedule_release();
        Ok(())
    }

    fn schedule_release(&self) {
        let this = *self;
        let cooldown = self.inner.with_value(|d| d.cooldown_ms());
        let delay = Duration::from_secs_f64(cooldown.max(0.0) / 1000.0);
        match set_timeout_with_handle(move || this.release(), delay) {
            Ok(handle) => self.timer.set_value(Some(handle)),
            Err(e) => {
                log::warn!("could not schedule navigation cooldown: {e:?}");
                self.release();
            }
        }
    }

    fn release(&self) {
        let _ = self.timer.try_update_value(Option::take);
        let Some(Some(token)) = self.pending.try_update_value(Option::take) else {
            return;
        };
        let _ = self.inner.try_update_value(|d| d.release(token));
    }

    fn teardown(&self) {
        if let Some(Some(handle)) = self.timer.try_update_value(Option::take) {
            handle.clear();
        }
        let _ = self.pending.try_update_value(Option::take);
        let _ = self.inner.try_update_value(Dispatcher::teardown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_disposing_the_owner_tears_down_and_drops_the_pending_token() {
        let runtime = create_runtime();
        let observed = Rc::new(Cell::new(None));

        let spawn = as_child_of_current_owner({
            let observed = Rc::clone(&observed);
            move |()| {
                let dispatch = DebouncedDispatch::new(200.0, 400.0);
                let token = dispatch.inner.try_update_value(|d| d.try_acquire(0.0));
                dispatch.pending.set_value(token.and_then(Result::ok));

                // Registered after the dispatcher's own cleanup, so it sees the
                // state that teardown left behind.
                let observed = Rc::clone(&observed);
                on_cleanup(move || {
                    observed.set(Some((
                        dispatch.inner.with_value(Dispatcher::is_torn_down),
                        dispatch.inner.with_value(Dispatcher::is_busy),
                        dispatch.pending.with_value(Option::is_some),
                    )));
                });
                dispatch
            }
        });
        let (dispatch, disposer) = spawn(());
        assert!(dispatch.inner.with_value(Dispatcher::is_busy));
        assert!(observed.get().is_none());

        drop(disposer);
        assert_eq!(observed.get(), Some((true, false, false)));

        let ran = Cell::new(false);
        assert_eq!(dispatch.run(|| ran.set(true)), Err(Rejected::TornDown));
        assert!(!ran.get());

        runtime.dispose();
    }

    #[test]
    fn test_release_after_teardown_is_a_no_op() {
        let runtime = create_runtime();
        let dispatch = DebouncedDispatch::new(200.0, 400.0);
        let token = dispatch.inner.try_update_value(|d| d.try_acquire(0.0));
        dispatch.pending.set_value(token.and_then(Result::ok));

        dispatch.teardown();
        dispatch.release();

        assert!(dispatch.inner.with_value(Dispatcher::is_torn_down));
        assert!(!dispatch.inner.with_value(Dispatcher::is_busy));
        assert!(dispatch.pending.with_value(Option::is_none));
        assert!(dispatch.timer.with_value(Option::is_none));
        runtime.dispose();
    }
}
