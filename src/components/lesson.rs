use super::debounce::DebouncedDispatch;
use crate::flow::{Emitter, FlowAction, FlowEffect, FlowState};
use crate::games::{GameContent, GameKind};
use leptos::*;

/// Everything the phase panels need to read and drive one lesson.
#[derive(Clone, Copy)]
pub struct Lesson {
    pub kind: GameKind,
    pub content: StoredValue<GameContent>,
    pub state: RwSignal<FlowState>,
    pub haptics: bool,
    emitter: StoredValue<Emitter>,
    guard: DebouncedDispatch,
}

impl Lesson {
    pub fn new(
        kind: GameKind,
        content: GameContent,
        state: FlowState,
        emitter: Emitter,
        guard: DebouncedDispatch,
        haptics: bool,
    ) -> Self {
        Self {
            kind,
            content: store_value(content),
            state: create_rw_signal(state),
            haptics,
            emitter: store_value(emitter),
            guard,
        }
    }

    /// Apply `action` immediately. Used for selections, which are idempotent
    /// in the reducer.
    pub fn apply(&self, action: FlowAction) {
        let effects = self.state.try_update(|s| s.apply(action)).unwrap_or_default();
        if !effects.is_empty() {
            self.emitter.with_value(|e| e.emit(effects));
        }
    }

    /// Apply a navigation `action` through the debounce guard. Repeated taps
    /// inside the window or cooldown are dropped.
    pub fn navigate(&self, action: FlowAction) {
        let this = *self;
        if let Err(reason) = self.guard.run(move || this.apply(action)) {
            log::debug!("dropped {action:?}: {reason:?}");
        }
    }

    pub fn emit(&self, effects: impl IntoIterator<Item = FlowEffect>) {
        self.emitter.with_value(|e| e.emit(effects));
    }

    pub fn with_content<T>(&self, f: impl FnOnce(&GameContent) -> T) -> T {
        self.content.with_value(f)
    }
}
