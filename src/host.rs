use crate::flow::{GameEvent, GameEventKind, GameHost, Phase};
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit};

pub const GAME_EVENT: &str = "physics-game-event";
pub const PHASE_COMPLETE_EVENT: &str = "physics-phase-complete";
pub const GAME_COMPLETE_EVENT: &str = "physics-game-complete";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Track a custom event in Umami analytics
/// Fails silently if Umami is not loaded (e.g., blocked by adblocker)
pub fn track_event(event: &str) {
    // Check if umami exists before calling
    let result = js_sys::eval("typeof umami !== 'undefined'");
    if let Ok(val) = result {
        if val.as_bool().unwrap_or(false) {
            umami_track(event);
        }
    }
}

/// Milestones worth an analytics hit. Everything else is DOM-only.
fn is_tracked(kind: GameEventKind) -> bool {
    matches!(
        kind,
        GameEventKind::GameStarted
            | GameEventKind::TestCompleted
            | GameEventKind::MasteryAchieved
            | GameEventKind::GameCompleted
    )
}

/// Host that re-broadcasts lesson notifications as `CustomEvent`s on
/// `window`, so an embedding page can listen without touching Rust.
pub struct WebHost {
    game: &'static str,
}

impl WebHost {
    pub fn new(game: &'static str) -> Self {
        Self { game }
    }

    fn dispatch(&self, name: &str, detail: &JsValue) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let init = CustomEventInit::new();
        init.set_detail(detail);
        match CustomEvent::new_with_event_init_dict(name, &init) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(e) => log::warn!("could not create {name} event: {e:?}"),
        }
    }
}

impl GameHost for WebHost {
    fn on_game_event(&self, event: &GameEvent) {
        let detail = match serde_json::to_string(event) {
            Ok(json) => js_sys::JSON::parse(&json).unwrap_or(JsValue::NULL),
            Err(e) => {
                log::warn!("could not serialize {:?}: {e}", event.kind);
                return;
            }
        };
        self.dispatch(GAME_EVENT, &detail);
        if is_tracked(event.kind) {
            track_event(&format!("{}-{}", self.game, event.kind.tag()));
        }
    }

    fn on_phase_complete(&self, phase: Phase) {
        self.dispatch(PHASE_COMPLETE_EVENT, &JsValue::from_str(phase.tag()));
    }

    fn on_complete(&self) {
        self.dispatch(GAME_COMPLETE_EVENT, &JsValue::from_str(self.game));
    }
}
