use super::Phase;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::rc::Rc;

/// Closed set of event tags reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEventKind {
    GameStarted,
    PhaseChange,
    PredictionMade,
    TwistPredictionMade,
    ApplicationExplored,
    TestAnswered,
    TestCompleted,
    MasteryAchieved,
    GameRestarted,
    GameCompleted,
}

impl GameEventKind {
    pub fn tag(self) -> &'static str {
        match self {
            GameEventKind::GameStarted => "game_started",
            GameEventKind::PhaseChange => "phase_change",
            GameEventKind::PredictionMade => "prediction_made",
            GameEventKind::TwistPredictionMade => "twist_prediction_made",
            GameEventKind::ApplicationExplored => "application_explored",
            GameEventKind::TestAnswered => "test_answered",
            GameEventKind::TestCompleted => "test_completed",
            GameEventKind::MasteryAchieved => "mastery_achieved",
            GameEventKind::GameRestarted => "game_restarted",
            GameEventKind::GameCompleted => "game_completed",
        }
    }
}

/// `{ "type": ..., "data": ..., "timestamp": ... }` as delivered to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    #[serde(rename = "type")]
    pub kind: GameEventKind,
    pub data: Value,
    /// Milliseconds since the Unix epoch
    pub timestamp: f64,
}

/// Audible feedback cues. How (and whether) they sound is up to the [`Chime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChimeKind {
    Click,
    Transition,
    Success,
    Failure,
    Complete,
}

/// Side effects produced by [`FlowState::apply`](super::FlowState::apply).
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEffect {
    Event { kind: GameEventKind, data: Value },
    /// A phase was left in the forward direction for the first time this
    /// attempt.
    PhaseComplete(Phase),
    /// The mastery completion action ran.
    Complete,
    Chime(ChimeKind),
}

impl FlowEffect {
    pub fn event(kind: GameEventKind, data: Value) -> Self {
        FlowEffect::Event { kind, data }
    }
}

/// Host-facing callbacks.
pub trait GameHost {
    fn on_game_event(&self, event: &GameEvent);

    fn on_phase_complete(&self, _phase: Phase) {}

    fn on_complete(&self) {}
}

/// Injected feedback-sound capability. Implementations must never fail loudly.
pub trait Chime {
    fn chime(&self, kind: ChimeKind);
}

/// A [`Chime`] that makes no sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Chime for Silent {
    fn chime(&self, _kind: ChimeKind) {}
}

/// Stamps effects with the lesson slug and a timestamp and routes them to the
/// host and the chime.
#[derive(Clone)]
pub struct Emitter {
    game: &'static str,
    host: Rc<dyn GameHost>,
    chime: Rc<dyn Chime>,
    clock: Rc<dyn Fn() -> f64>,
}

impl Emitter {
    pub fn new(
        game: &'static str,
        host: Rc<dyn GameHost>,
        chime: Rc<dyn Chime>,
        clock: Rc<dyn Fn() -> f64>,
    ) -> Self {
        Self {
            game,
            host,
            chime,
            clock,
        }
    }

    pub fn emit(&self, effects: impl IntoIterator<Item = FlowEffect>) {
        for effect in effects {
            match effect {
                FlowEffect::Event { kind, data } => {
                    let event = self.stamp(kind, data);
                    log::debug!("{}: {}", self.game, kind.tag());
                    self.host.on_game_event(&event);
                }
                FlowEffect::PhaseComplete(phase) => self.host.on_phase_complete(phase),
                FlowEffect::Complete => self.host.on_complete(),
                FlowEffect::Chime(kind) => self.chime.chime(kind),
            }
        }
    }

    fn stamp(&self, kind: GameEventKind, mut data: Value) -> GameEvent {
        if data.is_null() {
            data = Value::Object(Default::default());
        }
        if let Value::Object(map) = &mut data {
            map.insert("game".to_string(), Value::from(self.game));
        }
        GameEvent {
            kind,
            data,
            timestamp: (self.clock)(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    /// Host that records everything it is told.
    #[derive(Default)]
    pub(crate) struct RecordingHost {
        pub events: RefCell<Vec<GameEvent>>,
        pub completed_phases: RefCell<Vec<Phase>>,
        pub completions: RefCell<usize>,
    }

    impl GameHost for RecordingHost {
        fn on_game_event(&self, event: &GameEvent) {
            self.events.borrow_mut().push(event.clone());
        }

        fn on_phase_complete(&self, phase: Phase) {
            self.completed_phases.borrow_mut().push(phase);
        }

        fn on_complete(&self) {
            *self.completions.borrow_mut() += 1;
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingChime(pub RefCell<Vec<ChimeKind>>);

    impl Chime for RecordingChime {
        fn chime(&self, kind: ChimeKind) {
            self.0.borrow_mut().push(kind);
        }
    }

    #[test]
    fn test_event_wire_shape() {
        let event = GameEvent {
            kind: GameEventKind::PhaseChange,
            data: json!({ "from": "hook", "to": "predict" }),
            timestamp: 1_700_000_000_000.0,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "phase_change");
        assert_eq!(value["data"]["to"], "predict");
        assert_eq!(value["timestamp"], 1_700_000_000_000.0);
    }

    #[test]
    fn test_tags_match_serde() {
        for kind in [
            GameEventKind::GameStarted,
            GameEventKind::TwistPredictionMade,
            GameEventKind::MasteryAchieved,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.tag());
        }
    }

    #[test]
    fn test_emitter_routes_effects() {
        let host = Rc::new(RecordingHost::default());
        let chime = Rc::new(RecordingChime::default());
        let emitter = Emitter::new("capacitance", host.clone(), chime.clone(), Rc::new(|| 42.0));

        emitter.emit(vec![
            FlowEffect::event(GameEventKind::PredictionMade, json!({ "choice": "B" })),
            FlowEffect::event(GameEventKind::GameCompleted, Value::Null),
            FlowEffect::PhaseComplete(Phase::Hook),
            FlowEffect::Complete,
            FlowEffect::Chime(ChimeKind::Click),
        ]);

        let events = host.events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].data["choice"], "B");
        assert_eq!(events[0].data["game"], "capacitance");
        assert_eq!(events[0].timestamp, 42.0);
        assert_eq!(events[1].data, json!({ "game": "capacitance" }));
        assert_eq!(*host.completed_phases.borrow(), vec![Phase::Hook]);
        assert_eq!(*host.completions.borrow(), 1);
        assert_eq!(*chime.0.borrow(), vec![ChimeKind::Click]);
    }
}
