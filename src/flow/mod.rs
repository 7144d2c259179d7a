//! Lesson flow core: the ten-phase state machine, quiz scoring, the debounce
//! guard, animation ramps and host notification. Nothing here touches the DOM.

mod dispatcher;
mod events;
mod machine;
mod phase;
mod quiz;
mod ramp;

pub use dispatcher::{CooldownToken, Dispatcher, Rejected, COOLDOWN_MS, DEBOUNCE_WINDOW_MS};
pub use events::{
    Chime, ChimeKind, Emitter, FlowEffect, GameEvent, GameEventKind, GameHost, Silent,
};
pub use machine::{
    advance_target, can_advance, reduce, transition, ApplicationProgress, FlowAction, FlowShape,
    FlowState, Gates, NavigationPolicy,
};
pub use phase::{Phase, PredictionChoice, UnknownPhase};
pub use quiz::{AnswerKey, QuizOutcome, QuizState, PASS_THRESHOLD, QUIZ_LENGTH};
pub use ramp::{Ramp, RampStatus};
