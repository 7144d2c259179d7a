use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One step of the fixed ten-phase lesson flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Hook,
    Predict,
    Play,
    Review,
    TwistPredict,
    TwistPlay,
    TwistReview,
    Transfer,
    Test,
    Mastery,
}

impl Phase {
    pub const ALL: [Phase; 10] = [
        Phase::Hook,
        Phase::Predict,
        Phase::Play,
        Phase::Review,
        Phase::TwistPredict,
        Phase::TwistPlay,
        Phase::TwistReview,
        Phase::Transfer,
        Phase::Test,
        Phase::Mastery,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Phase> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Phase> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Phase> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Mastery
    }

    /// Snake-case tag used in events, config and query params.
    pub fn tag(self) -> &'static str {
        match self {
            Phase::Hook => "hook",
            Phase::Predict => "predict",
            Phase::Play => "play",
            Phase::Review => "review",
            Phase::TwistPredict => "twist_predict",
            Phase::TwistPlay => "twist_play",
            Phase::TwistReview => "twist_review",
            Phase::Transfer => "transfer",
            Phase::Test => "test",
            Phase::Mastery => "mastery",
        }
    }

    /// Label for progress dots and headings.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Hook => "Hook",
            Phase::Predict => "Predict",
            Phase::Play => "Experiment",
            Phase::Review => "Review",
            Phase::TwistPredict => "Twist",
            Phase::TwistPlay => "Twist Lab",
            Phase::TwistReview => "Twist Review",
            Phase::Transfer => "Real World",
            Phase::Test => "Test",
            Phase::Mastery => "Mastery",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown phase '{0}'")]
pub struct UnknownPhase(pub String);

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Phase::ALL
            .into_iter()
            .find(|p| p.tag() == wanted)
            .ok_or_else(|| UnknownPhase(s.to_string()))
    }
}

/// A learner's answer to a predict / twist-predict prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionChoice {
    A,
    B,
    C,
    D,
}

impl PredictionChoice {
    pub const ALL: [PredictionChoice; 4] = [
        PredictionChoice::A,
        PredictionChoice::B,
        PredictionChoice::C,
        PredictionChoice::D,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }
}
