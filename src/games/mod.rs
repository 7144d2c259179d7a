//! The six lessons: identity, experiment layout and bundled copy.

mod content;
mod simulation;

pub use content::{Application, ContentError, GameContent, PredictionPrompt, Question};
pub use simulation::{AnimationSpec, Readout, ReadoutValue, SliderSpec};

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Capacitance,
    DcMotor,
    DataCenter,
    Induction,
    Fracture,
    WorkPower,
}

impl GameKind {
    pub const ALL: [GameKind; 6] = [
        GameKind::Capacitance,
        GameKind::DcMotor,
        GameKind::DataCenter,
        GameKind::Induction,
        GameKind::Fracture,
        GameKind::WorkPower,
    ];

    /// URL segment and event namespace.
    pub fn slug(self) -> &'static str {
        match self {
            GameKind::Capacitance => "capacitance",
            GameKind::DcMotor => "dc-motor",
            GameKind::DataCenter => "data-center",
            GameKind::Induction => "induction",
            GameKind::Fracture => "fracture",
            GameKind::WorkPower => "work-power",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for GameKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKind::ALL
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or_else(|| ContentError::UnknownGame(s.to_string()))
    }
}
