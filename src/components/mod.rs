mod debounce;
mod game_shell;
mod lesson;
mod mastery_panel;
mod nav_bar;
mod prediction_panel;
mod progress_dots;
mod quiz_panel;
mod simulation_panel;
mod transfer_panel;

pub use game_shell::GameShell;
pub(crate) use mastery_panel::MasteryPanel;
pub use nav_bar::NavBar;
pub(crate) use prediction_panel::{PredictionPanel, ReviewPanel};
pub(crate) use progress_dots::ProgressDots;
pub(crate) use quiz_panel::QuizPanel;
pub(crate) use simulation_panel::SimulationPanel;
pub(crate) use transfer_panel::TransferPanel;
