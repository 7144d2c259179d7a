//! Closed-form formula evaluators, one module per lesson.
//!
//! Every evaluator takes a params struct in slider units and returns a reading
//! struct. They hold no state and never clamp; clamping happens at the slider
//! boundary via [`SliderRange`].

pub mod capacitance;
pub mod data_center;
pub mod dc_motor;
mod error;
pub mod fracture;
pub mod induction;
mod slider;
pub mod work_power;

pub use capacitance::{CapacitorParams, CapacitorReading};
pub use data_center::{FacilityParams, FacilityReading};
pub use dc_motor::{MotorParams, MotorReading};
pub use error::{FormulaError, Result};
pub use fracture::{CrackParams, CrackReading};
pub use induction::{InductionParams, InductionReading};
pub use slider::SliderRange;
pub use work_power::{LiftParams, LiftReading};
