use super::error::{non_negative, positive, Result};

pub const STANDARD_GRAVITY: f64 = 9.81;
pub const WATTS_PER_HORSEPOWER: f64 = 745.7;

/// Lifting a load through a height in a given time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftParams {
    pub mass_kg: f64,
    pub height_m: f64,
    pub time_s: f64,
    /// Gravitational acceleration in m/s²
    pub gravity: f64,
}

impl Default for LiftParams {
    fn default() -> Self {
        Self {
            mass_kg: 60.0,
            height_m: 5.0,
            time_s: 10.0,
            gravity: STANDARD_GRAVITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftReading {
    pub work_j: f64,
    pub power_w: f64,
    pub horsepower: f64,
}

/// `W = m g h`, `P = W / t`.
pub fn evaluate(params: &LiftParams) -> Result<LiftReading> {
    let mass = non_negative("mass", params.mass_kg)?;
    let height = non_negative("height", params.height_m)?;
    let gravity = non_negative("gravity", params.gravity)?;
    let time = positive("time", params.time_s)?;

    let work_j = mass * gravity * height;
    let power_w = work_j / time;
    Ok(LiftReading {
        work_j,
        power_w,
        horsepower: power_w / WATTS_PER_HORSEPOWER,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::FormulaError;

    #[test]
    fn test_stair_climb_exact() {
        let r = evaluate(&LiftParams {
            mass_kg: 60.0,
            height_m: 5.0,
            time_s: 10.0,
            gravity: 10.0,
        })
        .unwrap();
        assert_eq!(r.work_j, 3000.0);
        assert_eq!(r.power_w, 300.0);
    }

    #[test]
    fn test_same_work_faster_means_more_power() {
        let slow = evaluate(&LiftParams::default()).unwrap();
        let fast = evaluate(&LiftParams {
            time_s: 5.0,
            ..LiftParams::default()
        })
        .unwrap();
        assert_eq!(slow.work_j, fast.work_j);
        assert!((fast.power_w - 2.0 * slow.power_w).abs() < 1e-9);
    }

    #[test]
    fn test_horsepower() {
        let r = evaluate(&LiftParams {
            mass_kg: 76.0,
            height_m: 1.0,
            time_s: 1.0,
            gravity: STANDARD_GRAVITY,
        })
        .unwrap();
        // 76 kg raised 1 m in 1 s is roughly one horsepower
        assert!((r.horsepower - 1.0).abs() < 0.01, "got {} hp", r.horsepower);
    }

    #[test]
    fn test_zero_time_rejected() {
        let err = evaluate(&LiftParams {
            time_s: 0.0,
            ..LiftParams::default()
        })
        .unwrap_err();
        assert_eq!(err, FormulaError::ZeroDivisor { name: "time" });
    }
}
