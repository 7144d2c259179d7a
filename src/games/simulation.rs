//! Slider layouts and readouts for each lesson's experiment phases.
//!
//! Values travel as a flat `&[f64]` in slider order; each lesson destructures
//! its own slice and feeds the matching evaluator in [`crate::physics`].

use super::GameKind;
use crate::physics::{
    capacitance, data_center, dc_motor, fracture, induction, work_power, CapacitorParams,
    CrackParams, FacilityParams, FormulaError, InductionParams, LiftParams, MotorParams,
    SliderRange,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub range: SliderRange,
    pub default: f64,
    /// Decimal places shown next to the slider
    pub precision: usize,
    /// Only adjustable in the twist experiment; fixed at `default` before.
    pub twist_only: bool,
}

const fn slider(
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    range: SliderRange,
    default: f64,
    precision: usize,
) -> SliderSpec {
    SliderSpec {
        key,
        label,
        unit,
        range,
        default,
        precision,
        twist_only: false,
    }
}

const fn twist(slider: SliderSpec) -> SliderSpec {
    SliderSpec {
        twist_only: true,
        ..slider
    }
}

/// A timed animation the learner can start in the experiment phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub button: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub target: f64,
    pub step: f64,
    pub interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadoutValue {
    Number {
        value: f64,
        unit: &'static str,
        precision: usize,
    },
    Verdict {
        ok: bool,
        text: &'static str,
    },
}

/// One derived value shown beside the experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub label: &'static str,
    pub value: ReadoutValue,
}

impl Readout {
    pub fn number(label: &'static str, value: f64, unit: &'static str, precision: usize) -> Self {
        Self {
            label,
            value: ReadoutValue::Number {
                value,
                unit,
                precision,
            },
        }
    }

    pub fn verdict(label: &'static str, ok: bool, text: &'static str) -> Self {
        Self {
            label,
            value: ReadoutValue::Verdict { ok, text },
        }
    }

    pub fn display(&self) -> String {
        let text = match &self.value {
            ReadoutValue::Number { value, unit, .. } if value.is_infinite() => format!("∞ {unit}"),
            ReadoutValue::Number {
                value,
                unit,
                precision,
            } => format!("{:.*} {}", *precision, value, unit),
            ReadoutValue::Verdict { text, .. } => text.to_string(),
        };
        text.trim_end().to_string()
    }
}

const CAPACITANCE_SLIDERS: &[SliderSpec] = &[
    slider("area", "Plate area", "cm²", SliderRange::new(1.0, 200.0, 1.0), 100.0, 0),
    slider("separation", "Plate gap", "mm", SliderRange::new(0.1, 5.0, 0.005), 0.885, 3),
    slider("voltage", "Battery", "V", SliderRange::new(1.0, 24.0, 1.0), 9.0, 0),
    twist(slider("dielectric", "Dielectric εr", "", SliderRange::new(1.0, 10.0, 0.5), 1.0, 1)),
];

const DC_MOTOR_SLIDERS: &[SliderSpec] = &[
    slider("voltage", "Supply", "V", SliderRange::new(0.0, 24.0, 0.5), 12.0, 1),
    slider("field", "Magnet field", "T", SliderRange::new(0.0, 1.0, 0.05), 0.5, 2),
    slider("turns", "Coil turns", "", SliderRange::new(10.0, 500.0, 10.0), 100.0, 0),
    slider("rpm", "Shaft speed", "rpm", SliderRange::new(0.0, 3000.0, 50.0), 600.0, 0),
    twist(slider("resistance", "Winding resistance", "Ω", SliderRange::new(0.5, 10.0, 0.5), 2.0, 1)),
];

/// Armature coil area, fixed for the motor lesson (cm²)
const MOTOR_COIL_AREA_CM2: f64 = 20.0;

const DATA_CENTER_SLIDERS: &[SliderSpec] = &[
    slider("it_load", "IT load", "kW", SliderRange::new(100.0, 5000.0, 100.0), 1000.0, 0),
    slider("cooling", "Cooling overhead", "%", SliderRange::new(0.0, 100.0, 1.0), 40.0, 0),
    slider("price", "Electricity price", "$/kWh", SliderRange::new(0.05, 0.40, 0.01), 0.10, 2),
    twist(slider("losses", "UPS & distribution losses", "%", SliderRange::new(0.0, 30.0, 1.0), 10.0, 0)),
];

const INDUCTION_SLIDERS: &[SliderSpec] = &[
    slider("turns", "Coil turns", "", SliderRange::new(10.0, 500.0, 10.0), 100.0, 0),
    slider("field", "Magnet field", "T", SliderRange::new(0.0, 1.0, 0.05), 0.5, 2),
    slider("area", "Coil area", "cm²", SliderRange::new(10.0, 400.0, 10.0), 100.0, 0),
    slider("change_time", "Pull-away time", "s", SliderRange::new(0.05, 2.0, 0.05), 0.1, 2),
    twist(slider("rpm", "Coil speed", "rpm", SliderRange::new(0.0, 600.0, 10.0), 60.0, 0)),
];

const FRACTURE_SLIDERS: &[SliderSpec] = &[
    slider("stress", "Applied stress", "MPa", SliderRange::new(0.0, 200.0, 5.0), 50.0, 0),
    slider("crack", "Crack depth", "mm", SliderRange::new(0.0, 10.0, 0.1), 4.0, 1),
    slider("strength", "Material strength", "MPa", SliderRange::new(50.0, 1000.0, 10.0), 300.0, 0),
    twist(slider("tip_radius", "Crack-tip radius", "mm", SliderRange::new(0.05, 5.0, 0.05), 1.0, 2)),
];

const WORK_POWER_SLIDERS: &[SliderSpec] = &[
    slider("mass", "Mass", "kg", SliderRange::new(10.0, 120.0, 1.0), 60.0, 0),
    slider("height", "Height", "m", SliderRange::new(1.0, 20.0, 0.5), 5.0, 1),
    slider("time", "Time", "s", SliderRange::new(1.0, 30.0, 0.5), 10.0, 1),
    twist(slider("gravity", "Gravity", "m/s²", SliderRange::new(1.6, 25.0, 0.1), 9.81, 2)),
];

impl GameKind {
    pub fn sliders(self) -> &'static [SliderSpec] {
        match self {
            GameKind::Capacitance => CAPACITANCE_SLIDERS,
            GameKind::DcMotor => DC_MOTOR_SLIDERS,
            GameKind::DataCenter => DATA_CENTER_SLIDERS,
            GameKind::Induction => INDUCTION_SLIDERS,
            GameKind::Fracture => FRACTURE_SLIDERS,
            GameKind::WorkPower => WORK_POWER_SLIDERS,
        }
    }

    pub fn default_values(self) -> Vec<f64> {
        self.sliders().iter().map(|s| s.default).collect()
    }

    pub fn animation(self) -> Option<AnimationSpec> {
        match self {
            GameKind::Capacitance => Some(AnimationSpec {
                button: "Charge",
                label: "Charge level",
                unit: "%",
                target: 100.0,
                step: 2.0,
                interval_ms: 40,
            }),
            GameKind::DcMotor => Some(AnimationSpec {
                button: "Turn armature",
                label: "Coil angle",
                unit: "°",
                target: 360.0,
                step: 10.0,
                interval_ms: 30,
            }),
            GameKind::Induction => Some(AnimationSpec {
                button: "Spin coil",
                label: "Coil angle",
                unit: "°",
                target: 360.0,
                step: 6.0,
                interval_ms: 30,
            }),
            GameKind::DataCenter | GameKind::Fracture | GameKind::WorkPower => None,
        }
    }

    /// Readouts for slider `values` (in [`GameKind::sliders`] order) with the
    /// animation at `progress`.
    pub fn evaluate(self, values: &[f64], progress: f64) -> Result<Vec<Readout>, FormulaError> {
        let arity = FormulaError::Arity {
            expected: self.sliders().len(),
            got: values.len(),
        };
        match self {
            GameKind::Capacitance => {
                let &[area_cm2, separation_mm, voltage_v, dielectric_constant] = values else {
                    return Err(arity);
                };
                let r = capacitance::evaluate(&CapacitorParams {
                    area_cm2,
                    separation_mm,
                    dielectric_constant,
                    voltage_v,
                })?;
                Ok(vec![
                    Readout::number("Capacitance", r.capacitance_pf, "pF", 2),
                    Readout::number("Full charge", r.charge_pc, "pC", 1),
                    Readout::number("Stored energy", r.energy_nj, "nJ", 2),
                    Readout::number("Field between plates", r.field_v_per_m / 1000.0, "kV/m", 2),
                    Readout::number("Charge now", capacitance::charge_at(&r, progress), "pC", 1),
                ])
            }
            GameKind::DcMotor => {
                let &[supply_voltage_v, field_t, turns, rpm, resistance_ohm] = values else {
                    return Err(arity);
                };
                let r = dc_motor::evaluate(&MotorParams {
                    supply_voltage_v,
                    resistance_ohm,
                    field_t,
                    turns,
                    area_cm2: MOTOR_COIL_AREA_CM2,
                    rpm,
                })?;
                Ok(vec![
                    Readout::number("Current", r.current_a, "A", 2),
                    Readout::number("Back-EMF", r.back_emf_v, "V", 2),
                    Readout::number("Peak torque", r.peak_torque_nm, "N·m", 3),
                    Readout::number("Torque at this angle", dc_motor::torque_at(&r, progress), "N·m", 3),
                    Readout::number("Mechanical power", r.mechanical_power_w, "W", 1),
                    Readout::number("Efficiency", r.efficiency * 100.0, "%", 0),
                ])
            }
            GameKind::DataCenter => {
                let &[it_load_kw, cooling_pct, price_per_kwh, distribution_loss_pct] = values else {
                    return Err(arity);
                };
                let r = data_center::evaluate(&FacilityParams {
                    it_load_kw,
                    cooling_pct,
                    distribution_loss_pct,
                    price_per_kwh,
                })?;
                Ok(vec![
                    Readout::number("Facility power", r.total_kw, "kW", 0),
                    Readout::number("PUE", r.pue, "", 2),
                    Readout::number("Overhead share", r.overhead_fraction * 100.0, "%", 1),
                    Readout::number("Energy per year", r.annual_energy_mwh, "MWh", 0),
                    Readout::number("Bill per year", r.annual_cost / 1000.0, "k$", 0),
                ])
            }
            GameKind::Induction => {
                let &[turns, field_t, area_cm2, change_time_s, rpm] = values else {
                    return Err(arity);
                };
                let r = induction::evaluate(&InductionParams {
                    turns,
                    field_t,
                    area_cm2,
                    change_time_s,
                    rpm,
                })?;
                Ok(vec![
                    Readout::number("Flux linkage", r.flux_linkage_wb, "Wb", 3),
                    Readout::number("Pull-away EMF", r.average_emf_v, "V", 2),
                    Readout::number("Peak spinning EMF", r.peak_emf_v, "V", 2),
                    Readout::number("EMF at this angle", induction::emf_at(&r, progress), "V", 2),
                ])
            }
            GameKind::Fracture => {
                let &[applied_stress_mpa, crack_length_mm, strength_mpa, tip_radius_mm] = values else {
                    return Err(arity);
                };
                let r = fracture::evaluate(&CrackParams {
                    applied_stress_mpa,
                    crack_length_mm,
                    tip_radius_mm,
                    strength_mpa,
                })?;
                Ok(vec![
                    Readout::number("Stress concentration", r.concentration_factor, "×", 2),
                    Readout::number("Stress at crack tip", r.tip_stress_mpa, "MPa", 0),
                    Readout::number("Safety factor", r.safety_factor, "", 2),
                    Readout::verdict(
                        "Plate",
                        !r.fractures,
                        if r.fractures { "Fractures" } else { "Holds" },
                    ),
                ])
            }
            GameKind::WorkPower => {
                let &[mass_kg, height_m, time_s, gravity] = values else {
                    return Err(arity);
                };
                let r = work_power::evaluate(&LiftParams {
                    mass_kg,
                    height_m,
                    time_s,
                    gravity,
                })?;
                Ok(vec![
                    Readout::number("Work done", r.work_j, "J", 0),
                    Readout::number("Power", r.power_w, "W", 1),
                    Readout::number("Horsepower", r.horsepower, "hp", 2),
                ])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_in_range_and_evaluate() {
        for kind in GameKind::ALL {
            let sliders = kind.sliders();
            assert!(sliders.iter().any(|s| s.twist_only), "{kind:?} has no twist slider");
            for s in sliders {
                assert!(s.range.contains(s.default), "{kind:?}.{} default out of range", s.key);
            }
            let readouts = kind.evaluate(&kind.default_values(), 0.0).unwrap();
            assert!(!readouts.is_empty());
        }
    }

    #[test]
    fn test_every_slider_extreme_evaluates() {
        for kind in GameKind::ALL {
            for corner in [true, false] {
                let values: Vec<f64> = kind
                    .sliders()
                    .iter()
                    .map(|s| if corner { s.range.min } else { s.range.max })
                    .collect();
                assert!(kind.evaluate(&values, 0.0).is_ok(), "{kind:?} corner {corner}");
            }
        }
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            GameKind::WorkPower.evaluate(&[1.0, 2.0], 0.0),
            Err(FormulaError::Arity { expected: 4, got: 2 })
        );
    }

    #[test]
    fn test_work_power_defaults() {
        let readouts = GameKind::WorkPower.evaluate(&[60.0, 5.0, 10.0, 10.0], 0.0).unwrap();
        assert_eq!(readouts[0].display(), "3000 J");
        assert_eq!(readouts[1].display(), "300.0 W");
    }

    #[test]
    fn test_capacitor_charge_follows_animation() {
        let values = GameKind::Capacitance.default_values();
        let empty = GameKind::Capacitance.evaluate(&values, 0.0).unwrap();
        let full = GameKind::Capacitance.evaluate(&values, 100.0).unwrap();
        assert_eq!(empty[4].display(), "0.0 pC");
        assert_eq!(full[4].display(), full[1].display());
    }

    #[test]
    fn test_fracture_verdict() {
        let holds = GameKind::Fracture.evaluate(&[50.0, 4.0, 300.0, 1.0], 0.0).unwrap();
        assert_eq!(holds[3].display(), "Holds");
        let breaks = GameKind::Fracture.evaluate(&[50.0, 4.0, 300.0, 0.25], 0.0).unwrap();
        assert_eq!(breaks[3].value, ReadoutValue::Verdict { ok: false, text: "Fractures" });
    }

    #[test]
    fn test_infinite_display() {
        let r = GameKind::Fracture.evaluate(&[0.0, 4.0, 300.0, 1.0], 0.0).unwrap();
        assert_eq!(r[2].display(), "∞");
        let pue = GameKind::DataCenter.evaluate(&GameKind::DataCenter.default_values(), 0.0).unwrap();
        assert_eq!(pue[1].display(), "1.50");
    }

    #[test]
    fn test_animations_are_reachable() {
        for kind in GameKind::ALL {
            if let Some(anim) = kind.animation() {
                assert!(anim.step > 0.0 && anim.step <= anim.target);
                assert!(anim.interval_ms > 0);
            }
        }
    }
}
