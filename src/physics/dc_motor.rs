use super::error::{non_negative, positive, Result};
use std::f64::consts::PI;

/// Single-coil brushed DC motor fed from a fixed supply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorParams {
    pub supply_voltage_v: f64,
    /// Armature resistance in Ω
    pub resistance_ohm: f64,
    /// Stator field in T
    pub field_t: f64,
    pub turns: f64,
    /// Coil area in cm²
    pub area_cm2: f64,
    /// Shaft speed in revolutions per minute
    pub rpm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorReading {
    /// Motor constant `N B A`, in N·m/A (equivalently V·s/rad)
    pub motor_constant: f64,
    pub omega_rad_s: f64,
    pub back_emf_v: f64,
    pub current_a: f64,
    /// Torque with the coil plane parallel to the field, in N·m
    pub peak_torque_nm: f64,
    pub mechanical_power_w: f64,
    pub electrical_power_w: f64,
    /// Mechanical / electrical power, 0 when no current flows
    pub efficiency: f64,
}

pub fn evaluate(params: &MotorParams) -> Result<MotorReading> {
    let voltage = non_negative("supply voltage", params.supply_voltage_v)?;
    let resistance = positive("armature resistance", params.resistance_ohm)?;
    let field = non_negative("field strength", params.field_t)?;
    let turns = non_negative("turns", params.turns)?;
    let area_m2 = non_negative("coil area", params.area_cm2)? * 1e-4;
    let rpm = non_negative("speed", params.rpm)?;

    let motor_constant = turns * field * area_m2;
    let omega_rad_s = rpm * 2.0 * PI / 60.0;
    let back_emf_v = motor_constant * omega_rad_s;
    // Above no-load speed the motor would generate; the lesson stops at zero current.
    let current_a = ((voltage - back_emf_v) / resistance).max(0.0);

    let peak_torque_nm = motor_constant * current_a;
    let mechanical_power_w = back_emf_v * current_a;
    let electrical_power_w = voltage * current_a;
    let efficiency = if electrical_power_w > 0.0 {
        mechanical_power_w / electrical_power_w
    } else {
        0.0
    };

    Ok(MotorReading {
        motor_constant,
        omega_rad_s,
        back_emf_v,
        current_a,
        peak_torque_nm,
        mechanical_power_w,
        electrical_power_w,
        efficiency,
    })
}

/// Torque with the coil normal at `angle_deg` to the field.
///
/// The commutator flips the current every half turn, so torque never reverses.
pub fn torque_at(reading: &MotorReading, angle_deg: f64) -> f64 {
    reading.peak_torque_nm * angle_deg.to_radians().sin().abs()
}

/// Speed at which back-EMF cancels the supply, in rpm.
pub fn no_load_rpm(params: &MotorParams) -> Result<f64> {
    let k = params.turns * params.field_t * params.area_cm2 * 1e-4;
    let k = positive("motor constant", k)?;
    Ok(non_negative("supply voltage", params.supply_voltage_v)? / k * 60.0 / (2.0 * PI))
}
