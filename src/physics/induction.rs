//! Faraday's law for a flat coil.
//!
//! Two experiments share one coil: pulling the magnet away (the field drops
//! from `field_t` to zero over `change_time_s`) and spinning the coil in a
//! steady field at `rpm`.

use super::error::{non_negative, positive, Result};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductionParams {
    pub turns: f64,
    /// Magnetic flux density in T
    pub field_t: f64,
    /// Coil area in cm²
    pub area_cm2: f64,
    /// Time for the field to collapse, in s
    pub change_time_s: f64,
    /// Coil rotation speed in revolutions per minute
    pub rpm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InductionReading {
    /// `N B A` in Wb-turns
    pub flux_linkage_wb: f64,
    /// Magnitude of `-ΔΦ/Δt` while the field collapses, in V
    pub average_emf_v: f64,
    /// Angular speed in rad/s
    pub omega_rad_s: f64,
    /// `N B A ω` for the spinning coil, in V
    pub peak_emf_v: f64,
}

pub fn evaluate(params: &InductionParams) -> Result<InductionReading> {
    let turns = non_negative("turns", params.turns)?;
    let field = non_negative("field strength", params.field_t)?;
    let area_m2 = non_negative("coil area", params.area_cm2)? * 1e-4;
    let dt = positive("change time", params.change_time_s)?;
    let rpm = non_negative("rotation speed", params.rpm)?;

    let flux_linkage_wb = turns * field * area_m2;
    let omega_rad_s = rpm * 2.0 * PI / 60.0;
    Ok(InductionReading {
        flux_linkage_wb,
        average_emf_v: flux_linkage_wb / dt,
        omega_rad_s,
        peak_emf_v: flux_linkage_wb * omega_rad_s,
    })
}

/// Flux linkage `N B A cos θ` with the coil normal at `angle_deg` to the field.
pub fn flux_at(reading: &InductionReading, angle_deg: f64) -> f64 {
    reading.flux_linkage_wb * angle_deg.to_radians().cos()
}

/// Instantaneous EMF `N B A ω sin θ` of the spinning coil.
pub fn emf_at(reading: &InductionReading, angle_deg: f64) -> f64 {
    reading.peak_emf_v * angle_deg.to_radians().sin()
}
