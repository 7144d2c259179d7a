use super::error::{finite, non_negative, positive, Result};

/// Vacuum permittivity in F/m
pub const EPSILON_0: f64 = 8.854_187_812_8e-12;

/// Parallel-plate capacitor inputs, in the units the sliders use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitorParams {
    /// Plate area in cm²
    pub area_cm2: f64,
    /// Plate separation in mm
    pub separation_mm: f64,
    /// Relative permittivity of the dielectric (1.0 = vacuum/air)
    pub dielectric_constant: f64,
    /// Applied voltage in V
    pub voltage_v: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitorReading {
    pub capacitance_pf: f64,
    /// Charge at full charge in pC
    pub charge_pc: f64,
    /// Stored energy at full charge in nJ
    pub energy_nj: f64,
    /// Field between the plates in V/m
    pub field_v_per_m: f64,
}

/// `C = ε0 εr A / d`, then `Q = C V`, `U = ½ C V²`, `E = V / d`.
pub fn evaluate(params: &CapacitorParams) -> Result<CapacitorReading> {
    let area_m2 = non_negative("plate area", params.area_cm2)? * 1e-4;
    let d_m = positive("plate separation", params.separation_mm)? * 1e-3;
    let eps_r = positive("dielectric constant", params.dielectric_constant)?;
    let voltage = finite("voltage", params.voltage_v)?;

    let capacitance_f = EPSILON_0 * eps_r * area_m2 / d_m;
    Ok(CapacitorReading {
        capacitance_pf: capacitance_f * 1e12,
        charge_pc: capacitance_f * voltage * 1e12,
        energy_nj: 0.5 * capacitance_f * voltage * voltage * 1e9,
        field_v_per_m: voltage / d_m,
    })
}

/// Charge held when the charging animation is at `percent` of full charge.
pub fn charge_at(reading: &CapacitorReading, percent: f64) -> f64 {
    reading.charge_pc * (percent.clamp(0.0, 100.0) / 100.0)
}
