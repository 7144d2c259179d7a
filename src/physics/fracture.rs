use super::error::{non_negative, positive, Result};

/// An elliptical surface crack in a plate under uniform tension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackParams {
    /// Far-field applied stress in MPa
    pub applied_stress_mpa: f64,
    /// Crack depth in mm
    pub crack_length_mm: f64,
    /// Radius of curvature at the crack tip in mm
    pub tip_radius_mm: f64,
    /// Material strength in MPa
    pub strength_mpa: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackReading {
    /// Inglis stress concentration factor
    pub concentration_factor: f64,
    /// Peak stress at the crack tip in MPa
    pub tip_stress_mpa: f64,
    /// `strength / tip stress`; infinite when unloaded
    pub safety_factor: f64,
    pub fractures: bool,
}

/// `Kt = 1 + 2 √(a / ρ)`, tip stress `Kt σ`.
pub fn evaluate(params: &CrackParams) -> Result<CrackReading> {
    let stress = non_negative("applied stress", params.applied_stress_mpa)?;
    let a = non_negative("crack length", params.crack_length_mm)?;
    let rho = positive("tip radius", params.tip_radius_mm)?;
    let strength = non_negative("material strength", params.strength_mpa)?;

    let concentration_factor = 1.0 + 2.0 * (a / rho).sqrt();
    let tip_stress_mpa = concentration_factor * stress;
    let safety_factor = if tip_stress_mpa > 0.0 {
        strength / tip_stress_mpa
    } else {
        f64::INFINITY
    };
    Ok(CrackReading {
        concentration_factor,
        tip_stress_mpa,
        safety_factor,
        fractures: tip_stress_mpa >= strength,
    })
}
