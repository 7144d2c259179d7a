use super::error::{non_negative, positive, Result};

pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Facility power budget around an IT load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacilityParams {
    /// Server/network load in kW
    pub it_load_kw: f64,
    /// Cooling power as a percentage of IT load
    pub cooling_pct: f64,
    /// UPS and distribution losses as a percentage of IT load
    pub distribution_loss_pct: f64,
    /// Electricity price in $/kWh
    pub price_per_kwh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacilityReading {
    pub cooling_kw: f64,
    pub losses_kw: f64,
    pub total_kw: f64,
    /// Power usage effectiveness: total / IT
    pub pue: f64,
    pub annual_energy_mwh: f64,
    pub annual_cost: f64,
    /// Share of the bill spent on anything but IT, 0..1
    pub overhead_fraction: f64,
}

pub fn evaluate(params: &FacilityParams) -> Result<FacilityReading> {
    let it = positive("IT load", params.it_load_kw)?;
    let cooling_kw = it * non_negative("cooling overhead", params.cooling_pct)? / 100.0;
    let losses_kw = it * non_negative("distribution losses", params.distribution_loss_pct)? / 100.0;
    let price = non_negative("electricity price", params.price_per_kwh)?;

    let total_kw = it + cooling_kw + losses_kw;
    let annual_kwh = total_kw * HOURS_PER_YEAR;
    Ok(FacilityReading {
        cooling_kw,
        losses_kw,
        total_kw,
        pue: total_kw / it,
        annual_energy_mwh: annual_kwh / 1000.0,
        annual_cost: annual_kwh * price,
        overhead_fraction: (total_kw - it) / total_kw,
    })
}
