use thiserror::Error;

/// Rejected formula input.
///
/// Sliders clamp their values before evaluation, so these only surface when a
/// caller bypasses the UI boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be greater than zero")]
    ZeroDivisor { name: &'static str },

    #[error("expected {expected} simulation values, got {got}")]
    Arity { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, FormulaError>;

/// Accept any finite value.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::NonFinite { name, value })
    }
}

/// Accept finite values `>= 0`.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64> {
    let value = finite(name, value)?;
    if value < 0.0 {
        return Err(FormulaError::Negative { name, value });
    }
    Ok(value)
}

/// Accept finite values `> 0` (used for divisors).
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64> {
    let value = non_negative(name, value)?;
    if value == 0.0 {
        return Err(FormulaError::ZeroDivisor { name });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guards() {
        assert_eq!(finite("x", -1.0), Ok(-1.0));
        assert!(matches!(finite("x", f64::NAN), Err(FormulaError::NonFinite { .. })));
        assert!(matches!(non_negative("x", -0.5), Err(FormulaError::Negative { name: "x", .. })));
        assert_eq!(non_negative("x", 0.0), Ok(0.0));
        assert_eq!(positive("d", 0.0), Err(FormulaError::ZeroDivisor { name: "d" }));
        assert!(matches!(positive("d", f64::INFINITY), Err(FormulaError::NonFinite { .. })));
    }
}
