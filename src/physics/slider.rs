/// Bounds and granularity of one simulation slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a raw input into range. Non-finite input falls back to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Parse the string value of an `<input type="range">` and clamp it.
    pub fn parse(&self, raw: &str) -> Option<f64> {
        raw.trim().parse::<f64>().ok().map(|v| self.clamp(v))
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let r = SliderRange::new(0.1, 5.0, 0.1);
        assert_eq!(r.clamp(-3.0), 0.1);
        assert_eq!(r.clamp(7.0), 5.0);
        assert_eq!(r.clamp(2.5), 2.5);
        assert_eq!(r.clamp(f64::NAN), 0.1);
    }

    #[test]
    fn test_parse() {
        let r = SliderRange::new(1.0, 10.0, 1.0);
        assert_eq!(r.parse(" 4 "), Some(4.0));
        assert_eq!(r.parse("42"), Some(10.0));
        assert_eq!(r.parse("abc"), None);
    }
}
