/// Fixed-step progression towards a target, advanced by a timer.
///
/// Drives the capacitor charge bar and the coil/armature rotations. The timer
/// owner stops ticking once [`RampStatus::Finished`] comes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    value: f64,
    target: f64,
    step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampStatus {
    Running,
    Finished,
}

impl Ramp {
    pub fn new(target: f64, step: f64) -> Self {
        Self {
            value: 0.0,
            target: target.max(0.0),
            step: step.abs().max(f64::EPSILON),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Progress in 0..=1.
    pub fn fraction(&self) -> f64 {
        if self.target == 0.0 {
            1.0
        } else {
            self.value / self.target
        }
    }

    pub fn is_finished(&self) -> bool {
        self.value >= self.target
    }

    /// Advance one step, landing exactly on the target.
    pub fn tick(&mut self) -> RampStatus {
        self.value = (self.value + self.step).min(self.target);
        if self.is_finished() {
            RampStatus::Finished
        } else {
            RampStatus::Running
        }
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}
