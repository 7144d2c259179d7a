use crate::flow::{Chime, ChimeKind};
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys::{window, AudioContext, OscillatorType};

/// Trigger a short haptic feedback vibration (if supported)
pub fn vibrate_tick() {
    if let Some(window) = window() {
        let _ = window.navigator().vibrate_with_duration(10);
    }
}

/// Frequency (Hz), duration (s) and waveform for each cue.
fn tone(kind: ChimeKind) -> (f32, f64, OscillatorType) {
    match kind {
        ChimeKind::Click => (660.0, 0.05, OscillatorType::Sine),
        ChimeKind::Transition => (520.0, 0.12, OscillatorType::Sine),
        ChimeKind::Success => (880.0, 0.25, OscillatorType::Triangle),
        ChimeKind::Failure => (220.0, 0.30, OscillatorType::Sawtooth),
        ChimeKind::Complete => (1046.5, 0.40, OscillatorType::Triangle),
    }
}

/// Web Audio tone generator.
///
/// The `AudioContext` is created on first use, since browsers only allow it
/// after a user gesture. Any failure leaves the lesson silent and running.
pub struct WebAudioChime {
    enabled: bool,
    context: RefCell<Option<AudioContext>>,
}

impl WebAudioChime {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            context: RefCell::new(None),
        }
    }

    fn play(&self, kind: ChimeKind) -> Result<(), JsValue> {
        let mut slot = self.context.borrow_mut();
        if slot.is_none() {
            *slot = Some(AudioContext::new()?);
        }
        let Some(ctx) = slot.as_ref() else {
            return Ok(());
        };

        let (frequency, duration, wave) = tone(kind);
        let oscillator = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        oscillator.set_type(wave);
        oscillator.frequency().set_value(frequency);

        let now = ctx.current_time();
        gain.gain().set_value_at_time(0.15, now)?;
        gain.gain().exponential_ramp_to_value_at_time(0.001, now + duration)?;

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        oscillator.start()?;
        oscillator.stop_with_when(now + duration)?;
        Ok(())
    }
}

impl Chime for WebAudioChime {
    fn chime(&self, kind: ChimeKind) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self.play(kind) {
            log::debug!("audio unavailable: {e:?}");
        }
    }
}
