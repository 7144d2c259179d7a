use super::lesson::Lesson;
use crate::feedback::vibrate_tick;
use crate::flow::{Ramp, RampStatus};
use crate::games::{AnimationSpec, Readout, ReadoutValue, SliderSpec};
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use std::time::Duration;

#[component]
fn SliderControl(
    slider: SliderSpec,
    index: usize,
    values: RwSignal<Vec<f64>>,
    haptics: bool,
) -> impl IntoView {
    let id = format!("slider-{}", slider.key);
    let current = move || values.with(|v| v.get(index).copied().unwrap_or(slider.default));

    view! {
        <div class="control-group">
            <label for=id.clone()>
                {slider.label} ": "
                {move || format!("{:.*} {}", slider.precision, current(), slider.unit).trim_end().to_string()}
            </label>
            <input
                type="range"
                id=id
                min=slider.range.min
                max=slider.range.max
                step=slider.range.step
                prop:value=current
                on:input=move |ev| {
                    if let Some(v) = slider.range.parse(&event_target_value(&ev)) {
                        values.update(|vals| {
                            if let Some(slot) = vals.get_mut(index) {
                                *slot = v;
                            }
                        });
                        if haptics {
                            vibrate_tick();
                        }
                    }
                }
            />
        </div>
    }
}

/// Start button and progress for a timed animation. The interval stops when
/// the ramp lands on its target or when this component is disposed.
#[component]
fn AnimationControl(animation: AnimationSpec, set_progress: WriteSignal<f64>) -> impl IntoView {
    let ramp = store_value(Ramp::new(animation.target, animation.step));
    let interval = store_value(None::<IntervalHandle>);
    let (running, set_running) = create_signal(false);
    let (shown, set_shown) = create_signal(0.0);

    let stop = move || {
        if let Some(Some(handle)) = interval.try_update_value(Option::take) {
            handle.clear();
        }
        let _ = set_running.try_set(false);
    };
    on_cleanup(stop);

    let start = move |_: ev::MouseEvent| {
        stop();
        ramp.update_value(Ramp::reset);
        set_progress.set(0.0);
        set_shown.set(0.0);

        let tick = move || {
            let Some((status, value)) = ramp.try_update_value(|r| (r.tick(), r.value())) else {
                stop();
                return;
            };
            set_progress.set(value);
            set_shown.set(value);
            if status == RampStatus::Finished {
                stop();
            }
        };
        match set_interval_with_handle(tick, Duration::from_millis(animation.interval_ms)) {
            Ok(handle) => {
                interval.set_value(Some(handle));
                set_running.set(true);
            }
            Err(e) => log::warn!("could not start animation: {e:?}"),
        }
    };

    view! {
        <div class="animation-control">
            <button class="secondary" disabled=move || running.get() on:click=start>
                {animation.button}
            </button>
            <span class="animation-progress">
                {animation.label} ": " {move || format!("{:.0}{}", shown.get(), animation.unit)}
            </span>
        </div>
    }
}

fn readout_row(readout: Readout) -> impl IntoView {
    let class = match readout.value {
        ReadoutValue::Verdict { ok: true, .. } => "readout verdict ok",
        ReadoutValue::Verdict { ok: false, .. } => "readout verdict fail",
        ReadoutValue::Number { .. } => "readout",
    };
    view! {
        <div class=class>
            <span class="readout-label">{readout.label}</span>
            <span class="readout-value">{readout.display()}</span>
        </div>
    }
}

/// Sliders, readouts and optional animation for the play and twist-play
/// phases. Twist-only sliders stay at their defaults until the twist.
#[component]
pub fn SimulationPanel(lesson: Lesson, twist: bool) -> impl IntoView {
    let kind = lesson.kind;
    let values = create_rw_signal(kind.default_values());
    let (progress, set_progress) = create_signal(0.0);
    let readouts = create_memo(move |_| values.with(|v| kind.evaluate(v, progress.get())));

    let sliders = kind
        .sliders()
        .iter()
        .enumerate()
        .filter(|(_, slider)| twist || !slider.twist_only)
        .map(|(index, slider)| {
            view! { <SliderControl slider=*slider index=index values=values haptics=lesson.haptics/> }
        })
        .collect_view();

    let animation = kind
        .animation()
        .map(|animation| view! { <AnimationControl animation=animation set_progress=set_progress/> });

    view! {
        <div class="model-container">
            <div class="controls">
                <h3>{if twist { "Twist experiment" } else { "Experiment" }}</h3>
                {sliders}
                {animation}
            </div>
            <div class="results">
                {move || match readouts.get() {
                    Ok(rows) => rows.into_iter().map(readout_row).collect_view(),
                    Err(e) => view! { <p class="readout-error">{e.to_string()}</p> }.into_view(),
                }}
            </div>
        </div>
    }
}
