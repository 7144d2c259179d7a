use super::debounce::DebouncedDispatch;
use super::lesson::Lesson;
use super::{
    MasteryPanel, PredictionPanel, ProgressDots, QuizPanel, ReviewPanel, SimulationPanel,
    TransferPanel,
};
use crate::config::{load_config, GameConfig};
use crate::feedback::WebAudioChime;
use crate::flow::{Emitter, FlowAction, FlowEffect, FlowState, GameEventKind, Phase};
use crate::games::{GameContent, GameKind};
use crate::host::WebHost;
use leptos::*;
use leptos_router::use_query_map;
use serde_json::json;
use std::rc::Rc;

/// Page config with `?phase=` / `?nav=` applied. Bad overrides are logged and
/// ignored.
fn resolve_config() -> GameConfig {
    let query = use_query_map();
    let (phase, nav) = query.with_untracked(|q| (q.get("phase").cloned(), q.get("nav").cloned()));
    let base = load_config();
    base.clone()
        .with_overrides(phase.as_deref(), nav.as_deref())
        .unwrap_or_else(|e| {
            log::warn!("Ignoring query overrides: {e}");
            base
        })
}

fn phase_body(lesson: Lesson, phase: Phase) -> View {
    match phase {
        Phase::Hook => view! {
            <section class="intro">
                <p class="hook">{lesson.with_content(|c| c.hook.clone())}</p>
            </section>
        }
        .into_view(),
        Phase::Predict => view! { <PredictionPanel lesson=lesson twist=false/> }.into_view(),
        Phase::Play => view! {
            <section class="interactive">
                <p>{lesson.with_content(|c| c.play.clone())}</p>
                <SimulationPanel lesson=lesson twist=false/>
            </section>
        }
        .into_view(),
        Phase::Review => view! { <ReviewPanel lesson=lesson twist=false/> }.into_view(),
        Phase::TwistPredict => view! { <PredictionPanel lesson=lesson twist=true/> }.into_view(),
        Phase::TwistPlay => view! {
            <section class="interactive">
                <p>{lesson.with_content(|c| c.twist_play.clone())}</p>
                <SimulationPanel lesson=lesson twist=true/>
            </section>
        }
        .into_view(),
        Phase::TwistReview => view! { <ReviewPanel lesson=lesson twist=true/> }.into_view(),
        Phase::Transfer => view! { <TransferPanel lesson=lesson/> }.into_view(),
        Phase::Test => view! { <QuizPanel lesson=lesson/> }.into_view(),
        Phase::Mastery => view! { <MasteryPanel lesson=lesson/> }.into_view(),
    }
}

/// Back / continue controls shared by every phase.
#[component]
fn PhaseFooter(lesson: Lesson) -> impl IntoView {
    let phase = create_memo(move |_| lesson.state.with(|s| s.phase()));
    let can_advance = move || lesson.state.with(|s| s.can_advance());
    let label = move || match phase.get() {
        Phase::Hook => "Let's find out",
        Phase::TwistReview => "See it in the real world",
        Phase::Transfer => "Take the test",
        _ => "Continue",
    };

    view! {
        <footer class="phase-footer">
            <button
                class="secondary"
                disabled=move || phase.get() == Phase::Hook
                on:click=move |_| lesson.navigate(FlowAction::Back)
            >
                "Back"
            </button>
            <Show when=move || phase.get() != Phase::Mastery>
                <button
                    class="primary"
                    disabled=move || !can_advance()
                    on:click=move |_| lesson.navigate(FlowAction::Advance)
                >
                    {label}
                </button>
            </Show>
        </footer>
    }
}

/// One lesson: content, flow state, host wiring and the current phase's body.
#[component]
pub fn GameShell(kind: GameKind) -> impl IntoView {
    let content = match GameContent::bundled(kind) {
        Ok(content) => content,
        Err(e) => {
            log::error!("{kind}: {e}");
            return view! {
                <main class="container">
                    <div class="error-container">
                        <h2>"Lesson unavailable"</h2>
                        <p>{e.to_string()}</p>
                    </div>
                </main>
            }
            .into_view();
        }
    };

    let config = resolve_config();
    let mut flow = FlowState::new(content.shape(), content.answer_key())
        .with_navigation(config.navigation);
    if let Some(phase) = config.initial_phase {
        flow = flow.starting_at(phase);
    }
    let start_phase = flow.phase();

    let emitter = Emitter::new(
        kind.slug(),
        Rc::new(WebHost::new(kind.slug())),
        Rc::new(WebAudioChime::new(config.audio)),
        Rc::new(js_sys::Date::now),
    );
    let guard = DebouncedDispatch::new(config.debounce_window_ms, config.cooldown_ms);
    let title = content.title.clone();
    let tagline = content.tagline.clone();
    let lesson = Lesson::new(kind, content, flow, emitter, guard, config.haptics);

    lesson.emit([FlowEffect::event(
        GameEventKind::GameStarted,
        json!({ "phase": start_phase, "navigation": config.navigation }),
    )]);

    let phase = create_memo(move |_| lesson.state.with(|s| s.phase()));

    view! {
        <main class="container lesson">
            <header>
                <h1>{title}</h1>
                <p class="tagline">{tagline}</p>
            </header>
            <ProgressDots lesson=lesson/>
            {move || phase_body(lesson, phase.get())}
            <PhaseFooter lesson=lesson/>
        </main>
    }
    .into_view()
}
