use super::lesson::Lesson;
use crate::flow::{FlowAction, Phase};
use leptos::*;

/// One dot per phase. Which dots are clickable follows the lesson's
/// navigation policy.
#[component]
pub fn ProgressDots(lesson: Lesson) -> impl IntoView {
    let current = create_memo(move |_| lesson.state.with(|s| s.phase()));

    let dots = Phase::ALL
        .into_iter()
        .map(|phase| {
            let reachable = move || lesson.state.with(|s| s.can_jump_to(phase));
            view! {
                <button
                    class="progress-dot"
                    class:current=move || current.get() == phase
                    class:done=move || { current.get() > phase }
                    disabled=move || !reachable()
                    title=phase.label()
                    attr:aria-label=phase.label()
                    on:click=move |_| lesson.navigate(FlowAction::GoTo(phase))
                ></button>
            }
        })
        .collect_view();

    view! {
        <nav class="progress-dots">
            {dots}
            <span class="progress-label">
                {move || {
                    let phase = current.get();
                    format!("{} · {}/{}", phase.label(), phase.index() + 1, Phase::COUNT)
                }}
            </span>
        </nav>
    }
}
