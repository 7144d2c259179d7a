use super::lesson::Lesson;
use crate::flow::FlowAction;
use leptos::*;
use leptos_router::A;

#[component]
pub fn MasteryPanel(lesson: Lesson) -> impl IntoView {
    let summary = lesson.with_content(|c| c.mastery.clone());
    let score = move || {
        lesson
            .state
            .with(|s| s.outcome().map(|o| format!("{} / {}", o.score, o.total)))
            .unwrap_or_default()
    };
    let completed = move || lesson.state.with(|s| s.is_completed());

    view! {
        <section class="mastery">
            <h2>"Mastery achieved"</h2>
            <p class="score">{score}</p>
            <p>{summary}</p>
            <div class="mastery-actions">
                <button
                    class="primary"
                    disabled=completed
                    on:click=move |_| lesson.navigate(FlowAction::Complete)
                >
                    {move || if completed() { "Lesson complete ✓" } else { "Finish lesson" }}
                </button>
                <button class="secondary" on:click=move |_| lesson.navigate(FlowAction::Restart)>
                    "Start over"
                </button>
                <A href="/">"More lessons"</A>
            </div>
        </section>
    }
}
