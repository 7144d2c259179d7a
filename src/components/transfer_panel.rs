use super::lesson::Lesson;
use crate::flow::FlowAction;
use leptos::*;

/// Real-world application cards. Every card must be opened before the quiz
/// unlocks.
#[component]
pub fn TransferPanel(lesson: Lesson) -> impl IntoView {
    let applications = lesson.with_content(|c| c.applications.clone());
    let progress = move || {
        lesson
            .state
            .with(|s| (s.applications().count(), s.applications().total()))
    };

    let cards = applications
        .into_iter()
        .enumerate()
        .map(|(index, app)| {
            let explored = move || lesson.state.with(|s| s.applications().contains(index));
            view! {
                <div class="card application" class:explored=explored>
                    <button
                        class="card-header"
                        on:click=move |_| lesson.apply(FlowAction::ExploreApplication(index))
                    >
                        <h3>{app.title}</h3>
                        <span class="card-status">{move || if explored() { "✓" } else { "Tap to explore" }}</span>
                    </button>
                    <Show when=explored>
                        <p>{app.description.clone()}</p>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="transfer">
            <h2>"Physics in the real world"</h2>
            <p class="progress-note">
                {move || {
                    let (seen, total) = progress();
                    format!("{seen} of {total} explored")
                }}
            </p>
            <div class="physics-cards">{cards}</div>
        </section>
    }
}
