use crate::flow::Phase;
use crate::games::{GameContent, GameKind};
use leptos::*;
use leptos_router::A;

fn lesson_card(kind: GameKind) -> impl IntoView {
    let (title, tagline) = match GameContent::bundled(kind) {
        Ok(content) => (content.title, content.tagline),
        Err(e) => {
            log::warn!("{kind}: {e}");
            (kind.slug().to_string(), String::new())
        }
    };
    view! {
        <A href=kind.path() class="card lesson-card">
            <h3>{title}</h3>
            <p>{tagline}</p>
        </A>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let cards = GameKind::ALL.into_iter().map(lesson_card).collect_view();
    let phases = Phase::ALL
        .into_iter()
        .map(|phase| view! { <li>{phase.label()}</li> })
        .collect_view();

    view! {
        <main class="container">
            <header>
                <h1>"Physics Lessons"</h1>
                <p class="tagline">"Predict, experiment, then prove it"</p>
            </header>

            <section class="lessons">
                <div class="physics-cards">{cards}</div>
            </section>

            <section class="explanation">
                <h2>"How a lesson works"</h2>
                <p>
                    "Every lesson walks through the same ten steps. You commit to a prediction "
                    "before experimenting, then a twist challenges what you just learned. "
                    "Score at least seven out of ten on the test to reach mastery."
                </p>
                <ol class="phase-list">{phases}</ol>
            </section>

            <footer>
                <p class="analytics-note">
                    "Analytics by "
                    <a href="https://umami.is" target="_blank" rel="noopener">"Umami"</a>
                    " · No cookies · No personal data"
                </p>
            </footer>
        </main>
    }
}
