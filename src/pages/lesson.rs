use super::NotFoundPage;
use crate::components::GameShell;
use crate::games::GameKind;
use leptos::*;
use leptos_router::use_params_map;

/// `/:game` route. Unknown slugs fall through to the 404 page.
#[component]
pub fn LessonPage() -> impl IntoView {
    let params = use_params_map();
    let kind = create_memo(move |_| {
        params.with(|p| p.get("game").and_then(|slug| slug.parse::<GameKind>().ok()))
    });

    move || match kind.get() {
        Some(kind) => view! { <GameShell kind=kind/> }.into_view(),
        None => view! { <NotFoundPage/> }.into_view(),
    }
}
