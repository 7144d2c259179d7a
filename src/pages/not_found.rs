use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="container">
            <header>
                <h1>"404"</h1>
                <p class="tagline">"No lesson lives here"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< All lessons"</A>
            </nav>
        </main>
    }
}
