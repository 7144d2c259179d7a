pub mod components;
pub mod config;
pub mod feedback;
pub mod flow;
pub mod games;
pub mod host;
pub mod logging;
pub mod pages;
pub mod physics;

use components::NavBar;
use leptos::*;
use leptos_router::*;
use pages::{HomePage, LessonPage, NotFoundPage};
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The lesson hit an error. Reloading starts it from the beginning."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reload"</button>
                </div>
            </main>
        }>
            <Router>
                <NavBar/>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/:game" view=LessonPage/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(Root);
}
