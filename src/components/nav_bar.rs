use crate::games::GameKind;
use leptos::*;
use leptos_router::{use_location, A};

fn short_name(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Capacitance => "Capacitors",
        GameKind::DcMotor => "Motors",
        GameKind::DataCenter => "Data centers",
        GameKind::Induction => "Induction",
        GameKind::Fracture => "Fracture",
        GameKind::WorkPower => "Work & power",
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let link_class = move |href: String| {
        if pathname() == href {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let lessons = GameKind::ALL
        .into_iter()
        .map(|kind| {
            let href = kind.path();
            let target = href.clone();
            view! { <A href=href class=move || link_class(target.clone())>{short_name(kind)}</A> }
        })
        .collect_view();

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"Physics Lessons"</A>
                <div class="nav-links">{lessons}</div>
            </div>
        </nav>
    }
}
