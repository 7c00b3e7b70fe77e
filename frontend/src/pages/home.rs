use shared::HOME_CALL_TO_ACTION;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Header;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();

    let on_get_started = Callback::from(move |_: MouseEvent| {
        let (Some(navigator), Some(page)) = (&navigator, HOME_CALL_TO_ACTION.target) else {
            return;
        };
        log::debug!("Navigating to {}", page.path());
        navigator.push(&Route::from(page));
    });

    html! {
        <>
            <div class="header-bar">
                <Header />
            </div>
            <main class="hero">
                <h2 class="hero-title">{ "Health Hacked" }</h2>
                <p class="hero-subtitle">
                    { "Track, monitor, and improve your wellness with AI-powered insights." }
                </p>
                <button type="button" class="btn btn-primary btn-large" onclick={on_get_started}>
                    { HOME_CALL_TO_ACTION.label }
                </button>
            </main>
            <section class="panel panel-secondary"></section>
        </>
    }
}
