use shared::Page;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Header;
use crate::Route;

/// Placeholder until account creation exists.
#[function_component(Signup)]
pub fn signup() -> Html {
    html! {
        <>
            <div class="header-bar">
                <Header />
            </div>
            <main class="placeholder">
                <h2>{ Page::Signup.title() }</h2>
                <p>{ "Sign-up is not available yet." }</p>
                <Link<Route> to={Route::Home}>{ "Back to home" }</Link<Route>>
            </main>
        </>
    }
}
