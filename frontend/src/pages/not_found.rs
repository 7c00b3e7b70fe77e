use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="placeholder">
            <h2>{ "Page not found" }</h2>
            <Link<Route> to={Route::Home}>{ "Back to home" }</Link<Route>>
        </main>
    }
}
