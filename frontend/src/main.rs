use shared::Page;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;

#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home,
            Page::Login => Route::Login,
            Page::Signup => Route::Signup,
        }
    }
}

impl Route {
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Home => Some(Page::Home),
            Route::Login => Some(Page::Login),
            Route::Signup => Some(Page::Signup),
            Route::NotFound => None,
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::home::Home /> },
        Route::Login => html! { <pages::login::Login /> },
        Route::Signup => html! { <pages::signup::Signup /> },
        Route::NotFound => html! { <pages::not_found::NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
