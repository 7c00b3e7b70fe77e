use shared::{NavItem, Page, HEADER_ACTIONS, HEADER_LINKS};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

fn action_class(page: Page) -> &'static str {
    match page {
        Page::Login => "btn btn-primary",
        _ => "btn btn-secondary",
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let navigator = use_navigator();

    let render_action = |item: &NavItem| -> Html {
        let Some(page) = item.target else {
            return html! { <button type="button" class="btn">{ item.label }</button> };
        };
        let onclick = {
            let navigator = navigator.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    log::debug!("Navigating to {}", page.path());
                    navigator.push(&Route::from(page));
                }
            })
        };
        html! {
            <button type="button" class={action_class(page)} onclick={onclick}>
                { item.label }
            </button>
        }
    };

    html! {
        <header class="header">
            <nav>
                <div class="brand">{ "Health Hacked" }</div>
                <ul class="nav-links">
                    { for HEADER_LINKS.iter().map(|item| html! {
                        <li class="nav-link">
                            <span>{ item.label }</span>
                            <span class="nav-underline"></span>
                        </li>
                    })}
                </ul>
                <div class="header-actions">
                    { for HEADER_ACTIONS.iter().map(render_action) }
                </div>
            </nav>
        </header>
    }
}
