use shared::{LoginField, LoginForm};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const DECORATIONS: &[(&str, &str)] = &[
    ("🌹", "deco deco-1"),
    ("🌺", "deco deco-2"),
    ("🌸", "deco deco-3"),
    ("🌻", "deco deco-4"),
    ("🌷", "deco deco-5"),
    ("🌼", "deco deco-6"),
    ("🍃", "deco deco-7"),
    ("🌿", "deco deco-8"),
];

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(Login)]
pub fn login() -> Html {
    let form = use_state(LoginForm::default);

    let on_field_input = |field: LoginField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with(field, input.value()));
        })
    };

    let on_sign_in = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.attempt() {
                Ok(attempt) => match serde_json::to_string(&attempt) {
                    Ok(json) => log::info!("Login attempt: {}", json),
                    Err(_) => log::info!("Login attempt: {:?}", attempt),
                },
                Err(err) => log::warn!("Login attempt blocked: {}", err),
            }
        })
    };

    let on_sign_up = Callback::from(|_: MouseEvent| {
        log::info!("Navigate to sign up");
    });

    let render_field = |field: LoginField| -> Html {
        html! {
            <div class="form-group">
                <label for={field.id()}>{ field.label() }</label>
                <input
                    id={field.id()}
                    type={field.input_type()}
                    value={form.get(field).to_string()}
                    oninput={on_field_input(field)}
                    placeholder={field.placeholder()}
                    required=true
                />
                if field == LoginField::Password {
                    <div class="forgot-password">
                        <button type="button" class="btn-link">{ "Forgot Password?" }</button>
                    </div>
                }
            </div>
        }
    };

    html! {
        <div class="login-page">
            <div class="login-side">
                <div class="login-card">
                    <div class="login-heading">
                        <h2>{ "Welcome Back 👋" }</h2>
                        <p class="login-subtitle">
                            { "Today is a new day. It's your day. You shape it." }
                            <br />
                            { "Sign in to start managing your health journey." }
                        </p>
                    </div>

                    <form class="login-form" onsubmit={on_sign_in}>
                        { for LoginField::all().iter().map(|field| render_field(*field)) }
                        <button type="submit" class="btn btn-primary btn-block">{ "Sign In" }</button>
                    </form>

                    <div class="divider"><span>{ "Or" }</span></div>

                    <div class="social-login">
                        <button type="button" class="btn btn-social">{ "Sign in with Google" }</button>
                        <button type="button" class="btn btn-social">{ "Sign in with Facebook" }</button>
                    </div>

                    <div class="signup-prompt">
                        <span>{ "Don't you have an account? " }</span>
                        <button type="button" class="btn-link" onclick={on_sign_up}>{ "Sign up" }</button>
                    </div>

                    <footer class="login-footer">
                        { format!("© {} ALL RIGHTS RESERVED", current_year()) }
                    </footer>
                </div>
            </div>

            <div class="art-side">
                { for DECORATIONS.iter().map(|(glyph, class)| html! {
                    <div class={*class}>{ *glyph }</div>
                })}
                <div class="art-content">
                    <h3>{ "Health Hacked" }</h3>
                    <p>
                        { "Your journey to better health starts here. Track, monitor, and improve your wellness with AI-powered insights." }
                    </p>
                </div>
            </div>
        </div>
    }
}
