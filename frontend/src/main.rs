use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod assist {
    pub mod client;
    pub mod flow;
    pub mod prompts;
}
mod components {
    pub mod brainstormer;
    pub mod contact_form;
    pub mod notification;
    pub mod reveal;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use assist::client::GeminiClient;
use pages::home::{Home, NotFound, PAGE_STYLES};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// In-page sections linked from the navbar, as (anchor, label).
const NAV_LINKS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#ai-tools", "AI Tools"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

pub fn is_sticky(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_STICKY_OFFSET
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let update = move || {
                    if let Some(Ok(scroll_y)) = web_sys::window().map(|w| w.scroll_y()) {
                        is_scrolled.set(is_sticky(scroll_y));
                    }
                };
                update();
                let scroll_callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                })
            } else {
                Box::new(|| ())
            };
            destructor
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors still navigate; only the menu state changes here.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*is_scrolled).then(|| "sticky"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{config::DEVELOPER_NAME}{"."}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li>
                            <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    // One client for the whole page, handed to the assist widgets.
    let client = use_state(GeminiClient::from_config);

    html! {
        <ContextProvider<GeminiClient> context={(*client).clone()}>
            <style>{PAGE_STYLES}</style>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<GeminiClient>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
