use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod catalog;
mod config;
mod contact;
mod content;
mod components {
    pub mod footer;
    pub mod header;
    pub mod whatsapp_button;
}
mod sections {
    pub mod calendar;
    pub mod contact;
    pub mod courses;
    pub mod faq;
    pub mod gallery;
    pub mod hero;
    pub mod instructors;
    pub mod methodology;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
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
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
