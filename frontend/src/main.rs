use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod services;
mod components {
    pub mod notification;
    pub mod reveal;
    pub mod submission;
}
mod pages {
    pub mod home;
}
mod sections {
    pub mod ebook;
    pub mod footer;
    pub mod hero;
    pub mod lead_magnet;
    pub mod story;
    pub mod testimonials;
}

use content::ContentCatalog;
use pages::home::Home;
use services::{MockStorefront, StorefrontHandle};

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
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<ContentCatalog>,
    pub storefront: StorefrontHandle,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<ContentCatalog>> context={props.content.clone()}>
            <ContextProvider<StorefrontHandle> context={props.storefront.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<StorefrontHandle>>
        </ContextProvider<Rc<ContentCatalog>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::get_log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    let props = AppProps {
        content: Rc::new(ContentCatalog::sammy_sparkle()),
        storefront: StorefrontHandle::new(MockStorefront::default()),
    };
    yew::Renderer::<App>::with_props(props).render();
}
