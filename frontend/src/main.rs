use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod navigation {
    pub mod section;
    pub mod resolver;
    pub mod platform;
    pub mod controller;
    pub mod dom;
    #[cfg(test)]
    pub mod fake;
}
mod components {
    pub mod reveal;
    pub mod navbar;
    pub mod dock;
    pub mod hero;
    pub mod learn;
    pub mod countries;
    pub mod mission;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


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
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        // single page site, unknown paths land on the same page
        Route::NotFound => {
            info!("Unknown path, rendering Landing page");
            html! { <Landing /> }
        },
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

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
