use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod menu;
mod motion;
mod site;
mod viewport;
mod components {
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod icons;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod pricing;
}

use components::header::Header;
use pages::{
    home::Home,
    pricing::{NotFound, Pricing},
};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
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
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
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
