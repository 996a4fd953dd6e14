use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod background;
mod config;
mod consent;
mod contact;
mod counter;
mod reveal;
mod scroll;
mod seo;

mod components {
    pub mod cookie_banner;
    pub mod footer;
    pub mod header;
    pub mod layout;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod legal;
    pub mod not_found;
    pub mod pergine;
    pub mod services;
    pub mod transformations;
}

use components::layout::Layout;
use consent::ConsentProvider;
use pages::{
    about::About,
    contact::Contact,
    faq::Faq,
    home::Home,
    legal::{CookiePolicy, Privacy},
    not_found::NotFound,
    pergine::PersonalTrainerPergine,
    services::Services,
    transformations::Transformations,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/chi-sono")]
    About,
    #[at("/servizi")]
    Services,
    #[at("/trasformazioni")]
    Transformations,
    #[at("/faq")]
    Faq,
    #[at("/contatti")]
    Contact,
    #[at("/personal-trainer-pergine-valsugana")]
    PersonalTrainerPergine,
    #[at("/privacy")]
    Privacy,
    #[at("/cookie-policy")]
    CookiePolicy,
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
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Transformations => {
            info!("Rendering Transformations page");
            html! { <Transformations /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::PersonalTrainerPergine => {
            info!("Rendering Personal Trainer Pergine page");
            html! { <PersonalTrainerPergine /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <Privacy /> }
        },
        Route::CookiePolicy => {
            info!("Rendering Cookie Policy page");
            html! { <CookiePolicy /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ConsentProvider>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </ConsentProvider>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_route_path() {
        assert_eq!(Route::PersonalTrainerPergine.to_path(), "/personal-trainer-pergine-valsugana");
        assert_eq!(Route::CookiePolicy.to_path(), "/cookie-policy");
    }
}
