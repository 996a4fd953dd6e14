use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::scroll::{use_scrolled, HEADER_SCROLL_THRESHOLD};
use crate::Route;

pub const NAVIGATION: [(&str, Route); 6] = [
    ("Home", Route::Home),
    ("Chi Sono", Route::About),
    ("Servizi", Route::Services),
    ("Trasformazioni", Route::Transformations),
    ("FAQ", Route::Faq),
    ("Contatti", Route::Contact),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(HEADER_SCROLL_THRESHOLD);
    let current = use_route::<Route>();

    // close the mobile menu on navigation
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            current.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let on_home = current == Some(Route::Home);
    let logo_class = classes!("nav-logo-image", (on_home && !is_scrolled).then(|| "hidden"));

    html! {
        <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <nav class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/images/logo.png" alt="BST Crew Logo" class={logo_class} />
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={classes!("nav-right", menu_open.then(|| "mobile-menu-open"))}>
                    {
                        NAVIGATION.iter().map(|(label, route)| {
                            let active = current.as_ref() == Some(route);
                            html! {
                                <div onclick={close_menu.clone()} key={*label}>
                                    <Link<Route>
                                        to={route.clone()}
                                        classes={classes!("nav-link", active.then(|| "active"))}
                                    >
                                        {*label}
                                    </Link<Route>>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    <a
                        href={config::get_instagram_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-social"
                        aria-label="Instagram"
                    >
                        {"Instagram"}
                    </a>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Contattami"}
                        </Link<Route>>
                    </div>
                </div>
            </nav>
        </header>
    }
}
