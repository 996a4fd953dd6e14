use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::NAVIGATION;
use crate::config;
use crate::consent::use_consent;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let consent = use_consent();
    let year = chrono::Local::now().year();
    let email = config::get_contact_email();

    let manage_cookies = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(consent) = &consent {
            consent.reset.emit(());
        }
    });

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <img src="/images/logo.webp" alt="BST Crew Logo" class="footer-logo" />
                    <p>
                        {"Personal Trainer specializzato in ipertrofia, dimagrimento e ricomposizione corporea. Servizi in palestra a Pergine Valsugana e coaching online in tutto il Trentino."}
                    </p>
                    <div class="footer-social">
                        <a href={config::get_instagram_url()} target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                            {"Instagram"}
                        </a>
                        <a href={format!("mailto:{}", email)} aria-label="Email">{email}</a>
                    </div>
                </div>

                <div>
                    <h3>{"Link Rapidi"}</h3>
                    <ul>
                        {
                            NAVIGATION.iter().map(|(label, route)| html! {
                                <li key={*label}>
                                    <Link<Route> to={route.clone()}>{*label}</Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>

                <div>
                    <h3>{"Informazioni Legali"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></li>
                        <li><Link<Route> to={Route::CookiePolicy}>{"Cookie Policy"}</Link<Route>></li>
                        <li><a href="#" onclick={manage_cookies}>{"Gestisci cookie"}</a></li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} BST Crew. Tutti i diritti riservati.", year)}</p>
            </div>
        </footer>
    }
}
