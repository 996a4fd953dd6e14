use yew::prelude::*;
use yew_router::prelude::*;

use crate::seo::{use_seo, Page};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_seo(Page::NotFound, None);

    html! {
        <section class="section not-found">
            <div class="container cta-box">
                <h1 class="not-found-code">{"404"}</h1>
                <h2>{"Pagina Non Trovata"}</h2>
                <p>{"La pagina che stai cercando non esiste o è stata spostata."}</p>
                <div class="cta-group">
                    <Link<Route> to={Route::Home} classes="button-primary">{"Torna alla Home"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="button-secondary">{"Contattaci"}</Link<Route>>
                </div>
            </div>
        </section>
    }
}
