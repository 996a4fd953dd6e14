use yew::prelude::*;
use yew_router::prelude::*;

use crate::consent::use_consent;
use crate::Route;

/// Only necessary cookies (hCaptcha) are set before the visitor decides.
#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let consent = use_consent();
    let show_details = use_state(|| false);

    let Some(consent) = consent else {
        return html! {};
    };
    if !consent.show_banner {
        return html! {};
    }

    let open_details = {
        let show_details = show_details.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_details.set(true);
        })
    };

    html! {
        <div class="cookie-banner" role="dialog" aria-live="polite" aria-label="Informativa Cookie">
            <div class="cookie-banner-content">
                <div class="cookie-text">
                    <h3>{"Informativa Cookie"}</h3>
                    <p>
                        {"Questo sito utilizza "}<strong>{"solo cookie tecnici necessari"}</strong>
                        {" per proteggere il form di contatto tramite "}<strong>{"hCaptcha"}</strong>
                        {" (protezione anti-spam). Questi cookie sono indispensabili per il funzionamento del sito."}
                        if !*show_details {
                            {" "}
                            <button class="cookie-more" onclick={open_details}>{"Maggiori informazioni"}</button>
                        }
                    </p>
                    if *show_details {
                        <div class="cookie-details">
                            <p>
                                <strong>{"Cookie hCaptcha (Necessari): "}</strong>
                                {"utilizzati per proteggere il form di contatto da spam e bot. Sono sempre attivi e non raccolgono dati personali identificabili."}
                            </p>
                            <p class="cookie-note">
                                <strong>{"Analytics e marketing: "}</strong>
                                {"vengono attivati solo se scegli \"Accetta tutti\". Puoi cambiare idea in qualsiasi momento dal link \"Gestisci cookie\" nel footer."}
                            </p>
                        </div>
                    }
                    <div class="cookie-links">
                        <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        <span class="separator">{"•"}</span>
                        <Link<Route> to={Route::CookiePolicy}>{"Cookie Policy"}</Link<Route>>
                    </div>
                </div>
                <div class="cookie-actions">
                    <button class="cookie-button secondary" onclick={consent.accept_necessary.reform(|_: MouseEvent| ())}>
                        {"Solo necessari"}
                    </button>
                    <button class="cookie-button primary" onclick={consent.accept_all.reform(|_: MouseEvent| ())}>
                        {"Accetta tutti"}
                    </button>
                </div>
            </div>
        </div>
    }
}
