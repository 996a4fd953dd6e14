use chrono::{TimeZone, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::consent::{use_consent, ConsentKind, ConsentRecord};
use crate::seo::{use_seo, Page};
use crate::Route;

/// Human readable state of the stored consent, shown on the cookie policy page.
pub fn consent_status(consent: Option<ConsentRecord>) -> String {
    let Some(record) = consent else {
        return "Nessuna scelta registrata: il banner dei cookie è attivo.".to_string();
    };
    let choice = if record.allows(ConsentKind::Analytics) && record.allows(ConsentKind::Marketing) {
        "Tutti i cookie accettati"
    } else {
        "Solo cookie necessari"
    };
    match Utc.timestamp_millis_opt(record.timestamp).single() {
        Some(at) => format!("{} il {}.", choice, at.format("%d/%m/%Y %H:%M")),
        None => format!("{}.", choice),
    }
}

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::CookiePolicy}>{"Cookie Policy"}</Link<Route>>
        </div>
    }
}

#[function_component(Privacy)]
pub fn privacy() -> Html {
    use_seo(Page::Privacy, None);
    let email = config::get_contact_email();

    html! {
        <section class="section">
            <div class="container legal-page">
                <h1>{"Privacy Policy"}</h1>

                <section>
                    <h2>{"1. Titolare del Trattamento"}</h2>
                    <p>{"BST Crew, Pergine Valsugana (TN)."}</p>
                    <p>{format!("Email: {}", email)}</p>
                </section>

                <section>
                    <h2>{"2. Dati Raccolti"}</h2>
                    <p>{"Tramite il form di contatto raccogliamo:"}</p>
                    <ul>
                        <li>{"Nome e cognome"}</li>
                        <li>{"Indirizzo email"}</li>
                        <li>{"Numero di telefono"}</li>
                        <li>{"Il contenuto del messaggio"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"3. Finalità e Base Giuridica"}</h2>
                    <ul>
                        <li>{"Rispondere alle richieste di informazioni (misure precontrattuali)"}</li>
                        <li>{"Organizzare la consulenza gratuita richiesta"}</li>
                        <li>{"Proteggere il form da spam e abusi (legittimo interesse)"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"4. Conservazione"}</h2>
                    <p>{"I dati sono conservati per il tempo necessario a gestire la richiesta e comunque non oltre 24 mesi."}</p>
                </section>

                <section>
                    <h2>{"5. Diritti dell'Interessato"}</h2>
                    <p>{"Puoi chiedere in ogni momento l'accesso, la rettifica o la cancellazione dei tuoi dati, oppure opporti al trattamento, scrivendo all'indirizzo email indicato."}</p>
                </section>

                <section>
                    <h2>{"6. Cookie"}</h2>
                    <p>
                        {"Per i dettagli sui cookie utilizzati consulta la "}
                        <Link<Route> to={Route::CookiePolicy}>{"Cookie Policy"}</Link<Route>>
                        {"."}
                    </p>
                </section>
                { legal_links() }
            </div>
        </section>
    }
}

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    use_seo(Page::CookiePolicy, None);
    let consent = use_consent();

    let status = consent_status(consent.as_ref().and_then(|c| c.consent));
    let reset = {
        let consent = consent.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(consent) = &consent {
                consent.reset.emit(());
            }
        })
    };

    html! {
        <section class="section">
            <div class="container legal-page">
                <h1>{"Cookie Policy"}</h1>

                <section>
                    <h2>{"1. Cosa sono i Cookie"}</h2>
                    <p>{"I cookie sono piccoli file di testo che i siti visitati salvano sul dispositivo dell'utente, per essere ritrasmessi agli stessi siti alla visita successiva."}</p>
                </section>

                <section>
                    <h2>{"2. Cookie Necessari"}</h2>
                    <p>{"Sempre attivi. Servono a ricordare la tua scelta sui cookie e a proteggere il form di contatto tramite hCaptcha (Intuition Machines, Inc.). Durata: sessione."}</p>
                </section>

                <section>
                    <h2>{"3. Cookie Analitici e di Marketing"}</h2>
                    <p>{"Vengono caricati solo dopo il tuo consenso esplicito tramite il pulsante \"Accetta tutti\"."}</p>
                </section>

                <section>
                    <h2>{"4. Le Tue Preferenze"}</h2>
                    <p class="consent-status">{status}</p>
                    if let Some(consent) = &consent {
                        <ul>
                            {
                                for [
                                    ("Necessari", ConsentKind::Necessary),
                                    ("Analitici", ConsentKind::Analytics),
                                    ("Marketing", ConsentKind::Marketing),
                                ].into_iter().map(|(label, kind)| {
                                    let state = if consent.is_consent_given(kind) { "attivi" } else { "non attivi" };
                                    html! { <li>{format!("{}: {}", label, state)}</li> }
                                })
                            }
                        </ul>
                        <button class="button-secondary" onclick={reset}>{"Modifica preferenze"}</button>
                    }
                </section>
                { legal_links() }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_without_choice_mentions_banner() {
        assert!(consent_status(None).contains("banner"));
    }

    #[test]
    fn test_status_reports_choice_and_date() {
        let all = ConsentRecord { necessary: true, analytics: true, marketing: true, timestamp: 0 };
        assert_eq!(consent_status(Some(all)), "Tutti i cookie accettati il 01/01/1970 00:00.");

        let necessary = ConsentRecord { analytics: false, marketing: false, ..all };
        assert!(consent_status(Some(necessary)).starts_with("Solo cookie necessari"));
    }
}
