use serde_json::{json, Value};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::reveal::{AnimatedSection, Animation};
use crate::seo::{faq_schema, local_business_schema, use_seo, Page};
use crate::Route;

pub const PERGINE_FAQ: [(&str, &str); 6] = [
    (
        "Dove opera il personal trainer?",
        "Offro servizi di personal training principalmente a Pergine Valsugana (TN) e Trento. Collaboro con una palestra partner a Pergine per gli allenamenti in presenza. Inoltre, offro servizi di coaching online per tutto il Trentino-Alto Adige e oltre.",
    ),
    (
        "Che tipo di allenamento proponi?",
        "Mi specializzo in programmi personalizzati per ipertrofia muscolare, dimagrimento e ricomposizione corporea. Il mio approccio è basato su metodi scientifici ed evidence-based, con focus su risultati estetici misurabili e sostenibili nel tempo.",
    ),
    (
        "Posso allenarmi online?",
        "Sì, offro programmi completi di coaching online con schede di allenamento personalizzate, monitoraggio remoto dei progressi e supporto costante via chat. Ideale per chi non può raggiungere Pergine o preferisce allenarsi in autonomia.",
    ),
    (
        "Per chi sono adatti i tuoi servizi?",
        "I miei servizi sono adatti a uomini e donne di tutti i livelli, dal principiante all'avanzato. Lavoro con persone che vogliono migliorare il proprio fisico attraverso ipertrofia muscolare, perdere peso in modo sano, o ricomporre la propria composizione corporea con un approccio scientifico e personalizzato.",
    ),
    (
        "Quanto costa il personal training?",
        "Il costo varia in base al tipo di servizio scelto (personal training in palestra o coaching online) e alla durata del percorso. Contattami per una consulenza gratuita dove potremo discutere i tuoi obiettivi e trovare la soluzione più adatta alle tue esigenze e budget.",
    ),
    (
        "Come posso iniziare?",
        "Puoi iniziare richiedendo una consulenza gratuita tramite il form contatti sul sito o scrivendomi direttamente su Instagram. Durante la consulenza valuteremo insieme i tuoi obiettivi, il tuo livello attuale e il percorso più adatto per raggiungerli.",
    ),
];

const BENEFITS: [(&str, &str); 4] = [
    ("Risultati Personalizzati", "Programmi su misura per ipertrofia, dimagrimento e ricomposizione corporea"),
    ("Presenza e Online", "Allenamenti in palestra a Pergine e coaching online in tutto il Trentino"),
    ("Metodo Scientifico", "Approccio evidence-based con monitoraggio costante dei progressi"),
    ("Certificazioni", "Personal Trainer certificato con anni di esperienza nel settore"),
];

/// Business and FAQ structured data in one JSON-LD array.
pub fn pergine_schema() -> Value {
    json!([local_business_schema(), faq_schema(&PERGINE_FAQ)])
}

fn offer_card(title: &str, text: Html, points: [&'static str; 3]) -> Html {
    html! {
        <div class="card">
            <h3>{title.to_string()}</h3>
            <p>{text}</p>
            <ul class="included-list">
                { for points.iter().map(|point| html! { <li>{format!("✓ {}", point)}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(PersonalTrainerPergine)]
pub fn personal_trainer_pergine() -> Html {
    use_seo(Page::PersonalTrainerPergine, Some(pergine_schema()));

    html! {
        <div class="pergine-page">
            <section class="hero">
                <AnimatedSection class="container">
                    <span class="badge">{"Pergine Valsugana, Trento"}</span>
                    <h1>
                        {"Personal Trainer a Pergine Valsugana: "}
                        <span class="highlight">{"Trasforma il Tuo Fisico"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Cerchi un "}<strong>{"personal trainer a Pergine Valsugana"}</strong>{" o "}
                        <strong>{"Trento"}</strong>{"? Offro allenamenti personalizzati per "}
                        <strong>{"ipertrofia muscolare"}</strong>{", "}<strong>{"dimagrimento"}</strong>{" e "}
                        <strong>{"ricomposizione corporea"}</strong>
                        {". Servizi in palestra a Pergine e "}<strong>{"coaching online"}</strong>
                        {" in tutto il Trentino."}
                    </p>
                    <div class="cta-group">
                        <Link<Route> to={Route::Contact} classes="button-primary">
                            {"Richiedi Consulenza Gratuita"}
                        </Link<Route>>
                        <Link<Route> to={Route::Services} classes="button-secondary">
                            {"Scopri i Servizi"}
                        </Link<Route>>
                    </div>
                </AnimatedSection>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="section-header">
                        <h2>{"Perché Scegliere un Personal Trainer a Pergine Valsugana"}</h2>
                        <p>
                            {"Un personal trainer certificato fa la differenza tra allenarsi e ottenere risultati concreti. A Pergine Valsugana e Trento offro un servizio professionale personalizzato per ogni obiettivo."}
                        </p>
                    </AnimatedSection>
                    <div class="card-grid">
                        {
                            for BENEFITS.iter().enumerate().map(|(i, (title, text))| html! {
                                <AnimatedSection delay={i as f64 * 0.1}>
                                    <div class="card">
                                        <h3>{*title}</h3>
                                        <p>{*text}</p>
                                    </div>
                                </AnimatedSection>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="section-header">
                        <h2>{"Servizi di Personal Training a Pergine e Trento"}</h2>
                    </AnimatedSection>
                    <div class="card-grid">
                        <AnimatedSection animation={Animation::FadeInLeft}>
                            {
                                offer_card(
                                    "Personal Training in Palestra",
                                    html! {<>
                                        {"Sessioni one-to-one presso la palestra partner a "}
                                        <strong>{"Pergine Valsugana"}</strong>
                                        {". Ideale per chi cerca supporto diretto e vuole massimizzare i risultati."}
                                    </>},
                                    ["Allenamenti personalizzati", "Correzione tecnica costante", "Palestra attrezzata a Pergine"],
                                )
                            }
                        </AnimatedSection>
                        <AnimatedSection animation={Animation::FadeInRight}>
                            {
                                offer_card(
                                    "Coaching Online Trentino",
                                    html! {<>
                                        {"Programmi completi di coaching online per chi non può raggiungere Pergine. Disponibile in tutto il "}
                                        <strong>{"Trentino-Alto Adige"}</strong>
                                        {"."}
                                    </>},
                                    ["Schede personalizzate", "Supporto continuo via chat", "Check-in settimanali"],
                                )
                            }
                        </AnimatedSection>
                    </div>
                </div>
            </section>

            <section class="section">
                <AnimatedSection class="container legal-page">
                    <h2>{"Domande Frequenti"}</h2>
                    {
                        for PERGINE_FAQ.iter().map(|(question, answer)| html! {
                            <div class="card faq-static">
                                <h3>{*question}</h3>
                                <p>{*answer}</p>
                            </div>
                        })
                    }
                </AnimatedSection>
            </section>

            <section class="section">
                <AnimatedSection class="container cta-box">
                    <div class="card">
                        <h2>{"Pronto a Trasformare il Tuo Fisico?"}</h2>
                        <p>
                            {"Contattami ora per una consulenza gratuita. Scopri come posso aiutarti a raggiungere i tuoi obiettivi con un programma personalizzato."}
                        </p>
                        <div class="cta-group">
                            <Link<Route> to={Route::Contact} classes="button-primary">
                                {"Richiedi Consulenza Gratuita"}
                            </Link<Route>>
                            <Link<Route> to={Route::About} classes="button-secondary">
                                {"Chi Sono"}
                            </Link<Route>>
                        </div>
                    </div>
                </AnimatedSection>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_combines_business_and_faq() {
        let schema = pergine_schema();
        let entries = schema.as_array().expect("schema should be an array");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["@type"], "LocalBusiness");
        assert_eq!(entries[1]["@type"], "FAQPage");
        assert_eq!(entries[1]["mainEntity"].as_array().map(Vec::len), Some(PERGINE_FAQ.len()));
        assert_eq!(entries[1]["mainEntity"][0]["name"], PERGINE_FAQ[0].0);
    }
}
