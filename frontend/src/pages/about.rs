use yew::prelude::*;
use yew_router::prelude::*;

use crate::reveal::{AnimatedSection, Animation};
use crate::seo::{person_schema, use_seo, Page};
use crate::Route;

const VALUES: [(&str, &str); 4] = [
    ("Obiettivi Chiari", "Ogni percorso inizia con obiettivi chiari, misurabili e realistici costruiti insieme."),
    ("Approccio Evidence-Based", "Metodi scientifici e testati, non mode passeggere. Solo ciò che funziona davvero."),
    ("Personalizzazione Totale", "Nessun programma generico. Tutto è costruito su di te, il tuo corpo, la tua vita."),
    ("Risultati Sostenibili", "Focus su cambiamenti duraturi nel tempo, non soluzioni temporanee o estreme."),
];

const CERTIFICATIONS: [(&str, &str); 5] = [
    ("Personal Trainer e Bodybuilding", "NSCA"),
    ("Allenamento Avanzato & Biomeccanica", "RTA Resistance Training Academy"),
    ("Specialista Squat", "RTA Resistance Training Academy"),
    ("Biomeccanica avanzata", "Ingegneria Anabolica"),
    ("Nutrizione Sportiva", "ISSN, International Society of Sports Nutrition"),
];

const SPECIALIZATIONS: [&str; 5] = [
    "Biomeccanica applicata all'allenamento",
    "Programmazione avanzata per ipertrofia e performance",
    "Consulenze nutrizionali personalizzate",
    "Strategie di progressione e monitoraggio dei carichi",
    "Approccio integrato allenamento + nutrizione",
];

#[function_component(About)]
pub fn about() -> Html {
    use_seo(Page::About, Some(person_schema()));

    html! {
        <div class="about-page">
            <section class="section">
                <div class="container about-hero">
                    <AnimatedSection animation={Animation::FadeInLeft}>
                        <img src="/images/hero-profile.jpg" alt="Personal Trainer BST Crew" class="about-image" loading="lazy" />
                    </AnimatedSection>
                    <AnimatedSection animation={Animation::FadeInRight}>
                        <h1>{"Chi Sono"}</h1>
                        <p>
                            {"Sono un Personal Trainer certificato specializzato in ipertrofia muscolare, dimagrimento e ricomposizione corporea. La mia missione è aiutare le persone a trasformare il loro fisico attraverso metodo, personalizzazione e dedizione."}
                        </p>
                        <p>
                            {"Lavoro principalmente a Pergine Valsugana e Trento, ma offro anche coaching online per chi preferisce allenarsi in autonomia o non può raggiungere la palestra."}
                        </p>
                        <p>
                            {"Non esistono programmi \"taglia unica\": ogni persona ha un corpo, obiettivi e una vita diversi. Per questo creo programmi completamente personalizzati che si adattano a te."}
                        </p>
                        <div class="cta-group" style="justify-content: flex-start;">
                            <Link<Route> to={Route::Contact} classes="button-primary">
                                {"Richiedi una Consulenza"}
                            </Link<Route>>
                        </div>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="section-header">
                        <h2>{"Il Mio Metodo di Lavoro"}</h2>
                        <p>{"Un approccio basato su scienza, personalizzazione e risultati concreti."}</p>
                    </AnimatedSection>
                    <div class="card-grid">
                        {
                            for VALUES.iter().enumerate().map(|(i, (title, text))| html! {
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
                        <h2>{"Certificazioni e Formazione"}</h2>
                    </AnimatedSection>
                    <div class="card-grid">
                        <AnimatedSection delay={0.1}>
                            <div class="card">
                                <h3>{"Certificazioni"}</h3>
                                <ul>
                                    {
                                        for CERTIFICATIONS.iter().map(|(course, school)| html! {
                                            <li>{format!("{} – {}", course, school)}</li>
                                        })
                                    }
                                </ul>
                            </div>
                        </AnimatedSection>
                        <AnimatedSection delay={0.2}>
                            <div class="card">
                                <h3>{"Specializzazioni"}</h3>
                                <ul>
                                    { for SPECIALIZATIONS.iter().map(|item| html! { <li>{*item}</li> }) }
                                </ul>
                            </div>
                        </AnimatedSection>
                    </div>
                </div>
            </section>

            <section class="section">
                <AnimatedSection class="container cta-box" animation={Animation::Scale}>
                    <h2>{"Pronto a Iniziare?"}</h2>
                    <p>{"Prenota una consulenza gratuita e costruiamo insieme il tuo percorso."}</p>
                    <div class="cta-group">
                        <Link<Route> to={Route::Contact} classes="button-primary">{"Contattami"}</Link<Route>>
                        <Link<Route> to={Route::Services} classes="button-secondary">{"Scopri i Servizi"}</Link<Route>>
                    </div>
                </AnimatedSection>
            </section>
        </div>
    }
}
