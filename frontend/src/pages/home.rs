use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::counter::StatCounter;
use crate::pages::services::{ServiceCard, SERVICES};
use crate::reveal::{AnimatedSection, Animation};
use crate::seo::{local_business_schema, use_seo, Page};
use crate::Route;

const WHY_CHOOSE_ME: [(&str, &str); 4] = [
    ("Metodo Scientifico", "Programmi basati su evidenze, non su mode del momento."),
    ("Personalizzazione Totale", "Ogni scheda è costruita sul tuo corpo, sui tuoi tempi e sui tuoi obiettivi."),
    ("Supporto Costante", "Check-in regolari e chat diretta per non lasciarti mai da solo."),
    ("Risultati Misurabili", "Progressi monitorati con dati reali: forza, composizione corporea, misure."),
];

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="container">
                <AnimatedSection animation={Animation::FadeIn}>
                    <span class="badge">{"Personal Trainer Certificato"}</span>
                    <h1>
                        {"Personal Trainer a "}
                        <span class="highlight">{"Pergine Valsugana"}</span>
                        {" e Trento"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Coaching personalizzato per massa muscolare, dimagrimento e ricomposizione corporea. Allenamenti in palestra a Pergine Valsugana e Trento. Online in tutta Italia."}
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
                <div class="stats-grid">
                    <StatCounter end={10} suffix="+" label="Anni Esperienza" />
                    <StatCounter end={200} suffix="+" label="Clienti Soddisfatti" />
                    <StatCounter end={100} suffix="%" label="Risultati" />
                </div>
            </div>
        </section>
    }
}

const BOOK_POINTS: [(&str, &str); 3] = [
    ("Fondamenti scientifici", " dell'allenamento e della nutrizione"),
    ("Strategie pratiche", " per massimizzare i risultati"),
    ("Metodi testati", " per mantenere i risultati nel tempo"),
];

#[function_component(BookSection)]
fn book_section() -> Html {
    html! {
        <section class="section">
            <div class="container book-grid">
                <AnimatedSection animation={Animation::FadeInLeft}>
                    <img src="/images/libro.webp" alt="Libro BST Crew incluso nel percorso" class="about-image" loading="lazy" />
                </AnimatedSection>
                <AnimatedSection animation={Animation::FadeInRight}>
                    <span class="badge">{"Incluso nel Percorso"}</span>
                    <h2>{"Ricevi il Mio Libro Gratuito"}</h2>
                    <p>
                        {"Ogni cliente che inizia un percorso con me riceve gratuitamente il mio libro, una guida completa che ti accompagnerà durante tutta la trasformazione."}
                    </p>
                    <ul class="included-list">
                        {
                            for BOOK_POINTS.iter().map(|(lead, rest)| html! {
                                <li><strong>{*lead}</strong>{*rest}</li>
                            })
                        }
                    </ul>
                    <div class="card">
                        <p>
                            <strong>{"Bonus esclusivo: "}</strong>
                            {"oltre al programma personalizzato, riceverai questo manuale che contiene tutto ciò che ho appreso in anni di esperienza e formazione."}
                        </p>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(InstagramSection)]
fn instagram_section() -> Html {
    html! {
        <section class="section">
            <AnimatedSection class="container cta-box">
                <h2>{"Seguimi su Instagram"}</h2>
                <p>
                    {"Condivido consigli di allenamento, nutrizione e aggiornamenti sui progressi dei miei clienti. Unisciti alla community per rimanere sempre aggiornato e ispirato."}
                </p>
                <div class="cta-group">
                    <a href={config::get_instagram_url()} target="_blank" rel="noopener noreferrer" class="button-primary">
                        {"Seguimi su Instagram"}
                    </a>
                </div>
            </AnimatedSection>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_seo(Page::Home, Some(local_business_schema()));

    html! {
        <div class="home-page">
            <Hero />

            <section class="section">
                <div class="container">
                    <AnimatedSection class="section-header">
                        <h2>{"Come Posso Aiutarti"}</h2>
                        <p>{"Percorsi completi, allenamenti in palestra e coaching online."}</p>
                    </AnimatedSection>
                    <div class="card-grid">
                        {
                            for (0..3usize.min(SERVICES.len())).map(|index| html! {
                                <AnimatedSection delay={index as f64 * 0.1}>
                                    <ServiceCard {index} />
                                </AnimatedSection>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="section-header">
                        <h2>{"Perché Scegliere BST Crew"}</h2>
                    </AnimatedSection>
                    <div class="card-grid">
                        {
                            for WHY_CHOOSE_ME.iter().enumerate().map(|(i, (title, text))| {
                                let animation = if i % 2 == 0 { Animation::FadeInLeft } else { Animation::FadeInRight };
                                html! {
                                    <AnimatedSection {animation} delay={i as f64 * 0.05}>
                                        <div class="card">
                                            <h3>{*title}</h3>
                                            <p>{*text}</p>
                                        </div>
                                    </AnimatedSection>
                                }
                            })
                        }
                    </div>
                </div>
            </section>

            <BookSection />
            <InstagramSection />

            <section class="section">
                <AnimatedSection class="container cta-box">
                    <div class="card">
                        <h2>{"Inizia il Tuo Percorso Oggi"}</h2>
                        <p>
                            {"Non aspettare domani per iniziare a trasformare il tuo fisico. Richiedi una consulenza gratuita e scopri come posso aiutarti a raggiungere i tuoi obiettivi."}
                        </p>
                        <div class="cta-group">
                            <Link<Route> to={Route::Contact} classes="button-primary">
                                {"Contattami Ora"}
                            </Link<Route>>
                            <Link<Route> to={Route::PersonalTrainerPergine} classes="button-secondary">
                                {"Scopri di Più"}
                            </Link<Route>>
                        </div>
                    </div>
                </AnimatedSection>
            </section>
        </div>
    }
}
