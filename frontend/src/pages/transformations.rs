use yew::prelude::*;
use yew_router::prelude::*;

use crate::counter::StatCounter;
use crate::reveal::{AnimatedSection, Animation};
use crate::seo::{use_seo, Page};
use crate::Route;

const GALLERY_SIZE: usize = 5;

const BENEFITS: [(&str, &str); 3] = [
    ("Risultati Garantiti", "Ogni trasformazione è il risultato di un metodo scientifico testato su centinaia di clienti."),
    ("Progressi Misurabili", "Monitoriamo ogni dettaglio: composizione corporea, forza, performance e progressioni costanti."),
    ("Supporto Continuo", "Non sei mai solo: chat integrata, check-in settimanali e aggiustamenti in tempo reale."),
];

const INCLUDED: [&str; 6] = [
    "Programma personalizzato al 100%",
    "Monitoraggio progressi in tempo reale",
    "Supporto chat 6 giorni su 7",
    "Revisioni programma ogni 4 settimane",
    "Software predittivo esclusivo",
    "Libro nutrizione e allenamento incluso",
];

fn gallery_image(index: usize) -> (String, String) {
    (
        format!("/images/transformation{}.png", index + 1),
        format!("Trasformazione cliente BST Crew {}", index + 1),
    )
}

#[function_component(Transformations)]
pub fn transformations() -> Html {
    use_seo(Page::Transformations, None);

    html! {
        <div class="transformations-page">
            <section class="section">
                <AnimatedSection class="container section-header">
                    <span class="badge">{"Risultati Reali"}</span>
                    <h1>{"Trasformazioni Prima e Dopo"}</h1>
                    <p>
                        {"Questi non sono sogni, sono risultati concreti ottenuti dai miei clienti con metodo scientifico, costanza e supporto continuo."}
                    </p>
                </AnimatedSection>
                <div class="container stats-grid">
                    <StatCounter end={200} suffix="+" label="Clienti Seguiti" />
                    <StatCounter end={6} label="Mesi di Percorso" duration_ms={1200.0} />
                    <StatCounter end={100} suffix="%" label="Programmi Personalizzati" />
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <p class="gallery-hint">{"Scorri orizzontalmente per vedere tutte le trasformazioni"}</p>
                    <div class="gallery">
                        {
                            for (0..GALLERY_SIZE).map(|index| {
                                let (src, alt) = gallery_image(index);
                                html! {
                                    <AnimatedSection class="gallery-item" delay={index as f64 * 0.1}>
                                        <img {src} {alt} loading="lazy" />
                                    </AnimatedSection>
                                }
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="section-header">
                        <h2>{"Come Ottenere Risultati Come Questi"}</h2>
                        <p>
                            {"Le trasformazioni che vedi non sono frutto della fortuna, ma di un metodo collaudato che combina scienza, personalizzazione e supporto continuo."}
                        </p>
                    </AnimatedSection>
                    <div class="card-grid">
                        {
                            for BENEFITS.iter().enumerate().map(|(i, (title, text))| html! {
                                <AnimatedSection animation={Animation::FadeInUp} delay={i as f64 * 0.1}>
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
                <AnimatedSection class="container cta-box">
                    <div class="card">
                        <h2>{"Vuoi Essere il Prossimo?"}</h2>
                        <p>
                            {"Ogni persona che vedi in queste immagini ha iniziato esattamente dove sei tu adesso. La differenza? Ha deciso di investire su se stessa con il metodo giusto."}
                        </p>
                        <ul class="included-list">
                            { for INCLUDED.iter().map(|item| html! { <li>{*item}</li> }) }
                        </ul>
                        <div class="cta-group">
                            <Link<Route> to={Route::Contact} classes="button-primary">
                                {"Richiedi Consulenza Gratuita"}
                            </Link<Route>>
                            <Link<Route> to={Route::Services} classes="button-secondary">
                                {"Scopri i Servizi"}
                            </Link<Route>>
                        </div>
                    </div>
                </AnimatedSection>
            </section>

            <section class="container disclaimer">
                <p>
                    {"I risultati mostrati sono reali e ottenuti seguendo i programmi BST Crew. Tempi e risultati possono variare in base all'impegno individuale, alla genetica e alla costanza nel seguire il programma."}
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_images_are_one_based() {
        let (src, alt) = gallery_image(0);
        assert_eq!(src, "/images/transformation1.png");
        assert!(alt.ends_with(" 1"));
        assert_eq!(gallery_image(GALLERY_SIZE - 1).0, "/images/transformation5.png");
    }
}
