use yew::prelude::*;
use yew_router::prelude::*;

use crate::reveal::{AnimatedSection, Animation};
use crate::seo::{use_seo, Page};
use crate::Route;

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: [Service; 5] = [
    Service {
        id: "percorso-completo",
        title: "Percorso Personalizzato 6 Mesi",
        subtitle: "Trasformazione a 360° con allenamento e nutrizione",
        description: "Un percorso completo su misura per il tuo corpo, i tuoi obiettivi e la tua vita. Combina allenamenti, nutrizione, monitoraggio e supporto costante.",
        features: &[
            "Analisi dettagliata della composizione corporea",
            "Piano allenamento e nutrizione personalizzato",
            "Revisioni e aggiornamenti periodici",
            "Risultati misurabili in 6 mesi",
            "Supporto e check-in continui",
        ],
    },
    Service {
        id: "personal-training",
        title: "Allenamento in Palestra",
        subtitle: "Allenamenti One-to-One a Pergine Valsugana",
        description: "Sessioni individuali presso la palestra partner a Pergine Valsugana. Focus su tecnica, progressioni e performance.",
        features: &[
            "Allenamenti one-to-one",
            "Correzione tecnica costante",
            "Schede personalizzate per ogni sessione",
            "Monitoraggio progressi in app",
        ],
    },
    Service {
        id: "coaching-online",
        title: "Coaching Online",
        subtitle: "Allenati Ovunque con Supporto Professionale",
        description: "Programmi di allenamento e supporto a distanza. Ideale per chi vuole allenarsi in autonomia con una guida professionale.",
        features: &[
            "Schede e video esercizi personalizzati",
            "Supporto chat Lun-Sab",
            "Check-in mensili",
            "Progress tracking nell'app",
        ],
    },
    Service {
        id: "libro-guida",
        title: "Libro Guida al Fitness",
        subtitle: "Strategie pratiche, passo dopo passo",
        description: "Il libro scritto per guidarti nel tuo percorso, con strategie, consigli e tabelle pratiche per ipertrofia, dimagrimento e ricomposizione.",
        features: &[
            "Strategie scientificamente validate",
            "Consigli pratici per allenamenti e alimentazione",
            "Tabelle e template da seguire",
        ],
    },
    Service {
        id: "app-personalizzata",
        title: "App Predittiva Progressi",
        subtitle: "I tuoi numeri, sempre aggiornati",
        description: "La tua app personale per monitorare i progressi, calcolare carichi e ottimizzare gli allenamenti secondo il percorso impostato.",
        features: &[
            "Calcolo automatico dei carichi",
            "Tracciamento dei progressi",
            "Grafici e statistiche personalizzate",
            "Promemoria per sessioni e check-in",
        ],
    },
];

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub index: usize,
    #[prop_or(false)]
    pub detailed: bool,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let Some(service) = SERVICES.get(props.index) else {
        return html! {};
    };

    html! {
        <div class="card" id={service.id}>
            <h3>{service.title}</h3>
            if props.detailed {
                <p class="card-subtitle">{service.subtitle}</p>
            }
            <p>{service.description}</p>
            <ul>
                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    use_seo(Page::Services, None);

    html! {
        <div class="services-page">
            <section class="section">
                <AnimatedSection class="container section-header">
                    <span class="badge">{"Servizi"}</span>
                    <h1>{"Allenamento su Misura, in Palestra e Online"}</h1>
                    <p>
                        {"Ogni percorso parte dai tuoi obiettivi: ipertrofia, dimagrimento o ricomposizione corporea. Scegli la formula che si adatta alla tua vita."}
                    </p>
                </AnimatedSection>
            </section>

            <section class="section">
                <div class="container card-grid">
                    {
                        for (0..SERVICES.len()).map(|index| html! {
                            <AnimatedSection animation={Animation::FadeInUp} delay={index as f64 * 0.1}>
                                <ServiceCard {index} detailed=true />
                            </AnimatedSection>
                        })
                    }
                </div>
            </section>

            <section class="section">
                <AnimatedSection class="container cta-box" animation={Animation::Scale}>
                    <h2>{"Non Sai Quale Scegliere?"}</h2>
                    <p>{"Parliamone insieme: la prima consulenza è gratuita e senza impegno."}</p>
                    <div class="cta-group">
                        <Link<Route> to={Route::Contact} classes="button-primary">
                            {"Richiedi Consulenza Gratuita"}
                        </Link<Route>>
                    </div>
                </AnimatedSection>
            </section>
        </div>
    }
}
