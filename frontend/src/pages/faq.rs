use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::reveal::{AnimatedSection, Animation};
use crate::seo::{faq_schema, use_seo, Page};
use crate::Route;

pub const FAQ_ENTRIES: [(&str, &str); 7] = [
    (
        "Quanto costa un personal trainer a Pergine Valsugana?",
        "Il costo dipende dal percorso scelto: sessioni singole in palestra, pacchetti o coaching online. La prima consulenza è sempre gratuita, così possiamo definire insieme la soluzione più adatta.",
    ),
    (
        "Dove si svolgono gli allenamenti?",
        "Gli allenamenti in presenza si svolgono nella palestra partner a Pergine Valsugana. Il coaching online è disponibile in tutto il Trentino e in tutta Italia.",
    ),
    (
        "Sono un principiante, posso iniziare?",
        "Certo. Ogni programma parte dal tuo livello attuale, con particolare attenzione alla tecnica e a una progressione graduale e sicura.",
    ),
    (
        "In quanto tempo vedrò i primi risultati?",
        "Con costanza i primi cambiamenti si notano dopo 4-6 settimane. Il percorso di 6 mesi è pensato per risultati misurabili e duraturi.",
    ),
    (
        "Il coaching online funziona davvero?",
        "Sì: ricevi schede e video personalizzati, check-in regolari e supporto via chat. È ideale se hai orari variabili o ti alleni in autonomia.",
    ),
    (
        "È incluso un piano alimentare?",
        "Il percorso personalizzato include indicazioni nutrizionali costruite sui tuoi obiettivi e sulle tue abitudini, senza diete estreme.",
    ),
    (
        "Come prenoto la consulenza gratuita?",
        "Compila il form nella pagina Contatti: ti rispondo entro 24 ore per fissare un appuntamento.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", "card", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

/// Clicking the open question closes it, any other one takes its place.
pub fn toggle_index(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    use_seo(Page::Faq, Some(faq_schema(&FAQ_ENTRIES)));
    let open_index = use_state(|| Some(0usize));

    html! {
        <div class="faq-page">
            <section class="section">
                <AnimatedSection class="container section-header">
                    <span class="badge">{"FAQ"}</span>
                    <h1>{"Domande Frequenti"}</h1>
                    <p>
                        {"Trova le risposte alle domande più comuni sul personal training, i servizi offerti e come iniziare il tuo percorso di trasformazione."}
                    </p>
                </AnimatedSection>
            </section>

            <section class="section">
                <div class="container" style="max-width: 56rem;">
                    {
                        for FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
                            let on_toggle = {
                                let open_index = open_index.clone();
                                Callback::from(move |_: ()| open_index.set(toggle_index(*open_index, index)))
                            };
                            html! {
                                <AnimatedSection animation={Animation::FadeInUp} delay={index as f64 * 0.05}>
                                    <FaqItem
                                        question={*question}
                                        answer={*answer}
                                        open={*open_index == Some(index)}
                                        {on_toggle}
                                    />
                                </AnimatedSection>
                            }
                        })
                    }
                </div>
            </section>

            <section class="section">
                <AnimatedSection class="container cta-box">
                    <div class="card">
                        <h2>{"Non Hai Trovato la Risposta?"}</h2>
                        <p>
                            {"Contattami direttamente per qualsiasi altra domanda. Sarò felice di aiutarti e fornirti tutte le informazioni di cui hai bisogno."}
                        </p>
                        <div class="cta-group">
                            <Link<Route> to={Route::Contact} classes="button-primary">{"Contattami"}</Link<Route>>
                            <Link<Route> to={Route::Services} classes="button-secondary">{"Scopri i Servizi"}</Link<Route>>
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
    fn test_toggle_index_keeps_single_item_open() {
        assert_eq!(toggle_index(Some(0), 0), None);
        assert_eq!(toggle_index(Some(0), 3), Some(3));
        assert_eq!(toggle_index(None, 2), Some(2));
    }

    #[test]
    fn test_every_entry_reaches_the_schema() {
        let schema = faq_schema(&FAQ_ENTRIES);
        assert_eq!(schema["mainEntity"].as_array().map(Vec::len), Some(FAQ_ENTRIES.len()));
    }
}
