use yew::prelude::*;

use crate::config;
use crate::contact::ContactForm;
use crate::reveal::{AnimatedSection, Animation};
use crate::seo::{use_seo, Page};

struct ContactInfo {
    title: &'static str,
    content: String,
    subtitle: Option<&'static str>,
    link: Option<String>,
    external: bool,
}

fn contact_info() -> Vec<ContactInfo> {
    let email = config::get_contact_email();
    vec![
        ContactInfo {
            title: "Area di Servizio",
            content: "Pergine Valsugana, Trento e tutto il Trentino-Alto Adige".to_string(),
            subtitle: Some("Personal training in palestra a Pergine + coaching online"),
            link: None,
            external: false,
        },
        ContactInfo {
            title: "Email",
            content: email.to_string(),
            subtitle: None,
            link: Some(format!("mailto:{}", email)),
            external: false,
        },
        ContactInfo {
            title: "Instagram",
            content: "@bstcrew".to_string(),
            subtitle: None,
            link: Some(config::get_instagram_url().to_string()),
            external: true,
        },
        ContactInfo {
            title: "Orari Consulenze",
            content: "Lun-Ven: 9:00-20:00".to_string(),
            subtitle: Some("Sabato: 9:00-14:00"),
            link: None,
            external: false,
        },
    ]
}

fn info_card(info: &ContactInfo) -> Html {
    let content = match &info.link {
        Some(href) if info.external => html! {
            <a href={href.clone()} target="_blank" rel="noopener noreferrer">{&info.content}</a>
        },
        Some(href) => html! { <a href={href.clone()}>{&info.content}</a> },
        None => html! { <span>{&info.content}</span> },
    };

    html! {
        <div class="card info-card">
            <div class="info-title">{info.title}</div>
            <div class="info-content">{content}</div>
            if let Some(subtitle) = info.subtitle {
                <div class="info-subtitle">{subtitle}</div>
            }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_seo(Page::Contact, None);
    let info = contact_info();

    html! {
        <div class="contact-page">
            <section class="section">
                <AnimatedSection class="container section-header">
                    <h1>{"Contattami"}</h1>
                    <p>
                        {"Hai domande o vuoi iniziare il tuo percorso di trasformazione? Compila il form qui sotto o contattami direttamente. Ti risponderò entro 24 ore."}
                    </p>
                </AnimatedSection>
            </section>

            <section class="section">
                <div class="container contact-grid">
                    <AnimatedSection animation={Animation::FadeInLeft}>
                        <ContactForm />
                    </AnimatedSection>
                    <AnimatedSection animation={Animation::FadeInRight}>
                        <h2>{"Informazioni di Contatto"}</h2>
                        { for info.iter().map(info_card) }
                        <div class="card">
                            <h3>{"Dove mi trovo"}</h3>
                            <p>
                                {"Collaboro con una palestra attrezzata a Pergine Valsugana (TN). Per chi non può raggiungere la palestra offro coaching online in tutto il Trentino e oltre."}
                            </p>
                        </div>
                        <div class="card">
                            <h3>{"Consulenza Gratuita"}</h3>
                            <p>
                                {"La prima consulenza è sempre gratuita e senza impegno. Analizzeremo i tuoi obiettivi e troveremo insieme il percorso più adatto a te."}
                            </p>
                        </div>
                    </AnimatedSection>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_links_use_configured_values() {
        let info = contact_info();
        let email = info.iter().find(|i| i.title == "Email").and_then(|i| i.link.clone());
        assert_eq!(email, Some(format!("mailto:{}", config::get_contact_email())));
        assert!(info.iter().filter(|i| i.external).all(|i| i.link.is_some()));
    }
}
