use serde_json::{json, Value};
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::config;

const SITE_NAME: &str = "BST Crew - Personal Trainer";
const SCHEMA_SCRIPT_ID: &str = "seo-schema";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Transformations,
    Faq,
    Contact,
    PersonalTrainerPergine,
    Privacy,
    CookiePolicy,
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub og_image: String,
    pub og_type: &'static str,
    pub keywords: Vec<&'static str>,
    pub indexable: bool,
}

impl SeoConfig {
    fn new(title: &str, description: &str, path: &str, image: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            canonical: config::site_link(path),
            og_image: config::site_link(image),
            og_type: "website",
            keywords: Vec::new(),
            indexable: true,
        }
    }

    fn keywords(mut self, keywords: &[&'static str]) -> Self {
        self.keywords = keywords.to_vec();
        self
    }

    pub fn head_tags(&self) -> Vec<HeadTag> {
        let robots = if self.indexable { "index, follow" } else { "noindex, nofollow" };
        let mut tags = vec![
            HeadTag::meta("name", "title", &self.title),
            HeadTag::meta("name", "description", &self.description),
            HeadTag::meta("http-equiv", "content-language", "it-IT"),
            HeadTag::link("canonical", &self.canonical),
            HeadTag::meta("property", "og:type", self.og_type),
            HeadTag::meta("property", "og:url", &self.canonical),
            HeadTag::meta("property", "og:title", &self.title),
            HeadTag::meta("property", "og:description", &self.description),
            HeadTag::meta("property", "og:image", &self.og_image),
            HeadTag::meta("property", "og:locale", "it_IT"),
            HeadTag::meta("property", "og:site_name", SITE_NAME),
            HeadTag::meta("property", "twitter:card", "summary_large_image"),
            HeadTag::meta("property", "twitter:url", &self.canonical),
            HeadTag::meta("property", "twitter:title", &self.title),
            HeadTag::meta("property", "twitter:description", &self.description),
            HeadTag::meta("property", "twitter:image", &self.og_image),
            HeadTag::meta("name", "robots", robots),
            HeadTag::meta("name", "googlebot", robots),
        ];
        if !self.keywords.is_empty() {
            tags.push(HeadTag::meta("name", "keywords", &self.keywords.join(", ")));
        }
        tags
    }
}

/// Config for each routed page.
pub fn page(page: Page) -> SeoConfig {
    match page {
        Page::Home => SeoConfig::new(
            "Personal Trainer Pergine Valsugana | Coaching Online Trento | BST Crew",
            "Personal Trainer specializzato in ipertrofia, dimagrimento e ricomposizione corporea a Pergine Valsugana. Servizi in palestra e online in tutto il Trentino.",
            "/",
            "/images/hero-profile.webp",
        )
        .keywords(&[
            "personal trainer Pergine Valsugana",
            "personal trainer Trento",
            "coach palestra Pergine",
            "personal trainer online Trentino",
            "ipertrofia muscolare",
            "dimagrimento Trento",
            "ricomposizione corporea",
        ]),
        Page::About => SeoConfig::new(
            "Chi Sono | Personal Trainer Certificato a Pergine Valsugana",
            "Scopri il mio approccio professionale al personal training. Specializzato in allenamenti personalizzati per ipertrofia, definizione e ricomposizione corporea.",
            "/chi-sono",
            "/images/hero-profile.webp",
        )
        .keywords(&["personal trainer certificato", "coach Pergine", "allenamento personalizzato Trento"]),
        Page::Services => SeoConfig::new(
            "Servizi Personal Training | Palestra e Online a Trento",
            "Personal training in palestra a Pergine Valsugana e coaching online in tutto il Trentino. Programmi personalizzati per ipertrofia, dimagrimento e risultati estetici.",
            "/servizi",
            "/images/logo.webp",
        )
        .keywords(&[
            "servizi personal training",
            "coaching online Trentino",
            "personal trainer palestra Pergine",
            "programmi personalizzati fitness",
        ]),
        Page::Transformations => SeoConfig::new(
            "Trasformazioni Prima e Dopo | Risultati Reali BST Crew",
            "Scopri le trasformazioni reali ottenute dai clienti BST Crew. Risultati concreti con metodo scientifico, programmi personalizzati e supporto continuo.",
            "/trasformazioni",
            "/images/transformation1.webp",
        )
        .keywords(&["trasformazioni fitness", "prima e dopo palestra", "risultati personal trainer Pergine"]),
        Page::Faq => SeoConfig::new(
            "FAQ | Domande Frequenti Personal Training BST Crew",
            "Risposte alle domande più frequenti su personal training, coaching online, servizi e prezzi a Pergine Valsugana e Trento.",
            "/faq",
            "/images/logo.webp",
        ),
        Page::Contact => SeoConfig::new(
            "Contatti | Personal Trainer Pergine Valsugana",
            "Richiedi una consulenza gratuita per il tuo percorso di trasformazione fisica. Personal training a Pergine Valsugana e online in Trentino.",
            "/contatti",
            "/images/logo.webp",
        )
        .keywords(&["contatti personal trainer Pergine", "consulenza fitness Trento", "prenotazione personal training"]),
        Page::PersonalTrainerPergine => SeoConfig::new(
            "Personal Trainer a Pergine Valsugana: Trasforma il Tuo Fisico | BST Crew",
            "Cerchi un personal trainer a Pergine Valsugana o Trento? Allenamenti personalizzati per ipertrofia, dimagrimento e ricomposizione corporea. Servizi in palestra e online.",
            "/personal-trainer-pergine-valsugana",
            "/images/hero-profile.webp",
        )
        .keywords(&[
            "personal trainer Pergine Valsugana",
            "personal trainer Trento",
            "coach palestra Pergine",
            "personal trainer online Trentino",
            "allenamento personalizzato Pergine",
            "ipertrofia Valsugana",
            "dimagrimento Trento",
        ]),
        Page::Privacy => SeoConfig::new(
            "Privacy Policy | BST Crew Personal Trainer",
            "Informativa sulla privacy e trattamento dei dati personali in conformità al GDPR.",
            "/privacy",
            "/images/logo.webp",
        ),
        Page::CookiePolicy => SeoConfig::new(
            "Cookie Policy | BST Crew Personal Trainer",
            "Informativa sui cookie utilizzati dal sito e gestione del consenso.",
            "/cookie-policy",
            "/images/logo.webp",
        ),
        Page::NotFound => SeoConfig {
            indexable: false,
            ..SeoConfig::new(
                "404 - Pagina Non Trovata | BST Crew",
                "La pagina che stai cercando non esiste.",
                "/",
                "/images/logo.webp",
            )
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    /// `<meta {attr}="{key}" content="...">`
    Meta { attr: &'static str, key: &'static str, content: String },
    Link { rel: &'static str, href: String },
}

impl HeadTag {
    fn meta(attr: &'static str, key: &'static str, content: &str) -> Self {
        HeadTag::Meta { attr, key, content: content.to_string() }
    }

    fn link(rel: &'static str, href: &str) -> Self {
        HeadTag::Link { rel, href: href.to_string() }
    }

    pub fn selector(&self) -> String {
        match self {
            HeadTag::Meta { attr, key, .. } => format!("meta[{}=\"{}\"]", attr, key),
            HeadTag::Link { rel, .. } => format!("link[rel=\"{}\"]", rel),
        }
    }

    fn write(&self, document: &Document, head: &Element) -> Option<()> {
        let element = match document.query_selector(&self.selector()).ok().flatten() {
            Some(existing) => existing,
            None => {
                let tag = if matches!(self, HeadTag::Meta { .. }) { "meta" } else { "link" };
                let created = document.create_element(tag).ok()?;
                head.append_child(&created).ok()?;
                created
            }
        };
        match self {
            HeadTag::Meta { attr, key, content } => {
                element.set_attribute(attr, key).ok()?;
                element.set_attribute("content", content).ok()
            }
            HeadTag::Link { rel, href } => {
                element.set_attribute("rel", rel).ok()?;
                element.set_attribute("href", href).ok()
            }
        }
    }
}

/// Writes the page's head tags, creating or updating them in place so
/// repeated navigations do not pile up duplicates.
pub fn apply(config: &SeoConfig, schema: Option<&Value>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    document.set_title(&config.title);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", "it");
    }
    for tag in config.head_tags() {
        if tag.write(&document, &head).is_none() {
            log::warn!("Could not write head tag {}", tag.selector());
        }
    }

    let existing = document.get_element_by_id(SCHEMA_SCRIPT_ID);
    match (schema, existing) {
        (Some(schema), existing) => {
            let script = existing.or_else(|| {
                let script = document.create_element("script").ok()?;
                script.set_id(SCHEMA_SCRIPT_ID);
                let _ = script.set_attribute("type", "application/ld+json");
                head.append_child(&script).ok()?;
                Some(script)
            });
            if let Some(script) = script {
                script.set_text_content(Some(&schema.to_string()));
            }
        }
        (None, Some(stale)) => stale.remove(),
        (None, None) => {}
    }
}

#[hook]
pub fn use_seo(page: Page, schema: Option<Value>) {
    use_effect_with_deps(
        move |(page, schema)| {
            apply(&self::page(*page), schema.as_ref());
            || ()
        },
        (page, schema),
    );
}

pub fn local_business_schema() -> Value {
    let site = config::get_site_url();
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "@id": format!("{}/#business", site),
        "name": SITE_NAME,
        "image": config::site_link("/images/logo.png"),
        "description": "Personal Trainer specializzato in ipertrofia muscolare, dimagrimento e ricomposizione corporea. Servizi di coaching in palestra a Pergine Valsugana e online in tutto il Trentino.",
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Pergine Valsugana",
            "addressRegion": "TN",
            "postalCode": "38057",
            "addressCountry": "IT"
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": "46.0636",
            "longitude": "11.2367"
        },
        "url": site,
        "priceRange": "$$",
        "openingHoursSpecification": [
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
                "opens": "09:00",
                "closes": "20:00"
            },
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Saturday"],
                "opens": "09:00",
                "closes": "14:00"
            }
        ],
        "sameAs": [config::get_instagram_url()]
    })
}

pub fn person_schema() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": "Personal Trainer BST Crew",
        "jobTitle": "Personal Trainer & Coach",
        "description": "Personal Trainer certificato specializzato in allenamenti personalizzati per ipertrofia muscolare, dimagrimento e ricomposizione corporea.",
        "url": config::site_link("/chi-sono"),
        "sameAs": [config::get_instagram_url()],
        "worksFor": {
            "@type": "Organization",
            "name": "BST Crew"
        }
    })
}

pub fn faq_schema(items: &[(&str, &str)]) -> Value {
    let entities: Vec<Value> = items
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer }
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_of<'a>(tags: &'a [HeadTag], wanted: &str) -> Option<&'a str> {
        tags.iter().find_map(|tag| match tag {
            HeadTag::Meta { key, content, .. } if *key == wanted => Some(content.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_head_tags_cover_open_graph_and_twitter() {
        let config = page(Page::About);
        let tags = config.head_tags();

        assert_eq!(content_of(&tags, "og:title"), Some(config.title.as_str()));
        assert_eq!(content_of(&tags, "twitter:description"), Some(config.description.as_str()));
        assert_eq!(content_of(&tags, "og:url"), Some(config.canonical.as_str()));
        assert_eq!(content_of(&tags, "robots"), Some("index, follow"));
        assert!(config.canonical.ends_with("/chi-sono"));
        assert!(tags.contains(&HeadTag::Link { rel: "canonical", href: config.canonical.clone() }));
    }

    #[test]
    fn test_keywords_only_when_present() {
        let home = page(Page::Home).head_tags();
        assert!(content_of(&home, "keywords").unwrap().starts_with("personal trainer Pergine Valsugana, "));
        assert_eq!(content_of(&page(Page::Privacy).head_tags(), "keywords"), None);
    }

    #[test]
    fn test_not_found_is_not_indexed() {
        let tags = page(Page::NotFound).head_tags();
        assert_eq!(content_of(&tags, "robots"), Some("noindex, nofollow"));
    }

    #[test]
    fn test_selectors_are_unique_per_page() {
        let tags = page(Page::Home).head_tags();
        let mut selectors: Vec<String> = tags.iter().map(HeadTag::selector).collect();
        selectors.sort();
        selectors.dedup();
        assert_eq!(selectors.len(), tags.len());
        assert_eq!(tags[1].selector(), "meta[name=\"description\"]");
    }

    #[test]
    fn test_faq_schema_lists_questions() {
        let schema = faq_schema(&[("Quanto costa?", "Dipende dal percorso."), ("Dove?", "Pergine.")]);
        assert_eq!(schema["@type"], "FAQPage");
        assert_eq!(schema["mainEntity"].as_array().map(Vec::len), Some(2));
        assert_eq!(schema["mainEntity"][0]["acceptedAnswer"]["text"], "Dipende dal percorso.");
    }

    #[test]
    fn test_pergine_landing_is_indexed_with_local_keywords() {
        let config = page(Page::PersonalTrainerPergine);
        assert!(config.canonical.ends_with("/personal-trainer-pergine-valsugana"));
        assert!(config.indexable);
        assert!(config.keywords.contains(&"ipertrofia Valsugana"));
    }

    #[test]
    fn test_local_business_schema_is_located_in_pergine() {
        let schema = local_business_schema();
        assert_eq!(schema["address"]["addressLocality"], "Pergine Valsugana");
        assert_eq!(schema["sameAs"][0], config::get_instagram_url());
    }
}
