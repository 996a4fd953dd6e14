use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Interval;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{Object, Reflect};
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

const MAIL_SUBJECT: &str = "Nuovo contatto dal sito BST Crew";
const RETRY_HINT: &str = "Riprova tra qualche istante o scrivimi via email.";
const SUCCESS_MESSAGE: &str = "Messaggio inviato con successo! Ti risponderò al più presto.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Completa la verifica anti-bot.")]
    MissingToken,
    #[error("Il campo {0} è obbligatorio.")]
    MissingField(&'static str),
    #[error("Inserisci un indirizzo email valido.")]
    InvalidEmail,
    #[error("Invio non riuscito (errore {0}). {hint}", hint = RETRY_HINT)]
    Status(u16),
    #[error("Connessione non riuscita. {hint}", hint = RETRY_HINT)]
    Network(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Email => "email",
            Field::Phone => "telefono",
            Field::Message => "messaggio",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }
}

/// JSON body for the form relay. The underscore fields are relay options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(rename = "h-captcha-response")]
    pub captcha_token: String,
    #[serde(rename = "_subject")]
    pub subject: &'static str,
    #[serde(rename = "_template")]
    pub template: &'static str,
    #[serde(rename = "_captcha")]
    pub relay_captcha: &'static str,
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Gate in front of the network call. A missing token is checked first so
/// an unverified visitor never reaches the relay.
pub fn prepare_submission(fields: &ContactFields, token: Option<&str>) -> Result<ContactPayload, ContactError> {
    let token = token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ContactError::MissingToken)?;

    for field in [Field::Name, Field::Email, Field::Phone, Field::Message] {
        if fields.get(field).trim().is_empty() {
            return Err(ContactError::MissingField(field.label()));
        }
    }
    if !looks_like_email(fields.email.trim()) {
        return Err(ContactError::InvalidEmail);
    }

    Ok(ContactPayload {
        name: fields.name.trim().to_string(),
        email: fields.email.trim().to_string(),
        phone: fields.phone.trim().to_string(),
        message: fields.message.trim().to_string(),
        captcha_token: token.to_string(),
        subject: MAIL_SUBJECT,
        template: "table",
        relay_captcha: "false",
    })
}

pub async fn submit_contact(endpoint: &str, payload: &ContactPayload) -> Result<(), ContactError> {
    let request = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|e| ContactError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::Status(response.status()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub fields: ContactFields,
    pub token: Option<String>,
    pub status: FormStatus,
}

impl ContactDraft {
    pub fn prepare(&self) -> Result<ContactPayload, ContactError> {
        prepare_submission(&self.fields, self.token.as_deref())
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }
}

pub enum ContactAction {
    Edit(Field, String),
    Verified(String),
    Expired,
    Rejected(ContactError),
    Submitting,
    Finished(Result<(), ContactError>),
}

impl Reducible for ContactDraft {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => *next.fields.get_mut(field) = value,
            ContactAction::Verified(token) => next.token = Some(token),
            ContactAction::Expired => next.token = None,
            ContactAction::Rejected(e) => next.status = FormStatus::Error(e.to_string()),
            ContactAction::Submitting => next.status = FormStatus::Submitting,
            ContactAction::Finished(result) => {
                // every attempt that reached the relay needs a fresh challenge
                next.token = None;
                next.status = match result {
                    Ok(()) => {
                        next.fields = ContactFields::default();
                        FormStatus::Success(SUCCESS_MESSAGE.to_string())
                    }
                    Err(e) => FormStatus::Error(e.to_string()),
                };
            }
        }
        next.into()
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = hcaptcha, js_name = render, catch)]
    fn hcaptcha_render(container: &HtmlElement, params: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = hcaptcha, js_name = reset, catch)]
    fn hcaptcha_reset(widget_id: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = hcaptcha, js_name = remove, catch)]
    fn hcaptcha_remove(widget_id: &JsValue) -> Result<(), JsValue>;
}

/// What a rendered widget needs from the captcha script after creation.
trait CaptchaApi {
    type Id;
    /// Whatever the script calls back into; must outlive the widget.
    type Callbacks;

    fn reset(&self, id: &Self::Id);
    fn remove(&self, id: &Self::Id);
}

struct HCaptcha;

impl CaptchaApi for HCaptcha {
    type Id = JsValue;
    type Callbacks = (Closure<dyn FnMut(String)>, Closure<dyn FnMut()>);

    fn reset(&self, id: &JsValue) {
        if let Err(e) = hcaptcha_reset(id) {
            log::warn!("hCaptcha reset failed: {:?}", e);
        }
    }

    fn remove(&self, id: &JsValue) {
        if let Err(e) = hcaptcha_remove(id) {
            log::warn!("hCaptcha remove failed: {:?}", e);
        }
    }
}

#[derive(Serialize)]
struct CaptchaParams<'a> {
    sitekey: &'a str,
    theme: &'a str,
}

/// A rendered widget. Dropping it removes the widget from the script
/// before the callbacks it holds are freed.
struct CaptchaWidget<A: CaptchaApi = HCaptcha> {
    api: A,
    id: A::Id,
    _callbacks: A::Callbacks,
}

impl CaptchaWidget<HCaptcha> {
    fn render(container: &HtmlElement, site_key: &str, on_token: Callback<Option<String>>) -> Result<Self, JsValue> {
        let params: JsValue = serde_wasm_bindgen::to_value(&CaptchaParams { sitekey: site_key, theme: "dark" })?;
        let params: Object = params.dyn_into()?;

        let on_verify = {
            let on_token = on_token.clone();
            Closure::<dyn FnMut(String)>::new(move |token: String| on_token.emit(Some(token)))
        };
        let on_expire = Closure::<dyn FnMut()>::new(move || on_token.emit(None));
        Reflect::set(&params, &"callback".into(), on_verify.as_ref())?;
        Reflect::set(&params, &"expired-callback".into(), on_expire.as_ref())?;

        let id = hcaptcha_render(container, &params)?;
        Ok(Self { api: HCaptcha, id, _callbacks: (on_verify, on_expire) })
    }
}

impl<A: CaptchaApi> CaptchaWidget<A> {
    fn reset(&self) {
        self.api.reset(&self.id);
    }
}

impl<A: CaptchaApi> Drop for CaptchaWidget<A> {
    fn drop(&mut self) {
        self.api.remove(&self.id);
    }
}

const CAPTCHA_POLL_MS: u32 = 250;
const CAPTCHA_MAX_ATTEMPTS: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollStep {
    Try { last: bool },
    Stop,
}

/// Attempt budget while waiting for the async script to define `hcaptcha`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RenderPoll {
    attempts: u32,
}

impl RenderPoll {
    fn next(&mut self, rendered: bool) -> PollStep {
        if rendered || self.attempts >= CAPTCHA_MAX_ATTEMPTS {
            return PollStep::Stop;
        }
        self.attempts += 1;
        PollStep::Try { last: self.attempts >= CAPTCHA_MAX_ATTEMPTS }
    }
}

/// Renders the challenge into the returned node once the async hCaptcha
/// script has loaded. The returned callback resets the widget.
#[hook]
fn use_hcaptcha(site_key: Option<&'static str>, on_token: Callback<Option<String>>) -> (NodeRef, Callback<()>) {
    let node = use_node_ref();
    let widget = use_mut_ref(|| None::<CaptchaWidget<HCaptcha>>);
    let interval_handle = use_mut_ref(|| None::<Interval>);

    {
        let node = node.clone();
        let widget = widget.clone();
        let interval_handle = interval_handle.clone();
        use_effect_with_deps(
            move |site_key: &Option<&'static str>| {
                if let Some(site_key) = *site_key {
                    let widget = widget.clone();
                    let handle = interval_handle.clone();
                    let mut poll = RenderPoll::default();
                    let interval = Interval::new(CAPTCHA_POLL_MS, move || {
                        let last = match poll.next(widget.borrow().is_some()) {
                            PollStep::Try { last } => last,
                            PollStep::Stop => {
                                handle.borrow_mut().take();
                                return;
                            }
                        };
                        let rendered = match node.cast::<HtmlElement>() {
                            Some(container) => match CaptchaWidget::render(&container, site_key, on_token.clone()) {
                                Ok(rendered) => {
                                    *widget.borrow_mut() = Some(rendered);
                                    true
                                }
                                Err(e) => {
                                    if last {
                                        log::error!("hCaptcha did not load: {:?}", e);
                                    }
                                    false
                                }
                            },
                            None => false,
                        };
                        if rendered || last {
                            handle.borrow_mut().take();
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }
                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                    widget.borrow_mut().take();
                }
            },
            site_key,
        );
    }

    let reset = Callback::from(move |_: ()| {
        if let Some(widget) = widget.borrow().as_ref() {
            widget.reset();
        }
    });

    (node, reset)
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_reducer(ContactDraft::default);
    let site_key = config::get_hcaptcha_site_key();

    let on_token = {
        let draft = draft.dispatcher();
        Callback::from(move |token: Option<String>| match token {
            Some(token) => draft.dispatch(ContactAction::Verified(token)),
            None => draft.dispatch(ContactAction::Expired),
        })
    };
    let (captcha_ref, reset_captcha) = use_hcaptcha(site_key, on_token);

    let edit = |field: Field| {
        let draft = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let target = e.target();
            let value = target
                .clone()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .map(|input| input.value())
                .or_else(|| {
                    target
                        .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
                        .map(|area| area.value())
                });
            if let Some(value) = value {
                draft.dispatch(ContactAction::Edit(field, value));
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if draft.is_submitting() {
                return;
            }
            let payload = match draft.prepare() {
                Ok(payload) => payload,
                Err(e) => {
                    draft.dispatch(ContactAction::Rejected(e));
                    return;
                }
            };
            draft.dispatch(ContactAction::Submitting);
            let dispatcher = draft.dispatcher();
            let reset_captcha = reset_captcha.clone();
            spawn_local(async move {
                let result = submit_contact(config::get_form_endpoint(), &payload).await;
                match &result {
                    Ok(()) => log::info!("Contact request delivered"),
                    Err(e) => log::error!("Contact request failed: {:?}", e),
                }
                reset_captcha.emit(());
                dispatcher.dispatch(ContactAction::Finished(result));
            });
        })
    };

    let submitting = draft.is_submitting();

    html! {
        <div class="contact-card">
            <h2>{"Richiedi una Consulenza Gratuita"}</h2>
            <p class="contact-card-subtitle">
                {"Compila il form e ti risponderò entro 24 ore. Tutti i campi sono obbligatori."}
            </p>
            <form class="contact-form" {onsubmit} novalidate=true>
                <div class="form-group">
                    <label for="name">{"Nome e Cognome *"}</label>
                    <input id="name" type="text" name="name" placeholder="Mario Rossi"
                        value={draft.fields.name.clone()} oninput={edit(Field::Name)} required=true />
                </div>
                <div class="form-group">
                    <label for="email">{"Email *"}</label>
                    <input id="email" type="email" name="email" placeholder="mario.rossi@example.com"
                        value={draft.fields.email.clone()} oninput={edit(Field::Email)} required=true />
                </div>
                <div class="form-group">
                    <label for="phone">{"Telefono *"}</label>
                    <input id="phone" type="tel" name="phone" placeholder="+39 xxx xxxxxxx"
                        value={draft.fields.phone.clone()} oninput={edit(Field::Phone)} required=true />
                </div>
                <div class="form-group">
                    <label for="message">{"Messaggio *"}</label>
                    <textarea id="message" name="message" rows="5"
                        placeholder="Raccontami i tuoi obiettivi e come posso aiutarti..."
                        value={draft.fields.message.clone()} oninput={edit(Field::Message)} required=true />
                </div>

                if site_key.is_some() {
                    <div class="captcha-container" ref={captcha_ref}></div>
                }

                {
                    match &draft.status {
                        FormStatus::Success(message) => html! {
                            <div class="form-status success">{message}</div>
                        },
                        FormStatus::Error(message) => html! {
                            <div class="form-status error">{message}</div>
                        },
                        _ => html! {},
                    }
                }

                <button type="submit" class="submit-button" disabled={site_key.is_none() || submitting}>
                    { if submitting { "Invio in corso..." } else { "Invia Messaggio" } }
                </button>

                if site_key.is_none() {
                    <p class="form-warning">
                        {"⚠️ Configurare BST_HCAPTCHA_SITE_KEY per abilitare il form"}
                    </p>
                }
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Mario Rossi".to_string(),
            email: "mario.rossi@example.com".to_string(),
            phone: "+39 333 1234567".to_string(),
            message: "Vorrei tornare in forma.".to_string(),
        }
    }

    fn draft_with(token: Option<&str>) -> Rc<ContactDraft> {
        Rc::new(ContactDraft {
            fields: filled(),
            token: token.map(str::to_string),
            status: FormStatus::Idle,
        })
    }

    #[test]
    fn test_missing_token_blocks_before_fields() {
        assert_eq!(prepare_submission(&ContactFields::default(), None), Err(ContactError::MissingToken));
        assert_eq!(prepare_submission(&filled(), Some("   ")), Err(ContactError::MissingToken));
    }

    #[test]
    fn test_required_fields_in_order() {
        let mut fields = filled();
        fields.phone.clear();
        assert_eq!(prepare_submission(&fields, Some("tok")), Err(ContactError::MissingField("telefono")));
        fields.name = "  ".to_string();
        assert_eq!(prepare_submission(&fields, Some("tok")), Err(ContactError::MissingField("nome")));
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@b.it"));
        assert!(!looks_like_email("ab.it"));
        assert!(!looks_like_email("@b.it"));
        assert!(!looks_like_email("a@it"));
        assert!(!looks_like_email("a@.it"));
        assert!(!looks_like_email("a b@c.it"));
    }

    #[test]
    fn test_payload_carries_relay_fields() {
        let payload = prepare_submission(&filled(), Some("captcha-token")).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["h-captcha-response"], "captcha-token");
        assert_eq!(json["_subject"], MAIL_SUBJECT);
        assert_eq!(json["_template"], "table");
        assert_eq!(json["_captcha"], "false");
        assert_eq!(json["name"], "Mario Rossi");
    }

    #[test]
    fn test_submission_without_token_shows_error_and_keeps_fields() {
        let draft = draft_with(None);
        let err = draft.prepare().unwrap_err();
        let draft = draft.reduce(ContactAction::Rejected(err));

        assert_eq!(draft.status, FormStatus::Error("Completa la verifica anti-bot.".to_string()));
        assert_eq!(draft.fields, filled());
    }

    #[test]
    fn test_successful_submission_clears_fields_and_token() {
        let draft = draft_with(Some("tok"));
        assert!(draft.prepare().is_ok());
        let draft = draft.reduce(ContactAction::Submitting);
        assert!(draft.is_submitting());

        let draft = draft.reduce(ContactAction::Finished(Ok(())));
        assert_eq!(draft.status, FormStatus::Success(SUCCESS_MESSAGE.to_string()));
        assert_eq!(draft.fields, ContactFields::default());
        assert_eq!(draft.token, None);
    }

    #[test]
    fn test_failed_submission_keeps_fields_and_drops_token() {
        let draft = draft_with(Some("tok"))
            .reduce(ContactAction::Submitting)
            .reduce(ContactAction::Finished(Err(ContactError::Status(500))));

        assert_eq!(draft.fields, filled());
        assert_eq!(draft.token, None);
        match &draft.status {
            FormStatus::Error(message) => {
                assert!(message.contains("500"));
                assert!(message.contains(RETRY_HINT));
            }
            other => panic!("unexpected status {:?}", other),
        }
        assert_eq!(draft.prepare(), Err(ContactError::MissingToken));
    }

    #[test]
    fn test_expired_token_is_dropped() {
        let draft = draft_with(None)
            .reduce(ContactAction::Verified("tok".to_string()))
            .reduce(ContactAction::Edit(Field::Message, "Ciao".to_string()));
        assert_eq!(draft.token.as_deref(), Some("tok"));
        assert_eq!(draft.fields.message, "Ciao");

        let draft = draft.reduce(ContactAction::Expired);
        assert_eq!(draft.token, None);
    }

    struct RecordingApi {
        log: Rc<RefCell<Vec<String>>>,
    }

    impl CaptchaApi for RecordingApi {
        type Id = u32;
        type Callbacks = HeldCallbacks;

        fn reset(&self, id: &u32) {
            self.log.borrow_mut().push(format!("reset {}", id));
        }
        fn remove(&self, id: &u32) {
            self.log.borrow_mut().push(format!("remove {}", id));
        }
    }

    struct HeldCallbacks(Rc<RefCell<Vec<String>>>);

    impl Drop for HeldCallbacks {
        fn drop(&mut self) {
            self.0.borrow_mut().push("callbacks freed".to_string());
        }
    }

    #[test]
    fn test_widget_is_removed_before_callbacks_are_freed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let widget = CaptchaWidget {
            api: RecordingApi { log: log.clone() },
            id: 7,
            _callbacks: HeldCallbacks(log.clone()),
        };
        widget.reset();
        drop(widget);

        assert_eq!(*log.borrow(), vec!["reset 7", "remove 7", "callbacks freed"]);
    }

    #[test]
    fn test_poll_stops_once_rendered() {
        let mut poll = RenderPoll::default();
        assert_eq!(poll.next(false), PollStep::Try { last: false });
        assert_eq!(poll.next(true), PollStep::Stop);
        assert_eq!(poll.attempts, 1);
    }

    #[test]
    fn test_poll_budget_is_spent_after_max_attempts() {
        let mut poll = RenderPoll::default();
        let steps: Vec<PollStep> = (0..CAPTCHA_MAX_ATTEMPTS).map(|_| poll.next(false)).collect();

        assert!(steps[..steps.len() - 1].iter().all(|s| *s == PollStep::Try { last: false }));
        assert_eq!(steps.last(), Some(&PollStep::Try { last: true }));
        assert_eq!(poll.next(false), PollStep::Stop);
    }
}
