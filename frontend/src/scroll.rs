use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;
use gloo_timers::callback::Timeout;

pub const HEADER_SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThreshold(pub f64);

impl ScrollThreshold {
    pub fn is_past(&self, scroll_y: f64) -> bool {
        scroll_y > self.0
    }
}

/// An event listener on `window`, removed again on `detach` or drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
    attached: bool,
}

impl WindowListener {
    pub fn attach<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("Could not listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self { event, callback, attached: true })
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        self.detach();
    }
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Scroll listener reporting whether the page is past `threshold`,
/// re-evaluated on every scroll event.
pub struct ScrollSubscription {
    listener: Option<WindowListener>,
}

impl ScrollSubscription {
    pub fn start<F>(threshold: ScrollThreshold, mut on_change: F) -> Self
    where
        F: FnMut(bool) + 'static,
    {
        on_change(threshold.is_past(current_scroll_y()));
        let listener = WindowListener::attach("scroll", move || {
            on_change(threshold.is_past(current_scroll_y()));
        });
        Self { listener }
    }

    pub fn stop(&mut self) {
        if let Some(mut listener) = self.listener.take() {
            listener.detach();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.stop();
    }
}

#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |threshold: &f64| {
                let subscription = ScrollSubscription::start(ScrollThreshold(*threshold), move |past| {
                    is_scrolled.set(past);
                });
                move || drop(subscription)
            },
            threshold,
        );
    }

    *is_scrolled
}

fn jump_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            root.set_scroll_top(0);
        }
    }
}

fn root_style() -> Option<web_sys::CssStyleDeclaration> {
    web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|root| root.style())
}

/// Resets the scroll position whenever the route changes. Smooth scrolling
/// is switched off for the jump and restored afterwards.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let path = use_location().map(|location| location.path().to_string());

    use_effect_with_deps(
        move |_| {
            let style = root_style();
            let original = style
                .as_ref()
                .and_then(|s| s.get_property_value("scroll-behavior").ok())
                .unwrap_or_default();
            if let Some(style) = &style {
                let _ = style.set_property("scroll-behavior", "auto");
            }
            jump_to_top();

            let restore = {
                let style = style.clone();
                let original = original.clone();
                move || {
                    if let Some(style) = &style {
                        let _ = style.set_property("scroll-behavior", &original);
                    }
                }
            };

            // late jump for sections that finish laying out after the first frame
            let fired = Rc::new(Cell::new(false));
            let timeout = {
                let restore = restore.clone();
                let fired = fired.clone();
                Timeout::new(100, move || {
                    fired.set(true);
                    jump_to_top();
                    restore();
                })
            };

            move || {
                drop(timeout);
                if !fired.get() {
                    restore();
                }
            }
        },
        path,
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let threshold = ScrollThreshold(HEADER_SCROLL_THRESHOLD);
        assert!(!threshold.is_past(0.0));
        assert!(!threshold.is_past(20.0));
        assert!(threshold.is_past(20.5));
        assert!(threshold.is_past(900.0));
    }

    #[test]
    fn test_threshold_falls_back_when_scrolling_up() {
        let threshold = ScrollThreshold(HEADER_SCROLL_THRESHOLD);
        let readings: Vec<bool> = [0.0, 40.0, 200.0, 10.0].iter().map(|y| threshold.is_past(*y)).collect();
        assert_eq!(readings, vec![false, true, true, false]);
    }
}
