use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Browsers report the crossing entry at roughly the threshold, sometimes
/// a hair below it.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-way visibility flag. Scrolling an element out of view again does not
/// replay its entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), visible: false }
    }

    /// Feeds one intersection reading and returns the latched state.
    pub fn observe(&mut self, ratio: f64, is_intersecting: bool) -> bool {
        if !self.visible && is_intersecting && ratio + RATIO_TOLERANCE >= self.threshold {
            self.visible = true;
        }
        self.visible
    }
}

/// Owns an `IntersectionObserver` watching a single element.
pub struct IntersectionSubscription {
    observer: Option<IntersectionObserver>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionSubscription {
    /// `on_entry` gets `(ratio, is_intersecting)` and returns whether to keep
    /// observing.
    pub fn start<F>(element: &Element, threshold: f64, root_margin: &str, mut on_entry: F) -> Option<Self>
    where
        F: FnMut(f64, bool) -> bool + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !on_entry(entry.intersection_ratio(), entry.is_intersecting()) {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&threshold.into());
        init.set_root_margin(root_margin);

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(element);

        Some(Self { observer: Some(observer), _callback: callback })
    }

    pub fn stop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: AttrValue,
    /// When false no observer is created and the flag stays false.
    pub enabled: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: AttrValue::from("0px"),
            enabled: true,
        }
    }
}

/// Returns a ref to attach to the element and whether it has been seen.
/// If the ref never resolves to an element the flag simply stays false.
#[hook]
pub fn use_reveal(options: RevealOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |options: &RevealOptions| {
                let mut subscription = None;
                if options.enabled && !*visible {
                    if let Some(element) = node.cast::<Element>() {
                        let mut latch = VisibilityLatch::new(options.threshold);
                        subscription = IntersectionSubscription::start(
                            &element,
                            options.threshold,
                            &options.root_margin,
                            move |ratio, intersecting| {
                                if latch.observe(ratio, intersecting) {
                                    visible.set(true);
                                    return false;
                                }
                                true
                            },
                        );
                    }
                }
                move || drop(subscription)
            },
            options,
        );
    }

    (node, *visible)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0 };

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    FadeIn,
    #[default]
    FadeInUp,
    FadeInLeft,
    FadeInRight,
    Scale,
}

impl Animation {
    /// `(hidden, visible)` states for the entrance.
    pub fn transforms(self) -> (Transform, Transform) {
        let hidden = Transform { opacity: 0.0, ..Transform::IDENTITY };
        let hidden = match self {
            Animation::FadeIn => hidden,
            Animation::FadeInUp => Transform { y: 60.0, ..hidden },
            Animation::FadeInLeft => Transform { x: -60.0, ..hidden },
            Animation::FadeInRight => Transform { x: 60.0, ..hidden },
            Animation::Scale => Transform { scale: 0.8, ..hidden },
        };
        (hidden, Transform::IDENTITY)
    }
}

const REVEAL_EASE: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

pub fn reveal_style(animation: Animation, visible: bool, delay_s: f64) -> String {
    let (hidden, shown) = animation.transforms();
    let state = if visible { shown } else { hidden };
    format!(
        "{} transition: opacity 0.6s {ease} {delay}s, transform 0.6s {ease} {delay}s; will-change: opacity, transform;",
        state.to_css(),
        ease = REVEAL_EASE,
        delay = delay_s,
    )
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub animation: Animation,
    #[prop_or(0.0)]
    pub delay: f64,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let (node, visible) = use_reveal(RevealOptions::default());
    let style = reveal_style(props.animation, visible, props.delay);

    html! {
        <div ref={node} class={props.class.clone()} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_flips_at_threshold() {
        let mut latch = VisibilityLatch::new(0.1);
        assert!(!latch.observe(0.05, true));
        assert!(!latch.observe(0.5, false));
        assert!(latch.observe(0.1, true));
    }

    #[test]
    fn test_latch_accepts_crossing_reported_just_below_threshold() {
        let mut latch = VisibilityLatch::new(DEFAULT_THRESHOLD);
        assert!(latch.observe(0.099_999_9, true));

        let mut strict = VisibilityLatch::new(0.3);
        assert!(!strict.observe(0.29, true));
    }

    #[test]
    fn test_latch_never_reverts() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(latch.observe(0.8, true));
        assert!(latch.observe(0.0, false));
        assert!(latch.observe(0.1, true));
    }

    #[test]
    fn test_unobserved_latch_stays_hidden() {
        let mut latch = VisibilityLatch::new(DEFAULT_THRESHOLD);
        assert!(!latch.observe(0.0, false));
    }

    #[test]
    fn test_animation_pairs_end_at_identity() {
        for animation in [
            Animation::FadeIn,
            Animation::FadeInUp,
            Animation::FadeInLeft,
            Animation::FadeInRight,
            Animation::Scale,
        ] {
            let (hidden, visible) = animation.transforms();
            assert_eq!(hidden.opacity, 0.0);
            assert_eq!(visible, Transform::IDENTITY);
        }
        assert_eq!(Animation::FadeInLeft.transforms().0.x, -60.0);
        assert_eq!(Animation::FadeInUp.transforms().0.y, 60.0);
        assert_eq!(Animation::Scale.transforms().0.scale, 0.8);
    }

    #[test]
    fn test_reveal_style_switches_state() {
        let hidden = reveal_style(Animation::FadeInUp, false, 0.2);
        assert!(hidden.starts_with("opacity: 0; transform: translate3d(0px, 60px, 0) scale(1);"));
        assert!(hidden.contains("0.2s"));

        let shown = reveal_style(Animation::FadeInUp, true, 0.0);
        assert!(shown.starts_with("opacity: 1; transform: translate3d(0px, 0px, 0) scale(1);"));
    }
}
