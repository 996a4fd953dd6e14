use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::reveal::{use_reveal, RevealOptions};

pub const DEFAULT_DURATION_MS: f64 = 2000.0;
const START_ON_VIEW_THRESHOLD: f64 = 0.3;

pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub target: u32,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self { target, duration_ms }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Displayed value `elapsed_ms` after the start. The last frame lands on
    /// `target` exactly instead of trusting the float curve.
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if self.is_finished(elapsed_ms) {
            return self.target;
        }
        let progress = (elapsed_ms.max(0.0) / self.duration_ms).min(1.0);
        let value = (ease_out_expo(progress) * f64::from(self.target)).floor();
        (value as u32).min(self.target)
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` loop. The callback gets the frame timestamp and
/// returns whether another frame is wanted. Dropping the loop cancels the
/// pending frame.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window()?;
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let frame = {
            let window = window.clone();
            let pending = pending.clone();
            let callback = callback.clone();
            Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                pending.set(None);
                if !on_frame(timestamp) {
                    return;
                }
                if let Some(next) = callback.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
                    }
                }
            })
        };

        let id = window.request_animation_frame(frame.as_ref().unchecked_ref()).ok()?;
        pending.set(Some(id));
        *callback.borrow_mut() = Some(frame);

        Some(Self { pending, callback })
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> Rc cycle
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Counts from 0 up to `end`. With `start_on_view` the count waits until
/// 30% of the element is on screen, otherwise it starts on mount.
#[hook]
pub fn use_counter(end: u32, duration_ms: f64, start_on_view: bool) -> (NodeRef, u32) {
    let (node, seen) = use_reveal(RevealOptions {
        threshold: START_ON_VIEW_THRESHOLD,
        enabled: start_on_view,
        ..RevealOptions::default()
    });
    let count = use_state_eq(|| 0u32);
    let active = !start_on_view || seen;

    {
        let count = count.clone();
        use_effect_with_deps(
            move |&(active, end, duration_ms): &(bool, u32, f64)| {
                let mut frames = None;
                if active {
                    let animation = CounterAnimation::new(end, duration_ms);
                    let mut started_at: Option<f64> = None;
                    frames = FrameLoop::start(move |now| {
                        let start = *started_at.get_or_insert(now);
                        let elapsed = now - start;
                        count.set(animation.value_at(elapsed));
                        !animation.is_finished(elapsed)
                    });
                }
                move || drop(frames)
            },
            (active, end, duration_ms),
        );
    }

    (node, *count)
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub end: u32,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration_ms: f64,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let (node, count) = use_counter(props.end, props.duration_ms, true);

    html! {
        <div ref={node} class="stat-counter">
            <div class="stat-value">{count}{&props.suffix}</div>
            <div class="stat-label">{&props.label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_bounds() {
        let counter = CounterAnimation::new(200, 2000.0);
        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.value_at(2000.0), 200);
        assert_eq!(counter.value_at(5000.0), 200);
        assert_eq!(counter.value_at(-50.0), 0);
    }

    #[test]
    fn test_counter_follows_ease_out_expo() {
        let counter = CounterAnimation::new(200, 2000.0);
        // 1 - 2^-5 = 0.96875
        assert_eq!(counter.value_at(1000.0), 193);
        assert!(counter.value_at(1999.0) < 200);
    }

    #[test]
    fn test_counter_is_non_decreasing() {
        let counter = CounterAnimation::new(200, 2000.0);
        let mut last = 0;
        for step in 0..=240 {
            let value = counter.value_at(f64::from(step) * 10.0);
            assert!(value >= last, "dropped from {} to {} at step {}", last, value, step);
            assert!(value <= 200);
            last = value;
        }
        assert_eq!(last, 200);
    }

    #[test]
    fn test_zero_target_stays_zero() {
        for duration in [0.0, 1.0, 2000.0] {
            let counter = CounterAnimation::new(0, duration);
            for elapsed in [0.0, 500.0, 2000.0, 10_000.0] {
                assert_eq!(counter.value_at(elapsed), 0);
            }
        }
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let counter = CounterAnimation::new(42, 0.0);
        assert_eq!(counter.value_at(0.0), 42);
        assert!(counter.is_finished(0.0));
    }

    #[test]
    fn test_ease_out_expo_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.5);
    }
}
