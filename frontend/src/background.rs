use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};
use yew::prelude::*;

use crate::counter::FrameLoop;
use crate::scroll::WindowListener;

const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub frequency: f64,
    pub density: f64,
    pub strength: f64,
    pub brightness: f64,
    pub speed: f64,
    pub rotation: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            frequency: 5.5,
            density: 0.9,
            strength: 1.7,
            brightness: 1.1,
            speed: 0.1,
            rotation: 235.0 * PI / 180.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// The colour as it lands on the black backdrop.
    pub fn over_black(&self) -> [u8; 4] {
        let blend = |c: u8| (f64::from(c) * self.a).round() as u8;
        [blend(self.r), blend(self.g), blend(self.b), 255]
    }
}

impl WaveParams {
    /// Colour of the wave field at normalised coordinates `(nx, ny)` in `[0, 1]`.
    pub fn color_at(&self, nx: f64, ny: f64, time: f64) -> Rgba {
        let (sin, cos) = self.rotation.sin_cos();
        let (cx, cy) = (nx - 0.5, ny - 0.5);
        let x = cx * cos - cy * sin + 0.5;
        let y = cx * sin + cy * cos + 0.5;

        let f = self.frequency;
        let wave1 = (x * f + time * 10.0).sin() * (y * f + time * 8.0).cos();
        let wave2 = ((x + y) * f * 0.5 + time * 6.0).sin() * self.strength * 0.1;
        let wave3 = (x * f * 0.8 - time * 5.0).cos() * (y * f * 0.8).sin();
        let value = (wave1 + wave2 + wave3) * self.density * 0.3;

        let (r, g, b, a) = if value > 0.3 {
            (86.0 + value * 100.0, 6.0 + value * 50.0, 255.0, (value * 1.5 + 0.3).min(1.0))
        } else if value > -0.1 {
            (254.0, 137.0 + value * 100.0, 137.0 + value * 100.0, (value.abs() * 1.2 + 0.25).min(1.0))
        } else {
            (0.0, 0.0, 0.0, 0.08)
        };

        let channel = |c: f64| (c * self.brightness).clamp(0.0, 255.0).floor() as u8;
        Rgba { r: channel(r), g: channel(g), b: channel(b), a }
    }
}

/// Low resolution RGBA buffer; the canvas CSS stretches and blurs it.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveSurface {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl WaveSurface {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self { width, height, pixels: vec![0; (width * height * 4) as usize] }
    }

    pub fn render(&mut self, params: &WaveParams, time: f64) {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        for (i, px) in self.pixels.chunks_exact_mut(4).enumerate() {
            let x = (i as u32 % self.width) as f64;
            let y = (i as u32 / self.width) as f64;
            px.copy_from_slice(&params.color_at(x / w, y / h, time).over_black());
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

fn is_mobile_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map_or(false, |width| width < MOBILE_BREAKPOINT)
}

fn fit_canvas(canvas: &HtmlCanvasElement, step: u32) -> WaveSurface {
    let rect = canvas.get_bounding_client_rect();
    let width = (rect.width() / f64::from(step)).ceil() as u32;
    let height = (rect.height() / f64::from(step)).ceil() as u32;
    let surface = WaveSurface::new(width, height);
    canvas.set_width(surface.width);
    canvas.set_height(surface.height);
    surface
}

fn paint(ctx: &CanvasRenderingContext2d, surface: &WaveSurface) {
    let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(surface.pixels()), surface.width, surface.height);
    match image {
        Ok(image) => {
            let _ = ctx.put_image_data(&image, 0.0, 0.0);
        }
        Err(e) => log::warn!("Could not build background frame: {:?}", e),
    }
}

#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let canvas_ref = use_node_ref();
    let is_mobile = use_state_eq(is_mobile_viewport);

    {
        let is_mobile = is_mobile.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::attach("resize", move || is_mobile.set(is_mobile_viewport()));
                move || drop(listener)
            },
            (),
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |&mobile: &bool| {
                let mut frames = None;
                let mut resize = None;

                let ctx = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let ctx = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())?;
                    Some((canvas, ctx))
                });

                if let Some((canvas, ctx)) = ctx {
                    let step = if mobile { 3 } else { 2 };
                    let params = WaveParams::default();
                    let surface = Rc::new(RefCell::new(fit_canvas(&canvas, step)));

                    resize = {
                        let surface = surface.clone();
                        WindowListener::attach("resize", move || {
                            *surface.borrow_mut() = fit_canvas(&canvas, step);
                        })
                    };

                    let mut time = 0.0;
                    frames = FrameLoop::start(move |_| {
                        time += params.speed * 0.01;
                        let mut surface = surface.borrow_mut();
                        surface.render(&params, time);
                        paint(&ctx, &surface);
                        true
                    });
                }

                move || {
                    drop(frames);
                    drop(resize);
                }
            },
            *is_mobile,
        );
    }

    let blur = if *is_mobile { "6px" } else { "10px" };

    html! {
        <canvas
            ref={canvas_ref}
            class="animated-background"
            style={format!("filter: blur({}); opacity: 0.7;", blur)}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_stay_in_palette() {
        let params = WaveParams::default();
        for i in 0..20 {
            for j in 0..20 {
                let c = params.color_at(f64::from(i) / 20.0, f64::from(j) / 20.0, 0.37);
                assert!(c.a > 0.0 && c.a <= 1.0);
                let black = c.r == 0 && c.g == 0 && c.b == 0 && c.a == 0.08;
                let pink = c.r == 255;
                let purple = c.b == 255;
                assert!(black || pink || purple, "unexpected colour {:?}", c);
            }
        }
    }

    #[test]
    fn test_over_black_scales_by_alpha() {
        let c = Rgba { r: 200, g: 100, b: 50, a: 0.5 };
        assert_eq!(c.over_black(), [100, 50, 25, 255]);
    }

    #[test]
    fn test_surface_fills_every_pixel() {
        let mut surface = WaveSurface::new(8, 5);
        surface.render(&WaveParams::default(), 1.0);
        assert_eq!(surface.pixels().len(), 8 * 5 * 4);
        assert!(surface.pixels().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_surface_never_empty() {
        let surface = WaveSurface::new(0, 0);
        assert_eq!((surface.width, surface.height), (1, 1));
    }
}
