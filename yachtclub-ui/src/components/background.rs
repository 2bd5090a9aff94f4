//! Background Component
//!
//! Animated sea and sky drawn on a full-window canvas. The render loop starts
//! once the loading overlay has been removed and advances the scene clock by
//! one frame step per animation frame.

use leptos::*;
use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::scene::{hex_color, mix_color, Scene, SceneConfig};
use crate::state::use_page_state;

const WAVE_BANDS: usize = 14;

#[component]
pub fn Background() -> impl IntoView {
    let page = use_page_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let running = Rc::new(Cell::new(false));
    let viewport = create_rw_signal(window_size());

    {
        let running = Rc::clone(&running);
        create_effect(move |_| {
            if !page.scene_started.get() || running.get() {
                return;
            }
            if let Some(canvas) = canvas_ref.get() {
                running.set(true);
                start((*canvas).clone(), viewport, Rc::clone(&running));
            }
        });
    }

    let resize = window_event_listener(ev::resize, move |_| viewport.set(window_size()));
    on_cleanup(move || {
        resize.remove();
        running.set(false);
    });

    view! {
        <div id="ocean-background" class="ocean-background" aria-hidden="true">
            <canvas node_ref=canvas_ref />
        </div>
    }
}

fn window_size() -> (f64, f64) {
    web_sys::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            (width, height)
        })
        .unwrap_or((1.0, 1.0))
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn start(canvas: HtmlCanvasElement, viewport: RwSignal<(f64, f64)>, running: Rc<Cell<bool>>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => {
            web_sys::console::error_1(&"2D canvas context unavailable".into());
            return;
        }
    };

    let (width, height) = viewport.get_untracked();
    fit_canvas(&canvas, width, height);
    let scene = Rc::new(RefCell::new(Scene::new(SceneConfig::default(), width, height)));

    frame(Renderer { canvas, ctx, viewport, scene, running });
}

struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: RwSignal<(f64, f64)>,
    scene: Rc<RefCell<Scene>>,
    running: Rc<Cell<bool>>,
}

fn frame(renderer: Renderer) {
    if !renderer.running.get() {
        return;
    }
    {
        let mut scene = renderer.scene.borrow_mut();
        if let Some((width, height)) = renderer.viewport.try_get_untracked() {
            if (width, height) != (scene.width, scene.height) {
                fit_canvas(&renderer.canvas, width, height);
                scene.resize(width, height);
            }
        }
        scene.tick();
        draw(&renderer.ctx, &scene);
    }
    request_animation_frame(move || frame(renderer));
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene) {
    let width = scene.width;
    let height = scene.height;
    let horizon = scene.horizon_ratio() * height;

    // Sky
    let sky = ctx.create_linear_gradient(0.0, 0.0, 0.0, horizon);
    report(sky.add_color_stop(0.0, &hex_color(scene.zenith_color())));
    report(sky.add_color_stop(1.0, &hex_color(scene.horizon_color())));
    ctx.set_fill_style_canvas_gradient(&sky);
    ctx.fill_rect(0.0, 0.0, width, horizon);

    // Sun
    let (sun_x, sun_y) = scene.sun_screen_position();
    let sun = hex_color(scene.config.sun_color);
    ctx.set_fill_style_str(&sun);
    ctx.begin_path();
    report(ctx.arc(sun_x, sun_y, height * 0.03, 0.0, 2.0 * PI));
    ctx.fill();

    // Water
    let water = scene.config.water_color;
    let sea = ctx.create_linear_gradient(0.0, horizon, 0.0, height);
    let shallows = mix_color(water, scene.horizon_color(), 0.35);
    report(sea.add_color_stop(0.0, &hex_color(shallows)));
    report(sea.add_color_stop(1.0, &hex_color(water)));
    ctx.set_fill_style_canvas_gradient(&sea);
    ctx.fill_rect(0.0, horizon, width, height - horizon);

    // Wave bands, closer together near the horizon
    ctx.set_line_width(1.5);
    for band in 0..WAVE_BANDS {
        let depth = (band as f64 + 1.0) / WAVE_BANDS as f64;
        let y = horizon + (height - horizon) * depth * depth;
        let shade = mix_color(water, 0x6fa8c8, 0.5 - depth * 0.35);
        ctx.set_stroke_style_str(&hex_color(shade));
        ctx.begin_path();
        ctx.move_to(0.0, y + scene.wave_offset(band, 0.0));
        let mut x = 0.0;
        while x <= width {
            ctx.line_to(x, y + scene.wave_offset(band, x));
            x += 12.0;
        }
        ctx.stroke();
    }

    // Sun glint on the water below the sun
    let glint = mix_color(scene.config.sun_color, 0xffffff, 0.4);
    ctx.set_fill_style_str(&hex_color(glint));
    for band in 0..WAVE_BANDS {
        let depth = (band as f64 + 1.0) / WAVE_BANDS as f64;
        let y = horizon + (height - horizon) * depth * depth;
        let spread = 6.0 + depth * 40.0;
        let shimmer = (scene.time * 2.0 + band as f64).sin() * spread * 0.5;
        let x = sun_x - spread / 2.0 + shimmer;
        ctx.fill_rect(x, y + scene.wave_offset(band, sun_x), spread, 1.5);
    }
}
