use std::f64::consts::TAU;

use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, utils::Pausable};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::scene::{bodies::Pointer, DrawList, Scene};

struct Painter {
    scene: Scene,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    started_at: Option<f64>,
}

impl Painter {
    fn attach(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            scene: Scene::default(),
            canvas,
            ctx,
            started_at: None,
        })
    }

    fn fit(&self) -> (f64, f64) {
        let width = self.canvas.client_width().max(1) as u32;
        let height = self.canvas.client_height().max(1) as u32;
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        (width as f64, height as f64)
    }

    fn frame(&mut self, timestamp: f64, pointer: Pointer) {
        let started_at = *self.started_at.get_or_insert(timestamp);
        let t = ((timestamp - started_at) / 1000.0) as f32;
        let (width, height) = self.fit();
        let list = self.scene.frame(t, pointer, width as f32, height as f32);
        paint(&self.ctx, &list, width, height);
    }
}

fn paint(ctx: &CanvasRenderingContext2d, list: &DrawList, width: f64, height: f64) {
    let _ = ctx.set_global_composite_operation("source-over");
    ctx.set_global_alpha(1.0);
    ctx.clear_rect(0.0, 0.0, width, height);
    let _ = ctx.set_global_composite_operation("lighter");

    ctx.set_line_width(1.0);
    for mesh in &list.meshes {
        ctx.set_stroke_style_str(mesh.color);
        ctx.set_global_alpha(mesh.alpha as f64);
        ctx.begin_path();
        for [(x1, y1), (x2, y2)] in &mesh.segments {
            ctx.move_to(*x1 as f64, *y1 as f64);
            ctx.line_to(*x2 as f64, *y2 as f64);
        }
        ctx.stroke();
    }

    for sprite in &list.particles {
        let size = sprite.size as f64;
        ctx.set_fill_style_str(sprite.color);
        ctx.set_global_alpha(sprite.alpha as f64);
        ctx.fill_rect(
            sprite.x as f64 - size / 2.0,
            sprite.y as f64 - size / 2.0,
            size,
            size,
        );
    }

    for bead in &list.beads {
        ctx.set_fill_style_str(bead.color);
        ctx.set_global_alpha(bead.alpha as f64);
        ctx.begin_path();
        if ctx
            .arc(bead.x as f64, bead.y as f64, bead.size as f64, 0.0, TAU)
            .is_ok()
        {
            ctx.fill();
        }
    }
}

fn viewport_extent(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(1.0)
}

/// Animated particle field and wireframe solids behind the hero.
///
/// Without a 2D context the canvas is dropped and the hero renders plain.
#[component]
pub fn SceneBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let painter = StoredValue::new_local(None::<Painter>);
    let available = RwSignal::new(true);
    let pointer = StoredValue::new(Pointer::CENTER);

    let Pausable { pause, .. } = use_raf_fn(move |args| {
        painter.update_value(|p| {
            if let Some(p) = p {
                p.frame(args.timestamp, pointer.get_value());
            }
        });
    });

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match Painter::attach(canvas) {
            Some(p) => painter.set_value(Some(p)),
            None => {
                log::info!("2D canvas unavailable, background omitted");
                pause();
                available.set(false);
            }
        }
    });

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        let win = window();
        pointer.set_value(Pointer::from_client(
            e.client_x() as f64,
            e.client_y() as f64,
            viewport_extent(win.inner_width()),
            viewport_extent(win.inner_height()),
        ));
    });

    view! {
        <Show when=move || available.get()>
            <canvas
                node_ref=canvas_ref
                class="absolute inset-0 w-full h-full pointer-events-none"
                aria-hidden="true"
            ></canvas>
        </Show>
    }
}
