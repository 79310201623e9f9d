//! Leptos component wrapping the word graph canvas.
//!
//! The component creates an HTML canvas element and wires up mouse/wheel event
//! handlers for selecting, dragging, panning and zooming. An animation loop
//! runs via `requestAnimationFrame`, easing nodes toward their layout and
//! redrawing every frame. Graph data, layout, selection and reset requests
//! arrive through signals.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::layout::LayoutKind;
use super::render;
use super::scale::ScaleConfig;
use super::state::WordGraphState;
use super::style::GraphStyle;
use super::types::{Selection, SelectionOrigin};
use crate::config::ViewerConfig;
use crate::vocab::WordGraph;

/// Bundles view state with visual configuration.
struct GraphContext {
	state: WordGraphState,
	scale: ScaleConfig,
	style: GraphStyle,
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Mouse position relative to the canvas.
fn local_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders the vocabulary graph on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and follow window resizes.
/// Clicking a node writes it into `selection`; changes of `selection`
/// from elsewhere are shown, and search hits are centered. Every change of
/// `reset` re-runs the initial placement and the force layout.
#[component]
pub fn WordGraphCanvas(
	#[prop(into)] data: Signal<WordGraph>,
	#[prop(into)] layout: Signal<LayoutKind>,
	selection: RwSignal<Option<Selection>>,
	#[prop(into)] reset: Signal<u32>,
	config: ViewerConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("lexikon-graph: no window, graph not started");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			error!("lexikon-graph: canvas has no 2d context");
			return;
		};

		let style = GraphStyle::by_name(&config.style).unwrap_or_default();
		let mut state = WordGraphState::new(
			data.get_untracked(),
			layout.get_untracked(),
			w,
			h,
			&style,
			config.layout.clone(),
			config.highlight_seconds,
		);
		if let Some(sel) = selection.get_untracked() {
			state.select(Some(&sel.id));
		}
		*context_init.borrow_mut() = Some(GraphContext {
			state,
			scale: ScaleConfig::default(),
			style,
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.state.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick(0.016);
				render::render(&c.state, &ctx, &c.scale, &c.style);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_data = context.clone();
	Effect::new(move |_| {
		let graph = data.get();
		// every load rebuilds placement, even when the same theme comes back
		if let Some(ref mut c) = *context_data.borrow_mut() {
			debug!("lexikon-graph: showing {} words", graph.nodes.len());
			c.state.set_graph(graph, &c.style);
		}
	});

	let context_layout = context.clone();
	Effect::new(move |_| {
		let kind = layout.get();
		if let Some(ref mut c) = *context_layout.borrow_mut() {
			if c.state.layout != kind {
				c.state.set_layout(kind);
			}
		}
	});

	let context_reset = context.clone();
	Effect::new(move |prev: Option<u32>| {
		let generation = reset.get();
		if prev.is_some_and(|p| p != generation) {
			if let Some(ref mut c) = *context_reset.borrow_mut() {
				c.state.reset();
			}
		}
		generation
	});

	let context_sel = context.clone();
	Effect::new(move |_| {
		let current = selection.get();
		if let Some(ref mut c) = *context_sel.borrow_mut() {
			let idx = c.state.select(current.as_ref().map(|s| s.id.as_str()));
			if let (Some(idx), Some(Selection { origin: SelectionOrigin::Search, .. })) =
				(idx, &current)
			{
				c.state.center_on(idx);
			}
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.state.pointer_down(x, y, &c.scale);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.pointer_move(x, y, &c.scale);
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		let clicked = match *context_mu.borrow_mut() {
			Some(ref mut c) => c.state.pointer_up(),
			None => None,
		};
		if let Some(id) = clicked {
			selection.set(Some(Selection::new(id, SelectionOrigin::Canvas)));
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.pointer_leave();
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_wh.borrow_mut() {
			c.state.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="word-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
