use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, TouchEvent};
use yew::prelude::*;

use super::zoom_controls::ZoomControls;
use crate::config::ViewerSettings;
use crate::model::{Dimension, ImageFile, Point};
use crate::state::{
    Corner, Handle, ImageLayer, ImageLoadTracker, PanGesture, PinchGesture, ViewportController,
};

// Screen-pixel sizes of the selection chrome; divided by zoom for scene units.
const HANDLE_SIZE_PX: f64 = 8.0;
const HANDLE_HIT_PX: f64 = 10.0;
const ROTATE_OFFSET_PX: f64 = 30.0;
const ACCENT: &str = "#4263eb";

type DrawRef = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

/// All mutable canvas state. Event handlers are the only writers and the
/// draw closure reads it after each handler has finished.
#[derive(Default)]
struct Session {
    vp: ViewportController,
    layer: Option<ImageLayer>,
    bitmap: Option<HtmlImageElement>,
    /// Natural size of the loaded bitmap, kept until the layer can be placed.
    natural: Option<Dimension>,
    loader: ImageLoadTracker,
    pan: PanGesture,
    pinch: PinchGesture,
    hover: Option<Point>,
    cursor: &'static str,
}

#[derive(Properties, PartialEq, Clone)]
pub struct CanvasViewProps {
    pub image: Option<ImageFile>,
    pub settings: ViewerSettings,
}

fn redraw(draw_ref: &DrawRef) {
    let f = draw_ref.borrow().clone();
    if let Some(f) = f {
        f();
    }
}

fn mouse_point(e: &web_sys::MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

fn touch_point(e: &TouchEvent, index: u32) -> Option<Point> {
    e.touches()
        .item(index)
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
}

/// Pointer down at page-space `p`: handles first, then the image body,
/// otherwise the background (deselect and pan).
fn press(s: &mut Session, p: Point) {
    let scene = s.vp.screen_to_scene(p);
    let zoom = s.vp.zoom();
    if let Some(layer) = s.layer.as_mut() {
        if let Some(handle) = layer.handle_at(scene, HANDLE_HIT_PX / zoom, ROTATE_OFFSET_PX / zoom)
        {
            layer.begin_handle(handle, scene);
            return;
        }
        if layer.contains(scene) {
            layer.select();
            layer.begin_move(scene);
            return;
        }
        layer.deselect();
    }
    s.pan.begin(&mut s.vp, p);
}

fn drag(s: &mut Session, p: Point) -> bool {
    if let Some(layer) = s.layer.as_mut() {
        if layer.is_transforming() {
            return layer.update_gesture(s.vp.screen_to_scene(p));
        }
    }
    s.pan.move_to(&mut s.vp, p)
}

fn release(s: &mut Session) -> bool {
    let mut changed = false;
    if let Some(layer) = s.layer.as_mut() {
        if layer.is_transforming() {
            layer.end_gesture();
            log::debug!("image placed at {:?}", layer.placement());
            changed = true;
        }
    }
    if s.pan.is_active() {
        s.pan.end(&mut s.vp);
        changed = true;
    }
    changed
}

fn touch_start(s: &mut Session, first: Option<Point>, second: Option<Point>) {
    match (first, second) {
        (Some(a), Some(b)) => {
            release(s);
            s.pinch.begin(&s.vp, a, b);
        }
        (Some(p), None) => press(s, p),
        _ => {}
    }
}

fn touch_move(s: &mut Session, first: Option<Point>, second: Option<Point>) -> bool {
    match (first, second) {
        (Some(a), Some(b)) if s.pinch.is_active() => s.pinch.update(&mut s.vp, a, b),
        (Some(p), None) => drag(s, p),
        _ => false,
    }
}

/// `count` touches are still down, `first` being the earliest of them.
fn touch_end(s: &mut Session, count: u32, first: Option<Point>) {
    if count == 0 {
        s.pinch.end();
        release(s);
    } else if count == 1 && s.pinch.is_active() {
        // continue as a pan from the finger still down
        s.pinch.end();
        if let Some(p) = first {
            s.pan.begin(&mut s.vp, p);
        }
    }
}

fn cursor_for(s: &Session) -> &'static str {
    if s.vp.is_dragging() {
        return "grabbing";
    }
    let Some(layer) = &s.layer else {
        return "grab";
    };
    if layer.is_transforming() {
        return "move";
    }
    let Some(p) = s.hover else {
        return "grab";
    };
    let scene = s.vp.screen_to_scene(p);
    let zoom = s.vp.zoom();
    match layer.handle_at(scene, HANDLE_HIT_PX / zoom, ROTATE_OFFSET_PX / zoom) {
        Some(Handle::Rotate) => "crosshair",
        Some(Handle::Corner(Corner::TopLeft | Corner::BottomRight)) => "nwse-resize",
        Some(Handle::Corner(_)) => "nesw-resize",
        None if layer.contains(scene) => "move",
        None => "grab",
    }
}

/// The cursor to write, if it differs from the one last written.
fn cursor_change(s: &mut Session) -> Option<&'static str> {
    let cursor = cursor_for(s);
    if cursor == s.cursor {
        return None;
    }
    s.cursor = cursor;
    Some(cursor)
}

fn sync_cursor(canvas: &HtmlCanvasElement, s: &mut Session) {
    if let Some(cursor) = cursor_change(s) {
        let _ = canvas.style().set_property("cursor", cursor);
    }
}

fn clear_image(s: &mut Session) {
    s.layer = None;
    s.bitmap = None;
    s.natural = None;
}

/// Builds the layer for a loaded bitmap once the viewport has a size.
fn place_loaded(s: &mut Session) -> bool {
    if s.layer.is_some() {
        return false;
    }
    let Some(natural) = s.natural else {
        return false;
    };
    s.layer = ImageLayer::new(natural, &s.vp);
    s.layer.is_some()
}

/// Records the viewport size. Refits an image the user has not placed yet,
/// or places one that loaded while the viewport was empty.
fn apply_dimension(s: &mut Session, width: f64, height: f64) -> bool {
    if s.vp.dimension() == Dimension::new(width, height) {
        return false;
    }
    s.vp.set_dimension(width, height);
    log::debug!("viewport {width}x{height} at {:?}", s.vp.viewport_offset());
    match s.layer.as_mut() {
        Some(layer) => {
            layer.refit(&s.vp);
        }
        None => {
            if place_loaded(s) {
                log::debug!("placed image deferred until the viewport had a size");
            }
        }
    }
    true
}

fn sync_offset(canvas: &HtmlCanvasElement, s: &mut Session) {
    let rect = canvas.get_bounding_client_rect();
    s.vp.set_viewport_offset(rect.left(), rect.top());
}

/// Matches the drawing buffer to the element's box and refits an image
/// the user has not placed yet.
fn sync_geometry(canvas: &HtmlCanvasElement, s: &mut Session) {
    let rect = canvas.get_bounding_client_rect();
    s.vp.set_viewport_offset(rect.left(), rect.top());
    let width = rect.width().max(0.0);
    let height = rect.height().max(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    apply_dimension(s, width, height);
}

fn draw(canvas: &HtmlCanvasElement, s: &Session, background: &str) {
    if !canvas.is_connected() {
        return;
    }
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(c) => c,
        None => return,
    };
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_fill_style_str(background);
    ctx.fill_rect(0.0, 0.0, w, h);
    let t = s.vp.canvas_transform();
    ctx.set_transform(t.scale, 0.0, 0.0, t.scale, t.translate_x, t.translate_y)
        .ok();
    let (Some(layer), Some(img)) = (&s.layer, &s.bitmap) else {
        if let (true, Some(url)) = (s.loader.is_pending(), s.loader.current_url()) {
            ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
            ctx.set_fill_style_str("#868e96");
            ctx.set_font("14px sans-serif");
            ctx.set_text_align("center");
            ctx.fill_text(&format!("Loading {url}"), w * 0.5, h * 0.5).ok();
        }
        return;
    };
    let node = layer.node();
    let b = layer.node_box();
    ctx.save();
    ctx.translate(node.position.x, node.position.y).ok();
    ctx.rotate(node.rotation.to_radians()).ok();
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, b.width, b.height)
        .ok();
    ctx.restore();
    if !layer.selection().is_selected() {
        return;
    }
    let px = 1.0 / s.vp.zoom();
    let corners = layer.corners();
    ctx.set_stroke_style_str(ACCENT);
    ctx.set_line_width(2.0 * px);
    ctx.begin_path();
    ctx.move_to(corners[0].1.x, corners[0].1.y);
    for (_, c) in &corners[1..] {
        ctx.line_to(c.x, c.y);
    }
    ctx.close_path();
    ctx.stroke();
    // rotate knob on a stem above the top edge
    let top_mid = corners[0].1.add(corners[1].1).scale(0.5);
    let knob = layer.rotate_handle(ROTATE_OFFSET_PX * px);
    let half = HANDLE_SIZE_PX * 0.5 * px;
    ctx.set_line_width(px);
    ctx.begin_path();
    ctx.move_to(top_mid.x, top_mid.y);
    ctx.line_to(knob.x, knob.y);
    ctx.stroke();
    ctx.set_fill_style_str("white");
    ctx.begin_path();
    ctx.arc(knob.x, knob.y, half, 0.0, std::f64::consts::PI * 2.0).ok();
    ctx.fill();
    ctx.stroke();
    for (_, c) in &corners {
        ctx.fill_rect(c.x - half, c.y - half, half * 2.0, half * 2.0);
        ctx.stroke_rect(c.x - half, c.y - half, half * 2.0, half * 2.0);
    }
}

/// Wires the canvas and window listeners. Returns the teardown closure, or
/// `None` when the window or canvas is missing.
fn mount(
    canvas_ref: NodeRef,
    session: Rc<RefCell<Session>>,
    draw_ref: DrawRef,
    settings_ref: Rc<RefCell<ViewerSettings>>,
    zoom_label: UseStateHandle<f64>,
    has_image: UseStateHandle<bool>,
) -> Option<impl FnOnce()> {
    let window = web_sys::window()?;
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    sync_geometry(&canvas, &mut session.borrow_mut());
    // Draw closure
    {
        let canvas = canvas.clone();
        let session = session.clone();
        let settings_ref = settings_ref.clone();
        let draw_closure: Rc<dyn Fn()> = Rc::new(move || {
            let mut s = session.borrow_mut();
            sync_cursor(&canvas, &mut s);
            draw(&canvas, &s, &settings_ref.borrow().background);
            zoom_label.set(s.vp.zoom());
            has_image.set(s.layer.is_some());
        });
        *draw_ref.borrow_mut() = Some(draw_closure);
    }
    redraw(&draw_ref);
    // Wheel zoom
    let wheel_cb = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        let settings_ref = settings_ref.clone();
        Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
            e.prevent_default();
            let step = settings_ref.borrow().wheel_zoom_step;
            session
                .borrow_mut()
                .vp
                .wheel_zoom(mouse_point(&e), e.delta_y(), step);
            redraw(&draw_ref);
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
        .ok();
    // Mouse events
    let mousedown_cb = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            {
                let s = &mut *session.borrow_mut();
                let p = mouse_point(&e);
                s.hover = Some(p);
                if e.button() == 0 {
                    press(s, p);
                } else {
                    s.pan.begin(&mut s.vp, p);
                }
            }
            redraw(&draw_ref);
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
        .ok();
    let mousemove_cb = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let moved = {
                let s = &mut *session.borrow_mut();
                let p = mouse_point(&e);
                s.hover = Some(p);
                let moved = drag(s, p);
                if !moved {
                    sync_cursor(&canvas, s);
                }
                moved
            };
            if moved {
                redraw(&draw_ref);
            }
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
        .ok();
    let mouseup_cb = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
            let changed = release(&mut session.borrow_mut());
            if changed {
                redraw(&draw_ref);
            }
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
        .ok();
    let contextmenu_cb = {
        Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("contextmenu", contextmenu_cb.as_ref().unchecked_ref())
        .ok();
    // Escape deselects
    let keydown_cb = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if e.key() != "Escape" {
                return;
            }
            let selected = {
                let mut s = session.borrow_mut();
                match s.layer.as_mut() {
                    Some(layer) if layer.selection().is_selected() => {
                        layer.deselect();
                        true
                    }
                    _ => false,
                }
            };
            if selected {
                redraw(&draw_ref);
            }
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
        .ok();
    // Resize/scroll keep the page -> viewport mapping current
    let resize_cb = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| {
            sync_geometry(&canvas, &mut session.borrow_mut());
            redraw(&draw_ref);
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
        .ok();
    let scroll_cb = {
        let session = session.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move |_e: web_sys::Event| {
            sync_offset(&canvas, &mut session.borrow_mut());
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
        .ok();
    // Touch
    let touch_start_cb = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            touch_start(
                &mut session.borrow_mut(),
                touch_point(&e, 0),
                touch_point(&e, 1),
            );
            redraw(&draw_ref);
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref())
        .ok();
    let touch_move_cb = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            let changed = touch_move(
                &mut session.borrow_mut(),
                touch_point(&e, 0),
                touch_point(&e, 1),
            );
            if changed {
                redraw(&draw_ref);
            }
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("touchmove", touch_move_cb.as_ref().unchecked_ref())
        .ok();
    let touch_end_cb = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            touch_end(
                &mut session.borrow_mut(),
                e.touches().length(),
                touch_point(&e, 0),
            );
            e.prevent_default();
            redraw(&draw_ref);
        }) as Box<dyn FnMut(_)>)
    };
    canvas
        .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
        .ok();
    canvas
        .add_event_listener_with_callback("touchcancel", touch_end_cb.as_ref().unchecked_ref())
        .ok();
    // Cleanup
    Some(move || {
        let _ = canvas
            .remove_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
        let _ = canvas.remove_event_listener_with_callback(
            "mousedown",
            mousedown_cb.as_ref().unchecked_ref(),
        );
        let _ = canvas.remove_event_listener_with_callback(
            "contextmenu",
            contextmenu_cb.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "mousemove",
            mousemove_cb.as_ref().unchecked_ref(),
        );
        let _ = window
            .remove_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref());
        let _ = window
            .remove_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
        let _ = window
            .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        let _ = window
            .remove_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
        let _ = canvas.remove_event_listener_with_callback(
            "touchstart",
            touch_start_cb.as_ref().unchecked_ref(),
        );
        let _ = canvas.remove_event_listener_with_callback(
            "touchmove",
            touch_move_cb.as_ref().unchecked_ref(),
        );
        let _ = canvas.remove_event_listener_with_callback(
            "touchend",
            touch_end_cb.as_ref().unchecked_ref(),
        );
        let _ = canvas.remove_event_listener_with_callback(
            "touchcancel",
            touch_end_cb.as_ref().unchecked_ref(),
        );
        *draw_ref.borrow_mut() = None;
    })
}

/// Starts loading `url`. Only the completion for the latest request is
/// applied; the returned element keeps the handlers alive until cleanup.
fn start_load(
    url: &str,
    session: &Rc<RefCell<Session>>,
    draw_ref: &DrawRef,
) -> Option<(HtmlImageElement, Closure<dyn FnMut()>, Closure<dyn FnMut()>)> {
    let ticket = {
        let mut s = session.borrow_mut();
        clear_image(&mut s);
        s.loader.request(url)
    };
    let img = match HtmlImageElement::new() {
        Ok(img) => img,
        Err(_) => {
            log::warn!("could not create an image element for {url}");
            return None;
        }
    };
    let onload = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        let img = img.clone();
        let url = url.to_string();
        Closure::wrap(Box::new(move || {
            {
                let s = &mut *session.borrow_mut();
                if !s.loader.complete(ticket) {
                    return;
                }
                let natural = Dimension::new(img.natural_width() as f64, img.natural_height() as f64);
                if natural.is_empty() {
                    log::warn!("{url} has no usable size");
                    return;
                }
                log::debug!("loaded {url} ({}x{})", natural.width, natural.height);
                s.natural = Some(natural);
                s.bitmap = Some(img.clone());
                if !place_loaded(s) {
                    log::debug!("waiting for a viewport size to place {url}");
                }
            }
            redraw(&draw_ref);
        }) as Box<dyn FnMut()>)
    };
    let onerror = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        let url = url.to_string();
        Closure::wrap(Box::new(move || {
            {
                let mut s = session.borrow_mut();
                if !s.loader.complete(ticket) {
                    return;
                }
                log::warn!("failed to load image {url}");
                clear_image(&mut s);
            }
            redraw(&draw_ref);
        }) as Box<dyn FnMut()>)
    };
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    img.set_src(url);
    Some((img, onload, onerror))
}

#[function_component(CanvasView)]
pub fn canvas_view(props: &CanvasViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let session = use_mut_ref(Session::default);
    let draw_ref: DrawRef = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let settings_ref = use_mut_ref(|| props.settings.clone());
    let zoom_label = use_state_eq(|| 1.0_f64);
    let has_image = use_state_eq(|| false);

    // Effect: settings changed
    {
        let settings_ref = settings_ref.clone();
        let draw_ref = draw_ref.clone();
        use_effect_with(props.settings.clone(), move |settings| {
            *settings_ref.borrow_mut() = settings.clone();
            redraw(&draw_ref);
            || ()
        });
    }
    // Main mount effect (events)
    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        let settings_ref = settings_ref.clone();
        let zoom_label = zoom_label.clone();
        let has_image = has_image.clone();
        use_effect_with((), move |_| {
            let teardown = mount(
                canvas_ref,
                session,
                draw_ref,
                settings_ref,
                zoom_label,
                has_image,
            );
            if teardown.is_none() {
                log::warn!("canvas not mounted; viewport input disabled");
            }
            move || {
                if let Some(f) = teardown {
                    f();
                }
            }
        });
    }
    // Effect: image URL changed
    {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        let url = props.image.as_ref().map(|i| i.url.clone());
        use_effect_with(url, move |url| {
            let pending = match url {
                Some(url) => start_load(url, &session, &draw_ref),
                None => {
                    {
                        let mut s = session.borrow_mut();
                        s.loader.clear();
                        clear_image(&mut s);
                    }
                    None
                }
            };
            redraw(&draw_ref);
            move || {
                if let Some((img, _onload, _onerror)) = pending {
                    img.set_onload(None);
                    img.set_onerror(None);
                }
            }
        });
    }

    let zoom_in_cb: Callback<()> = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        let step = props.settings.button_zoom_step;
        Callback::from(move |()| {
            session.borrow_mut().vp.zoom_in(step);
            redraw(&draw_ref);
        })
    };
    let zoom_out_cb: Callback<()> = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        let step = props.settings.button_zoom_step;
        Callback::from(move |()| {
            session.borrow_mut().vp.zoom_out(step);
            redraw(&draw_ref);
        })
    };
    let reset_cb: Callback<()> = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        Callback::from(move |()| {
            session.borrow_mut().vp.reset_zoom();
            redraw(&draw_ref);
        })
    };
    let fit_cb: Callback<()> = {
        let session = session.clone();
        let draw_ref = draw_ref.clone();
        Callback::from(move |()| {
            let fitted = {
                let s = &mut *session.borrow_mut();
                let fitted = match s.layer.as_ref().and_then(|l| l.scene_bounds()) {
                    Some(bounds) => s.vp.fit_to_bounds(bounds),
                    None => false,
                };
                if fitted {
                    log::debug!("fit: zoom {:.3}, scroll {:?}", s.vp.zoom(), s.vp.scroll());
                }
                fitted
            };
            if fitted {
                redraw(&draw_ref);
            }
        })
    };

    let (can_zoom_in, can_zoom_out) = {
        let s = session.borrow();
        (s.vp.can_zoom_in(), s.vp.can_zoom_out())
    };

    html! {<div style="position:absolute; inset:0; overflow:hidden;">
        <canvas ref={canvas_ref} id="viewport-canvas" style="display:block; width:100%; height:100%; touch-action:none;"></canvas>
        <ZoomControls zoom={*zoom_label} {can_zoom_in} {can_zoom_out} can_fit={*has_image} on_zoom_in={zoom_in_cb} on_zoom_out={zoom_out_cb} on_reset={reset_cb} on_fit={fit_cb} />
    </div>}
}
