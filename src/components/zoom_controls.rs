use crate::util::format_zoom;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub zoom: f64,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    /// Fit to screen is only offered while an image is shown.
    pub can_fit: bool,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_fit: Callback<()>,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let ft = {
        let cb = props.on_fit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:50%; bottom:16px; transform:translateX(-50%); z-index:2; background:rgba(255,255,255,0.95); border:1px solid #e9ecef; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={zo} disabled={!props.can_zoom_out}> {"-"} </button>
        <span style="min-width:60px; text-align:center; font-weight:600; color:#495057;">{ format_zoom(props.zoom) }</span>
        <button onclick={zi} disabled={!props.can_zoom_in}> {"+"} </button>
        <span style="width:1px; height:24px; background:#e9ecef; margin:0 4px;"></span>
        <button onclick={rs} title="Reset zoom (100%)"> {"1:1"} </button>
        { if props.can_fit { html!{ <button onclick={ft} title="Fit to screen"> {"Fit"} </button> } } else { html!{} } }
    </div>}
}
