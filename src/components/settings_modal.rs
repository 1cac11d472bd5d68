use crate::config::ViewerSettings;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub settings: ViewerSettings,
    pub on_close: Callback<()>,
    pub on_change: Callback<ViewerSettings>,
}

fn parse_step(e: &Event) -> Option<f64> {
    let input = e.target_dyn_into::<HtmlInputElement>()?;
    input.value().trim().parse::<f64>().ok().filter(|v| *v > 0.0)
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let wheel_cb = {
        let cb = props.on_change.clone();
        let current = props.settings.clone();
        Callback::from(move |e: Event| {
            if let Some(step) = parse_step(&e) {
                cb.emit(ViewerSettings {
                    wheel_zoom_step: step,
                    ..current.clone()
                });
            }
        })
    };
    let button_cb = {
        let cb = props.on_change.clone();
        let current = props.settings.clone();
        Callback::from(move |e: Event| {
            if let Some(step) = parse_step(&e) {
                cb.emit(ViewerSettings {
                    button_zoom_step: step,
                    ..current.clone()
                });
            }
        })
    };
    let background_cb = {
        let cb = props.on_change.clone();
        let current = props.settings.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(ViewerSettings {
                    background: input.value(),
                    ..current.clone()
                });
            }
        })
    };
    let defaults_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| cb.emit(ViewerSettings::default()))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.35); z-index:50;">
        <div style="background:#fff; border:1px solid #e9ecef; border-radius:12px; padding:16px 20px; min-width:300px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; justify-content:space-between; gap:8px;">
                    <span>{"Wheel zoom step"}</span>
                    <input type="number" step="0.05" min="0.01" value={props.settings.wheel_zoom_step.to_string()} onchange={wheel_cb} />
                </label>
                <label style="display:flex; align-items:center; justify-content:space-between; gap:8px;">
                    <span>{"Button zoom step"}</span>
                    <input type="number" step="0.05" min="0.01" value={props.settings.button_zoom_step.to_string()} onchange={button_cb} />
                </label>
                <label style="display:flex; align-items:center; justify-content:space-between; gap:8px;">
                    <span>{"Background"}</span>
                    <input type="color" value={props.settings.background.clone()} onchange={background_cb} />
                </label>
            </div>
            <div style="display:flex; gap:8px;">
                <button onclick={defaults_cb} style="flex:1;">{"Restore defaults"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Done"}</button>
            </div>
        </div>
    </div>}
}
