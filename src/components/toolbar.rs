use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToolbarProps {
    pub current_url: Option<String>,
    pub on_open: Callback<String>,
    pub on_clear: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn Toolbar(props: &ToolbarProps) -> Html {
    let input_ref = use_node_ref();
    let open_cb = {
        let cb = props.on_open.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let url = input.value().trim().to_string();
                if !url.is_empty() {
                    cb.emit(url);
                }
            }
        })
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            cb.emit(())
        })
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<form onsubmit={open_cb} style="position:absolute; top:16px; left:50%; transform:translateX(-50%); z-index:2; background:rgba(255,255,255,0.95); border:1px solid #e9ecef; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <input ref={input_ref} type="url" placeholder="Image URL" value={props.current_url.clone().unwrap_or_default()} style="width:320px;" />
        <button type="submit">{"Open"}</button>
        <button type="button" onclick={clear_cb} disabled={props.current_url.is_none()}>{"Clear"}</button>
        <button type="button" onclick={settings_cb}>{"Settings"}</button>
    </form>}
}
