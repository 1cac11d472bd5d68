use super::{canvas_view::CanvasView, settings_modal::SettingsModal, toolbar::Toolbar};
use crate::config::{self, ViewerSettings};
use crate::model::ImageFile;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(ViewerSettings::load);
    let image = use_state(|| config::load_last_image_url().map(|url| ImageFile::from_url(&url)));
    let open_settings = use_state(|| false);

    // Persist settings changes
    {
        use_effect_with((*settings).clone(), move |settings| {
            settings.save();
            || ()
        });
    }
    // Persist the current image URL
    {
        let url = image.as_ref().map(|img| img.url.clone());
        use_effect_with(url, move |url| {
            config::save_last_image_url(url.as_deref());
            || ()
        });
    }

    let open_image = {
        let image = image.clone();
        Callback::from(move |url: String| {
            let file = ImageFile::from_url(&url);
            log::info!("opening {} ({})", file.url, file.mime_type);
            image.set(Some(file));
        })
    };
    let clear_image = {
        let image = image.clone();
        Callback::from(move |()| image.set(None))
    };
    let open_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(true))
    };
    let close_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let change_settings_cb: Callback<ViewerSettings> = {
        let settings = settings.clone();
        Callback::from(move |s: ViewerSettings| settings.set(s))
    };

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
        <CanvasView image={(*image).clone()} settings={(*settings).clone()} />
        <Toolbar current_url={image.as_ref().map(|img| img.url.clone())} on_open={open_image} on_clear={clear_image} on_open_settings={open_settings_cb} />
        <SettingsModal show={*open_settings} settings={(*settings).clone()} on_close={close_settings_cb} on_change={change_settings_cb} />
    </div>}
}
