use crate::constants::{ICON_NAMES, LUCIDE_GLOBAL};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Ask the page's Lucide bundle to replace `<i data-lucide>` placeholders,
/// restricted to the icons the site uses. Returns how many were registered.
pub fn create_icons(window: &web::Window) -> anyhow::Result<usize> {
    let lucide = Reflect::get(window, &JsValue::from_str(LUCIDE_GLOBAL)).map_err(js_err)?;
    if lucide.is_undefined() || lucide.is_null() {
        anyhow::bail!("`{}` global not loaded", LUCIDE_GLOBAL);
    }

    let icons = Object::new();
    let mut registered = 0;
    for name in ICON_NAMES {
        let icon = Reflect::get(&lucide, &JsValue::from_str(name)).map_err(js_err)?;
        if icon.is_undefined() {
            log::warn!("[icons] {} missing from bundle", name);
            continue;
        }
        Reflect::set(&icons, &JsValue::from_str(name), &icon).map_err(js_err)?;
        registered += 1;
    }

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("icons"), &icons).map_err(js_err)?;

    let create: Function = Reflect::get(&lucide, &JsValue::from_str("createIcons"))
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("`{}.createIcons` is not a function", LUCIDE_GLOBAL))?;
    create.call1(&lucide, &options).map_err(js_err)?;
    Ok(registered)
}
