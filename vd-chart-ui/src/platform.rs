//! Browser helpers built on `web-sys` and `js-sys`.
//!
//! Everything here degrades to a no-op or `None` when there is no window,
//! so callers never need to special-case a missing DOM.

use js_sys::{Math, Promise, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// Uniform sample in [0, 1).
pub fn random() -> f64 {
    Math::random()
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Top-left corner of an element in client coordinates.
pub fn element_origin(id: &str) -> Option<(f64, f64)> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some((rect.left(), rect.top()))
}

fn file_input(id: &str) -> Option<HtmlInputElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// Names of the files currently selected in a file input.
pub fn selected_file_names(input_id: &str) -> Vec<String> {
    let Some(files) = file_input(input_id).and_then(|input| input.files()) else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| file.name())
        .collect()
}

fn selected_file(input_id: &str, name: &str) -> Option<File> {
    let files = file_input(input_id)?.files()?;
    (0..files.length())
        .filter_map(|i| files.get(i))
        .find(|file| file.name() == name)
}

/// Contents of a selected file.
pub async fn read_selected_file(input_id: &str, name: &str) -> Result<Vec<u8>, String> {
    let file = selected_file(input_id, name).ok_or_else(|| format!("{} is no longer selected", name))?;
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Could not read {}: {:?}", name, e))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Clear a file input so the same file can be picked again.
pub fn clear_file_input(input_id: &str) {
    if let Some(input) = file_input(input_id) {
        input.set_value("");
    }
}
