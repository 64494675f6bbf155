//! Browser Glue
//!
//! Downloads, file inputs and printing via web-sys.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, Document, File, HtmlAnchorElement, HtmlInputElement, Url};

use crate::error::ApiError;

fn js_err(err: JsValue) -> ApiError {
    ApiError::Browser(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn document() -> Result<Document, ApiError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Browser("no document".to_string()))
}

/// Navigate a temporary `<a download>` to `href`
pub fn open_download(href: &str, file_name: &str) -> Result<(), ApiError> {
    let document = document()?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| ApiError::Browser("anchor element expected".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("no body".to_string()))?;
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_err)?;
    Ok(())
}

/// Offer `bytes` to the user as a file download
pub fn save_bytes(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), ApiError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;
    let result = open_download(&url, file_name);
    Url::revoke_object_url(&url).map_err(js_err)?;
    result
}

/// First file chosen in an `<input type="file">`
pub fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

pub async fn read_file(file: &File) -> Result<Vec<u8>, ApiError> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Open the browser print dialog
pub fn print_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            log::warn!("[Browser] Print failed: {:?}", e);
        }
    }
}
