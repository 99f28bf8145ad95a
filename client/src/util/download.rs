//! Save fetched bytes as a browser download.

/// Offer `bytes` to the user as `filename`. No-op outside the browser.
pub fn save_bytes(bytes: &[u8], filename: &str, mime: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options) else {
            log::error!("could not build blob for {filename}");
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        let anchor = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("a").ok())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename, mime);
    }
}

/// Fetch a booking's invoice PDF and save it, reporting failures as a notice.
pub fn fetch_invoice(booking_id: i64, ui: leptos::prelude::RwSignal<crate::state::ui::UiState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::ui::{Notice, notify};

        match crate::net::api::download_invoice(booking_id).await {
            Ok((bytes, filename)) => save_bytes(&bytes, &filename, "application/pdf"),
            Err(e) => notify(ui, Notice::danger("Invoice unavailable", e.to_string())),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (booking_id, ui);
}
