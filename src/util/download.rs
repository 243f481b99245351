//! Saving fetched submission files in the browser.
//!
//! The file is wrapped in a `Blob`, exposed through an object URL, and handed
//! to a detached `<a download>` click.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::net::types::{StudentId, SubmissionFile};

/// Filename from a `Content-Disposition` header, if it names one.
#[must_use]
pub fn file_name_from_disposition(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim().trim_matches('"').to_owned())
        .filter(|name| !name.is_empty() && !name.contains(['/', '\\']))
}

/// Name used when the server does not suggest one.
#[must_use]
pub fn fallback_file_name(student_id: StudentId) -> String {
    format!("submission-{student_id}")
}

/// Trigger a browser download of `file`.
///
/// # Errors
///
/// Returns a description of the failing browser API call.
pub fn save_file(file: &SubmissionFile) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        if let Some(content_type) = file.content_type.as_deref() {
            options.set_type(content_type);
        }
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| format!("blob: {e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("object url: {e:?}"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("anchor: {e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(&file.file_name);
        anchor.click();

        if web_sys::Url::revoke_object_url(&url).is_err() {
            log::warn!("failed to revoke object url for {}", file.file_name);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("download of {} ({} bytes) skipped outside the browser", file.file_name, file.bytes.len());
        Ok(())
    }
}
