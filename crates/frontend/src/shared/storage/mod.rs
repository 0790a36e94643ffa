//! Object-storage client
//!
//! The workflow only needs "give me a URL for these bytes"; progress events
//! are advisory and feed the upload indicators, nothing else depends on
//! them.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ProgressEvent, XmlHttpRequest};

use crate::shared::api_utils::api_base;

/// Upload one file to storage under `{sub_folder}/{image_name}` and resolve
/// the permanent URL of the stored object. Reports 0-100% progress while the
/// body is transferred.
pub async fn upload_file_progress(
    file: &web_sys::File,
    sub_folder: &str,
    image_name: &str,
    on_progress: impl Fn(f64) + 'static,
) -> Result<String, String> {
    let url = format!(
        "{}/api/storage/{}/{}",
        api_base(),
        sub_folder,
        urlencoding::encode(image_name)
    );

    let xhr = XmlHttpRequest::new().map_err(|e| format!("{e:?}"))?;
    xhr.open("POST", &url).map_err(|e| format!("{e:?}"))?;
    xhr.set_request_header("Content-Type", &file.type_())
        .map_err(|e| format!("{e:?}"))?;

    let (tx, rx) = oneshot::channel::<Result<String, String>>();
    let sender = Rc::new(RefCell::new(Some(tx)));

    let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
        if event.length_computable() && event.total() > 0.0 {
            on_progress(event.loaded() / event.total() * 100.0);
        }
    });
    xhr.upload()
        .map_err(|e| format!("{e:?}"))?
        .set_onprogress(Some(progress.as_ref().unchecked_ref()));

    let xhr_done = xhr.clone();
    let sender_done = sender.clone();
    let onload = Closure::<dyn FnMut()>::new(move || {
        let result = match xhr_done.status() {
            Ok(200) => match xhr_done.response_text() {
                Ok(Some(body)) => parse_upload_response(&body),
                _ => Err("Empty storage response".to_string()),
            },
            Ok(status) => Err(format!("HTTP {status}")),
            Err(e) => Err(format!("{e:?}")),
        };
        if let Some(tx) = sender_done.borrow_mut().take() {
            let _ = tx.send(result);
        }
    });
    xhr.set_onload(Some(onload.as_ref().unchecked_ref()));

    let sender_failed = sender.clone();
    let onerror = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = sender_failed.borrow_mut().take() {
            let _ = tx.send(Err("Upload request failed".to_string()));
        }
    });
    xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    let blob: &web_sys::Blob = file;
    xhr.send_with_opt_blob(Some(blob))
        .map_err(|e| format!("{e:?}"))?;

    let result = rx.await.map_err(|_| "Upload interrupted".to_string())?;

    // callbacks must outlive the request
    drop(progress);
    drop(onload);
    drop(onerror);

    result
}

/// Delete a stored object by its `{sub_folder}/{image_name}` path
pub async fn delete_file(path: &str) -> Result<(), String> {
    let response = gloo_net::http::Request::delete(&format!("{}/api/storage/{}", api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(format!("Failed to delete file: {}", response.status()));
    }
    Ok(())
}

fn parse_upload_response(body: &str) -> Result<String, String> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| format!("Bad storage response: {e}"))?;
    value["url"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "Storage response missing url".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_resolved_url() {
        let body = r#"{"url":"http://localhost:3000/uploads/products/1_0_mug.png"}"#;
        assert_eq!(
            parse_upload_response(body).unwrap(),
            "http://localhost:3000/uploads/products/1_0_mug.png"
        );
    }

    #[test]
    fn rejects_bodies_without_url() {
        assert!(parse_upload_response("{}").is_err());
        assert!(parse_upload_response("not json").is_err());
    }
}
