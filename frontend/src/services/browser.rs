//! Thin wrappers over browser file APIs.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, FileReader, HtmlAnchorElement, ProgressEvent, Url};

use crate::types::{AppError, AppResult};

/// Collect a `FileList` into owned handles, in order.
pub fn files_from(list: Option<FileList>) -> Vec<File> {
    match list {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    }
}

/// Read `file` as a data URL and hand it to `on_load`.
pub fn read_data_url(file: &File, on_load: impl FnOnce(String) + 'static) -> AppResult<()> {
    let reader = FileReader::new().map_err(|e| AppError::Browser(format!("{:?}", e)))?;

    let target = reader.clone();
    let onload = Closure::once(move |_: ProgressEvent| {
        match target.result().ok().and_then(|v| v.as_string()) {
            Some(url) => on_load(url),
            None => log::warn!("FileReader finished without a data URL"),
        }
    });
    let name = file.name();
    let onerror = Closure::once(move |_: ProgressEvent| {
        log::warn!("{}", read_failure(&name));
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    // The reader keeps a reference to both callbacks; only one of them fires.
    onload.forget();
    onerror.forget();

    reader
        .read_as_data_url(file)
        .map_err(|e| AppError::Browser(format!("Failed to read file: {:?}", e)))
}

fn read_failure(name: &str) -> AppError {
    AppError::Browser(format!("Could not read {} for preview", name))
}

/// Object URL for a local file, revoked on drop.
#[derive(Debug, PartialEq)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn new(file: &File) -> AppResult<Self> {
        Url::create_object_url_with_blob(file)
            .map(Self)
            .map_err(|e| AppError::Browser(format!("Failed to create object URL: {:?}", e)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// Save the resource at `url` under `filename`.
pub fn trigger_download(url: &str, filename: &str) -> AppResult<()> {
    let anchor = gloo_utils::document()
        .create_element("a")
        .map_err(|e| AppError::Browser(format!("{:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::Browser("Created element is not an anchor".to_string()))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_failure_names_file() {
        assert_eq!(
            read_failure("photo.png").to_string(),
            "Browser error: Could not read photo.png for preview"
        );
    }
}
