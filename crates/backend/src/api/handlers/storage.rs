use axum::body::Bytes;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use once_cell::sync::OnceCell;
use serde_json::json;
use std::path::PathBuf;

/// Where uploaded objects land and how their public URLs are built
pub struct StorageRuntime {
    pub uploads_dir: PathBuf,
    pub public_base: String,
}

static STORAGE: OnceCell<StorageRuntime> = OnceCell::new();

pub fn init_storage(runtime: StorageRuntime) -> Result<(), StorageRuntime> {
    STORAGE.set(runtime)
}

fn storage() -> Result<&'static StorageRuntime, StatusCode> {
    STORAGE.get().ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// POST /api/storage/:folder/:name
///
/// Accepts the raw object bytes and answers with the permanent URL the
/// client embeds in the committed record.
pub async fn upload(
    Path((folder, name)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let storage = storage()?;
    let folder = sanitize_component(&folder).ok_or(StatusCode::BAD_REQUEST)?;
    let name = sanitize_component(&name).ok_or(StatusCode::BAD_REQUEST)?;

    let dir = storage.uploads_dir.join(&folder);
    tokio::fs::create_dir_all(&dir).await.map_err(|e| {
        tracing::error!("Failed to create upload directory: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let path = dir.join(&name);
    tokio::fs::write(&path, &body).await.map_err(|e| {
        tracing::error!("Failed to store upload {}: {e}", path.display());
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let url = format!("{}/uploads/{}/{}", storage.public_base, folder, name);
    Ok(Json(json!({ "url": url })))
}

/// DELETE /api/storage/:folder/:name
pub async fn delete(Path((folder, name)): Path<(String, String)>) -> Result<(), StatusCode> {
    let storage = storage()?;
    let folder = sanitize_component(&folder).ok_or(StatusCode::BAD_REQUEST)?;
    let name = sanitize_component(&name).ok_or(StatusCode::BAD_REQUEST)?;

    let path = storage.uploads_dir.join(folder).join(name);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete {}: {e}", path.display());
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Keep object names inside the uploads directory: one path segment, safe
/// charset, no traversal.
fn sanitize_component(component: &str) -> Option<String> {
    let cleaned: String = component
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        return None;
    }
    if cleaned.contains("..") {
        return None;
    }
    Some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_safe_names() {
        assert_eq!(
            sanitize_component("1688000000000_0_mug.png").as_deref(),
            Some("1688000000000_0_mug.png")
        );
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(
            sanitize_component("my photo (1).png").as_deref(),
            Some("my_photo__1_.png")
        );
    }

    #[test]
    fn sanitize_rejects_traversal() {
        assert_eq!(sanitize_component(".."), None);
        assert_eq!(sanitize_component("../../etc/passwd"), None);
        assert_eq!(sanitize_component(""), None);
    }
}
