use base64::{engine::general_purpose, Engine as _};
use std::path::Path;

use crate::domain::model::{InputKind, UploadedFile};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub fn guess_mime(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Whether bytes of this MIME type are read as text. PDFs are included and
/// decoded as-is; there is no real PDF extraction.
fn is_readable_as_text(mime: &str) -> bool {
    mime.contains("text") || mime == "application/pdf" || mime == "application/json"
}

/// Classifies raw upload bytes by the MIME type guessed from `name`.
///
/// Images get a `data:` URL preview and no text; text, JSON and PDF files
/// are decoded lossily; anything else is kept as binary with no text.
pub fn from_bytes(name: &str, bytes: Vec<u8>) -> UploadedFile {
    let mime = guess_mime(name);
    let kind = InputKind::from_mime(&mime);

    let (text, preview) = match kind {
        InputKind::Image => {
            let encoded = general_purpose::STANDARD.encode(&bytes);
            (None, Some(format!("data:{};base64,{}", mime, encoded)))
        }
        _ if is_readable_as_text(&mime) => {
            (Some(String::from_utf8_lossy(&bytes).into_owned()), None)
        }
        _ => (None, None),
    };

    tracing::debug!(
        file = name,
        mime = %mime,
        kind = %kind,
        bytes = bytes.len(),
        has_text = text.is_some(),
        "Classified upload"
    );

    let name = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
        .to_string();

    UploadedFile {
        kind,
        name: Some(name),
        payload: bytes,
        text,
        preview,
    }
}

/// Reads `path` through `storage` and classifies it.
pub async fn load_file<S: Storage>(storage: &S, path: &str) -> Result<UploadedFile> {
    let bytes = storage.read_file(path).await?;
    tracing::info!("Uploaded \"{}\" ({:.2} KB)", path, bytes.len() as f64 / 1024.0);
    Ok(from_bytes(path, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn test_text_file() {
        let upload = from_bytes("notes/readme.txt", b"Plain words here.".to_vec());
        assert_eq!(upload.kind, InputKind::Text);
        assert_eq!(upload.name.as_deref(), Some("readme.txt"));
        assert_eq!(upload.text.as_deref(), Some("Plain words here."));
        assert!(upload.preview.is_none());
    }

    #[test]
    fn test_json_file_is_read_as_text() {
        let upload = from_bytes("data.json", br#"{"title": "Report"}"#.to_vec());
        assert_eq!(upload.kind, InputKind::Text);
        assert!(upload.has_text());
    }

    #[test]
    fn test_pdf_is_decoded_lossily() {
        let mut bytes = b"%PDF-1.4 Quarterly report ".to_vec();
        bytes.push(0xff);
        let upload = from_bytes("report.pdf", bytes);
        assert_eq!(upload.kind, InputKind::Pdf);
        let text = upload.text.unwrap();
        assert!(text.starts_with("%PDF-1.4 Quarterly report"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_image_gets_preview_and_no_text() {
        let upload = from_bytes("photo.png", vec![0x89, b'P', b'N', b'G']);
        assert_eq!(upload.kind, InputKind::Image);
        assert!(upload.text.is_none());
        assert_eq!(upload.preview.as_deref(), Some("data:image/png;base64,iVBORw=="));
    }

    #[test]
    fn test_unknown_binary_has_no_text() {
        let upload = from_bytes("archive.bin", vec![0, 1, 2, 3]);
        assert_eq!(upload.kind, InputKind::Text);
        assert!(upload.text.is_none());
        assert!(!upload.has_text());
    }

    #[tokio::test]
    async fn test_load_file_through_storage() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("article.txt"), "Heading. Body text.").unwrap();

        let storage = LocalStorage::new(dir.path().to_str().unwrap());
        let upload = load_file(&storage, "article.txt").await.unwrap();
        assert_eq!(upload.text.as_deref(), Some("Heading. Body text."));
    }
}
