//! Input collection for local front ends.
//!
//! Plain text and PDF files are both decoded as text. PDFs are not parsed,
//! so only their textual fragments survive.

use std::path::Path;

use crate::errors::SummarizeError;

const SUPPORTED_INPUT_MIME: &[&str] = &["text/plain", "application/pdf"];
const UNSUPPORTED_FILE_MESSAGE: &str = "Unsupported file type. Please upload a PDF or TXT file";

#[must_use]
pub fn is_supported_input_mime(mime: &str) -> bool {
    let main = mime
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    SUPPORTED_INPUT_MIME.contains(&main.as_str())
}

/// Decodes uploaded bytes of the given MIME type into text.
///
/// # Errors
///
/// Returns `UnsupportedFile` for anything other than plain text or PDF.
pub fn decode_input(mime: &str, bytes: &[u8]) -> Result<String, SummarizeError> {
    if !is_supported_input_mime(mime) {
        return Err(SummarizeError::UnsupportedFile(
            UNSUPPORTED_FILE_MESSAGE.to_string(),
        ));
    }
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

/// Reads a `.txt` or `.pdf` file, guessing its type from the extension.
///
/// # Errors
///
/// Returns `UnsupportedFile` for other types and `InvalidRequest` if the file
/// cannot be read.
pub fn read_input_file(path: &Path) -> Result<String, SummarizeError> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if !is_supported_input_mime(mime.essence_str()) {
        return Err(SummarizeError::UnsupportedFile(
            UNSUPPORTED_FILE_MESSAGE.to_string(),
        ));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        SummarizeError::InvalidRequest(format!("Failed to read {}: {e}", path.display()))
    })?;
    decode_input(mime.essence_str(), &bytes)
}
