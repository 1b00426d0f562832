use std::path::PathBuf;

use reqwest::Url;
use tracing::debug;

use crate::api::Transport;
use crate::error::{DropCarsError, Result};

/// Where the bytes of a document image come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// `http://` or `https://` URL.
    Remote(String),
    /// `file://` URI or plain filesystem path.
    File(PathBuf),
}

impl ImageSource {
    pub fn parse(uri: &str) -> Result<Self> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(DropCarsError::InvalidUri("empty URI".into()));
        }

        let lower = uri.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Remote(uri.to_string()));
        }
        if lower.starts_with("file://") {
            if uri.len() == "file://".len() {
                return Err(DropCarsError::InvalidUri(uri.to_string()));
            }
            // Url takes care of percent-decoding and rejects remote hosts.
            let path = Url::parse(uri)
                .map_err(|e| DropCarsError::InvalidUri(format!("'{uri}': {e}")))?
                .to_file_path()
                .map_err(|()| DropCarsError::InvalidUri(format!("'{uri}' is not a local file")))?;
            return Ok(Self::File(path));
        }
        if uri.contains("://") {
            return Err(DropCarsError::InvalidUri(format!(
                "unsupported scheme in '{uri}'"
            )));
        }
        Ok(Self::File(PathBuf::from(uri)))
    }

    pub fn read_bytes(&self, transport: &impl Transport) -> Result<Vec<u8>> {
        match self {
            Self::Remote(url) => transport.fetch(url),
            Self::File(path) => Ok(std::fs::read(path)?),
        }
    }
}

/// A decoded image as straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode any format the `image` crate recognises.
pub fn decode_rgba(bytes: &[u8]) -> Result<DecodedImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Resolve `uri`, read its bytes, and decode them.
pub fn load_image(uri: &str, transport: &impl Transport) -> Result<DecodedImage> {
    let source = ImageSource::parse(uri)?;
    let bytes = source.read_bytes(transport)?;
    let image = decode_rgba(&bytes)?;
    debug!(uri, width = image.width, height = image.height, "image decoded");
    Ok(image)
}
