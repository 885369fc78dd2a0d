use crate::error::{RenderError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// A pre-rendered reference map, kept as PNG bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapImage {
    bytes: Vec<u8>,
}

impl MapImage {
    pub fn from_bytes(bytes: Vec<u8>, source: &str) -> Result<Self> {
        if !bytes.starts_with(&PNG_SIGNATURE) {
            return Err(RenderError::NotPng(source.to_string()));
        }
        Ok(Self { bytes })
    }

    /// An image embedded at build time. Empty bytes mean the fixture was
    /// absent and give `None`; anything else must be a PNG.
    pub fn from_embedded(bytes: &[u8], source: &str) -> Result<Option<Self>> {
        if bytes.is_empty() {
            log::info!("[ZCA] render: No embedded map image {}", source);
            return Ok(None);
        }
        Self::from_bytes(bytes.to_vec(), source).map(Some)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        log::info!("[ZCA] render: Loaded map image {} ({} bytes)", path.display(), bytes.len());
        Self::from_bytes(bytes, &path.display().to_string())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.bytes))
    }
}
