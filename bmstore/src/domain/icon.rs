// bmstore/src/domain/icon.rs
use crate::domain::error::DomainResult;
use image::RgbaImage;
use std::fmt;
use tracing::debug;

/// Edge length icons are normalized to before they are stored
pub const ICON_SIZE: u32 = 16;

/// A decoded bookmark icon
#[derive(Clone, PartialEq)]
pub struct Icon {
    image: RgbaImage,
}

impl Icon {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Build from raw RGBA8 pixels; `None` if the buffer does not match the dimensions
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, pixels).map(Self::new)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_empty(&self) -> bool {
        self.image.width() == 0 || self.image.height() == 0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Icon({}x{})", self.width(), self.height())
    }
}

/// Converts icons between their decoded form and the blob kept in storage
pub trait IconCodec: Send + Sync + fmt::Debug {
    fn encode(&self, icon: &Icon) -> DomainResult<Vec<u8>>;

    fn decode(&self, data: &[u8]) -> DomainResult<Icon>;

    /// Default image used whenever an icon is missing or cannot be converted
    fn placeholder(&self) -> Icon;

    /// Scale down icons larger than `ICON_SIZE`
    fn normalize(&self, icon: Icon) -> Icon;

    /// Decode a stored blob, substituting the placeholder for missing or broken data
    fn decode_or_placeholder(&self, data: Option<&[u8]>) -> Icon {
        match data {
            Some(bytes) if !bytes.is_empty() => self.decode(bytes).unwrap_or_else(|e| {
                debug!("Falling back to placeholder icon: {}", e);
                self.placeholder()
            }),
            _ => self.placeholder(),
        }
    }

    /// Normalize an incoming icon; empty or absent icons become the placeholder
    fn sanitize(&self, icon: Option<Icon>) -> Icon {
        match icon {
            Some(icon) if !icon.is_empty() => self.normalize(icon),
            _ => self.placeholder(),
        }
    }

    /// Encode for storage, storing the placeholder when encoding yields nothing
    fn encode_or_placeholder(&self, icon: &Icon) -> DomainResult<Vec<u8>> {
        match self.encode(icon) {
            Ok(blob) if !blob.is_empty() => Ok(blob),
            Ok(_) => {
                debug!("Icon encoding yielded no data, storing placeholder");
                self.encode(&self.placeholder())
            }
            Err(e) => {
                debug!("Icon encoding failed, storing placeholder: {}", e);
                self.encode(&self.placeholder())
            }
        }
    }
}
