// bmstore/src/infrastructure/icon_codec.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::icon::{Icon, IconCodec, ICON_SIZE};
use image::imageops::FilterType;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tracing::{instrument, trace};

const PAGE_FILL: Rgba<u8> = Rgba([245, 245, 245, 255]);
const PAGE_EDGE: Rgba<u8> = Rgba([140, 140, 140, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const FOLD: u32 = 4;

/// Stores icons as PNG blobs
#[derive(Debug, Clone, Default)]
pub struct PngIconCodec;

impl PngIconCodec {
    pub fn new() -> Self {
        Self
    }
}

impl IconCodec for PngIconCodec {
    #[instrument(skip_all, level = "trace")]
    fn encode(&self, icon: &Icon) -> DomainResult<Vec<u8>> {
        if icon.is_empty() {
            return Err(DomainError::IconConversion("icon has no pixels".to_string()));
        }
        let mut buffer = Cursor::new(Vec::new());
        icon.image()
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| DomainError::IconConversion(format!("PNG encoding failed: {}", e)))?;
        Ok(buffer.into_inner())
    }

    #[instrument(skip_all, level = "trace")]
    fn decode(&self, data: &[u8]) -> DomainResult<Icon> {
        let image = image::load_from_memory_with_format(data, ImageFormat::Png)
            .map_err(|e| DomainError::IconConversion(format!("PNG decoding failed: {}", e)))?;
        Ok(Icon::new(image.to_rgba8()))
    }

    /// A blank page with a grey border and a folded top-right corner
    fn placeholder(&self) -> Icon {
        let (left, right, bottom) = (2, ICON_SIZE - 3, ICON_SIZE - 1);
        let image = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
            if x < left || x > right {
                return TRANSPARENT;
            }
            if y < FOLD {
                let diagonal = right - FOLD + y;
                if x > diagonal {
                    return TRANSPARENT;
                }
                if x == diagonal {
                    return PAGE_EDGE;
                }
            }
            if x == left || x == right || y == 0 || y == bottom {
                PAGE_EDGE
            } else {
                PAGE_FILL
            }
        });
        Icon::new(image)
    }

    fn normalize(&self, icon: Icon) -> Icon {
        let (width, height) = (icon.width(), icon.height());
        let longest = width.max(height);
        if longest <= ICON_SIZE {
            return icon;
        }

        let target_width = ((width as u64 * ICON_SIZE as u64) / longest as u64).max(1) as u32;
        let target_height = ((height as u64 * ICON_SIZE as u64) / longest as u64).max(1) as u32;
        trace!(
            "Scaling icon {}x{} to {}x{}",
            width,
            height,
            target_width,
            target_height
        );
        Icon::new(image::imageops::resize(
            icon.image(),
            target_width,
            target_height,
            FilterType::Triangle,
        ))
    }
}
