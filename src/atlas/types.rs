use image::RgbaImage;
use serde::Serialize;

/// A decoded input image. Immutable once loaded; the working set owns it
/// for as long as it stays in the grid.
pub struct SourceImage {
    /// File name the image was loaded from, shown in the drop zone.
    pub name: String,
    pub image: RgbaImage,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// The fixed bounding box every image is placed into. Tracks the maximum
/// width and height seen across all drops in the session, so it never
/// shrinks unless the set is cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

/// User-editable grid parameters. `columns` is kept >= 1 by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutParams {
    pub spacing: u32,
    pub columns: u32,
}

/// Tileset record written next to the packed texture, in the JSON shape
/// the Tiled editor reads. Field order matches the serialized output.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TilesetDescriptor {
    pub columns: u32,
    pub image: String,
    pub imageheight: u32,
    pub imagewidth: u32,
    pub margin: u32,
    pub name: String,
    pub spacing: u32,
    pub tilecount: u32,
    pub tiledversion: String,
    pub tileheight: u32,
    pub tilewidth: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}
