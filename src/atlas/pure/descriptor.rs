// Tileset descriptor generation. Pure, no side effects.

use crate::atlas::pure::layout;
use crate::atlas::types::{CellSize, LayoutParams, TilesetDescriptor};

/// Tiled editor version the descriptor declares compatibility with.
pub const TILED_VERSION: &str = "1.7.2";
/// Tiled JSON format version.
pub const FORMAT_VERSION: &str = "1.6";

pub fn texture_file_name(basename: &str) -> String {
    format!("{basename}_texture.png")
}

pub fn descriptor_file_name(basename: &str) -> String {
    format!("{basename}_tileset.json")
}

/// Build the tileset record for the current layout. All inputs are already
/// typed and validated by the UI, so this cannot fail.
pub fn build_descriptor(
    basename: &str,
    count: usize,
    cell: CellSize,
    params: LayoutParams,
) -> TilesetDescriptor {
    let rows = layout::row_count(count, params.columns);

    TilesetDescriptor {
        columns: params.columns,
        image: texture_file_name(basename),
        imageheight: rows * (cell.height + params.spacing),
        imagewidth: params.columns * (cell.width + params.spacing),
        margin: 0,
        name: format!("{basename}_tileset"),
        spacing: params.spacing,
        tilecount: count as u32,
        tiledversion: TILED_VERSION.to_string(),
        tileheight: cell.height,
        tilewidth: cell.width,
        kind: "tileset".to_string(),
        version: FORMAT_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_example() {
        let desc = build_descriptor(
            "dungeon",
            6,
            CellSize { width: 32, height: 32 },
            LayoutParams { spacing: 2, columns: 3 },
        );

        assert_eq!(desc.tilecount, 6);
        assert_eq!(desc.tilewidth, 32);
        assert_eq!(desc.tileheight, 32);
        assert_eq!(desc.columns, 3);
        assert_eq!(desc.spacing, 2);
        assert_eq!(desc.imagewidth, 102);
        assert_eq!(desc.imageheight, 68);
        assert_eq!(desc.image, "dungeon_texture.png");
        assert_eq!(desc.name, "dungeon_tileset");
    }

    #[test]
    fn test_descriptor_fixed_literals() {
        let desc = build_descriptor(
            "x",
            1,
            CellSize { width: 8, height: 8 },
            LayoutParams { spacing: 0, columns: 1 },
        );

        assert_eq!(desc.margin, 0);
        assert_eq!(desc.kind, "tileset");
        assert_eq!(desc.tiledversion, "1.7.2");
        assert_eq!(desc.version, "1.6");
    }

    #[test]
    fn test_descriptor_json_field_names() {
        let desc = build_descriptor(
            "cave",
            2,
            CellSize { width: 16, height: 24 },
            LayoutParams { spacing: 1, columns: 2 },
        );
        let value = serde_json::to_value(&desc).unwrap();
        let obj = value.as_object().unwrap();

        for field in [
            "columns",
            "image",
            "imageheight",
            "imagewidth",
            "margin",
            "name",
            "spacing",
            "tilecount",
            "tiledversion",
            "tileheight",
            "tilewidth",
            "type",
            "version",
        ] {
            assert!(obj.contains_key(field), "missing field {field}");
        }
        assert_eq!(obj.len(), 13);
        assert_eq!(value["type"], "tileset");
        assert_eq!(value["imagewidth"], 34);
        assert_eq!(value["imageheight"], 25);
    }
}
