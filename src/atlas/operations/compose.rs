use crate::atlas::pure::layout;
use crate::atlas::types::{CellSize, LayoutParams, SourceImage};

use image::{RgbaImage, imageops};

/// Blit every image into a fresh composite at its grid coordinate.
///
/// The target starts fully transparent and each image is copied straight
/// over it, so per-pixel source alpha survives and nothing is blended.
/// Images land bottom-aligned within their cell, in insertion order.
pub fn compose(images: &[SourceImage], cell: CellSize, params: LayoutParams) -> RgbaImage {
    let (width, height) = layout::composite_size(images.len(), cell, params);
    let mut target = RgbaImage::new(width, height);

    for (index, src) in images.iter().enumerate() {
        let (x, y) = layout::image_origin(index, src.height(), cell, params);
        imageops::replace(&mut target, &src.image, x as i64, y as i64);
    }

    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(name: &str, w: u32, h: u32, px: [u8; 4]) -> SourceImage {
        SourceImage {
            name: name.to_string(),
            image: RgbaImage::from_pixel(w, h, Rgba(px)),
        }
    }

    #[test]
    fn test_compose_empty_set_is_zero_sized() {
        let out = compose(
            &[],
            CellSize::default(),
            LayoutParams { spacing: 4, columns: 5 },
        );
        assert_eq!(out.dimensions(), (0, 0));
    }

    #[test]
    fn test_compose_places_images_on_the_grid() {
        let images = vec![
            solid("red", 8, 8, [255, 0, 0, 255]),
            solid("green", 8, 8, [0, 255, 0, 255]),
            solid("blue", 8, 8, [0, 0, 255, 255]),
        ];
        let cell = CellSize { width: 8, height: 8 };
        let out = compose(&images, cell, LayoutParams { spacing: 2, columns: 2 });

        assert_eq!(out.dimensions(), (20, 20));
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(out.get_pixel(10, 0), &Rgba([0, 255, 0, 255]));
        // Third image wraps to the second row
        assert_eq!(out.get_pixel(0, 10), &Rgba([0, 0, 255, 255]));
        // Gutter between cells stays transparent
        assert_eq!(out.get_pixel(8, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(0, 9), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_compose_bottom_aligns_short_images() {
        let images = vec![
            solid("short", 8, 4, [9, 9, 9, 255]),
            solid("tall", 8, 8, [1, 1, 1, 255]),
        ];
        let cell = CellSize { width: 8, height: 8 };
        let out = compose(&images, cell, LayoutParams { spacing: 0, columns: 2 });

        // Top half of the first cell stays empty, bottom half holds the image
        assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(0, 3), &Rgba([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(0, 4), &Rgba([9, 9, 9, 255]));
        assert_eq!(out.get_pixel(0, 7), &Rgba([9, 9, 9, 255]));
        assert_eq!(out.get_pixel(8, 0), &Rgba([1, 1, 1, 255]));
    }

    #[test]
    fn test_compose_preserves_source_transparency() {
        let images = vec![solid("ghost", 4, 4, [200, 100, 50, 0])];
        let cell = CellSize { width: 4, height: 4 };
        let out = compose(&images, cell, LayoutParams { spacing: 0, columns: 1 });

        // Straight overwrite copy: the transparent source pixel is kept
        // verbatim, not blended away.
        assert_eq!(out.get_pixel(0, 0), &Rgba([200, 100, 50, 0]));
    }
}
