// Pure grid layout. Deterministic, no I/O.

use crate::atlas::types::{CellSize, LayoutParams};

/// Fold a batch of image dimensions into the running cell size.
///
/// The cell is the max width and max height observed so far, so within a
/// session it only grows as drops come in.
pub fn grow_cell_size(current: CellSize, sizes: impl IntoIterator<Item = (u32, u32)>) -> CellSize {
    sizes.into_iter().fold(current, |cell, (w, h)| CellSize {
        width: cell.width.max(w),
        height: cell.height.max(h),
    })
}

/// Row/column for the image at insertion index `index`. Insertion order is
/// the sole ordering key; nothing is sorted or repacked.
pub fn grid_position(index: usize, columns: u32) -> (u32, u32) {
    let index = index as u32;
    (index / columns, index % columns)
}

/// Number of grid rows needed for `count` images.
pub fn row_count(count: usize, columns: u32) -> u32 {
    (count as u32).div_ceil(columns)
}

/// Top-left corner of the cell at insertion index `index`.
pub fn cell_origin(index: usize, cell: CellSize, params: LayoutParams) -> (u32, u32) {
    let (row, col) = grid_position(index, params.columns);
    (
        col * (cell.width + params.spacing),
        row * (cell.height + params.spacing),
    )
}

/// Draw coordinate for an image of height `image_height` at insertion index
/// `index`: its cell origin shifted down so the image sits flush with the
/// cell's bottom edge. An image taller than the cell draws from the cell
/// top instead of panicking.
pub fn image_origin(
    index: usize,
    image_height: u32,
    cell: CellSize,
    params: LayoutParams,
) -> (u32, u32) {
    let (x, y) = cell_origin(index, cell, params);
    (x, y + cell.height.saturating_sub(image_height))
}

/// Pixel dimensions of the composite holding `count` images. The empty set
/// composes to a 0x0 target.
pub fn composite_size(count: usize, cell: CellSize, params: LayoutParams) -> (u32, u32) {
    if count == 0 {
        return (0, 0);
    }
    (
        params.columns * (cell.width + params.spacing),
        row_count(count, params.columns) * (cell.height + params.spacing),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(spacing: u32, columns: u32) -> LayoutParams {
        LayoutParams { spacing, columns }
    }

    #[test]
    fn test_cell_size_is_cumulative_max() {
        let cell = grow_cell_size(CellSize::default(), vec![(32, 16), (8, 48), (24, 24)]);
        assert_eq!(cell, CellSize { width: 32, height: 48 });

        // A later, smaller drop never shrinks the cell
        let cell = grow_cell_size(cell, vec![(10, 10)]);
        assert_eq!(cell, CellSize { width: 32, height: 48 });

        // A larger one grows it
        let cell = grow_cell_size(cell, vec![(64, 12)]);
        assert_eq!(cell, CellSize { width: 64, height: 48 });
    }

    #[test]
    fn test_grid_position_follows_insertion_order() {
        assert_eq!(grid_position(0, 3), (0, 0));
        assert_eq!(grid_position(1, 3), (0, 1));
        assert_eq!(grid_position(2, 3), (0, 2));
        assert_eq!(grid_position(3, 3), (1, 0));
        assert_eq!(grid_position(7, 3), (2, 1));
    }

    #[test]
    fn test_cell_origin_includes_spacing() {
        let cell = CellSize { width: 32, height: 32 };
        assert_eq!(cell_origin(0, cell, params(2, 3)), (0, 0));
        assert_eq!(cell_origin(1, cell, params(2, 3)), (34, 0));
        assert_eq!(cell_origin(3, cell, params(2, 3)), (0, 34));
        assert_eq!(cell_origin(5, cell, params(2, 3)), (68, 34));
    }

    #[test]
    fn test_short_image_is_bottom_aligned() {
        // Heights 20 and 40 in the same set: cell height is 40 and the
        // 20px image draws 20px below its cell top.
        let cell = grow_cell_size(CellSize::default(), vec![(30, 20), (30, 40)]);
        assert_eq!(cell.height, 40);
        assert_eq!(image_origin(0, 20, cell, params(0, 2)), (0, 20));
        assert_eq!(image_origin(1, 40, cell, params(0, 2)), (30, 0));
    }

    #[test]
    fn test_image_taller_than_cell_clamps_to_cell_top() {
        let cell = CellSize { width: 16, height: 16 };
        assert_eq!(image_origin(0, 64, cell, params(0, 4)), (0, 0));
    }

    #[test]
    fn test_composite_size_example() {
        // 6 images each 32x32, columns=3, spacing=2 -> 102x68
        let cell = CellSize { width: 32, height: 32 };
        assert_eq!(composite_size(6, cell, params(2, 3)), (102, 68));
    }

    #[test]
    fn test_composite_size_partial_last_row() {
        let cell = CellSize { width: 10, height: 10 };
        // 4 images over 3 columns still need 2 full rows
        assert_eq!(composite_size(4, cell, params(0, 3)), (30, 20));
        assert_eq!(row_count(4, 3), 2);
        assert_eq!(row_count(3, 3), 1);
    }

    #[test]
    fn test_empty_set_is_zero_sized() {
        assert_eq!(composite_size(0, CellSize::default(), params(2, 5)), (0, 0));
        assert_eq!(row_count(0, 5), 0);
    }
}
