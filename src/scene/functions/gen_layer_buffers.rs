use crate::game::map::{MapLayer, Tileset};

/// Quad corner data for every cell of `layer` drawn from the tileset at
/// `tileset_index`. A layer becomes one batch per tileset so that each
/// draw call binds a single texture.
pub fn gen_layer_buffers(
    layer: &MapLayer,
    tileset: &Tileset,
    tileset_index: usize,
    map_width: u32,
    tile_width: u32,
    tile_height: u32,
) -> (Vec<(f32, f32)>, Vec<(f32, f32)>) {
    let mut xy_vec = Vec::<(f32, f32)>::with_capacity(4 * layer.cells.len());
    let mut uv_vec = Vec::<(f32, f32)>::with_capacity(4 * layer.cells.len());

    for (index, cell) in layer.cells.iter().enumerate() {
        // Skip empty cells and cells owned by other tilesets.
        let cell = match cell {
            Some(cell) if cell.tileset == tileset_index => cell,
            _ => continue,
        };

        // Calculate xy.
        let tile_x = (index as u32 % map_width * tile_width) as f32;
        let tile_y = (index as u32 / map_width * tile_height) as f32;
        let (w, h) = (tile_width as f32, tile_height as f32);
        xy_vec.extend_from_slice(&[
            (tile_x, tile_y),
            (tile_x + w, tile_y),
            (tile_x + w, tile_y + h),
            (tile_x, tile_y + h),
        ]);

        // Calculate uv.
        let [u0, v0, u1, v1] = tileset.uv_rect(cell.local_id);
        uv_vec.extend_from_slice(&[(u0, v0), (u1, v0), (u1, v1), (u0, v1)]);
    }

    (xy_vec, uv_vec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::map::Cell;

    fn tileset() -> Tileset {
        Tileset {
            texture: "BaseChip",
            first_gid: 1,
            tile_count: 48,
            columns: 2,
            tile_width: 32,
            tile_height: 32,
            image_width: 64,
            image_height: 768,
        }
    }

    #[test]
    fn test_batch_holds_only_its_tileset() {
        // 3x1 layer: tileset 0, empty, tileset 1.
        let layer = MapLayer {
            name: "ground",
            cells: vec![
                Some(Cell {
                    tileset: 0,
                    local_id: 0,
                }),
                None,
                Some(Cell {
                    tileset: 1,
                    local_id: 7,
                }),
            ],
        };

        let (xy, uv) = gen_layer_buffers(&layer, &tileset(), 0, 3, 32, 32);
        assert_eq!(xy.len(), 4);
        assert_eq!(uv.len(), 4);

        let (xy, _) = gen_layer_buffers(&layer, &tileset(), 1, 3, 32, 32);
        assert_eq!(xy.len(), 4);
    }

    #[test]
    fn test_cells_land_on_the_tile_grid() {
        // 2x2 layer with one cell in the bottom right corner.
        let layer = MapLayer {
            name: "ground",
            cells: vec![
                None,
                None,
                None,
                Some(Cell {
                    tileset: 0,
                    local_id: 0,
                }),
            ],
        };

        let (xy, _) = gen_layer_buffers(&layer, &tileset(), 0, 2, 32, 32);
        assert_eq!(xy, vec![(32., 32.), (64., 32.), (64., 64.), (32., 64.)]);
    }

    #[test]
    fn test_uv_corners_match_the_tileset_rect() {
        let layer = MapLayer {
            name: "ground",
            cells: vec![Some(Cell {
                tileset: 0,
                local_id: 3,
            })],
        };

        let (_, uv) = gen_layer_buffers(&layer, &tileset(), 0, 1, 32, 32);
        let [u0, v0, u1, v1] = tileset().uv_rect(3);
        assert_eq!(uv, vec![(u0, v0), (u1, v0), (u1, v1), (u0, v1)]);
    }

    #[test]
    fn test_empty_layer_yields_no_quads() {
        let layer = MapLayer {
            name: "building",
            cells: vec![None; 6],
        };

        let (xy, uv) = gen_layer_buffers(&layer, &tileset(), 0, 3, 32, 32);
        assert!(xy.is_empty());
        assert!(uv.is_empty());
    }
}
