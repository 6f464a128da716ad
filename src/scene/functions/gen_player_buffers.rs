use crate::game::constants::*;
use crate::scene::scene_frame::SceneFrame;

/// Quad corner data for the player sprite, centered on its position.
/// Flipping mirrors the frame by swapping the left and right UVs.
pub fn gen_player_buffers(frame: &SceneFrame) -> (Vec<(f32, f32)>, Vec<(f32, f32)>) {
    let (w, h) = (PLAYER_FRAME_WIDTH as f32, PLAYER_FRAME_HEIGHT as f32);

    // Calculate xy.
    let x = frame.player_x - w / 2.;
    let y = frame.player_y - h / 2.;
    let xy_vec = vec![(x, y), (x + w, y), (x + w, y + h), (x, y + h)];

    // Calculate uv from the frame's cell in the sheet.
    let sheet_w = (PLAYER_SHEET_COLUMNS * PLAYER_FRAME_WIDTH) as f32;
    let sheet_h = PLAYER_FRAME_HEIGHT as f32;
    let px = (frame.player_frame % PLAYER_SHEET_COLUMNS * PLAYER_FRAME_WIDTH) as f32;
    let py = (frame.player_frame / PLAYER_SHEET_COLUMNS * PLAYER_FRAME_HEIGHT) as f32;
    let mut u0 = (px + 0.5) / sheet_w;
    let mut u1 = (px + w - 0.5) / sheet_w;
    let v0 = (py + 0.5) / sheet_h;
    let v1 = (py + h - 0.5) / sheet_h;
    if frame.player_flip_x {
        std::mem::swap(&mut u0, &mut u1);
    }
    let uv_vec = vec![(u0, v0), (u1, v0), (u1, v1), (u0, v1)];

    (xy_vec, uv_vec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(x: f32, y: f32, flip_x: bool, frame: u32) -> SceneFrame {
        SceneFrame {
            player_x: x,
            player_y: y,
            player_flip_x: flip_x,
            player_frame: frame,
        }
    }

    #[test]
    fn test_quad_is_centered_on_the_player() {
        let (xy, _) = gen_player_buffers(&frame(400., 300., false, 0));
        assert_eq!(xy, vec![(384., 276.), (416., 276.), (416., 324.), (384., 324.)]);
    }

    #[test]
    fn test_frame_selects_a_sheet_cell() {
        let (_, uv) = gen_player_buffers(&frame(0., 0., false, 2));
        // Frame 2 starts 64px into the 192px sheet.
        assert_eq!(uv[0], (64.5 / 192., 0.5 / 48.));
        assert_eq!(uv[2], (95.5 / 192., 47.5 / 48.));
    }

    #[test]
    fn test_flip_swaps_left_and_right_uvs() {
        let (_, straight) = gen_player_buffers(&frame(0., 0., false, 0));
        let (_, flipped) = gen_player_buffers(&frame(0., 0., true, 0));
        assert_eq!(flipped[0].0, straight[1].0);
        assert_eq!(flipped[1].0, straight[0].0);
        // Vertical coordinates are untouched.
        assert_eq!(flipped[0].1, straight[0].1);
    }

    #[test]
    fn test_flip_preserves_the_quad_position() {
        let (straight, _) = gen_player_buffers(&frame(123., 456., false, 3));
        let (flipped, _) = gen_player_buffers(&frame(123., 456., true, 3));
        assert_eq!(straight, flipped);
    }
}
