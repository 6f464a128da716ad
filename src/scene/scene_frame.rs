/// Everything the renderer needs to draw one frame. The map never changes
/// after the build phase, so only the player sprite travels here.
pub struct SceneFrame {
    // Player sprite:
    pub player_x: f32,
    pub player_y: f32,
    pub player_flip_x: bool,
    pub player_frame: u32,
}
