// View:
pub const VIEW_WIDTH: u32 = 800; // Viewport width (in pixels).
pub const VIEW_HEIGHT: u32 = 600; // Viewport height (in pixels).
pub const FRAME_TIME: u64 = 16_666; // Simulation frame length (in microseconds).

// Tiles:
pub const TILE_SIZE: u32 = 32; // Tile size (in pixels).

// Player:
pub const PLAYER_SPEED: f32 = 200.; // Walk speed (in pixels per second).
pub const PLAYER_START_X: f32 = 400.; // Spawn point (in pixels, sprite center).
pub const PLAYER_START_Y: f32 = 300.;
pub const PLAYER_FRAME_WIDTH: u32 = 32; // Sprite sheet frame size (in pixels).
pub const PLAYER_FRAME_HEIGHT: u32 = 48;
pub const PLAYER_SHEET_COLUMNS: u32 = 6; // Frames per sprite sheet row.

// Run animation:
pub const RUN_ANIMATION: &str = "run";
pub const RUN_FIRST_FRAME: u32 = 0;
pub const RUN_LAST_FRAME: u32 = 5;
pub const RUN_FRAME_RATE: f32 = 10.; // Playback rate (in frames per second).
pub const IDLE_FRAME: u32 = 0; // Displayed frame while standing still.

// Asset files (relative to resources/):
pub const MAP_FILE: &str = "map1.json";
pub const PLAYER_TEXTURE: &str = "player";
pub const PLAYER_SHEET_FILE: &str = "Running (32 x 48).png";

// Map layer names, bottom first. Draw order follows this order.
pub const LAYER_NAMES: [&str; 7] = [
    "ground",
    "grass",
    "farm",
    "farm_up",
    "water",
    "water_grass",
    "building",
];

// Tileset bindings: (name in the map document, texture key, image file).
pub const TILESET_BINDINGS: [(&str, &str, &str); 5] = [
    (
        "[A]WaterFall_pipo",
        "WaterFall",
        "Pipoya RPG Tileset 32x32/SampleMap/[A]WaterFall_pipo.png",
    ),
    (
        "[Base]BaseChip_pipo",
        "BaseChip",
        "Pipoya RPG Tileset 32x32/SampleMap/[Base]BaseChip_pipo.png",
    ),
    (
        "[A]Grass_pipo",
        "Grass",
        "Pipoya RPG Tileset 32x32/SampleMap/[A]Grass_pipo.png",
    ),
    (
        "[A]Water_pipo",
        "Water",
        "Pipoya RPG Tileset 32x32/SampleMap/[A]Water_pipo.png",
    ),
    (
        "[A]Flower_pipo",
        "Flower",
        "Pipoya RPG Tileset 32x32/SampleMap/[A]Flower_pipo.png",
    ),
];
