pub mod error;
mod functions;
pub mod input_event;
pub mod scene_frame;
pub mod scene_render;

use log::{debug, info};

use self::error::SceneError;
use self::input_event::*;
use self::scene_frame::SceneFrame;
use crate::game::animation::{Animation, AnimationSet};
use crate::game::constants::*;
use crate::game::map::{MapDocument, TileMap};
use crate::game::player::*;

/// Scene lifecycle. Loading and building run once, in that order, before
/// the scene starts ticking; shutdown is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScenePhase {
    Load,
    Build,
    Run,
    Shutdown,
}

/// The live game state, stepped at a fixed rate while the scene runs.
pub struct SceneWorld {
    pub player: Player,
    pub animations: AnimationSet,
    pub keys: HeldKeys,
}

pub struct Scene {
    phase: ScenePhase,
    map: Option<TileMap>,
    world: Option<SceneWorld>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            phase: ScenePhase::Load,
            map: None,
            world: None,
        }
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn map(&self) -> Option<&TileMap> {
        self.map.as_ref()
    }

    pub fn world(&self) -> Option<&SceneWorld> {
        self.world.as_ref()
    }

    /// Read and resolve the map document. Advances the scene to the build
    /// phase; any missing or malformed asset fails the whole scene.
    pub fn load(&mut self) -> Result<(), SceneError> {
        if self.phase != ScenePhase::Load {
            return Err(SceneError::Phase {
                op: "load",
                found: self.phase,
            });
        }

        let path = crate::io::get_root().join("resources").join(MAP_FILE);
        let json = std::fs::read_to_string(&path).map_err(|source| SceneError::Io {
            path: path.clone(),
            source,
        })?;
        let document = MapDocument::parse(&json)?;
        let map = TileMap::from_document(&document)?;
        debug!(
            "[Scene] Layers: {:?}.",
            map.layers.iter().map(|layer| layer.name).collect::<Vec<_>>()
        );
        debug!(
            "[Scene] Tilesets: {:?}.",
            map.tilesets
                .iter()
                .map(|tileset| tileset.texture)
                .collect::<Vec<_>>()
        );
        info!(
            "[Scene] Loaded {:?}: {} layers, {} tilesets.",
            MAP_FILE,
            map.layers.len(),
            map.tilesets.len()
        );

        self.map = Some(map);
        self.phase = ScenePhase::Build;
        Ok(())
    }

    /// Construct the world: spawn the player and register its animations.
    /// Advances the scene to the run phase.
    pub fn build(&mut self) -> Result<(), SceneError> {
        if self.phase != ScenePhase::Build {
            return Err(SceneError::Phase {
                op: "build",
                found: self.phase,
            });
        }

        let mut animations = AnimationSet::new();
        animations.insert(
            RUN_ANIMATION,
            Animation {
                first: RUN_FIRST_FRAME,
                last: RUN_LAST_FRAME,
                frame_rate: RUN_FRAME_RATE,
                looped: true,
            },
        );

        let mut player = Player::new(PLAYER_START_X, PLAYER_START_Y);
        player.playback.set_frame(IDLE_FRAME);

        self.world = Some(SceneWorld {
            player,
            animations,
            keys: HeldKeys::default(),
        });
        self.phase = ScenePhase::Run;
        info!(
            "[Scene] Built world, player at ({}, {}).",
            PLAYER_START_X, PLAYER_START_Y
        );
        Ok(())
    }

    /// Advance the world by one fixed frame. Outside the run phase this is
    /// a no-op.
    pub fn step(&mut self, frametime: u64) {
        if self.phase != ScenePhase::Run {
            return;
        }
        let dt = frametime as f32 / 1_000_000.;
        if let Some(world) = self.world.as_mut() {
            step_world(world, dt);
        }
    }

    pub fn handle_input(&mut self, input: InputEvent) {
        match input {
            InputEvent::Close => self.shutdown(),
            InputEvent::KeyEvent(state, key) => {
                if self.phase != ScenePhase::Run {
                    return;
                }
                let world = match self.world.as_mut() {
                    Some(world) => world,
                    None => return,
                };
                let held = matches!(state, KeyState::Down);
                match key {
                    InputKey::Left => world.keys.left = held,
                    InputKey::Right => world.keys.right = held,
                    InputKey::Up => world.keys.up = held,
                    InputKey::Down => world.keys.down = held,
                }
            }
        }
    }

    /// Snapshot of the drawable state, available while the scene runs.
    pub fn frame(&self) -> Option<SceneFrame> {
        if self.phase != ScenePhase::Run {
            return None;
        }
        self.world.as_ref().map(|world| SceneFrame {
            player_x: world.player.x,
            player_y: world.player.y,
            player_flip_x: world.player.flip_x,
            player_frame: world.player.playback.frame(),
        })
    }

    /// Tear the scene down. Calling this again is a no-op.
    pub fn shutdown(&mut self) {
        if self.phase == ScenePhase::Shutdown {
            return;
        }
        self.world = None;
        self.map = None;
        self.phase = ScenePhase::Shutdown;
        info!("[Scene] Shutdown.");
    }
}

/// One fixed step: resolve the held keys to a direction, apply it to the
/// player, then integrate and animate.
pub fn step_world(world: &mut SceneWorld, dt: f32) {
    let dir = resolve_direction(&world.keys);
    apply_move(&mut world.player, &world.animations, dir);
    integrate_player(&mut world.player, dt);
    world.player.playback.advance(&world.animations, dt);
}
