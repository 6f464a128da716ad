use std::collections::HashMap;

use crate::game::constants::*;

/// Immutable sprite sheet animation definition: an inclusive frame range
/// played back at a fixed rate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animation {
    pub first: u32,
    pub last: u32,
    pub frame_rate: f32, // Frames per second.
    pub looped: bool,
}

/// Named animation registry, filled once during scene construction.
pub struct AnimationSet {
    animations: HashMap<&'static str, Animation>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: &'static str, animation: Animation) {
        self.animations.insert(name, animation);
    }

    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }
}

/// Per sprite playback state. `play` resumes rather than restarts when the
/// named animation is already running; `stop` freezes the current frame
/// until the next `set_frame` or `play`.
#[derive(Copy, Clone, Debug)]
pub struct Playback {
    current: Option<&'static str>,
    running: bool,
    frame: u32,
    acc: f32, // Time into the current frame (in seconds).
}

impl Playback {
    pub fn new() -> Self {
        Self {
            current: None,
            running: false,
            frame: IDLE_FRAME,
            acc: 0.,
        }
    }

    pub fn play(&mut self, animations: &AnimationSet, name: &'static str) {
        // Already running this animation; leave it be.
        if self.running && self.current == Some(name) {
            return;
        }

        // Unknown names are ignored, like every other missing asset.
        if let Some(animation) = animations.get(name) {
            self.current = Some(name);
            self.running = true;
            self.frame = animation.first;
            self.acc = 0.;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn set_frame(&mut self, frame: u32) {
        self.frame = frame;
        self.acc = 0.;
    }

    pub fn advance(&mut self, animations: &AnimationSet, dt: f32) {
        if !self.running {
            return;
        }
        let animation = match self.current.and_then(|name| animations.get(name)) {
            Some(animation) => *animation,
            None => return,
        };

        // Step whole frames off the accumulator.
        let frame_len = 1. / animation.frame_rate;
        self.acc += dt;
        while self.acc >= frame_len {
            self.acc -= frame_len;
            if self.frame < animation.last {
                self.frame += 1;
            } else if animation.looped {
                self.frame = animation.first;
            }
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current(&self) -> Option<&'static str> {
        self.current
    }
}
