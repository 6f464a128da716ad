pub mod animation;
pub mod constants;
pub mod map;
pub mod player;
