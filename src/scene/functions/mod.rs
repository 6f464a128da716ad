pub mod gen_layer_buffers;
pub mod gen_player_buffers;

pub use self::gen_layer_buffers::*;
pub use self::gen_player_buffers::*;
