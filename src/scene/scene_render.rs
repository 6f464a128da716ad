use std::collections::HashMap;

use super::scene_frame::SceneFrame;
use crate::game::constants::*;
use crate::game::map::TileMap;

/// Static geometry for one (layer, tileset) pair, uploaded once.
struct LayerBatch {
    texture: &'static str,
    xy: ezgl::Buffer<(f32, f32)>,
    uv: ezgl::Buffer<(f32, f32)>,
    vertex_count: u32,
}

pub struct SceneRender {
    textures: HashMap<&'static str, ezgl::Texture2D>,
    programs: HashMap<&'static str, ezgl::Program>,

    // General purpose IBO.
    ibo: ezgl::Buffer<u16>,

    // Map state data, bottom layer first.
    layer_batches: Vec<LayerBatch>,

    // Player state data.
    player_xy: ezgl::Buffer<(f32, f32)>,
    player_uv: ezgl::Buffer<(f32, f32)>,
}

impl SceneRender {
    pub fn new() -> Self {
        // Prebuilt IBO for 512 quads.
        let mut vec = Vec::with_capacity(3072);
        for i in 0..512u16 {
            vec.extend_from_slice(&[4 * i, 4 * i + 1, 4 * i + 2, 4 * i + 2, 4 * i + 3, 4 * i]);
        }
        let ibo = ezgl::Buffer::from(ezgl::gl::ELEMENT_ARRAY_BUFFER, &vec);

        Self {
            textures: load_scene_textures(),
            programs: load_scene_programs(),

            ibo,

            layer_batches: Vec::new(),

            player_xy: ezgl::Buffer::new(),
            player_uv: ezgl::Buffer::new(),
        }
    }

    /// Upload the tile geometry once. Layers keep their document order, so
    /// walking the batches front to back paints bottom to top.
    pub fn upload_map(&mut self, map: &TileMap) {
        self.layer_batches.clear();
        for layer in &map.layers {
            for (tileset_index, tileset) in map.tilesets.iter().enumerate() {
                let (xy_vec, uv_vec) = super::functions::gen_layer_buffers(
                    layer,
                    tileset,
                    tileset_index,
                    map.width,
                    map.tile_width,
                    map.tile_height,
                );
                if xy_vec.is_empty() {
                    continue;
                }

                let mut xy = ezgl::Buffer::new();
                let mut uv = ezgl::Buffer::new();
                xy.init(ezgl::gl::ARRAY_BUFFER, &xy_vec[..]);
                uv.init(ezgl::gl::ARRAY_BUFFER, &uv_vec[..]);
                self.layer_batches.push(LayerBatch {
                    texture: tileset.texture,
                    xy,
                    uv,
                    vertex_count: xy_vec.len() as u32,
                });
            }
        }
    }

    pub fn render(&mut self, scene_frame: &SceneFrame) {
        // View calculation.
        let view = {
            use cgmath::*;
            let (w, h) = (VIEW_WIDTH as f32, VIEW_HEIGHT as f32);
            let mut matrix = Matrix3::identity();
            matrix = matrix * Matrix3::from_nonuniform_scale(2. / w, -2. / h);
            matrix = matrix * Matrix3::from_translation(Vector2::new(-w / 2., -h / 2.));
            matrix
        };

        // Render the map layers.
        for batch in &self.layer_batches {
            ezgl::Draw::start_tri_draw(
                batch.vertex_count / 2,
                &self.programs["textured"],
                &self.ibo,
            )
            .with_buffer(&batch.xy, "vert_xy")
            .with_buffer(&batch.uv, "vert_uv")
            .with_uniform(view.as_ref() as &[[f32; 3]; 3], "view_matrix")
            .with_texture(&self.textures[batch.texture], "quad_texture")
            .enable_blend(ezgl::gl::SRC_ALPHA, ezgl::gl::ONE_MINUS_SRC_ALPHA)
            .draw();
        }

        // Fill player buffers with data.
        let (xy_vec, uv_vec) = super::functions::gen_player_buffers(scene_frame);
        self.player_xy.init(ezgl::gl::ARRAY_BUFFER, &xy_vec[..]);
        self.player_uv.init(ezgl::gl::ARRAY_BUFFER, &uv_vec[..]);

        // Render the player above every layer.
        ezgl::Draw::start_tri_draw(2, &self.programs["textured"], &self.ibo)
            .with_buffer(&self.player_xy, "vert_xy")
            .with_buffer(&self.player_uv, "vert_uv")
            .with_uniform(view.as_ref() as &[[f32; 3]; 3], "view_matrix")
            .with_texture(&self.textures[PLAYER_TEXTURE], "quad_texture")
            .enable_blend(ezgl::gl::SRC_ALPHA, ezgl::gl::ONE_MINUS_SRC_ALPHA)
            .draw();
    }
}

fn load_scene_textures() -> HashMap<&'static str, ezgl::Texture2D> {
    let root = crate::io::get_root().join("resources");
    let mut hmap = HashMap::new();

    for &(_, texture_key, file) in TILESET_BINDINGS.iter() {
        let mut texture = ezgl::Texture2D::new();
        texture.load_from_file(&root.join(file)).unwrap();
        hmap.insert(texture_key, texture);
    }

    let mut texture = ezgl::Texture2D::new();
    texture.load_from_file(&root.join(PLAYER_SHEET_FILE)).unwrap();
    hmap.insert(PLAYER_TEXTURE, texture);

    hmap
}

fn load_scene_programs() -> HashMap<&'static str, ezgl::Program> {
    let root = crate::io::get_root().join("resources");
    let mut hmap = HashMap::new();

    let program = ezgl::ProgramBuilder::new()
        .with(ezgl::Shader::from_file(&root.join("textured.frag")).unwrap())
        .with(ezgl::Shader::from_file(&root.join("textured.vert")).unwrap())
        .build()
        .unwrap();
    hmap.insert("textured", program);

    hmap
}
