use serde::Deserialize;
use thiserror::Error;

use crate::game::constants::*;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("map has no layer named {0:?}")]
    MissingLayer(&'static str),
    #[error("map has no tileset named {0:?}")]
    MissingTileset(&'static str),
    #[error("layer {layer:?} holds gid {gid}, which no tileset covers")]
    BadGid { layer: &'static str, gid: u32 },
    #[error("malformed map document: {0}")]
    Document(#[from] serde_json::Error),
}

// Tiled JSON document model. Only the fields the game reads; the rest of
// the export is ignored.

#[derive(Deserialize, Clone, Debug)]
pub struct MapDocument {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    pub layers: Vec<LayerDocument>,
    pub tilesets: Vec<TilesetDocument>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LayerDocument {
    pub name: String,
    #[serde(default)]
    pub data: Vec<u32>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TilesetDocument {
    pub name: String,
    #[serde(rename = "firstgid")]
    pub first_gid: u32,
    #[serde(rename = "tilecount")]
    pub tile_count: u32,
    pub columns: u32,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    #[serde(rename = "imagewidth")]
    pub image_width: u32,
    #[serde(rename = "imageheight")]
    pub image_height: u32,
}

impl MapDocument {
    pub fn parse(json: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(json)?)
    }
}

// Runtime map model, built once per scene and immutable afterwards.

/// One tileset plus the texture key its image was registered under.
#[derive(Clone, Debug)]
pub struct Tileset {
    pub texture: &'static str,
    pub first_gid: u32,
    pub tile_count: u32,
    pub columns: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub image_width: u32,
    pub image_height: u32,
}

impl Tileset {
    /// UV rect (u0, v0, u1, v1) of a local tile id, inset half a texel so
    /// neighboring tiles never bleed across the edge.
    pub fn uv_rect(&self, local_id: u32) -> [f32; 4] {
        let px = (local_id % self.columns * self.tile_width) as f32;
        let py = (local_id / self.columns * self.tile_height) as f32;
        let w = self.image_width as f32;
        let h = self.image_height as f32;
        [
            (px + 0.5) / w,
            (py + 0.5) / h,
            (px + self.tile_width as f32 - 0.5) / w,
            (py + self.tile_height as f32 - 0.5) / h,
        ]
    }
}

/// A tile resolved to its tileset (index into `TileMap::tilesets`) and
/// the id within that tileset's grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub tileset: usize,
    pub local_id: u32,
}

/// One tile layer, cells in row major order, `None` where the map is empty.
#[derive(Clone, Debug)]
pub struct MapLayer {
    pub name: &'static str,
    pub cells: Vec<Option<Cell>>,
}

#[derive(Clone, Debug)]
pub struct TileMap {
    pub width: u32,
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Bottom first; render in this order.
    pub layers: Vec<MapLayer>,
    pub tilesets: Vec<Tileset>,
}

impl TileMap {
    /// Resolve a parsed document against the names the game requires.
    /// Layers and tilesets the game does not know are dropped; a missing
    /// required name or an uncovered gid fails the whole map.
    pub fn from_document(document: &MapDocument) -> Result<Self, MapError> {
        // Pull the required tilesets out in binding order.
        let mut tilesets = Vec::with_capacity(TILESET_BINDINGS.len());
        for &(name, texture, _) in TILESET_BINDINGS.iter() {
            let doc = document
                .tilesets
                .iter()
                .find(|tileset| tileset.name == name)
                .ok_or(MapError::MissingTileset(name))?;
            tilesets.push(Tileset {
                texture,
                first_gid: doc.first_gid,
                tile_count: doc.tile_count,
                columns: doc.columns,
                tile_width: doc.tile_width,
                tile_height: doc.tile_height,
                image_width: doc.image_width,
                image_height: doc.image_height,
            });
        }

        // Pull the required layers out in draw order, resolving each gid
        // to a (tileset, local id) pair.
        let mut layers = Vec::with_capacity(LAYER_NAMES.len());
        for &name in LAYER_NAMES.iter() {
            let doc = document
                .layers
                .iter()
                .find(|layer| layer.name == name)
                .ok_or(MapError::MissingLayer(name))?;
            let cells = doc
                .data
                .iter()
                .map(|&gid| resolve_gid(&tilesets, name, gid))
                .collect::<Result<_, _>>()?;
            layers.push(MapLayer { name, cells });
        }

        Ok(Self {
            width: document.width,
            height: document.height,
            tile_width: document.tile_width,
            tile_height: document.tile_height,
            layers,
            tilesets,
        })
    }
}

fn resolve_gid(
    tilesets: &[Tileset],
    layer: &'static str,
    gid: u32,
) -> Result<Option<Cell>, MapError> {
    // Gid 0 is the empty cell.
    if gid == 0 {
        return Ok(None);
    }
    tilesets
        .iter()
        .enumerate()
        .find(|(_, tileset)| {
            gid >= tileset.first_gid && gid < tileset.first_gid + tileset.tile_count
        })
        .map(|(index, tileset)| {
            Some(Cell {
                tileset: index,
                local_id: gid - tileset.first_gid,
            })
        })
        .ok_or(MapError::BadGid { layer, gid })
}
