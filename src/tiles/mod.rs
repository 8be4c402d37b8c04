pub mod layers;
pub mod tile_url;
