pub mod map_view;
pub mod panels;
pub mod solar_view;
pub mod textures;
