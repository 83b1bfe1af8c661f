pub mod composite;
pub mod image_io;
pub mod pixel;
pub mod rasterize;
pub mod sample;
pub mod surface;
