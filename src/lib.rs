pub mod cli;
pub mod records;
pub mod render;
pub mod shape_coding;
pub mod spiral;
