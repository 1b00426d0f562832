pub mod image_source;

pub use image_source::{decode_rgba, load_image, DecodedImage, ImageSource};
