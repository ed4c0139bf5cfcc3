pub mod encode;

pub use encode::encode_rgba_png;
