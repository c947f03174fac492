mod fs;
mod hash;

pub use fs::{copier_header_len, duplicate_image, is_same_image};
pub use hash::image_sha256;
