pub mod converter;
pub mod hex_token;
pub mod mem_image;
pub mod pixel;
pub mod util;
