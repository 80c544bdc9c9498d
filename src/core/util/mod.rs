pub mod hsv_to_rgb;
pub mod pixel_to_complex_coords;
