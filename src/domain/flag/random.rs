//! Uniform random helpers over an explicit RNG

use rand::Rng;

use super::entity::Color;

/// Uniform integer in `[0, max)`; zero when the range is empty
pub fn rand_int<R: Rng + ?Sized>(rng: &mut R, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    rng.gen_range(0..max)
}

/// Uniform integer in `[min, max)`; `min` when the range is empty
pub fn rand_int_between<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    rand_int(rng, max.saturating_sub(min)) + min
}

/// Random `#rrggbb` color, each channel uniform in 0..=255
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_rgb(rng.r#gen(), rng.r#gen(), rng.r#gen())
}
