pub mod analysis;
pub mod bands;
pub mod downmix;
pub mod spectrum;
pub mod wav;
