pub mod config;
pub mod lfsr;
pub mod plot;
#[cfg(feature = "window")]
pub mod window;

pub use self::lfsr::{generate, Lfsr};
