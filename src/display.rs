mod render;

#[cfg(test)]
mod tests;

pub use render::{Bitmap, DisplayConfig, fit_within, render, render_with};
