//! QR code for the shortened link
//!
//! Terminal rendering packs two modules per cell with half blocks. Colours
//! are inverted so the code reads correctly on a dark terminal background.

use std::path::Path;

use qrcode::QrCode;
use qrcode::render::{svg, unicode};

use crate::errors::Result;

/// Text rows of the QR code, quiet zone included
pub fn render_lines(data: &str) -> Result<Vec<String>> {
    let code = QrCode::new(data.as_bytes())?;
    let image = code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build();
    Ok(image.lines().map(str::to_string).collect())
}

pub fn render_svg(data: &str) -> Result<String> {
    let code = QrCode::new(data.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(256, 256)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

pub fn save_svg(data: &str, path: &Path) -> Result<()> {
    let svg = render_svg(data)?;
    std::fs::write(path, svg)?;
    Ok(())
}
