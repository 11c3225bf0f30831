use super::constants::{FABRIC_ACCENT_SPACING, FABRIC_FOLD_SPACING};

// Fabric palette
const EDGE_RED: [u8; 3] = [0xA0, 0x00, 0x1A];
const CENTER_RED: [u8; 3] = [0x8B, 0x00, 0x00];
const FOLD_DARK: [u8; 3] = [0x5D, 0x00, 0x00];
const FOLD_LIGHT: [u8; 3] = [0xC4, 0x1E, 0x3A];
const ACCENT_GOLD: [u8; 3] = [0xFF, 0xD7, 0x00];

// (first x, spacing, stroke width, colour), painted in order
const STRIPES: [(u32, u32, f32, [u8; 3]); 3] = [
    (0, FABRIC_FOLD_SPACING, 4.0, FOLD_DARK),
    (12, FABRIC_FOLD_SPACING, 2.0, FOLD_LIGHT),
    (6, FABRIC_ACCENT_SPACING, 1.0, ACCENT_GOLD),
];

/// Colour of pixel column `x` in a fabric texture `size` pixels wide.
///
/// The pattern only varies horizontally: an edge-centre-edge red gradient with
/// vertical fold strokes centred on their x positions.
pub fn fabric_column(x: u32, size: u32) -> [u8; 3] {
    let mut rgb = gradient(x, size);
    let (left, right) = (x as f32, x as f32 + 1.0);
    for (start, spacing, width, color) in STRIPES {
        let half = width * 0.5;
        let mut line = start;
        while line < size {
            // any overlap between the pixel and the stroke paints it
            if right > line as f32 - half && left < line as f32 + half {
                rgb = color;
            }
            line += spacing;
        }
    }
    rgb
}

fn gradient(x: u32, size: u32) -> [u8; 3] {
    let u = if size > 1 {
        x as f32 / (size - 1) as f32
    } else {
        0.0
    };
    // 0 -> edge, 0.5 -> centre, 1 -> edge
    let w = 1.0 - (2.0 * u - 1.0).abs();
    let mut out = [0u8; 3];
    for i in 0..3 {
        let a = EDGE_RED[i] as f32;
        let b = CENTER_RED[i] as f32;
        out[i] = (a + (b - a) * w).round() as u8;
    }
    out
}

/// Square RGBA8 fabric texture, row-major.
pub fn curtain_fabric_rgba(size: u32) -> Vec<u8> {
    let row: Vec<[u8; 3]> = (0..size).map(|x| fabric_column(x, size)).collect();
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for _ in 0..size {
        for rgb in &row {
            pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 0xFF]);
        }
    }
    pixels
}
