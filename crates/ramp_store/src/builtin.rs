//! Builtin ramps expanded from anchor control points.
//!
//! Anchors are evenly spaced along the ramp; intermediate entries are
//! linear blends of the surrounding pair. 256 entries gives the color
//! mapper more than enough index resolution for 8-bit output.

use contracts::{ColorRamp, Rgba};

const BUILTIN_LEN: usize = 256;

/// Expand evenly spaced anchors into a full-length ramp.
fn expand(name: &str, anchors: &[Rgba]) -> ColorRamp {
    debug_assert!(anchors.len() >= 2);
    let segments = anchors.len() - 1;
    let colors = (0..BUILTIN_LEN)
        .map(|i| {
            let pos = i as f32 / (BUILTIN_LEN - 1) as f32 * segments as f32;
            let seg = (pos.floor() as usize).min(segments - 1);
            anchors[seg].lerp(anchors[seg + 1], pos - seg as f32)
        })
        .collect();
    // BUILTIN_LEN > 0, so the expanded color list is never empty
    ColorRamp::new(name, colors).expect("builtin ramp is non-empty")
}

fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    Rgba::from_rgb8(r, g, b)
}

/// All builtin ramps.
pub fn builtin_ramps() -> Vec<ColorRamp> {
    vec![jet(), plasma(), viridis(), grayscale()]
}

/// Classic blue-cyan-yellow-red rainbow.
fn jet() -> ColorRamp {
    expand(
        "jet",
        &[
            rgb(0, 0, 143),
            rgb(0, 0, 255),
            rgb(0, 255, 255),
            rgb(0, 255, 0),
            rgb(255, 255, 0),
            rgb(255, 0, 0),
            rgb(128, 0, 0),
        ],
    )
}

/// Perceptually ordered purple-orange-yellow.
fn plasma() -> ColorRamp {
    expand(
        "plasma",
        &[
            rgb(13, 8, 135),
            rgb(84, 2, 163),
            rgb(139, 10, 165),
            rgb(185, 50, 137),
            rgb(219, 92, 104),
            rgb(244, 136, 73),
            rgb(254, 188, 43),
            rgb(240, 249, 33),
        ],
    )
}

/// Perceptually uniform dark-blue-green-yellow.
fn viridis() -> ColorRamp {
    expand(
        "viridis",
        &[
            rgb(68, 1, 84),
            rgb(72, 40, 120),
            rgb(62, 74, 137),
            rgb(49, 104, 142),
            rgb(38, 130, 142),
            rgb(31, 158, 137),
            rgb(53, 183, 121),
            rgb(109, 205, 89),
            rgb(180, 222, 44),
            rgb(253, 231, 37),
        ],
    )
}

/// Linear black-to-white.
fn grayscale() -> ColorRamp {
    expand("grayscale", &[rgb(0, 0, 0), rgb(255, 255, 255)])
}
