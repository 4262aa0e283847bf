//! Cell color palette
//!
//! Colors are packed 0xAABBGGRR so the buffer can be blitted straight into
//! an RGBA8 canvas ImageData without per-pixel swizzling.

/// Pack 8-bit RGB into the 0xAABBGGRR layout with full alpha.
pub const fn pack_abgr(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

/// Bone-dry land, wheat-like rgb(245, 222, 179).
pub const DRY_LAND_COLOR: u32 = pack_abgr(245, 222, 179);

/// Fully saturated land, dark loam rgb(60, 30, 10).
pub const WET_LAND_COLOR: u32 = pack_abgr(60, 30, 10);

/// Water cells, dodger blue rgb(30, 144, 255).
pub const WATER_COLOR: u32 = pack_abgr(30, 144, 255);

const DRY_RGB: [f32; 3] = [245.0, 222.0, 179.0];
const WET_RGB: [f32; 3] = [60.0, 30.0, 10.0];

/// Land color for a moisture value in [0, 1], lerped per channel between
/// the dry and wet endpoints.
pub fn land_color(moisture: f32) -> u32 {
    let m = moisture.clamp(0.0, 1.0);
    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = (DRY_RGB[i] + (WET_RGB[i] - DRY_RGB[i]) * m).round() as u8;
    }
    pack_abgr(rgb[0], rgb[1], rgb[2])
}
