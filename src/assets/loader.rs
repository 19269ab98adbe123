//! Wall-texture decoding.
//!
//! Image files are a startup concern only: decode once, convert to the
//! bank's ARGB layout, and never touch the filesystem again.  A missing
//! or malformed file is a configuration error — callers log it and fall
//! back to the bank's checkerboard rather than aborting.

use std::path::Path;

use crate::world::Texture;

/// Things that can go wrong turning an image file into a [`Texture`].
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to decode texture image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode `path` into bank-ready ARGB texels.
pub fn load_wall_texture(path: &Path) -> Result<Texture, AssetError> {
    let rgba = image::open(path)?.to_rgba8();
    let (w, h) = rgba.dimensions();

    let pixels = rgba
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            u32::from_be_bytes([a, r, g, b])
        })
        .collect();

    Ok(Texture {
        w: w as usize,
        h: h as usize,
        pixels,
    })
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = load_wall_texture(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, AssetError::Decode(_)));
    }
}
