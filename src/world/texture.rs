// Format-agnostic repository of wall textures decoded by the asset
// loader.  The renderer and map logic interact through ids only.

use std::collections::HashMap;

use super::grid::MaterialId;

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` whose pixels are the checkerboard fallback.
/// Always = 0 because [`TextureBank::new`] inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// CPU-side storage: 32-bit **ARGB** (0xAARRGGBB) in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<u32>,
}

/// Convenience checkerboard 8×8 (dark/light grey).
impl Default for Texture {
    fn default() -> Self {
        const LIGHT: u32 = 0xFF_9A9A9A;
        const DARK: u32 = 0xFF_4A4A4A;
        let mut pix = vec![0u32; 8 * 8];
        for y in 0..8 {
            for x in 0..8 {
                pix[y * 8 + x] = if (x ^ y) & 1 == 0 { LIGHT } else { DARK };
            }
        }
        Texture {
            w: 8,
            h: 8,
            pixels: pix,
        }
    }
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),
}

/// Cache of decoded textures plus the material → texture binding the
/// ray caster samples through.
///
/// * Does **not** know about PNG or windowing — that's the loader's job.
/// * Stores exactly one copy of every name.
/// * ID **0** is always the "missing" checkerboard, and unbound wall
///   materials resolve to it.
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    by_material: HashMap<MaterialId, TextureId>,
    data: Vec<Texture>,
}

impl TextureBank {
    /// Create a bank whose fallback texture is `missing_tex`, inserted
    /// under the fixed name `"MISSING"` with handle **0**.
    pub fn new(missing_tex: Texture) -> Self {
        let mut by_name = HashMap::new();
        by_name.insert("MISSING".into(), NO_TEXTURE);
        Self {
            by_name,
            by_material: HashMap::new(),
            data: vec![missing_tex],
        }
    }

    pub fn default_with_checker() -> Self {
        Self::new(Texture::default())
    }

    /// Number of textures stored (including the "missing" one).
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.len() == 1
    } // only checker

    /// Obtain the id for a *loaded* texture by name.
    /// Returns `None` if the name is unknown.
    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Borrow a texture by id, falling back to the checkerboard for an
    /// out-of-range id.
    pub fn texture_or_missing(&self, id: TextureId) -> &Texture {
        self.data.get(id as usize).unwrap_or(&self.data[0])
    }

    /// Bind a wall material to a texture, replacing any earlier binding.
    pub fn bind_material(&mut self, material: MaterialId, id: TextureId) -> Result<(), TextureError> {
        if id as usize >= self.data.len() {
            return Err(TextureError::BadId(id));
        }
        self.by_material.insert(material, id);
        Ok(())
    }

    /// Texture bound to `material`; unbound materials resolve to the
    /// checkerboard.
    pub fn material_texture(&self, material: MaterialId) -> TextureId {
        self.by_material.get(&material).copied().unwrap_or(NO_TEXTURE)
    }

    /// Insert a texture under `name`.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the name already exists (`Duplicate`).
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        tex: Texture,
    ) -> Result<TextureId, TextureError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TextureError::Duplicate(name));
        }
        let id = self.data.len() as TextureId;
        self.data.push(tex);
        self.by_name.insert(name, id);
        Ok(id)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_tex(color: u32) -> Texture {
        Texture {
            w: 2,
            h: 2,
            pixels: vec![color; 4],
        }
    }

    #[test]
    fn insert_and_lookup() {
        let mut bank = TextureBank::default_with_checker();
        let red = bank.insert("RED", dummy_tex(0xFF_FF0000)).unwrap();
        let blue = bank.insert("BLUE", dummy_tex(0xFF_0000FF)).unwrap();

        assert_ne!(red, NO_TEXTURE);
        assert_ne!(blue, red);
        assert_eq!(bank.id("RED"), Some(red));
        assert_eq!(bank.id("BLUE"), Some(blue));
        assert_eq!(bank.id("NOPE"), None);

        assert_eq!(bank.texture(red).unwrap().pixels[0], 0xFF_FF0000);
        assert_eq!(bank.texture(blue).unwrap().pixels[0], 0xFF_0000FF);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut bank = TextureBank::default_with_checker();
        bank.insert("WOOD", dummy_tex(1)).unwrap();
        let err = bank.insert("WOOD", dummy_tex(2)).unwrap_err();
        assert_eq!(err, TextureError::Duplicate("WOOD".into()));
        // texture count still 2 (checker + first WOOD)
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn bad_id_guard() {
        let bank = TextureBank::default_with_checker();
        let bad = TextureId::MAX;
        assert_eq!(bank.texture(bad).unwrap_err(), TextureError::BadId(bad));
        assert_eq!(bank.texture_or_missing(bad).w, 8);
    }

    #[test]
    fn material_binding_falls_back_to_checker() {
        let mut bank = TextureBank::default_with_checker();
        let brick = bank.insert("BRICK", dummy_tex(0xFF_802020)).unwrap();

        assert_eq!(bank.material_texture(1), NO_TEXTURE);
        bank.bind_material(1, brick).unwrap();
        assert_eq!(bank.material_texture(1), brick);

        assert_eq!(
            bank.bind_material(2, TextureId::MAX).unwrap_err(),
            TextureError::BadId(TextureId::MAX)
        );
    }
}
