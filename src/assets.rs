use crate::error::GameError;
use log::info;
use macroquad::prelude::{FilterMode, Image, Texture2D};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Asset;

pub const SUBMARINE_TEXTURE: &str = "submarine.png";
pub const TANK_TEXTURE: &str = "tank.png";
pub const HAZARD_TEXTURE: &str = "hazard.png";
pub const DOOR_TEXTURE: &str = "door.png";
pub const BUBBLE_TEXTURE: &str = "bubble.png";

pub fn get_asset_bytes(name: &str) -> Option<Cow<'static, [u8]>> {
    Asset::get(name).map(|f| f.data)
}

/// Where textures are read from: the bundle compiled into the binary, or a
/// directory given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Embedded,
    Directory(PathBuf),
}

impl AssetSource {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        dir.map_or(AssetSource::Embedded, AssetSource::Directory)
    }

    fn describe(&self) -> String {
        match self {
            AssetSource::Embedded => "embedded assets".to_string(),
            AssetSource::Directory(dir) => dir.display().to_string(),
        }
    }

    pub fn read(&self, name: &str) -> Result<Cow<'static, [u8]>, GameError> {
        let bytes = match self {
            AssetSource::Embedded => get_asset_bytes(name),
            AssetSource::Directory(dir) => fs::read(dir.join(name)).ok().map(Cow::Owned),
        };
        bytes.ok_or_else(|| GameError::MissingAsset {
            name: name.to_string(),
            source_desc: self.describe(),
        })
    }
}

// Every sprite the renderer draws
pub struct Textures {
    pub submarine: Texture2D,
    pub tank: Texture2D,
    pub hazard: Texture2D,
    pub door: Texture2D,
    pub bubble: Texture2D,
}

impl Textures {
    /// Loads and uploads all sprites. Needs a live graphics context.
    pub fn load(source: &AssetSource) -> Result<Self, GameError> {
        info!("Loading textures from {}", source.describe());
        Ok(Textures {
            submarine: load_texture(source, SUBMARINE_TEXTURE)?,
            tank: load_texture(source, TANK_TEXTURE)?,
            hazard: load_texture(source, HAZARD_TEXTURE)?,
            door: load_texture(source, DOOR_TEXTURE)?,
            bubble: load_texture(source, BUBBLE_TEXTURE)?,
        })
    }
}

fn load_texture(source: &AssetSource, name: &str) -> Result<Texture2D, GameError> {
    let bytes = source.read(name)?;
    let image = Image::from_file_with_format(&bytes, None).map_err(|e| GameError::TextureDecode {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Linear);
    info!("Loaded texture '{}' ({}x{})", name, image.width, image.height);
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TEXTURES: [&str; 5] = [
        SUBMARINE_TEXTURE,
        TANK_TEXTURE,
        HAZARD_TEXTURE,
        DOOR_TEXTURE,
        BUBBLE_TEXTURE,
    ];

    #[test]
    fn test_embedded_textures_present() {
        for name in ALL_TEXTURES {
            let bytes = AssetSource::Embedded.read(name).expect("embedded texture");
            // PNG signature
            assert_eq!(&bytes[..4], b"\x89PNG", "{} is not a PNG", name);
        }
    }

    #[test]
    fn test_missing_embedded_asset() {
        let err = AssetSource::Embedded.read("missing.png").unwrap_err();
        assert!(matches!(err, GameError::MissingAsset { ref name, .. } if name == "missing.png"));
    }

    #[test]
    fn test_directory_source() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
        let source = AssetSource::from_dir(Some(dir));
        assert!(source.read(DOOR_TEXTURE).is_ok());

        let empty = AssetSource::Directory(PathBuf::from("/nonexistent/oxygen-maze"));
        let err = empty.read(DOOR_TEXTURE).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/oxygen-maze"));
    }

    #[test]
    fn test_from_dir_defaults_to_embedded() {
        assert_eq!(AssetSource::from_dir(None), AssetSource::Embedded);
    }
}
