//! Sprite assets
//!
//! The simulation only needs to know how big each sprite is. Loaders either
//! hand out the built-in sizes or read them from the image headers in an
//! asset directory. Any failure here is fatal: the game does not start with
//! a missing sprite.

use std::fmt;
use std::path::PathBuf;

use glam::IVec2;

use crate::consts::{BALL_SPRITE_SIZE, FIST_SPRITE_SIZE};

/// Logical names of the sprites the game loads
pub const FIST_IMAGE: &str = "images/fist.bmp";
pub const BALL_IMAGE: &str = "images/ball.gif";

/// Largest sprite side accepted from an image header
pub const MAX_SPRITE_SIDE: i32 = 1024;

/// A loaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub name: String,
    pub size: IVec2,
}

/// Asset loading failures
#[derive(Debug)]
pub enum AssetError {
    /// The file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// The file is not an image we understand
    UnknownFormat { path: PathBuf },
    /// The header is present but unusable
    Corrupt { path: PathBuf, reason: &'static str },
    /// The loader has no asset by that name
    NotFound { name: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => {
                write!(f, "cannot load image {}: {source}", path.display())
            }
            AssetError::UnknownFormat { path } => {
                write!(f, "cannot load image {}: unknown format", path.display())
            }
            AssetError::Corrupt { path, reason } => {
                write!(f, "cannot load image {}: {reason}", path.display())
            }
            AssetError::NotFound { name } => write!(f, "no asset named {name}"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Resolves logical asset names to images
pub trait AssetLoader {
    fn load_image(&self, name: &str) -> Result<ImageInfo, AssetError>;
}

/// Sprites the game needs for a match
#[derive(Debug, Clone)]
pub struct Assets {
    pub fist: ImageInfo,
    pub ball: ImageInfo,
}

impl Assets {
    pub fn load(loader: &dyn AssetLoader) -> Result<Self, AssetError> {
        let fist = loader.load_image(FIST_IMAGE)?;
        let ball = loader.load_image(BALL_IMAGE)?;
        log::info!(
            "Loaded sprites: fist {}x{}, ball {}x{}",
            fist.size.x,
            fist.size.y,
            ball.size.x,
            ball.size.y
        );
        Ok(Self { fist, ball })
    }
}

/// Built-in sprite sizes - no files needed
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAssets;

impl AssetLoader for BuiltinAssets {
    fn load_image(&self, name: &str) -> Result<ImageInfo, AssetError> {
        let size = match name {
            FIST_IMAGE => FIST_SPRITE_SIZE,
            BALL_IMAGE => BALL_SPRITE_SIZE,
            _ => {
                return Err(AssetError::NotFound {
                    name: name.to_string(),
                });
            }
        };
        Ok(ImageInfo {
            name: name.to_string(),
            size,
        })
    }
}

/// Reads image dimensions from BMP and GIF headers under a data directory
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for DirectoryAssets {
    fn load_image(&self, name: &str) -> Result<ImageInfo, AssetError> {
        let path = self.root.join(name);
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;
        let size = image_size(&bytes).map_err(|err| match err {
            HeaderError::Unknown => AssetError::UnknownFormat { path: path.clone() },
            HeaderError::Corrupt(reason) => AssetError::Corrupt {
                path: path.clone(),
                reason,
            },
        })?;
        log::debug!("Read {} ({}x{})", path.display(), size.x, size.y);
        Ok(ImageInfo {
            name: name.to_string(),
            size,
        })
    }
}

enum HeaderError {
    Unknown,
    Corrupt(&'static str),
}

/// Pixel dimensions from a BMP or GIF header
fn image_size(bytes: &[u8]) -> Result<IVec2, HeaderError> {
    let (w, h) = if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        if bytes.len() < 10 {
            return Err(HeaderError::Corrupt("truncated GIF header"));
        }
        (
            u16::from_le_bytes([bytes[6], bytes[7]]) as i32,
            u16::from_le_bytes([bytes[8], bytes[9]]) as i32,
        )
    } else if bytes.starts_with(b"BM") {
        if bytes.len() < 26 {
            return Err(HeaderError::Corrupt("truncated BMP header"));
        }
        let w = i32::from_le_bytes([bytes[18], bytes[19], bytes[20], bytes[21]]);
        // Negative height marks a top-down bitmap
        let h = i32::from_le_bytes([bytes[22], bytes[23], bytes[24], bytes[25]]);
        (w, h.checked_abs().unwrap_or(0))
    } else {
        return Err(HeaderError::Unknown);
    };
    if w <= 0 || h <= 0 {
        return Err(HeaderError::Corrupt("zero-sized image"));
    }
    if w > MAX_SPRITE_SIDE || h > MAX_SPRITE_SIDE {
        return Err(HeaderError::Corrupt("image too large for a sprite"));
    }
    Ok(IVec2::new(w, h))
}
