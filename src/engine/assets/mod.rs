// Asset loading
//
// Loads the sprite sheet once at startup and addresses frames inside it.

mod atlas;
mod sheet;

pub use atlas::FrameRect;
pub use sheet::SpriteSheet;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
