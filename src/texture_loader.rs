use std::collections::BTreeMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, info, warn};

/// Handle of a texture held by [`Assets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// Name of the portrait used when a credited person has none.
pub const DEFAULT_PORTRAIT: &str = "default";

/// Texture cache for everything the desktops draw.
#[derive(Default)]
pub struct Assets {
    textures: Vec<Texture2D>,
    portraits: BTreeMap<String, ImageId>,
    jobs: Option<ImageId>,
    carrier: Option<ImageId>,
    background: Option<ImageId>,
}

impl Assets {
    /// Loads the asset tree below `root`.
    ///
    /// Portraits are best effort. The sprite sheets count as game data: when a
    /// sheet is installed but cannot be loaded the whole load fails.
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, root: &Path) -> Result<Self> {
        let mut assets = Self::default();

        if !root.is_dir() {
            warn!("Asset directory {} not found, drawing without textures", root.display());
            return Ok(assets);
        }

        for (name, path) in index_images(&root.join("credits"))? {
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => {
                    let id = assets.push(texture);
                    assets.portraits.insert(name, id);
                }
                Err(e) => warn!("Skipping portrait {}: {:#}", path.display(), e),
            }
        }

        assets.jobs = assets.load_optional(rl, thread, &root.join("bobs").join("jobs.png"))?;
        assets.carrier = assets.load_optional(rl, thread, &root.join("bobs").join("carrier.png"))?;
        assets.background = assets.load_optional(rl, thread, &root.join("backgrounds").join("credits.png"))?;

        info!(
            "Loaded {} textures ({} portraits) from {}",
            assets.textures.len(),
            assets.portraits.len(),
            root.display()
        );
        Ok(assets)
    }

    fn push(&mut self, texture: Texture2D) -> ImageId {
        self.textures.push(texture);
        ImageId(self.textures.len() - 1)
    }

    fn load_optional(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, path: &Path) -> Result<Option<ImageId>> {
        if !path.is_file() {
            debug!("{} not installed", path.display());
            return Ok(None);
        }
        let texture = load_texture_with_exif_rotation(rl, thread, path)?;
        Ok(Some(self.push(texture)))
    }

    pub fn texture(&self, id: ImageId) -> Option<&Texture2D> {
        self.textures.get(id.0)
    }

    /// Portrait `name`, or the default portrait when `name` has none.
    pub fn portrait_or_default(&self, name: &str) -> Option<ImageId> {
        self.portraits
            .get(name)
            .or_else(|| self.portraits.get(DEFAULT_PORTRAIT))
            .copied()
    }

    pub fn jobs_sheet(&self) -> Option<&Texture2D> {
        self.jobs.and_then(|id| self.texture(id))
    }

    pub fn carrier_sheet(&self) -> Option<&Texture2D> {
        self.carrier.and_then(|id| self.texture(id))
    }

    pub fn background(&self) -> Option<ImageId> {
        self.background
    }
}

fn is_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp"),
        None => false,
    }
}

// --- Helper: Index images of a directory by lowercase file stem ---
pub fn index_images(dir_path: &Path) -> Result<BTreeMap<String, PathBuf>> {
    let mut images = BTreeMap::new();
    if !dir_path.is_dir() {
        return Ok(images);
    }

    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if !path.is_file() || !is_image(&path) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            // First one wins when the same name exists in several formats
            images.entry(stem.to_lowercase()).or_insert(path);
        }
    }
    Ok(images)
}

// --- Read the EXIF orientation of a JPEG, 1 when unknown ---
fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!("No EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to load image data for {}: {}", image_path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are drawn as stored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}
