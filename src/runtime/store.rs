use std::path::{Path, PathBuf};

use crate::formats::{read_image, write_image};
use crate::model::{ImageShape, LoadedImage};

use super::{AppError, PreconditionError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Original,
    Second,
    Processed,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Original, Slot::Second, Slot::Processed];

    fn index(self) -> usize {
        match self {
            Self::Original => 0,
            Self::Second => 1,
            Self::Processed => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Second => "Second",
            Self::Processed => "Result",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Empty,
    HasPrimary,
    HasPair,
}

/// The original, operand and result images of one editing session.
///
/// `processed` and `second` only exist while `original` does, and every
/// replacement of `original` clears both. Failed loads leave the store as it
/// was.
#[derive(Debug, Default)]
pub struct ImageStore {
    original: Option<LoadedImage>,
    second: Option<LoadedImage>,
    processed: Option<LoadedImage>,
    source_path: Option<PathBuf>,
    revisions: [u64; 3],
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_primary(&mut self, path: impl AsRef<Path>) -> Result<&LoadedImage> {
        let path = path.as_ref();
        let image = decode(path)?;
        log::info!("loaded {} ({})", path.display(), image.shape());
        self.source_path = Some(path.to_path_buf());
        Ok(self.install_original(image))
    }

    /// Loads an operand image and conforms it to the original's geometry
    /// and plane count.
    pub fn load_second(&mut self, path: impl AsRef<Path>) -> Result<&LoadedImage> {
        let path = path.as_ref();
        let target = self
            .original
            .as_ref()
            .map(LoadedImage::shape)
            .ok_or(PreconditionError::NoPrimaryImage)?;
        let decoded = decode(path)?;
        let decoded_shape = decoded.shape();
        let conformed = conform(decoded, target)?;
        if decoded_shape != target {
            log::info!(
                "conformed second image {} from {decoded_shape} to {target}",
                path.display()
            );
        }
        self.bump(Slot::Second);
        Ok(self.second.insert(conformed))
    }

    pub fn reset(&mut self) -> Result<&LoadedImage> {
        let path = self
            .source_path
            .clone()
            .ok_or(PreconditionError::NothingToReset)?;
        let image = decode(&path)?;
        log::info!("reset to {}", path.display());
        Ok(self.install_original(image))
    }

    pub fn clear_all(&mut self) {
        self.original = None;
        self.second = None;
        self.processed = None;
        self.source_path = None;
        Slot::ALL.into_iter().for_each(|slot| self.bump(slot));
    }

    pub fn set_processed(&mut self, image: LoadedImage) {
        self.bump(Slot::Processed);
        self.processed = Some(image);
    }

    /// Installs an operand as-is, without conforming it to the original.
    pub fn override_second(&mut self, image: LoadedImage) {
        self.bump(Slot::Second);
        self.second = Some(image);
    }

    pub fn require_primary(&self) -> std::result::Result<&LoadedImage, PreconditionError> {
        self.original
            .as_ref()
            .ok_or(PreconditionError::NoImageLoaded)
    }

    /// Both operands of a two-image command, re-checked for compatibility.
    pub fn require_pair(
        &self,
    ) -> std::result::Result<(&LoadedImage, &LoadedImage), PreconditionError> {
        let original = self.require_primary()?;
        let second = self
            .second
            .as_ref()
            .ok_or(PreconditionError::NoSecondImage)?;
        if original.shape() != second.shape() {
            return Err(PreconditionError::ShapeMismatch {
                original: original.shape(),
                second: second.shape(),
            });
        }
        Ok((original, second))
    }

    pub fn save_processed(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let processed = self
            .processed
            .as_ref()
            .ok_or(PreconditionError::NoProcessedImage)?;
        write_image(path, processed).map_err(|source| AppError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("saved result to {}", path.display());
        Ok(())
    }

    pub fn original(&self) -> Option<&LoadedImage> {
        self.original.as_ref()
    }

    pub fn second(&self) -> Option<&LoadedImage> {
        self.second.as_ref()
    }

    pub fn processed(&self) -> Option<&LoadedImage> {
        self.processed.as_ref()
    }

    pub fn get(&self, slot: Slot) -> Option<&LoadedImage> {
        match slot {
            Slot::Original => self.original(),
            Slot::Second => self.second(),
            Slot::Processed => self.processed(),
        }
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Increases every time the slot's content is replaced or cleared.
    pub fn revision(&self, slot: Slot) -> u64 {
        self.revisions[slot.index()]
    }

    pub fn state(&self) -> StoreState {
        match (&self.original, &self.second) {
            (None, _) => StoreState::Empty,
            (Some(_), None) => StoreState::HasPrimary,
            (Some(_), Some(_)) => StoreState::HasPair,
        }
    }

    fn install_original(&mut self, image: LoadedImage) -> &LoadedImage {
        self.second = None;
        self.processed = None;
        Slot::ALL.into_iter().for_each(|slot| self.bump(slot));
        self.original.insert(image)
    }

    fn bump(&mut self, slot: Slot) {
        let revision = &mut self.revisions[slot.index()];
        *revision = revision.wrapping_add(1);
    }
}

fn decode(path: &Path) -> Result<LoadedImage> {
    read_image(path).map_err(|source| AppError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn conform(image: LoadedImage, target: ImageShape) -> Result<LoadedImage> {
    let image = if image.plane_count() == target.planes {
        image
    } else {
        image.with_plane_count(target.planes)
    };
    image
        .resized(target.width, target.height)
        .map_err(|error| AppError::Operation(error.into()))
}
