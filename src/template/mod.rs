//! Gesture templates and the template store.
//!
//! The store is loaded once at startup and read-only afterwards: one
//! template per gesture subdirectory, labeled by the subdirectory name.
//! Subdirectories and candidate files are visited in lexicographic order so
//! loading the same directory twice yields the same ordered set.

use crate::image::{ImageView, OwnedImage};
use crate::util::GestMatchResult;

mod plan;

pub use plan::SqdiffPlan;

/// Named grayscale template, immutable after load.
pub struct Template {
    label: String,
    img: OwnedImage,
}

impl Template {
    /// Creates a template from a contiguous grayscale buffer.
    pub fn new(
        label: impl Into<String>,
        data: Vec<u8>,
        width: usize,
        height: usize,
    ) -> GestMatchResult<Self> {
        let img = OwnedImage::new(data, width, height)?;
        Ok(Self {
            label: label.into(),
            img,
        })
    }

    /// Creates a template from an owned image.
    pub fn from_image(label: impl Into<String>, img: OwnedImage) -> Self {
        Self {
            label: label.into(),
            img,
        }
    }

    /// Returns the gesture label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the template width in pixels.
    pub fn width(&self) -> usize {
        self.img.width()
    }

    /// Returns the template height in pixels.
    pub fn height(&self) -> usize {
        self.img.height()
    }

    /// Returns a borrowed view of the template data.
    pub fn view(&self) -> ImageView<'_, u8> {
        self.img.view()
    }
}

/// Ordered, read-only collection of gesture templates.
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Creates a store from preloaded templates, preserving their order.
    pub fn from_templates(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Returns the number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true when the store holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Returns the template at `index`.
    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    /// Iterates templates in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }
}

#[cfg(feature = "image-io")]
mod load {
    use super::{Template, TemplateStore};
    use crate::image::io::load_gray_image;
    use crate::util::{GestMatchError, GestMatchResult};
    use std::path::Path;

    impl TemplateStore {
        /// Loads one template per immediate subdirectory of `dir`.
        ///
        /// Each subdirectory contributes its lexicographically first file,
        /// decoded as 8-bit grayscale; the subdirectory name becomes the
        /// label. A subdirectory with no decodable file is a fatal error,
        /// since the matcher cannot run without its template set.
        pub fn load<P: AsRef<Path>>(dir: P) -> GestMatchResult<Self> {
            let dir = dir.as_ref();
            let entries = std::fs::read_dir(dir).map_err(|err| GestMatchError::TemplateLoad {
                path: dir.display().to_string(),
                reason: err.to_string(),
            })?;

            let mut folders: Vec<_> = entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_dir())
                .collect();
            folders.sort();

            let mut templates = Vec::with_capacity(folders.len());
            for folder in folders {
                let label = folder
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();

                let mut files: Vec<_> = std::fs::read_dir(&folder)
                    .map_err(|err| GestMatchError::TemplateLoad {
                        path: folder.display().to_string(),
                        reason: err.to_string(),
                    })?
                    .filter_map(|entry| entry.ok().map(|e| e.path()))
                    .filter(|p| p.is_file())
                    .collect();
                files.sort();

                let first = files.first().ok_or_else(|| GestMatchError::TemplateLoad {
                    path: folder.display().to_string(),
                    reason: "gesture folder contains no files".into(),
                })?;
                let img =
                    load_gray_image(first).map_err(|err| GestMatchError::TemplateLoad {
                        path: first.display().to_string(),
                        reason: err.to_string(),
                    })?;
                templates.push(Template::from_image(label, img));
            }

            Ok(Self { templates })
        }
    }
}
