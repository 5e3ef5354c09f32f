//! Record to display unit conversion.
//!
//! The [`DisplayAdapter`] is a pure function of its resolver and target size:
//! adapting the same record twice yields the same text and the same pixels.

use std::{
    fmt::{self, Display},
    sync::Arc,
};

use image::{RgbaImage, imageops::FilterType};
use wayfarer_core::Record;

/// Target dimensions of a scaled image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Thumbnail size used by the destination list rows.
    pub const LIST_ROW: Self = Self::new(300, 200);
    /// Full size used by the slideshow image pane.
    pub const SLIDE: Self = Self::new(800, 500);

    /// Creates a new size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The composed text shown for a record.
///
/// Renders as the title and the description joined by an em dash; rich
/// surfaces emphasize the title instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayText {
    title: String,
    description: String,
}

impl DisplayText {
    /// Builds the display text of a record.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: record.title().to_owned(),
            description: record.description().to_owned(),
        }
    }

    /// Returns the emphasized part.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body part.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \u{2014} {}", self.title, self.description)
    }
}

/// A decoded image scaled to its target size, as straight RGBA8 pixels.
///
/// Cloning is cheap; the pixel buffer is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pixels: Arc<RgbaImage>,
}

impl ImageHandle {
    fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Returns the image dimensions.
    #[must_use]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.pixels.width(), self.pixels.height())
    }

    /// Returns the raw RGBA bytes in row-major order.
    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

/// The display-ready form of a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableUnit {
    text: DisplayText,
    image: Option<ImageHandle>,
    image_ref: String,
}

impl RenderableUnit {
    /// Builds a unit without an image, shown with fallback text instead.
    #[must_use]
    pub fn placeholder(record: &Record) -> Self {
        Self {
            text: DisplayText::from_record(record),
            image: None,
            image_ref: record.image_ref().to_owned(),
        }
    }

    /// Returns the composed text.
    #[must_use]
    pub fn text(&self) -> &DisplayText {
        &self.text
    }

    /// Returns the scaled image, if it resolved.
    #[must_use]
    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    /// Returns the image reference of the source record.
    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    /// Returns the text to show in place of a missing image.
    #[must_use]
    pub fn fallback(&self) -> Option<String> {
        self.image
            .is_none()
            .then(|| format!("Image not found: {}", self.image_ref))
    }
}

/// An image reference that does not resolve to a decodable resource.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ImageResolutionError {
    /// The resolver has no resource for the reference.
    #[display("could not find image: {image_ref}")]
    NotFound {
        /// The reference as given by the record.
        image_ref: String,
    },
    /// The resource exists but its bytes are not a supported image.
    #[display("could not decode image {image_ref}: {message}")]
    Decode {
        /// The reference as given by the record.
        image_ref: String,
        /// The decoder's explanation.
        message: String,
    },
}

impl ImageResolutionError {
    /// Returns the reference that failed to resolve.
    #[must_use]
    pub fn image_ref(&self) -> &str {
        match self {
            Self::NotFound { image_ref } | Self::Decode { image_ref, .. } => image_ref,
        }
    }
}

/// Converts records into [`RenderableUnit`]s.
///
/// # Examples
///
/// ```
/// use wayfarer_core::Record;
/// use wayfarer_gallery::{DisplayAdapter, ImageSize, MemoryResolver};
///
/// let adapter = DisplayAdapter::new(MemoryResolver::new(), ImageSize::LIST_ROW);
/// let record = Record::new("Paris, France", "Art.", "/resources/Paris.jpg");
///
/// let err = adapter.adapt(&record).unwrap_err();
/// assert_eq!(err.image_ref(), "/resources/Paris.jpg");
/// ```
#[derive(Debug, Clone)]
pub struct DisplayAdapter<R> {
    resolver: R,
    target: ImageSize,
}

impl<R> DisplayAdapter<R>
where
    R: crate::ResourceResolver,
{
    /// Creates an adapter that scales every image to `target`.
    #[must_use]
    pub fn new(resolver: R, target: ImageSize) -> Self {
        Self { resolver, target }
    }

    /// Returns the target image size.
    #[must_use]
    pub fn target(&self) -> ImageSize {
        self.target
    }

    /// Returns the resolver.
    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolves, decodes and scales the record's image and composes its text.
    ///
    /// The image is stretched to exactly the target size.
    ///
    /// # Errors
    ///
    /// Returns [`ImageResolutionError`] if the image reference is not found or
    /// its bytes cannot be decoded. The failure is also logged.
    pub fn adapt(&self, record: &Record) -> Result<RenderableUnit, ImageResolutionError> {
        let image_ref = record.image_ref();
        let Some(bytes) = self.resolver.resolve(image_ref) else {
            log::warn!("could not find image: {image_ref}");
            return Err(ImageResolutionError::NotFound {
                image_ref: image_ref.to_owned(),
            });
        };

        let decoded = image::load_from_memory(&bytes).map_err(|err| {
            log::warn!("could not decode image {image_ref}: {err}");
            ImageResolutionError::Decode {
                image_ref: image_ref.to_owned(),
                message: err.to_string(),
            }
        })?;

        let ImageSize { width, height } = self.target;
        let scaled = decoded
            .resize_exact(width, height, FilterType::Lanczos3)
            .into_rgba8();
        log::debug!("loaded {image_ref} scaled to {width}x{height}");

        Ok(RenderableUnit {
            text: DisplayText::from_record(record),
            image: Some(ImageHandle::new(scaled)),
            image_ref: image_ref.to_owned(),
        })
    }
}
