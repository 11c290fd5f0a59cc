use crate::error::Error;
use crate::exif::ExifSegment;
use crate::img;
use crate::layout::Layout;
use crate::options::FrameOptions;
use crate::types::Size;
use std::path::Path;

/// Composites a photo onto its framed canvas.
///
/// All geometry comes from [`Layout`]; this type only allocates the
/// surface, fills the background, and draws the photo at the computed
/// offset, applying the advisory downscale.
pub struct PhotoFrame {
    img: img::Image,
}

impl PhotoFrame {
    #[inline]
    #[must_use]
    pub fn new(img: img::Image) -> Self {
        Self { img }
    }

    #[inline]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Ok(Self::new(img::Image::open(path)?))
    }

    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Self::new(img::Image::from_bytes(bytes)?))
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        self.img.size()
    }

    #[inline]
    #[must_use]
    pub fn exif(&self) -> Option<&ExifSegment> {
        self.img.exif()
    }

    /// The unscaled frame geometry for the given options.
    #[inline]
    #[must_use]
    pub fn layout(&self, options: &FrameOptions) -> Layout {
        Layout::calculate(self.img.size(), options.border_percent, options.ratio)
    }

    /// Renders the framed photo.
    ///
    /// The result keeps the source's path and Exif segment so a
    /// subsequent save re-inserts the metadata the encode discards.
    #[must_use]
    pub fn render(&self, options: &FrameOptions) -> img::Image {
        let source = self.img.size();
        let layout = self.layout(options);
        let scale = layout.scale_for(options.max_dimension);
        crate::debug!(&layout);
        crate::debug!(&scale);

        let scaled = layout.canvas.scale_by(scale);
        let mut canvas = img::Image::with_size(Size {
            width: scaled.width.max(1),
            height: scaled.height.max(1),
        });
        canvas.fill(options.background);

        let offset = layout.offset.scale_by(scale);
        if scale < 1.0 {
            let mut photo = self.img.clone();
            photo.resize(source.scale_by(scale));
            canvas.overlay(&photo, offset);
        } else {
            canvas.overlay(&self.img, offset);
        }

        canvas.path = self.img.path.clone();
        canvas.exif = self.img.exif.clone();
        canvas
    }
}
