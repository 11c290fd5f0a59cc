use crate::defaults;
use crate::error::Error;
use crate::exif::{self, ExifSegment};
use crate::imageops;
use crate::types::{Color, Point, Size};
pub use image::ImageFormat;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// A decoded photo plus the metadata the decode step would lose: the
/// source path (for default output naming) and the raw Exif segment
/// captured from the original bytes.
#[derive(Clone)]
pub struct Image {
    pub(crate) inner: image::RgbaImage,
    pub(crate) path: Option<PathBuf>,
    pub(crate) exif: Option<ExifSegment>,
}

impl std::ops::Deref for Image {
    type Target = image::RgbaImage;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::ops::DerefMut for Image {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl Image {
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        Size::from(&self.inner)
    }

    #[inline]
    #[must_use]
    pub fn with_size<S: Into<Size>>(size: S) -> Self {
        let size = size.into();
        Self {
            inner: image::RgbaImage::new(size.width, size.height),
            path: None,
            exif: None,
        }
    }

    /// Decodes a photo from its raw bytes.
    ///
    /// The Exif segment is captured from the bytes before decoding and
    /// retained for the lifetime of the image.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let exif = exif::extract_segment(bytes);
        let reader = image::io::Reader::new(Cursor::new(bytes)).with_guessed_format()?;
        let inner = reader.decode()?.to_rgba8();
        Ok(Self {
            inner,
            path: None,
            exif,
        })
    }

    #[inline]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let bytes = fs::read(&path)?;
        let mut img = Self::from_bytes(&bytes)?;
        img.path = Some(path.as_ref().to_path_buf());
        Ok(img)
    }

    #[inline]
    #[must_use]
    pub fn exif(&self) -> Option<&ExifSegment> {
        self.exif.as_ref()
    }

    #[inline]
    pub fn fill(&mut self, color: Color) {
        let size = self.size();
        imageops::fill_rect(&mut self.inner, color.into(), Point::origin(), size);
    }

    /// Resizes to exactly `size` (Lanczos3).
    #[inline]
    pub fn resize<S: Into<Size>>(&mut self, size: S) {
        let size = size.into();
        self.inner = imageops::resize(&self.inner, size.width, size.height, defaults::FILTER_TYPE);
    }

    #[inline]
    pub fn overlay(
        &mut self,
        overlay_image: &impl std::ops::Deref<Target = image::RgbaImage>,
        offset: Point,
    ) {
        imageops::overlay(&mut self.inner, &**overlay_image, offset.x, offset.y);
    }

    #[inline]
    pub fn save_with_filename(
        &self,
        path: impl AsRef<Path>,
        quality: impl Into<Option<u8>>,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .read(false)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        self.encode_to(&mut file, format, quality)
    }

    /// Saves next to the source file as `<stem>_framed.<ext>`.
    #[inline]
    pub fn save(&self, quality: impl Into<Option<u8>>) -> Result<(), Error> {
        let (default_output, _) = self.output_path(None);
        let path = default_output.ok_or(Error::MissingOutputPath)?;
        self.save_with_filename(path, quality)
    }

    /// Encodes into `format` and writes the result.
    ///
    /// The retained Exif segment is re-inserted after encoding; on
    /// formats without a JPEG marker stream the insertion is the
    /// identity, so this is safe for any supported format.
    pub fn encode_to(
        &self,
        w: &mut impl std::io::Write,
        format: ImageFormat,
        quality: impl Into<Option<u8>>,
    ) -> Result<(), Error> {
        use image::{codecs, ImageEncoder};

        let quality = quality.into();
        let width = self.inner.width();
        let height = self.inner.height();
        let mut encoded = Vec::new();
        match format {
            ImageFormat::Png => {
                codecs::png::PngEncoder::new(&mut encoded).write_image(
                    self.inner.as_raw(),
                    width,
                    height,
                    image::ColorType::Rgba8,
                )?;
            }
            ImageFormat::Jpeg => {
                let quality = quality.unwrap_or(defaults::JPEG_QUALITY);
                // the jpeg codec has no alpha channel
                let rgb = image::DynamicImage::ImageRgba8(self.inner.clone()).into_rgb8();
                codecs::jpeg::JpegEncoder::new_with_quality(&mut encoded, quality).write_image(
                    rgb.as_raw(),
                    width,
                    height,
                    image::ColorType::Rgb8,
                )?;
            }
            _ => {
                return Err(Error::from(image::error::ImageError::Unsupported(
                    image::error::UnsupportedError::from_format_and_kind(
                        image::error::ImageFormatHint::Exact(format),
                        image::error::UnsupportedErrorKind::Format(
                            image::error::ImageFormatHint::Exact(format),
                        ),
                    ),
                )))
            }
        }
        let encoded = exif::insert_segment(encoded, self.exif.as_ref());
        w.write_all(&encoded)?;
        Ok(())
    }

    #[inline]
    fn output_path(&self, format: Option<ImageFormat>) -> (Option<PathBuf>, Option<ImageFormat>) {
        let source_format = self
            .path
            .as_ref()
            .and_then(|p| ImageFormat::from_path(p).ok());
        let format = format.or(source_format);
        let ext = format
            .unwrap_or(ImageFormat::Jpeg)
            .extensions_str()
            .iter()
            .next()
            .unwrap_or(&"jpg");
        let path = self.path.as_ref().and_then(|p| {
            p.file_stem()
                .map(|stem| format!("{}_framed.{}", &stem.to_string_lossy(), &ext))
                .map(|filename| p.with_file_name(filename))
        });
        (path, format)
    }
}

#[cfg(test)]
mod tests {
    use super::{Image, ImageFormat};
    use crate::exif::{self, ExifSegment, EXIF_SIGNATURE, MARKER_APP1, MARKER_PREFIX};
    use crate::types::Color;
    use anyhow::Result;
    use image::RgbaImage;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn exif_segment() -> ExifSegment {
        let mut payload = EXIF_SIGNATURE.to_vec();
        payload.extend_from_slice(&[0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]);
        let length = u16::try_from(payload.len() + 2).unwrap();
        let mut bytes = vec![MARKER_PREFIX, MARKER_APP1];
        bytes.extend_from_slice(&length.to_be_bytes());
        bytes.extend_from_slice(&payload);
        ExifSegment::from(bytes)
    }

    #[test]
    fn test_from_bytes_png() -> Result<()> {
        let mut img = Image::with_size((8, 6));
        img.fill(Color::white());
        let mut encoded = Cursor::new(Vec::new());
        img.encode_to(&mut encoded, ImageFormat::Png, None)?;

        let decoded = Image::from_bytes(encoded.get_ref())?;
        assert_eq!(decoded.size(), img.size());
        assert!(decoded.exif().is_none());
        Ok(())
    }

    #[test]
    fn test_from_bytes_captures_exif() -> Result<()> {
        let mut img = Image::with_size((8, 6));
        img.fill(Color::white());
        let mut encoded = Cursor::new(Vec::new());
        img.encode_to(&mut encoded, ImageFormat::Jpeg, None)?;

        let exif = exif_segment();
        let with_exif = exif::insert_segment(encoded.into_inner(), Some(&exif));
        let decoded = Image::from_bytes(&with_exif)?;
        assert_eq!(decoded.size(), img.size());
        assert_eq!(decoded.exif(), Some(&exif));
        Ok(())
    }

    #[test]
    fn test_jpeg_export_preserves_exif() -> Result<()> {
        let mut img = Image::with_size((8, 6));
        img.fill(Color::white());
        img.exif = Some(exif_segment());

        let mut encoded = Cursor::new(Vec::new());
        img.encode_to(&mut encoded, ImageFormat::Jpeg, None)?;
        assert_eq!(
            exif::extract_segment(encoded.get_ref()),
            Some(exif_segment())
        );
        Ok(())
    }

    macro_rules! output_path_tests {
        ($($name:ident: $values:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let (path, format, want_path, want_format): (
                        Option<&str>,
                        Option<ImageFormat>,
                        Option<&str>,
                        Option<ImageFormat>
                    ) = $values;
                    let img = Image {
                        inner: RgbaImage::new(32, 32),
                        path: path.map(Into::into),
                        exif: None,
                    };
                    let (have_path, have_format) = img.output_path(format);
                    assert_eq!(have_path, want_path.map(Into::into));
                    assert_eq!(have_format, want_format);
                }
            )*
        }
    }

    output_path_tests! {
        test_no_path_no_format: (None, None, None, None),
        test_jpg_path_no_format: (
           Some("samples/lowres.jpg"), None,
           Some("samples/lowres_framed.jpg"), Some(ImageFormat::Jpeg)
        ),
        test_png_path_no_format: (
           Some("samples/lowres.png"), None,
           Some("samples/lowres_framed.png"), Some(ImageFormat::Png)
        ),
        test_no_path_jpg_format: (
           None, Some(ImageFormat::Jpeg),
           None, Some(ImageFormat::Jpeg)
        ),
        test_jpg_path_png_format: (
           Some("samples/lowres.jpg"), Some(ImageFormat::Png),
           Some("samples/lowres_framed.png"), Some(ImageFormat::Png)
        ),
    }
}
