pub mod debug;
pub mod defaults;
pub mod error;
pub mod exif;
pub mod frame;
pub mod imageops;
pub mod img;
pub mod layout;
pub mod options;
pub mod prefs;
pub mod types;

pub use error::Error;
pub use exif::{extract_segment, insert_segment, ExifSegment};
pub use frame::PhotoFrame;
pub use layout::Layout;
pub use options::FrameOptions;
pub use prefs::RememberedSettings;
pub use types::{AspectRatio, Color, Point, Size};
