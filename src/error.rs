#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing output file path")]
    MissingOutputPath,

    #[error("image error: {0}")]
    Image(#[from] image::error::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum ParseEnum {
    #[error("unknown enum variant: `{0}`")]
    Unknown(String),
}
