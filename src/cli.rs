use chrono::Utc;
use clap::Parser;
use justframes::{defaults, AspectRatio, Color, FrameOptions, PhotoFrame, RememberedSettings};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
struct ApplyOpts {
    #[clap(short = 'i', long = "image")]
    image: PathBuf,

    #[clap(short = 'o', long = "output")]
    output: Option<PathBuf>,

    #[clap(
        short = 'b',
        long = "border",
        help = "border width in percent of the shorter image side (0-20)"
    )]
    border_percent: Option<f64>,

    #[clap(
        short = 'r',
        long = "ratio",
        help = "target aspect ratio (see `just-frames ratios`)"
    )]
    ratio: Option<AspectRatio>,

    #[clap(
        long = "max-dimension",
        help = "longest allowed output side in pixels (0 = unlimited)"
    )]
    max_dimension: Option<u32>,

    #[clap(long = "color", help = "frame color as a hex triplet")]
    color: Option<Color>,

    #[clap(long = "quality", help = "output image quality (1-100)")]
    quality: Option<u8>,

    #[clap(
        long = "no-remember",
        help = "do not persist border and ratio for the next run",
        action = clap::ArgAction::SetTrue
    )]
    no_remember: bool,
}

#[derive(Parser, Debug, Clone)]
enum Command {
    #[clap(name = "apply", about = "frame an image and export it")]
    Apply(ApplyOpts),

    #[clap(name = "ratios", about = "list the available aspect ratios")]
    Ratios,
}

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "just-frames",
    version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"),
    about = "add a white frame to a photo and fit it to a target aspect ratio",
    author = "romnn <contact@romnn.com>",
    arg_required_else_help = true
)]
struct Opts {
    #[clap(subcommand)]
    commands: Option<Command>,
}

fn main() {
    let opts: Opts = Opts::parse();
    if let Some(subcommand) = opts.commands {
        match subcommand {
            Command::Apply(cfg) => {
                let start = Utc::now().time();
                justframes::debug!(&cfg);

                // remembered settings seed the defaults; flags win
                let remembered = RememberedSettings::load().unwrap_or_default();
                let border_percent = cfg
                    .border_percent
                    .unwrap_or(remembered.border_percent)
                    .clamp(defaults::BORDER_PERCENT_MIN, defaults::BORDER_PERCENT_MAX);
                let ratio = cfg.ratio.unwrap_or(remembered.ratio);
                let options = FrameOptions {
                    border_percent,
                    ratio,
                    max_dimension: cfg.max_dimension.unwrap_or(defaults::MAX_CANVAS_DIMENSION),
                    quality: cfg.quality.unwrap_or(defaults::JPEG_QUALITY),
                    background: cfg.color.unwrap_or(defaults::BACKGROUND),
                };
                justframes::debug!(&options);

                match PhotoFrame::open(&cfg.image) {
                    Ok(frame) => {
                        let result = frame.render(&options);
                        let saved = match cfg.output {
                            Some(output) => result.save_with_filename(output, options.quality),
                            None => result.save(options.quality),
                        };
                        match saved {
                            Ok(()) => {
                                if !cfg.no_remember {
                                    RememberedSettings {
                                        border_percent,
                                        ratio,
                                    }
                                    .save();
                                }
                                println!("completed in {:?}", Utc::now().time() - start);
                            }
                            Err(err) => eprintln!("{}", err),
                        }
                    }
                    Err(err) => eprintln!("{}", err),
                }
            }
            Command::Ratios => {
                for ratio in AspectRatio::ALL {
                    println!("{:<16} {}", ratio.to_string(), ratio.label());
                }
            }
        }
    }
}
