use anyhow::Context;
use clap::Parser;
use dominance::{DominantColorFinder, FileImageLoader, RgbaCanvas, DEFAULT_MAX_DIMENSION};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print the dominant color of artwork images.
#[derive(Parser, Debug)]
#[command(name = "dominance", version, about)]
struct Args {
    /// One or more image paths
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Fixed random seed, for reproducible colors
    #[arg(short, long)]
    seed: Option<u64>,

    /// Largest width and height the images are clustered at
    #[arg(short, long, default_value_t = DEFAULT_MAX_DIMENSION)]
    max_dimension: u32,

    /// Print each result as a JSON line
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "dominance=warn".into()))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let args = Args::parse();

    let builder = DominantColorFinder::builder(FileImageLoader, || Ok(RgbaCanvas::new())).max_dimension(args.max_dimension);
    let finder = match args.seed {
        Some(seed) => builder.seed(seed).build(),
        None => builder.build(),
    };

    for image in &args.images {
        let src = image.to_string_lossy();
        let color = finder
            .get_color(&src)
            .await
            .with_context(|| format!("Failed to find the dominant color of {}", image.display()))?;

        #[cfg(feature = "serde")]
        if args.json {
            println!("{}", serde_json::to_string(&color)?);
            continue;
        }

        let (r, g, b) = color.rgb().rgb();
        println!(
            "{}: #{} rgb({}, {}, {}) {:?} text",
            image.display(),
            color.hex(),
            r,
            g,
            b,
            color.foreground_font_color()
        );
    }

    Ok(())
}
