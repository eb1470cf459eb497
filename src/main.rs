use std::path::PathBuf;

use clap::Parser;
use log::info;
use stars::{svg::RenderingOpts, EnumerationOpts, Enumerator};

#[derive(Parser)]
#[command(
    name = "stars",
    about = "Draw every distinct star polygon on the corners of regular polygons"
)]
struct Cli {
    /// Smallest polygon size to draw stars for
    #[arg(long, default_value = "3")]
    min_size: usize,

    /// Largest polygon size to draw stars for (inclusive)
    #[arg(long, default_value = "13")]
    max_size: usize,

    /// Only try single-step patterns
    #[arg(long)]
    no_double_steps: bool,

    /// Also try every three-step pattern (slow, and draws a lot of stars)
    #[arg(long)]
    triple_steps: bool,

    /// Output SVG path ("-" writes to stdout)
    #[arg(short, long, default_value = "stars.svg")]
    output: PathBuf,

    /// Also list each distinct star's corner numbers on stderr
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let enumerator = Enumerator::new(EnumerationOpts {
        min_size: cli.min_size,
        max_size: cli.max_size,
        double_steps: !cli.no_double_steps,
        triple_steps: cli.triple_steps,
    })?;
    let catalogue = enumerator.catalogue();

    if cli.list {
        for (size, stars) in &catalogue {
            for star in stars {
                eprintln!("STAR[{}, [{}]]  {:?}", size, star.steps(), star.indices());
            }
        }
    }

    let svg = stars::svg::gen_svg_string(&catalogue, &RenderingOpts::default());
    if cli.output.as_os_str() == "-" {
        println!("{}", svg);
    } else {
        std::fs::write(&cli.output, svg).map_err(stars::StarError::from)?;
        info!("wrote {}", cli.output.display());
    }

    Ok(())
}
