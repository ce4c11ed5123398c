//! Binary entry point for the `pixz` command-line tool: a thin dispatcher
//! over `pixz::batch` and `pixz::blur`, matching the shape of `lz4r`'s own
//! `main.rs` — all the interesting logic lives in the library, the binary
//! only parses arguments and wires up `progress_cb`/`log_cb`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pixz::cli::constants::PROGRAM_NAME;
use pixz::config::default_worker_count;
use pixz::{displevel, set_display_level};

#[derive(Parser)]
#[command(name = PROGRAM_NAME, about = "Batch pixel-LZ77 image codec")]
struct Cli {
    /// Diagnostic verbosity: 0 = silent, 1 = errors, 2 = normal, 3 = verbose.
    #[arg(short, long, default_value_t = 2)]
    verbosity: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress every supported image in a directory into `.lz77` containers.
    Compress {
        source_dir: PathBuf,
        output_dir: PathBuf,
        /// Use the vectorized back end instead of the scalar one.
        #[arg(long)]
        asm: bool,
        /// Worker thread count (0 = autodetect).
        #[arg(short = 'T', long, default_value_t = 0)]
        threads: usize,
    },
    /// Decompress every `.lz77` container in a directory back to `.bmp`.
    Decompress {
        source_dir: PathBuf,
        output_dir: PathBuf,
        #[arg(long)]
        asm: bool,
        #[arg(short = 'T', long, default_value_t = 0)]
        threads: usize,
    },
    /// Apply a disc-masked box blur to a single bitmap.
    Blur {
        input: PathBuf,
        output: PathBuf,
        #[arg(long)]
        cx: i64,
        #[arg(long)]
        cy: i64,
        #[arg(long)]
        radius: i64,
        #[arg(short = 'T', long, default_value_t = 0)]
        threads: usize,
    },
}

fn resolve_threads(requested: usize) -> usize {
    if requested == 0 {
        default_worker_count()
    } else {
        requested
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    set_display_level(cli.verbosity);

    match cli.command {
        Command::Compress {
            source_dir,
            output_dir,
            asm,
            threads,
        } => {
            let threads = resolve_threads(threads);
            displevel!(3, "compressing {} -> {} ({} threads)", source_dir.display(), output_dir.display(), threads);
            let elapsed = pixz::start_compression(
                &source_dir,
                &output_dir,
                asm,
                threads,
                |pct| displevel!(2, "progress: {pct}%"),
                |msg| displevel!(1, "{msg}"),
            )?;
            displevel!(2, "done in {elapsed} ms (measured phase)");
        }
        Command::Decompress {
            source_dir,
            output_dir,
            asm,
            threads,
        } => {
            let threads = resolve_threads(threads);
            displevel!(3, "decompressing {} -> {} ({} threads)", source_dir.display(), output_dir.display(), threads);
            let elapsed = pixz::start_decompression(
                &source_dir,
                &output_dir,
                asm,
                threads,
                |pct| displevel!(2, "progress: {pct}%"),
                |msg| displevel!(1, "{msg}"),
            )?;
            displevel!(2, "done in {elapsed} ms (measured phase)");
        }
        Command::Blur {
            input,
            output,
            cx,
            cy,
            radius,
            threads,
        } => {
            let threads = resolve_threads(threads);
            let (width, height, mut rgb) = pixz::raster::load_rgb(&input)?;
            pixz::blur_inplace(&mut rgb, width as usize, height as usize, cx, cy, radius, threads);
            pixz::raster::save_rgb_bitmap(&output, width, height, &rgb)?;
            displevel!(2, "blurred {} -> {}", input.display(), output.display());
        }
    }

    Ok(())
}
