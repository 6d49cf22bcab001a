use anyhow::{Context, Result};
use clap::Parser;
use image::GenericImageView;
use indicatif::{ProgressBar, ProgressStyle};
use memconv::{
    mem_image::{fit_to_frame_buffer, write_mem, MemFormat, VBUF_HEIGHT, VBUF_WIDTH},
    util::console::summary_block,
};
use std::{fs::File, io::BufWriter, path::PathBuf, process::exit};

/// Converts an image (PPM or anything else the image crate reads) into a 12-bit .mem file.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Arguments {
    #[clap(short, long, parse(from_os_str), default_value = "background.ppm")]
    input: PathBuf,

    #[clap(short, long, parse(from_os_str), default_value = "images.mem")]
    output: PathBuf,

    /// width of the frame buffer the image is stretched to
    #[clap(long, default_value_t = VBUF_WIDTH)]
    width: u32,

    /// height of the frame buffer the image is stretched to
    #[clap(long, default_value_t = VBUF_HEIGHT)]
    height: u32,

    /// write the image at its original size
    #[clap(long)]
    keep_size: bool,

    /// write packed 8-bit RGB332 lines instead of 12-bit RGB444
    #[clap(long)]
    rgb332: bool,
}

fn main() {
    let arguments = Arguments::parse();
    match work(&arguments) {
        Ok(_) => {}
        Err(error) => {
            eprintln!("\n\n{:?}", error);
            exit(-1)
        }
    }
}

fn work(arguments: &Arguments) -> Result<()> {
    println!("reading image {}", arguments.input.display());
    let image = image::open(&arguments.input)
        .with_context(|| format!("cannot read image '{}'", arguments.input.display()))?;
    let (source_width, source_height) = image.dimensions();
    println!("source size: {} x {}", source_width, source_height);

    let target = if arguments.keep_size {
        None
    } else {
        println!("resizing to {} x {}...", arguments.width, arguments.height);
        Some((arguments.width, arguments.height))
    };
    let image = fit_to_frame_buffer(image, target);

    let format = if arguments.rgb332 { MemFormat::Rgb332 } else { MemFormat::Rgb444 };
    println!("converting to {:?} -> {}", format, arguments.output.display());

    let file = File::create(&arguments.output)
        .with_context(|| format!("cannot create file '{}'", arguments.output.display()))?;

    let progressbar = ProgressBar::new(image.height() as u64);
    progressbar.set_style(
        ProgressStyle::default_bar()
            .template("{wide_bar} | {pos}/{len} rows | elapsed: {elapsed_precise} | {msg} ")?
            .progress_chars("#>-"),
    );
    let count = write_mem(&image, format, BufWriter::new(file), &progressbar)?;
    progressbar.finish_and_clear();

    let (width, height) = image.dimensions();
    println!(
        "{}",
        summary_block(&[
            ("output file", arguments.output.display().to_string()),
            ("size", format!("{} x {}", width, height)),
            ("pixels", count.to_string()),
        ])
    );
    println!("set these parameters in the display core:");
    println!("localparam MEM_BG_SIZE = {};", count);
    println!("localparam VBUF_W      = {};", width);

    Ok(())
}
