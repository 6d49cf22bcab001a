use anyhow::{Context, Result};
use clap::{ErrorKind, Parser};
use memconv::{
    converter::{ConversionReport, PixelConverter},
    util::console::{done_banner, opened_banner},
};
use std::{
    ffi::OsString,
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
    process::exit,
};

/// Converts 12-bit hex pixels pasted on stdin into an 8-bit RGB332 .mem file.
#[derive(Parser, Debug)]
#[clap(version, about, after_help = "Example: memconv fish1.mem")]
struct Arguments {
    /// the .mem file to create; existing content is overwritten
    #[clap(parse(from_os_str), value_name = "OUTPUT_FILENAME", allow_hyphen_values = true)]
    output: PathBuf,

    /// anything after the output file name is ignored
    #[allow(dead_code)]
    #[clap(parse(from_os_str), hide = true, multiple_values = true, allow_hyphen_values = true)]
    ignored: Vec<OsString>,
}

fn main() {
    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => {
            if error.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("Error: Please specify an output filename.");
            }
            let _ = error.print();
            exit(-1)
        }
    };

    if let Err(error) = work(&arguments) {
        eprintln!("Error: {:?}", error);
        exit(-1)
    }
}

// used to have the convenience of ? for error handling
fn work(arguments: &Arguments) -> Result<ConversionReport> {
    let path = &arguments.output;
    let file = File::create(path)
        .with_context(|| format!("Cannot create file '{}'.", path.display()))?;

    println!("{}", opened_banner(path));

    let mut converter = PixelConverter::new(BufWriter::new(file));
    converter.convert_stream(io::stdin().lock())?;
    let (_, report) = converter.finish()?;

    println!("{}", done_banner(report.pixels_written, path));
    Ok(report)
}
