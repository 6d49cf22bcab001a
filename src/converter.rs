use crate::{
    hex_token::{parse_hex_token, tokens},
    pixel::Rgb332,
};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionReport {
    pub pixels_written: u64,
    pub tokens_skipped: u64,
}

/// Turns a stream of 12-bit hex tokens into RGB332 `.mem` lines.
///
/// Tokens that don't parse are dropped without a trace in the output. Only I/O
/// errors end a conversion early.
pub struct PixelConverter<W: Write> {
    output: W,
    report: ConversionReport,
}

impl<W: Write> PixelConverter<W> {
    pub fn new(output: W) -> Self { Self { output, report: ConversionReport::default() } }

    /// Returns the written pixel, or `None` if the token was skipped.
    pub fn convert_token(&mut self, token: &[u8]) -> Result<Option<Rgb332>> {
        let value = match parse_hex_token(token) {
            Ok(value) => value,
            Err(_) => {
                self.report.tokens_skipped += 1;
                return Ok(None);
            }
        };

        let pixel = Rgb332::from_12bit(value);
        writeln!(self.output, "{}", pixel).context("error while writing converted pixel")?;
        self.report.pixels_written += 1;
        Ok(Some(pixel))
    }

    /// Reads `input` until end of input, converting every token on the way.
    pub fn convert_stream<R: BufRead>(&mut self, mut input: R) -> Result<ConversionReport> {
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = input.read_until(b'\n', &mut line).context("error while reading input")?;
            if read == 0 {
                break;
            }
            for token in tokens(&line) {
                self.convert_token(token)?;
            }
        }
        Ok(self.report)
    }

    pub fn report(&self) -> ConversionReport { self.report }

    /// Flushes the output and hands it back together with the final counts.
    pub fn finish(mut self) -> Result<(W, ConversionReport)> {
        self.output.flush().context("error while flushing output")?;
        Ok((self.output, self.report))
    }
}

#[cfg(test)]
mod tests {
    use crate::converter::{ConversionReport, PixelConverter};
    use std::io::{self, BufReader, Read, Write};

    struct FullDisk;
    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }
    }

    struct BrokenInput;
    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "input went away"))
        }
    }

    fn convert(input: &str) -> (String, ConversionReport) {
        let mut converter = PixelConverter::new(Vec::new());
        converter.convert_stream(input.as_bytes()).unwrap();
        let (output, report) = converter.finish().unwrap();
        (String::from_utf8(output).unwrap(), report)
    }

    #[test]
    fn test_basic_stream() {
        let (output, report) = convert("000 fff\n0f0 1a3\n");
        assert_eq!(output, "00\nff\n1c\n14\n");
        assert_eq!(report, ConversionReport { pixels_written: 4, tokens_skipped: 0 });
    }

    #[test]
    fn test_invalid_tokens_skipped() {
        let (output, report) = convert("zz 000 -- fff\n\n  xyz 0f0");
        assert_eq!(output, "00\nff\n1c\n");
        assert_eq!(report, ConversionReport { pixels_written: 3, tokens_skipped: 3 });
    }

    #[test]
    fn test_sentinel_among_neighbours() {
        let (output, _) = convert("0f1 0f0 0ef");
        assert_eq!(output.lines().nth(1), Some("1c"));
    }

    #[test]
    fn test_empty_input() {
        let (output, report) = convert("");
        assert!(output.is_empty());
        assert_eq!(report.pixels_written, 0);
    }

    #[test]
    fn test_line_count_matches_report() {
        let input = "1 zz 2 q 3 ! 4 5 nope 6";
        let (output, report) = convert(input);
        assert_eq!(output.lines().count(), 6);
        assert_eq!(report.pixels_written, 6);
        assert_eq!(report.tokens_skipped, 4);
        assert!(output.lines().all(|line| line.len() == 2));
    }

    #[test]
    fn test_convert_token() {
        let mut converter = PixelConverter::new(Vec::new());
        assert!(converter.convert_token(b"nothex").unwrap().is_none());
        assert_eq!(converter.convert_token(b"fff").unwrap().map(|p| p.0), Some(0xff));
        assert_eq!(converter.report(), ConversionReport { pixels_written: 1, tokens_skipped: 1 });
    }

    #[test]
    fn test_write_error_stops_conversion() {
        let mut converter = PixelConverter::new(FullDisk);
        let error = converter.convert_stream("zz fff 000".as_bytes()).unwrap_err();
        assert!(format!("{:?}", error).contains("no space left on device"));
        assert_eq!(converter.report(), ConversionReport { pixels_written: 0, tokens_skipped: 1 });
    }

    #[test]
    fn test_flush_error_reported() {
        let converter = PixelConverter::new(FullDisk);
        assert!(converter.finish().is_err());
    }

    #[test]
    fn test_read_error_stops_conversion() {
        let mut converter = PixelConverter::new(Vec::new());
        assert!(converter.convert_stream(BufReader::new(BrokenInput)).is_err());
        assert_eq!(converter.report(), ConversionReport::default());
    }
}
