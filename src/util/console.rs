use itertools::Itertools;
use std::{fmt::Display, path::Path};

const RULE_WIDTH: usize = 55;

pub fn rule(c: char) -> String { c.to_string().repeat(RULE_WIDTH) }

fn block(lines: &[String]) -> String { lines.iter().join("\n") }

/// How the user ends interactive input on this platform.
pub fn end_of_input_hint() -> &'static str {
    if cfg!(windows) {
        "Press Ctrl+Z then Enter"
    } else {
        "Press Ctrl+D"
    }
}

pub fn opened_banner(output: &Path) -> String {
    block(&[
        rule('='),
        format!("  Output File: [{}] (Opened)", output.display()),
        rule('='),
        "Please paste your 12-bit hex data below now...".to_string(),
        format!("(To FINISH: {})", end_of_input_hint()),
        rule('-'),
    ])
}

pub fn done_banner(pixels: u64, output: &Path) -> String {
    block(&[
        String::new(),
        rule('-'),
        format!("Done! {} pixels written to '{}'.", pixels, output.display()),
        rule('-'),
    ])
}

pub fn summary_block<K: Display, V: Display>(entries: &[(K, V)]) -> String {
    block(
        &std::iter::once(rule('-'))
            .chain(entries.iter().map(|(k, v)| format!("{}: {}", k, v)))
            .chain(std::iter::once(rule('-')))
            .collect::<Vec<_>>(),
    )
}
