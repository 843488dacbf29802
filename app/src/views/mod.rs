//! Terminal renditions of the four screens. Views render session state and
//! translate keystrokes into session transitions; they hold no state of
//! their own beyond in-progress form input.

pub mod challenge;
pub mod dashboard;
pub mod feedback;
pub mod onboarding;

use std::io::{self, Write};

/// Whether the app loop keeps going after a view action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub(crate) fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(input.trim().to_string())
}

/// Prompt for a 1-based selection from `options`; empty input picks the
/// (0-based) `default`.
pub(crate) fn read_choice(prompt: &str, options: &[&str], default: usize) -> io::Result<usize> {
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {option}", i + 1);
    }
    loop {
        let input = read_line(prompt)?;
        if input.is_empty() {
            return Ok(default);
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
            _ => println!("Pick a number between 1 and {}.", options.len()),
        }
    }
}
