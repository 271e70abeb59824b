//! Console input helpers for the interactive menu.
//!
//! All prompts print without a trailing newline and read one line from
//! standard input. End of input is reported as an error so the menu loop
//! terminates instead of spinning.

use std::io::{self, IsTerminal, Write};

/// Prints `prompt` and reads one line, trimmed of surrounding whitespace.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(input.trim().to_string())
}

/// Reads an unsigned integer, re-prompting until a line parses.
pub fn read_u32(prompt: &str) -> io::Result<u32> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Reads the admin password, hiding the input when a terminal is attached.
///
/// Without a terminal (or when hidden entry fails) this warns and falls
/// back to a visible read, so the login flow still works under redirection.
pub fn read_password(prompt: &str) -> io::Result<String> {
    if io::stdin().is_terminal() {
        match rpassword::prompt_password(prompt) {
            Ok(password) => return Ok(password),
            Err(err) => tracing::debug!("hidden password entry unavailable: {}", err),
        }
    }

    println!("\nConsole not available. Unable to hide password.");
    read_line(prompt)
}
