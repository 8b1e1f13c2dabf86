// src/util/helper.rs
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout; anything but `y`/`yes` means no
pub fn confirm(prompt: &str) -> bool {
    print!("{} (y/N): ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut user_input = String::new();
    if io::stdin().lock().read_line(&mut user_input).is_err() {
        return false;
    }

    matches!(user_input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Parse a comma separated id list like `1,2,3`
pub fn parse_ids(ids: &str) -> Result<Vec<i32>, String> {
    ids.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i32>().map_err(|_| s.to_string()))
        .collect()
}
