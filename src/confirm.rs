use std::io::{BufRead, Write};

/// Translate the listing's octal wildcard escape (`\052`) back to a
/// literal `*` for display.
#[must_use]
pub fn display_name(name: &str) -> String {
    name.replacen("\\052", "*", 1)
}

/// Ask the operator to confirm the deletion.
///
/// Accepts only "yes" or "no", case-insensitively; anything else
/// re-prompts. A closed input stream can never consent, so EOF
/// counts as "no".
pub fn prompt_confirm<R, W>(input: &mut R, output: &mut W) -> std::io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "Are you sure you want to delete these [yes/no]? ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => {}
        }
    }
}
