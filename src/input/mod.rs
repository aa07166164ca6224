//! Interactive input collection
//!
//! Asks for the playlist URL and page title. Answers supplied up front
//! (command-line flags) skip their prompt.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const URL_PROMPT: &str = "Enter YouTube playlist URL: ";

/// Raw answers, trimmed but otherwise unchecked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Playlist URL, possibly empty
    pub url: String,

    /// Page title as typed, possibly empty
    pub title: String,
}

/// Prompt for a line of text; end of input reads as an empty answer
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;

    Ok(line.trim().to_string())
}

/// Collect the URL and title, prompting only for what was not preset
pub fn collect<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    url: Option<String>,
    title: Option<String>,
    default_title: &str,
) -> Result<PageRequest> {
    let url = match url {
        Some(url) => url.trim().to_string(),
        None => prompt(input, output, URL_PROMPT)?,
    };

    let title = match title {
        Some(title) => title.trim().to_string(),
        None => {
            let message = format!("Page title (default: {}): ", default_title);
            prompt(input, output, &message)?
        }
    };

    if url.is_empty() {
        log::warn!("Empty playlist URL, passing it to the extractor anyway");
    }

    Ok(PageRequest { url, title })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collect_prompts_for_both() {
        let mut input = Cursor::new("  https://example.com/list \n  Course \n");
        let mut output = Vec::new();

        let request = collect(&mut input, &mut output, None, None, "YouTube Playlist").unwrap();

        assert_eq!(request.url, "https://example.com/list");
        assert_eq!(request.title, "Course");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter YouTube playlist URL: Page title (default: YouTube Playlist): "
        );
    }

    #[test]
    fn test_preset_values_skip_prompts() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let request = collect(
            &mut input,
            &mut output,
            Some("https://example.com/list".to_string()),
            Some(" Course ".to_string()),
            "YouTube Playlist",
        )
        .unwrap();

        assert_eq!(request.title, "Course");
        assert!(output.is_empty());
    }

    #[test]
    fn test_end_of_input_is_empty() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let request = collect(&mut input, &mut output, None, None, "YouTube Playlist").unwrap();

        assert_eq!(request.url, "");
        assert_eq!(request.title, "");
    }
}
