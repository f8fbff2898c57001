//! Terminal front end
//!
//! Feeds input lines to a `Shell`. In normal mode a line is a command; while
//! an edit session is open lines go into the edit buffer until `:w` saves it.
//! The interactive loop also drives the stats refresh from a timer.

use std::io::Write;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::commands::edit_cmd::{CLEAR_BUFFER_COMMAND, SAVE_COMMAND};
use crate::shell::{Shell, ShellError};

/// What feeding one line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    /// A command ran; its display text.
    Output(String),
    /// The line went into the edit buffer.
    Buffered,
    /// The edit buffer was saved; the confirmation line.
    Saved(String),
}

/// Route one line to the shell according to its current mode.
pub fn feed_line(shell: &mut Shell, line: &str) -> Result<Feed, ShellError> {
    if !shell.is_editing() {
        return shell.submit(line).map(Feed::Output);
    }

    match line.trim_end() {
        SAVE_COMMAND => shell.save_edit().map(Feed::Saved),
        CLEAR_BUFFER_COMMAND => {
            if let Some(content) = shell.edit_buffer_mut() {
                content.clear();
            }
            Ok(Feed::Buffered)
        }
        _ => {
            shell.append_edit_line(line)?;
            Ok(Feed::Buffered)
        }
    }
}

/// Feed every line of a script and collect the text each one produced.
pub fn run_script(shell: &mut Shell, script: &str) -> Result<Vec<String>, ShellError> {
    let mut outputs = Vec::new();
    for line in script.lines() {
        match feed_line(shell, line)? {
            Feed::Output(text) | Feed::Saved(text) => outputs.push(text),
            Feed::Buffered => {}
        }
    }
    Ok(outputs)
}

/// Options for the interactive loop.
#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub refresh_interval: Duration,
    /// Print the stats bar before every prompt.
    pub status_line: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(2_000),
            status_line: false,
        }
    }
}

/// Run the interactive loop until `input` reaches end of file.
///
/// Stats ticks and input lines are handled one at a time on the current task.
/// Only a failing reader or writer ends the loop early.
pub async fn run_interactive<R, W>(
    shell: &mut Shell,
    mut input: R,
    out: &mut W,
    options: &ReplOptions,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    let mut rng = StdRng::from_entropy();
    let mut ticker = tokio::time::interval(options.refresh_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    for line in shell.scrollback() {
        writeln!(out, "{}", line)?;
    }
    write_prompt(shell, out, options)?;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                shell.tick(&mut rng);
            }
            read = input.read_until(b'\n', &mut buf) => {
                if read? == 0 && buf.is_empty() {
                    break;
                }
                // Undecodable bytes become U+FFFD; the line still runs.
                let line = decode_line(&buf);
                buf.clear();
                debug!(line = %line, editing = shell.is_editing(), "input line");
                match feed_line(shell, &line) {
                    Ok(Feed::Output(text)) => {
                        if !text.is_empty() {
                            writeln!(out, "{}", text)?;
                        }
                        if let Some(buffer) = shell.edit_buffer() {
                            if !buffer.content.is_empty() {
                                writeln!(out, "{}", buffer.content)?;
                            }
                        }
                    }
                    Ok(Feed::Saved(text)) => writeln!(out, "{}", text)?,
                    Ok(Feed::Buffered) => {}
                    Err(err) => writeln!(out, "{}", err)?,
                }
                write_prompt(shell, out, options)?;
            }
        }
    }
    writeln!(out)?;
    out.flush()
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

fn write_prompt<W: Write>(shell: &Shell, out: &mut W, options: &ReplOptions) -> std::io::Result<()> {
    if !shell.is_editing() {
        if options.status_line {
            writeln!(out, "{}", shell.stats().status_line())?;
        }
        write!(out, "{}", shell.prompt())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ShellOptions;

    fn shell() -> Shell {
        Shell::new(ShellOptions::default()).unwrap()
    }

    #[test]
    fn test_feed_line_normal_mode() {
        let mut sh = shell();
        assert_eq!(feed_line(&mut sh, "ls").unwrap(), Feed::Output("📁 home".to_string()));
    }

    #[test]
    fn test_feed_line_edit_mode() {
        let mut sh = shell();
        feed_line(&mut sh, "touch f").unwrap();
        feed_line(&mut sh, "edit f").unwrap();
        assert_eq!(feed_line(&mut sh, "ls").unwrap(), Feed::Buffered);
        assert_eq!(feed_line(&mut sh, ":w").unwrap(), Feed::Saved("Saved f".to_string()));
        assert_eq!(sh.dispatch("cat f"), "ls");
    }

    #[test]
    fn test_clear_buffer_line() {
        let mut sh = shell();
        sh.dispatch("touch f");
        sh.dispatch("write f old text");
        feed_line(&mut sh, "edit f").unwrap();
        feed_line(&mut sh, ":c").unwrap();
        feed_line(&mut sh, "fresh").unwrap();
        feed_line(&mut sh, ":w").unwrap();
        assert_eq!(sh.dispatch("cat f"), "fresh");
    }

    #[test]
    fn test_run_script() {
        let mut sh = shell();
        let script = "mkdir docs\ncd docs\ntouch a.txt\nwrite a.txt hello world\ncat a.txt";
        let outputs = run_script(&mut sh, script).unwrap();
        assert_eq!(outputs.last().map(String::as_str), Some("hello world"));
        assert_eq!(sh.cwd(), "/docs");
    }

    #[test]
    fn test_run_script_with_edit_block() {
        let mut sh = shell();
        let script = "touch f\nedit f\nline one\nline two\n:w\ncat f";
        let outputs = run_script(&mut sh, script).unwrap();
        assert_eq!(outputs.last().map(String::as_str), Some("line one\nline two"));
        assert!(outputs.contains(&"Saved f".to_string()));
    }

    #[tokio::test]
    async fn test_interactive_loop_runs_until_eof() {
        let mut sh = shell();
        let input: &[u8] = b"mkdir docs\nls\n";
        let mut out = Vec::new();
        run_interactive(&mut sh, input, &mut out, &ReplOptions::default())
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Welcome to SimpleOS v1.0\n"));
        assert!(text.contains("📁 home\n📁 docs"));
        assert!(text.contains("/$ "));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_end_session() {
        let mut sh = shell();
        let input: &[u8] = b"ls\n\xff\xfe\nmkdir after\n";
        let mut out = Vec::new();
        run_interactive(&mut sh, input, &mut out, &ReplOptions::default())
            .await
            .unwrap();
        assert_eq!(sh.dispatch("ls"), "📁 home\n📁 after");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Command not found: \u{fffd}\u{fffd}"));
    }

    #[tokio::test]
    async fn test_last_line_without_newline_and_crlf() {
        let mut sh = shell();
        let input: &[u8] = b"mkdir a\r\nmkdir b";
        let mut out = Vec::new();
        run_interactive(&mut sh, input, &mut out, &ReplOptions::default())
            .await
            .unwrap();
        assert_eq!(sh.dispatch("ls"), "📁 home\n📁 a\n📁 b");
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"ls\r\n"), "ls");
        assert_eq!(decode_line(b"cat f"), "cat f");
        assert_eq!(decode_line(b"\xffx\n"), "\u{fffd}x");
    }

    #[tokio::test]
    async fn test_interactive_status_line() {
        let mut sh = shell();
        let input: &[u8] = b"";
        let mut out = Vec::new();
        let options = ReplOptions { status_line: true, ..Default::default() };
        run_interactive(&mut sh, input, &mut out, &options).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[cpu "));
    }
}
