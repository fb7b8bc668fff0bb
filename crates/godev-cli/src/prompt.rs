//! Line-based answers from standard input.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use godev_core::{
    application::{ApplicationError, ports::Prompter},
    error::GodevResult,
};

/// Writes the question, then blocks for one line.
///
/// The line terminator (`\n` or `\r\n`) is stripped. A closed input with no
/// data is [`ApplicationError::EndOfInput`].
pub struct LinePrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl<R, W> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }
}

impl LinePrompter<BufReader<io::Stdin>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> Prompter for LinePrompter<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn ask(&self, question: &str) -> GodevResult<String> {
        let mut guard = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let (reader, writer) = &mut *guard;

        writer
            .write_all(question.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(prompt_error)?;

        let mut line = String::new();
        let read = reader.read_line(&mut line).map_err(prompt_error)?;
        if read == 0 {
            return Err(ApplicationError::EndOfInput.into());
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        debug!(answer, "Prompt answered");
        Ok(answer.to_owned())
    }
}

fn prompt_error(e: io::Error) -> godev_core::error::GodevError {
    ApplicationError::Prompt {
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use godev_core::error::GodevError;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: LinePrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, out) = p.io.into_inner().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn returns_line_without_terminator() {
        let p = prompter("y\n");
        assert_eq!(p.ask("Continue? ").unwrap(), "y");
        assert_eq!(written(p), "Continue? ");
    }

    #[test]
    fn strips_crlf() {
        assert_eq!(prompter("Y\r\n").ask("?").unwrap(), "Y");
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(prompter(" y \n").ask("?").unwrap(), " y ");
    }

    #[test]
    fn last_line_without_newline_is_an_answer() {
        assert_eq!(prompter("github.com/a/b").ask("?").unwrap(), "github.com/a/b");
    }

    #[test]
    fn empty_line_is_an_empty_answer() {
        assert_eq!(prompter("\n").ask("?").unwrap(), "");
    }

    #[test]
    fn closed_input_is_end_of_input() {
        let err = prompter("").ask("?").unwrap_err();
        assert!(matches!(
            err,
            GodevError::Application(ApplicationError::EndOfInput)
        ));
    }

    #[test]
    fn answers_are_consumed_in_order() {
        let p = prompter("y\ngithub.com/acme/x\n");
        assert_eq!(p.ask("1").unwrap(), "y");
        assert_eq!(p.ask("2").unwrap(), "github.com/acme/x");
        assert!(p.ask("3").is_err());
    }
}
