//! Minimal `go.mod` reader.
//!
//! Only `module`, `go`, and `toolchain` are kept. Other known directives,
//! single-line or parenthesised blocks, are accepted and skipped.

use crate::domain::{error::DomainError, version::GoVersion};

const SKIPPED_DIRECTIVES: &[&str] = &[
    "require", "exclude", "replace", "retract", "godebug", "tool", "ignore",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleFile {
    pub module: Option<String>,
    pub go: Option<GoVersion>,
    pub toolchain: Option<String>,
}

impl ModuleFile {
    pub fn parse(source: &str) -> Result<Self, DomainError> {
        let mut file = ModuleFile::default();
        let mut open_block: Option<(&str, usize)> = None;

        for (idx, raw) in source.lines().enumerate() {
            let line_no = idx + 1;
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }

            if let Some((directive, _)) = open_block {
                if line == ")" {
                    open_block = None;
                } else if directive == "module" || directive == "go" || directive == "toolchain" {
                    return Err(parse_error(line_no, format!("'{directive}' cannot be a block")));
                }
                continue;
            }

            let (directive, rest) = match line.split_once(char::is_whitespace) {
                Some((d, r)) => (d, r.trim()),
                None => (line, ""),
            };

            if rest == "(" {
                if !SKIPPED_DIRECTIVES.contains(&directive) {
                    return Err(parse_error(line_no, format!("unknown block type: {directive}")));
                }
                open_block = Some((directive, line_no));
                continue;
            }

            match directive {
                "module" => {
                    file.module = Some(single_arg(directive, rest, line_no)?.trim_matches('"').to_owned());
                }
                "go" => {
                    let arg = single_arg(directive, rest, line_no)?;
                    let version = GoVersion::parse(arg).map_err(|_| {
                        parse_error(line_no, format!("invalid go version '{arg}': must match format 1.23.0"))
                    })?;
                    file.go = Some(version);
                }
                "toolchain" => {
                    file.toolchain = Some(single_arg(directive, rest, line_no)?.to_owned());
                }
                d if SKIPPED_DIRECTIVES.contains(&d) => {
                    if rest.is_empty() {
                        return Err(parse_error(line_no, format!("usage: {d} ...")));
                    }
                }
                other => {
                    return Err(parse_error(line_no, format!("unknown directive: {other}")));
                }
            }
        }

        if let Some((directive, line_no)) = open_block {
            return Err(parse_error(line_no, format!("unterminated {directive} block")));
        }

        Ok(file)
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(i) => &line[..i],
        None => line,
    }
}

fn single_arg<'a>(directive: &str, rest: &'a str, line: usize) -> Result<&'a str, DomainError> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(arg), None) => Ok(arg),
        _ => Err(parse_error(line, format!("usage: {directive} <value>"))),
    }
}

fn parse_error(line: usize, reason: String) -> DomainError {
    DomainError::ModuleParse { line, reason }
}
