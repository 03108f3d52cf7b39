//! License header rendering and stamping
//!
//! Stamping is idempotent: a file that already carries the current header
//! comes out byte-identical. BOM and shebang lines stay in front of the
//! header.

use memchr::memmem;

/// First line of every header we write
pub const HEADER_START: &str = "/* @license-header-start";
/// Last line of every header we write
pub const HEADER_END: &str = "@license-header-end */";

const BOM: char = '\u{feff}';

/// Values rendered into the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseHeader {
    pub project: String,
    pub year: i32,
    pub code_license: String,
    pub content_license: String,
}

impl LicenseHeader {
    pub fn render(&self) -> String {
        format!(
            "{start}\n * Copyright (c) {year} {project}\n * Code is licensed under {code}.\n * Content is licensed under {content}.\n * {end}\n",
            start = HEADER_START,
            year = self.year,
            project = self.project,
            code = self.code_license,
            content = self.content_license,
            end = HEADER_END,
        )
    }
}

fn split_bom(text: &str) -> (&str, &str) {
    match text.strip_prefix(BOM) {
        Some(rest) => text.split_at(text.len() - rest.len()),
        None => ("", text),
    }
}

fn split_shebang(text: &str) -> (&str, &str) {
    if !text.starts_with("#!") {
        return ("", text);
    }
    match text.find('\n') {
        Some(idx) => text.split_at(idx + 1),
        None => (text, ""),
    }
}

/// Whether `text` opens with our header (leading whitespace allowed)
pub fn has_header_at_top(text: &str) -> bool {
    text.trim_start().starts_with(HEADER_START)
}

/// Drop our header from the top of `text`; unchanged if the end marker is missing
fn remove_header(text: &str) -> &str {
    let trimmed = text.trim_start();
    match memmem::find(trimmed.as_bytes(), HEADER_END.as_bytes()) {
        Some(idx) => trimmed[idx + HEADER_END.len()..].trim_start_matches(['\r', '\n']),
        None => text,
    }
}

/// Drop a leading block comment or run of `//` line comments
fn remove_initial_comment(text: &str) -> &str {
    if text.starts_with("/*") {
        return match memmem::find(text.as_bytes(), b"*/") {
            Some(end) => text[end + 2..].trim_start(),
            None => text,
        };
    }

    if text.starts_with("//") {
        let mut offset = 0;
        for line in text.split_inclusive('\n') {
            let content = line.trim_end_matches(['\r', '\n']);
            if !(content.starts_with("//") || content.trim().is_empty()) {
                break;
            }
            offset += line.len();
        }
        return text[offset..].trim_start();
    }

    text
}

/// Header, exactly one blank line, then the body
fn join(header: &str, body: &str) -> String {
    let mut out = String::with_capacity(header.len() + body.len() + 2);
    out.push_str(header);
    if !header.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(body.trim_start());
    out
}

/// Return `original` with `header` in place of any existing header
pub fn stamp(original: &str, header: &str) -> String {
    let (bom, rest) = split_bom(original);
    let (shebang, rest) = split_shebang(rest);

    let body = if has_header_at_top(rest) {
        remove_header(rest)
    } else {
        remove_initial_comment(rest)
    };

    let mut out = String::with_capacity(original.len() + header.len());
    out.push_str(bom);
    out.push_str(shebang);
    out.push_str(&join(header, body));
    out
}
