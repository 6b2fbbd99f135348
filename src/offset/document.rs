//! Line-preserving view of the node config file.
//!
//! The config is treated as opaque text except for the first `offset = <digits>`
//! line. Rendering an unmodified document reproduces the input byte-for-byte,
//! and `set_offset` only swaps the digits of that one line.

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Verbatim(String),
    Offset {
        /// Everything before the digits, e.g. `  offset = `
        prefix: String,
        value: u64,
        /// Everything after the digits, including any comment and the line ending
        suffix: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    lines: Vec<Line>,
}

impl ConfigDocument {
    pub fn parse(text: &str) -> Self {
        let mut found = false;
        let lines = text
            .split_inclusive('\n')
            .map(|raw| {
                if !found {
                    if let Some(line) = parse_offset_line(raw) {
                        found = true;
                        return line;
                    }
                }
                Line::Verbatim(raw.to_string())
            })
            .collect();
        Self { lines }
    }

    /// Value of the offset field, if the document has one
    pub fn offset(&self) -> Option<u64> {
        self.lines.iter().find_map(|line| match line {
            Line::Offset { value, .. } => Some(*value),
            Line::Verbatim(_) => None,
        })
    }

    /// Replace the offset value. Returns `false` (and changes nothing) when
    /// the document has no offset field.
    pub fn set_offset(&mut self, new_value: u64) -> bool {
        for line in &mut self.lines {
            if let Line::Offset { value, .. } = line {
                *value = new_value;
                return true;
            }
        }
        false
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Verbatim(raw) => out.push_str(raw),
                Line::Offset {
                    prefix,
                    value,
                    suffix,
                } => {
                    out.push_str(prefix);
                    out.push_str(&value.to_string());
                    out.push_str(suffix);
                }
            }
        }
        out
    }
}

/// Recognize `offset = <digits>` with optional surrounding whitespace and an
/// optional trailing `#` comment. Values that overflow u64 are not an offset.
fn parse_offset_line(raw: &str) -> Option<Line> {
    let body_len = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(raw)
        .len();
    let body = &raw[..body_len];

    let eq = body.find('=')?;
    if body[..eq].trim() != "offset" {
        return None;
    }

    let after_eq = &body[eq + 1..];
    let digits_start = eq + 1 + (after_eq.len() - after_eq.trim_start().len());
    let digits_len = body[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    let digits_end = digits_start + digits_len;

    let rest = body[digits_end..].trim_start();
    if !(rest.is_empty() || rest.starts_with('#')) {
        return None;
    }

    let value = body[digits_start..digits_end].parse::<u64>().ok()?;
    Some(Line::Offset {
        prefix: raw[..digits_start].to_string(),
        value,
        suffix: raw[digits_end..].to_string(),
    })
}
