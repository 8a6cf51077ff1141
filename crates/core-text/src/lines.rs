//! Splitting raw file bytes into row byte strings.

/// Split `bytes` on `\n`, dropping trailing `\r`s from each line. A final
/// newline does not produce an extra empty line; empty input has no lines.
pub fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n').map(trim_carriage_returns).collect()
}

fn trim_carriage_returns(mut line: &[u8]) -> &[u8] {
    while let Some(rest) = line.strip_suffix(b"\r") {
        line = rest;
    }
    line
}
