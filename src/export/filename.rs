//! Content-Disposition filename extraction.

use regex::Regex;

/// Pull the suggested filename out of a Content-Disposition header.
/// Handles `filename="x.csv"`, `filename=x.csv` and the RFC 5987
/// `filename*=UTF-8''x.csv` form.
pub fn extract_filename(header: &str) -> Option<String> {
    let re = Regex::new(r#"filename\*?=(?:UTF-8''|")?([^";\r\n]+)"#).ok()?;
    let captured = re.captures(header)?.get(1)?.as_str();
    let name = percent_decode(captured.trim_matches('"'));

    if name.is_empty() { None } else { Some(name) }
}

/// Minimal percent-decoding for header values (%20 etc.). Invalid escapes
/// are kept verbatim.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
            && let Ok(byte) = u8::from_str_radix(&s[i + 1..i + 3], 16)
        {
            out.push(byte);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}
