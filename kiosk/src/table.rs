//! Table/QR resolution
//!
//! Maps scanned QR text or the page's own `table` query parameter onto a
//! table number. Anything that does not resolve to a number in 1-25 is
//! discarded without touching state; the caller just keeps scanning.

use shared::TableNumber;
use tracing::debug;

/// Resolve decoded QR text to a table number.
///
/// URL-shaped text (a scheme is present) is resolved through its `table`
/// query parameter only. Everything else falls back to `table=<digits>`
/// (key matched case-insensitively, anywhere in the text) and then to a
/// bare digit string.
pub fn resolve_table_text(text: &str) -> Option<TableNumber> {
    if text.contains("://") {
        return query_param(text, "table").and_then(parse_table);
    }
    if let Some(digits) = table_key_digits(text) {
        return parse_table(digits);
    }
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return parse_table(text);
    }
    None
}

/// Resolve the page query string (`table=7` or `?table=7`) at load time.
pub fn from_page_query(query: &str) -> Option<TableNumber> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "table")
        .and_then(|(_, value)| parse_table(value))
}

fn parse_table(digits: &str) -> Option<TableNumber> {
    let n: u8 = digits.parse().ok()?;
    let table = TableNumber::new(n);
    if table.is_none() {
        debug!(value = digits, "discarding out-of-range table");
    }
    table
}

/// Extract the `table` query parameter from a URL.
fn query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let after = url.split_once('?')?.1;
    let after = after.split_once('#').map(|(q, _)| q).unwrap_or(after);
    after
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Digits following a `table=` key anywhere in raw (non-URL) text.
fn table_key_digits(text: &str) -> Option<&str> {
    let idx = text.to_ascii_lowercase().find("table=")?;
    let rest = &text[idx + "table=".len()..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

// ============================================================================
// Scan session
// ============================================================================

/// Outcome of offering one decoded frame to a scan session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPoll {
    /// Decode miss or rejected value; keep polling frames.
    Continue,
    /// A valid table was read; the session is torn down.
    Matched(TableNumber),
}

/// Per-frame QR scanning session.
///
/// The camera itself is outside this crate; callers feed each frame's
/// decode result in. The session ends on the first accepted table or an
/// explicit cancel, and a finished session ignores further frames.
#[derive(Debug)]
pub struct ScanSession {
    active: bool,
}

impl ScanSession {
    pub fn start() -> Self {
        Self { active: true }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn offer(&mut self, decoded: Option<&str>) -> ScanPoll {
        if !self.active {
            return ScanPoll::Continue;
        }
        let Some(text) = decoded else {
            return ScanPoll::Continue;
        };
        match resolve_table_text(text) {
            Some(table) => {
                self.active = false;
                ScanPoll::Matched(table)
            }
            None => ScanPoll::Continue,
        }
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

// ============================================================================
// Table QR export
// ============================================================================

/// Third-party QR image endpoint (display/export convenience, never parsed back)
const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Build the QR image URL for a table's ordering link.
pub fn table_qr_image_url(base_url: &str, table: Option<TableNumber>) -> String {
    let target = match table {
        Some(t) => format!("{}?table={}", base_url, t),
        None => base_url.to_string(),
    };
    format!(
        "{}?size=400x400&data={}&bgcolor=ffffff&color=312e81&margin=10",
        QR_ENDPOINT,
        percent_encode(&target)
    )
}

/// Percent-encoding with encodeURIComponent's unescaped set:
/// alphanumerics plus `- _ . ! ~ * ' ( )`.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => out.push(b as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
