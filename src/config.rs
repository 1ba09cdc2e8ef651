// Boot configuration read from the page: query string and pixel ratio.
//
// Pure string handling with no crate imports, so host tests can `include!` it.
const KEY_PRESET: &str = "preset";
const KEY_SEED: &str = "seed";
const KEY_GUI: &str = "gui";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootConfig {
    /// Requested preset name, checked against the preset table at boot.
    pub preset: Option<String>,
    pub seed: Option<u64>,
    pub show_gui: bool,
}

impl BootConfig {
    /// Parse `location.search`, with or without the leading `?`. Unknown keys
    /// and malformed values are ignored; the last occurrence of a key wins.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        let query = search.strip_prefix('?').unwrap_or(search);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let (Some(key), Some(value)) = (percent_decode(raw_key), percent_decode(raw_value))
            else {
                continue;
            };
            match key.as_str() {
                KEY_PRESET if !value.trim().is_empty() => {
                    config.preset = Some(value.trim().to_string());
                }
                KEY_SEED => {
                    if let Ok(seed) = value.trim().parse::<u64>() {
                        config.seed = Some(seed);
                    }
                }
                KEY_GUI => config.show_gui = is_truthy(&value),
                _ => {}
            }
        }
        config
    }
}

/// Backing-store scale: the reported device pixel ratio capped at `max`. A
/// missing (zero, negative or NaN) ratio counts as 1.
pub fn pixel_ratio(reported: f64, max: f64) -> f64 {
    if reported.is_finite() && reported > 0.0 {
        reported.min(max)
    } else {
        1.0
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "1" | "true" | "yes" | "on"
    )
}

/// Decode `%XX` escapes and `+` as space. Returns `None` on a truncated or
/// non-hex escape, or when the bytes are not UTF-8.
pub fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = hex_value(*bytes.get(i + 1)?)?;
                let lo = hex_value(*bytes.get(i + 2)?)?;
                out.push(hi << 4 | lo);
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

#[inline]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
