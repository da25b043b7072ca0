use regex::Regex;

#[allow(clippy::expect_used)]
static HEX_COLOR: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("Failed to compile HEX_COLOR regex")
});

/// Parses `#rrggbb` (or `rrggbb`) into its RGB components.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let caps = HEX_COLOR.captures(value.trim())?;
    let channel = |i: usize| u8::from_str_radix(caps.get(i)?.as_str(), 16).ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}
