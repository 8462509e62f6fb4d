/// Service identifiers offered on the services step, paired with the display
/// names used in the generated summary.
pub const SERVICE_CATALOG: &[(&str, &str)] = &[
    ("candid", "Candid Photography"),
    ("film", "Wedding Film"),
    ("traditional", "Traditional Photography"),
    ("video", "Traditional Video"),
    ("album", "Premium Album"),
];

/// Maps a raw service identifier to its display name, falling back to the
/// identifier itself when unmapped.
pub fn service_display_name(id: &str) -> &str {
    SERVICE_CATALOG
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, name)| *name)
        .unwrap_or(id)
}
