pub mod style;

/// Translated unit tag, or the raw tag when no translation exists.
pub fn unit_label(unit: &str) -> String {
    let key = format!("units.{unit}");
    let translated = t!(key.as_str());
    // Missing keys come back as the key itself.
    if translated.ends_with(key.as_str()) {
        unit.to_string()
    } else {
        translated.to_string()
    }
}

/// `"75.2 kg"` with the unit translated; whole numbers drop the fraction.
pub fn format_value(value: f64, unit: &str) -> String {
    format!("{value} {}", unit_label(unit))
}
