use crate::color::Rgba8;
use crate::field::StatusFormat;

/// A resolved status pill. Missing colors mean "use the theme default".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPill {
    pub label: String,
    pub background: Option<Rgba8>,
    pub text: Option<Rgba8>,
}

/// Finds the definition whose value matches `raw`, ignoring case.
pub fn find_status<'a>(formats: &'a [StatusFormat], raw: &str) -> Option<&'a StatusFormat> {
    let raw = raw.to_lowercase();
    formats
        .iter()
        .find(|format| format.value.to_lowercase() == raw)
}

pub fn status_pill(format: &StatusFormat) -> StatusPill {
    let label = if format.is_uppercase {
        format.text_value.to_uppercase()
    } else {
        format.text_value.clone()
    };

    StatusPill {
        label,
        background: parse_color(format.bg_color.as_deref(), &format.value),
        text: parse_color(format.text_color.as_deref(), &format.value),
    }
}

fn parse_color(color: Option<&str>, status: &str) -> Option<Rgba8> {
    let color = color?;
    let parsed = Rgba8::parse_hex(color);
    if parsed.is_none() {
        log::warn!("Status {status:?} has an invalid color {color:?}; using the default");
    }
    parsed
}
