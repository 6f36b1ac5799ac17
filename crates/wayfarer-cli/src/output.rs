use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use wayfarer_engine::Urgency;
use wayfarer_types::Transportation;

pub fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

pub fn heading(text: &str) -> String {
    if use_color() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if use_color() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

/// Color a countdown by its severity band.
pub fn paint_urgency(text: &str, urgency: Urgency) -> String {
    if !use_color() {
        return text.to_string();
    }
    match urgency {
        Urgency::Critical => text.red().bold().to_string(),
        Urgency::Warning => text.yellow().to_string(),
        Urgency::Normal => text.green().to_string(),
    }
}

pub fn transport_label(mode: Transportation) -> &'static str {
    match mode {
        Transportation::Plane => "✈️ Plane",
        Transportation::Train => "🚂 Train",
        Transportation::Car => "🚗 Car",
        Transportation::Bus => "🚌 Bus",
    }
}
