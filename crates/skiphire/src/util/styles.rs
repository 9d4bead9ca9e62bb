//! Common styling for the booking screens

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

/// Accent used for prices, the active step and the selected card
pub const ACCENT_COLOR: Color = Color::Cyan;

/// Border of the card under the keyboard cursor
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Positive facts ("Allowed", "Road OK")
pub const POSITIVE_COLOR: Color = Color::Green;

/// Negative facts ("Not Allowed") and errors
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Heavy waste badge
pub const HEAVY_COLOR: Color = Color::Magenta;

/// Card block. The selected card gets a thick accent border, the card under
/// the cursor a yellow one; a selected card under the cursor stays thick.
pub fn card_block(title: String, selected: bool, focused: bool) -> Block<'static> {
    let color = match (selected, focused) {
        (_, true) => FOCUS_COLOR,
        (true, false) => ACCENT_COLOR,
        (false, false) => Color::Gray,
    };

    let border_type = if selected {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(color))
        .title(title)
}

/// Green when allowed, red otherwise
pub fn flag_style(allowed: bool) -> Style {
    if allowed {
        Style::default().fg(POSITIVE_COLOR)
    } else {
        Style::default().fg(NEGATIVE_COLOR)
    }
}

/// Bold accent text for prices
pub fn price_style() -> Style {
    Style::default()
        .fg(ACCENT_COLOR)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_style() {
        assert_eq!(flag_style(true).fg, Some(POSITIVE_COLOR));
        assert_eq!(flag_style(false).fg, Some(NEGATIVE_COLOR));
    }

    #[test]
    fn test_card_block_title() {
        let block = card_block("6 Yards".to_string(), true, false);
        assert!(format!("{:?}", block).contains("6 Yards"));
    }
}
