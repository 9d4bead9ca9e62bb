use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use skiphire_core::{SizeClass, SkipOption};

use crate::util::format::{format_days, format_pounds};
use crate::util::styles::{
    ACCENT_COLOR, HEAVY_COLOR, HELP_COLOR, POSITIVE_COLOR, card_block, flag_style, price_style,
};

/// Short tags shown under a card's facts
pub fn badges(skip: &SkipOption) -> Vec<(&'static str, Color)> {
    let mut badges = Vec::new();
    if skip.allowed_on_road {
        badges.push(("Road OK", POSITIVE_COLOR));
    }
    if skip.allows_heavy_waste {
        badges.push(("Heavy Waste", HEAVY_COLOR));
    }
    if skip.size_class() == SizeClass::Compact {
        badges.push(("Compact", ACCENT_COLOR));
    }
    badges
}

pub fn road_text(allowed: bool) -> &'static str {
    if allowed {
        "Road placement allowed"
    } else {
        "Private land only"
    }
}

pub fn heavy_text(allowed: bool) -> &'static str {
    if allowed {
        "Heavy waste allowed"
    } else {
        "Light waste only"
    }
}

/// Card body, top to bottom
pub fn card_lines(skip: &SkipOption, selected: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format_pounds(skip.total_price()), price_style()),
            Span::styled(" inc. VAT", Style::default().fg(HELP_COLOR)),
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!("{} hire period", format_days(skip.hire_period_days))),
        Line::styled(road_text(skip.allowed_on_road), flag_style(skip.allowed_on_road)),
        Line::styled(
            heavy_text(skip.allows_heavy_waste),
            flag_style(skip.allows_heavy_waste),
        ),
    ];

    let badge_spans: Vec<Span> = badges(skip)
        .into_iter()
        .flat_map(|(label, color)| {
            [
                Span::styled(format!("[{}]", label), Style::default().fg(color)),
                Span::raw(" "),
            ]
        })
        .collect();
    if !badge_spans.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(badge_spans));
    }

    lines.push(Line::from(""));
    let action = if selected {
        Line::styled(
            "Selected ✓",
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled("Select This Skip →", Style::default().fg(HELP_COLOR))
    };
    lines.push(action.alignment(Alignment::Center));

    lines
}

/// Render one skip as a bordered card
pub fn render_skip_card(
    frame: &mut Frame,
    area: Rect,
    skip: &SkipOption,
    selected: bool,
    focused: bool,
) {
    let title = format!(" {} Yards · {} ", skip.size, skip.size_class().name());
    let block = card_block(title, selected, focused);
    let paragraph = Paragraph::new(card_lines(skip, selected)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use skiphire_core::SkipId;

    use super::*;

    fn skip(size: u32, on_road: bool, heavy: bool) -> SkipOption {
        SkipOption {
            id: SkipId(1),
            size,
            hire_period_days: 14,
            price_before_vat: 278.0,
            vat: 20.0,
            allowed_on_road: on_road,
            allows_heavy_waste: heavy,
            postcode: "NR32".into(),
        }
    }

    fn joined(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_badges() {
        let labels: Vec<&str> = badges(&skip(6, true, true)).iter().map(|b| b.0).collect();
        assert_eq!(labels, vec!["Road OK", "Heavy Waste", "Compact"]);
        assert!(badges(&skip(20, false, false)).is_empty());
    }

    #[test]
    fn test_card_lines_show_price_and_facts() {
        let text = joined(&card_lines(&skip(4, false, true), false));
        assert!(text.contains("£334 inc. VAT"));
        assert!(text.contains("14 days hire period"));
        assert!(text.contains("Private land only"));
        assert!(text.contains("Heavy waste allowed"));
        assert!(text.contains("Select This Skip"));
    }

    #[test]
    fn test_card_lines_selected() {
        let text = joined(&card_lines(&skip(4, true, false), true));
        assert!(text.contains("Selected ✓"));
        assert!(!text.contains("Select This Skip"));
    }
}
