//! Slide-in detail panel for the selected skip.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use skiphire_core::{Extra, Extras, SkipOption, grand_total};

use crate::components::EventResult;
use crate::state::AppState;
use crate::util::format::{format_days, format_percent, format_pounds, format_price};
use crate::util::styles::{ACCENT_COLOR, HELP_COLOR, flag_style, price_style};

use super::helpers::{HelpText, render_modal_frame};
use super::right_panel_rect;

const PANEL_WIDTH: u16 = 56;

fn allowed_text(allowed: bool) -> &'static str {
    if allowed { "Allowed" } else { "Not Allowed" }
}

fn spec_row(label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {:<16}", label)),
        Span::styled(value, value_style),
    ])
}

fn heading(text: &str) -> Line<'static> {
    Line::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )
}

/// Waste rules shown at the bottom of the panel
pub fn waste_guidelines(skip: &SkipOption) -> Vec<&'static str> {
    let mut rules = vec![
        "No hazardous materials (paint, chemicals, asbestos)",
        "No electrical appliances or batteries",
        "No liquids or wet waste",
    ];
    if skip.allows_heavy_waste {
        rules.push("Heavy materials like soil and rubble allowed");
    } else {
        rules.push("Light household and garden waste only");
    }
    rules
}

/// Panel body for `skip` with the currently toggled `extras`
pub fn overlay_lines(skip: &SkipOption, extras: &Extras) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            format!("{} Yard Skip", skip.size),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("{} hire period", format_days(skip.hire_period_days)),
            Style::default().fg(HELP_COLOR),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled(format_pounds(skip.total_price()), price_style()),
            Span::raw("  Total price (inc. VAT)"),
        ]),
        Line::styled(
            format!(
                "Base: {} + VAT ({})",
                format_price(skip.price_before_vat),
                format_percent(skip.vat)
            ),
            Style::default().fg(HELP_COLOR),
        ),
        Line::from(""),
        heading("Specifications"),
        spec_row(
            "Hire Period",
            format_days(skip.hire_period_days),
            Style::default(),
        ),
        spec_row(
            "Road Placement",
            allowed_text(skip.allowed_on_road).to_string(),
            flag_style(skip.allowed_on_road),
        ),
        spec_row(
            "Heavy Waste",
            allowed_text(skip.allows_heavy_waste).to_string(),
            flag_style(skip.allows_heavy_waste),
        ),
        spec_row("Postcode", skip.postcode.clone(), Style::default()),
        Line::from(""),
        heading("Additional Options"),
    ];

    for (i, extra) in Extra::offered_for(skip).into_iter().enumerate() {
        let mark = if extras.contains(extra) { "[x]" } else { "[ ]" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", i + 1), Style::default().fg(Color::Yellow)),
            Span::raw(format!("{} {:<30}", mark, extra.label())),
            Span::styled(
                format!("+{}", format_pounds(extra.price())),
                Style::default().fg(ACCENT_COLOR),
            ),
        ]));
    }

    if !extras.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("  Total with extras: "),
            Span::styled(format_pounds(grand_total(skip, extras)), price_style()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Waste Guidelines"));
    for rule in waste_guidelines(skip) {
        lines.push(Line::styled(
            format!("  • {}", rule),
            Style::default().fg(Color::LightBlue),
        ));
    }

    lines
}

pub fn render_skip_overlay(frame: &mut Frame, state: &AppState) {
    let Some(skip) = state.selection.selected() else {
        return;
    };
    let area = right_panel_rect(PANEL_WIDTH, frame.area());

    let mf = render_modal_frame(
        frame,
        area,
        "Skip Details",
        ACCENT_COLOR,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Details
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    let body =
        Paragraph::new(overlay_lines(skip, state.selection.extras())).wrap(Wrap { trim: false });
    frame.render_widget(body, mf.chunks[1]);

    let help = HelpText::new()
        .key("[Esc/b]", Color::Yellow, "Back to Selection")
        .key("[Enter/c]", Color::Green, "Continue")
        .build_centered();
    frame.render_widget(help, mf.chunks[3]);
}

/// Keys while the overlay is open. Digits toggle the numbered extras.
pub fn handle_overlay_key(key: KeyEvent, state: &mut AppState) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => {
            state.close_overlay();
            EventResult::Handled
        }
        KeyCode::Enter | KeyCode::Char('c') => match state.confirm_selection() {
            Some(proceed) => EventResult::Proceed(proceed),
            None => EventResult::Handled,
        },
        KeyCode::Char(c @ '1'..='9') => {
            let offered = state
                .selection
                .selected()
                .map(Extra::offered_for)
                .unwrap_or_default();
            let idx = (c as usize) - ('1' as usize);
            if let Some(extra) = offered.get(idx) {
                state.toggle_extra(*extra);
            }
            EventResult::Handled
        }
        _ => EventResult::NotHandled,
    }
}
