use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::format_timestamp;
use crate::engine::{derive_bit_info, format_digits, render};
use crate::models::{ConversionRecord, Radix, Theme};

/// Everything the renderer needs, borrowed from the app for one frame
pub struct RenderState<'a> {
    pub input: &'a str,
    pub from: Radix,
    pub to: Radix,
    pub output: Option<&'a str>,
    pub error: Option<&'a str>,
    pub value: Option<u64>,
    pub entries: &'a [ConversionRecord],
    pub selected_idx: usize,
    pub theme: Theme,
    pub status_message: Option<&'a StatusMessage>,
}

/// Theme-dependent colors
struct Palette {
    text: Color,
    muted: Color,
    accent: Color,
    error: Color,
    selected_fg: Color,
    selected_bg: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            text: Color::Rgb(250, 250, 250),
            muted: Color::Rgb(113, 113, 122),
            accent: Color::Rgb(16, 185, 129),
            error: Color::Rgb(239, 68, 68),
            selected_fg: Color::Rgb(250, 250, 250),
            selected_bg: Color::Rgb(16, 185, 129),
        },
        Theme::Light => Palette {
            text: Color::Rgb(24, 24, 27),
            muted: Color::Rgb(113, 113, 122),
            accent: Color::Rgb(5, 150, 105),
            error: Color::Rgb(185, 28, 28),
            selected_fg: Color::Rgb(250, 250, 250),
            selected_bg: Color::Rgb(5, 150, 105),
        },
    }
}

fn badge_color(radix: Radix) -> Color {
    match radix {
        Radix::Binary => Color::Rgb(59, 130, 246),
        Radix::Octal => Color::Rgb(168, 85, 247),
        Radix::Decimal => Color::Rgb(16, 185, 129),
        Radix::Hexadecimal => Color::Rgb(245, 158, 11),
    }
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());
    let colors = palette(state.theme);

    render_converter(frame, layout.converter_area, state, &colors);
    render_quickref(frame, layout.quickref_area, state, &colors);
    render_history(frame, layout.history_area, state, &colors);
    render_status_bar(frame, layout.status_area, state, &colors);
}

fn render_converter(frame: &mut Frame, area: Rect, state: &RenderState, colors: &Palette) {
    let badge = |radix: Radix| {
        Span::styled(
            format!(" {} ", radix.short_name()),
            Style::default().fg(Color::Rgb(250, 250, 250)).bg(badge_color(radix)),
        )
    };

    let input_line = Line::from(vec![
        Span::styled("From ", Style::default().fg(colors.muted)),
        badge(state.from),
        Span::raw("  "),
        Span::styled(state.input, Style::default().fg(colors.text)),
        Span::styled("▌", Style::default().fg(colors.accent)),
    ]);

    let output_line = Line::from(vec![
        Span::styled("To   ", Style::default().fg(colors.muted)),
        badge(state.to),
        Span::raw("  "),
        Span::styled(
            state.output.unwrap_or(""),
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        ),
    ]);

    let third_line = match state.error {
        Some(error) => Line::from(Span::styled(error, Style::default().fg(colors.error))),
        None => Line::from(""),
    };

    let paragraph = Paragraph::new(Text::from(vec![input_line, output_line, third_line])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.muted))
            .title(" Converter "),
    );

    frame.render_widget(paragraph, area);
}

fn render_quickref(frame: &mut Frame, area: Rect, state: &RenderState, colors: &Palette) {
    let mut lines = Vec::with_capacity(Radix::ALL.len() + 1);

    for radix in Radix::ALL {
        let digits = match state.value {
            Some(value) => format_digits(&render(value, radix), radix),
            None => "—".to_string(),
        };
        // Highlight the row matching the active input base
        let digit_style = if state.value.is_some() && radix == state.from {
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<4}", radix.short_name()), Style::default().fg(colors.muted)),
            Span::styled(digits, digit_style),
        ]));
    }

    let meta = match state.value {
        Some(value) => derive_bit_info(value).summary(),
        None => String::new(),
    };
    lines.push(Line::from(Span::styled(meta, Style::default().fg(colors.muted))));

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.muted))
            .title(" Quick Reference "),
    );

    frame.render_widget(paragraph, area);
}

fn render_history(frame: &mut Frame, area: Rect, state: &RenderState, colors: &Palette) {
    let items: Vec<ListItem> = if state.entries.is_empty() {
        vec![ListItem::new("No conversions yet — start typing").style(Style::default().fg(colors.muted))]
    } else {
        state
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let time_ago = format_timestamp(&entry.time);
                let content = format!(
                    "{} {} → {} {}  ·  {}",
                    entry.from_base.short_name(),
                    entry.from,
                    entry.to_base.short_name(),
                    entry.to,
                    time_ago,
                );

                let style = if idx == state.selected_idx {
                    Style::default()
                        .fg(colors.selected_fg)
                        .bg(colors.selected_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.muted)
                };

                ListItem::new(content).style(style)
            })
            .collect()
    };

    let title = format!(" History ({}) ", state.entries.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.muted))
            .title(title),
    );

    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState, colors: &Palette) {
    let (text, style) = match state.status_message {
        Some(message) => {
            let color = match message.message_type {
                MessageType::Success => colors.accent,
                MessageType::Error => colors.error,
            };
            (message.text.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD))
        }
        None => (
            "tab/shift-tab bases · s swap · enter load · del remove · ^l clear · ^y copy · t theme · ^c quit"
                .to_string(),
            Style::default().fg(colors.muted),
        ),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
