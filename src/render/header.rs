// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Header bar: tool tabs on the left, the theme toggle control on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{App, MainView, theme::{Theme, ThemePreference}};

const TABS: [(MainView, &str); 2] = [
    (MainView::Epoch, "1 Epoch Converter"),
    (MainView::Formatter, "2 JSON/XML Formatter"),
];

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(inner);

    let mut tabs = vec![Span::styled(
        " toolbelt ",
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
    )];
    for (view, label) in TABS {
        let style = if view == app.main_view {
            Style::default()
                .fg(theme.background_colour)
                .bg(theme.accent_colour)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted_colour)
        };
        tabs.push(Span::raw(" "));
        tabs.push(Span::styled(format!(" {label} "), style));
    }
    f.render_widget(Paragraph::new(Line::from(tabs)), columns[0]);

    draw_theme_toggle(f, columns[1], app, theme);
}

/// The toggle's label says what pressing it will do, and it is drawn pressed
/// for a moment after each toggle.
fn draw_theme_toggle(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let icon = match app.theme.current() {
        ThemePreference::Dark => "☀",
        ThemePreference::Light => "☾",
    };

    let mut style = Style::default().fg(theme.text_colour).bg(theme.surface_colour);
    if app.toggle_feedback.is_active() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let label = format!(" {icon} {} ", app.theme.toggle_label());
    f.render_widget(
        Paragraph::new(Span::styled(label, style)).alignment(Alignment::Right),
        area,
    );
}
