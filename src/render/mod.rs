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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every application event.

mod commander;
mod header;
mod toast;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Paragraph},
};

use crate::{
    App, MainView,
    render::{commander::draw_commander, header::draw_header, toast::draw_toast},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a header (tool tabs and the theme toggle), the
/// active tool, a key help line and the command line. A toast, when visible,
/// is drawn last over the top right corner.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = *app.theme.palette();

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_colour).fg(theme.text_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app, &theme);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0)])
        .horizontal_margin(1)
        .split(outer[1]);

    match app.main_view {
        MainView::Epoch => app.epoch_view.draw(f, main[0], &theme),
        MainView::Formatter => app.formatter_view.draw(f, main[0], &theme),
    }

    draw_help(f, outer[2], app, &theme);
    draw_commander(f, outer[3], app, &theme);

    draw_toast(f, area, &app.toast, &theme);
}

fn draw_help(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let help = if app.commander.active() {
        "Enter run  Esc cancel"
    } else if app.is_editing() {
        "Esc done  Ctrl+T theme  Ctrl+C quit"
    } else {
        match app.main_view {
            MainView::Epoch => "1/2 tool  t theme  e/d edit  u timezone  n now  s/m/c/y/Y copy  : command  q quit",
            MainView::Formatter => "1/2 tool  t theme  i edit  f format  x JSON/XML  y copy  c clear  j/k scroll  q quit",
        }
    };

    f.render_widget(
        Paragraph::new(Span::styled(format!(" {help}"), Style::default().fg(theme.muted_colour))),
        area,
    );
}
