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

//! UI rendering for the formatter.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    clipboard::CopyTarget, components::FormatterView, format::FormatKind, render::Render,
    theme::Theme,
};

impl Render for FormatterView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        self.draw_selector(f, layout[0], theme);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[1]);

        self.draw_input(f, panes[0], theme);
        self.draw_output(f, panes[1], theme);
    }
}

impl FormatterView {
    fn draw_selector(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let option = |kind: FormatKind| {
            let label = format!(" {} ", kind.label());
            if kind == self.kind {
                Span::styled(
                    label,
                    Style::default()
                        .fg(theme.background_colour)
                        .bg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(theme.muted_colour))
            }
        };

        let line = Line::from(vec![
            Span::styled(" Format ", Style::default().fg(theme.text_colour)),
            option(FormatKind::Json),
            option(FormatKind::Xml),
            Span::styled("  [x] switch", Style::default().fg(theme.muted_colour)),
        ]);

        f.render_widget(Paragraph::new(line), area);
    }

    fn draw_input(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = if self.editing {
            " Input (Esc done, Ctrl+F format) "
        } else {
            " Input [i] "
        };
        let block = pane(title, self.editing, theme);
        let inner = block.inner(area);

        let paragraph = if self.input.is_empty() {
            Paragraph::new(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(theme.muted_colour),
            ))
        } else {
            // Keep the end of the buffer, where typing happens, in view
            let lines = self.input.split('\n').count();
            let scroll = lines.saturating_sub(inner.height as usize).min(u16::MAX as usize) as u16;

            Paragraph::new(Text::raw(self.input.as_str()))
                .style(Style::default().fg(theme.text_colour))
                .scroll((scroll, 0))
        };

        f.render_widget(paragraph.block(block), area);

        if self.editing && inner.height > 0 {
            let last_line = self.input.rsplit('\n').next().unwrap_or_default();
            let row = (self.input.split('\n').count() as u16)
                .saturating_sub(1)
                .min(inner.height - 1);
            let column = (last_line.chars().count() as u16).min(inner.width.saturating_sub(1));
            f.set_cursor_position((inner.x + column, inner.y + row));
        }
    }

    fn draw_output(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = if self.copy_feedback.is_copied(CopyTarget::FormattedOutput) {
            " Output (Copied!) "
        } else {
            " Output [f] format [y] copy "
        };
        let block = pane(title, false, theme);

        let paragraph = match &self.error {
            Some(error) => Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(theme.error_colour),
            ))
            .wrap(Wrap { trim: false }),
            None => Paragraph::new(Text::raw(self.output.as_str()))
                .style(Style::default().fg(theme.text_colour))
                .scroll((self.output_scroll, 0)),
        };

        f.render_widget(paragraph.block(block), area);
    }
}

fn pane<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(theme.text_colour)))
}
