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

//! UI rendering for the epoch converter.
//!
//! Three bordered panels are stacked vertically: the live clock, epoch to
//! date, and date to epoch, followed by a line showing the timezone mode.
//! Result rows are only drawn while their input converts successfully.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    clipboard::CopyTarget,
    components::{EpochFocus, EpochView},
    epoch::TimezoneMode,
    render::Render,
    theme::Theme,
};

const LABEL_WIDTH: usize = 16;
const INPUT_PROMPT: &str = "> ";

impl Render for EpochView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        self.draw_clock(f, layout[0], theme);
        self.draw_epoch_panel(f, layout[1], theme);
        self.draw_date_panel(f, layout[2], theme);
        self.draw_mode(f, layout[3], theme);
    }
}

impl EpochView {
    fn draw_clock(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            value_row(
                "Seconds",
                self.clock.epoch_seconds.to_string(),
                self.copy_control('s', CopyTarget::CurrentEpochSeconds, theme),
                theme,
            ),
            value_row(
                "Milliseconds",
                self.clock.epoch_millis.to_string(),
                self.copy_control('m', CopyTarget::CurrentEpochMillis, theme),
                theme,
            ),
            value_row(
                &format!("Time ({})", self.mode.label()),
                self.clock.formatted.clone(),
                Span::raw(""),
                theme,
            ),
        ];

        f.render_widget(
            Paragraph::new(lines).block(panel("Current Epoch Time", false, theme)),
            area,
        );
    }

    fn draw_epoch_panel(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == EpochFocus::EpochInput;
        let block = panel("Epoch to Date [e]", focused, theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut lines = vec![input_line(
            self.epoch_input.value(),
            "Epoch seconds or milliseconds",
            Style::default().fg(theme.text_colour).bg(theme.surface_colour),
            theme,
        )];

        if let Some(result) = &self.epoch_result {
            lines.push(Line::default());
            lines.push(value_row(
                "Converted Time",
                result.formatted.clone(),
                self.copy_control('c', CopyTarget::ConvertedTime, theme),
                theme,
            ));
            lines.push(value_row(
                "Relative",
                format!("{} ({} s)", result.relative, result.seconds),
                Span::raw(""),
                theme,
            ));
        }

        f.render_widget(Paragraph::new(lines), inner);

        if focused {
            set_input_cursor(f, inner, self.epoch_input.cursor());
        }
    }

    fn draw_date_panel(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == EpochFocus::DateInput;
        let block = panel("Date to Epoch [d]", focused, theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        // The date input follows the colour scheme last announced by the
        // theme controller
        let scheme = Theme::for_preference(self.date_scheme);
        let mut lines = vec![input_line(
            self.date_input.value(),
            "YYYY-MM-DDTHH:MM[:SS]",
            Style::default().fg(scheme.text_colour).bg(scheme.surface_colour),
            theme,
        )];

        if let Some(result) = &self.date_result {
            lines.push(Line::default());
            lines.push(value_row(
                "Seconds",
                result.seconds.to_string(),
                self.copy_control('y', CopyTarget::DateEpochSeconds, theme),
                theme,
            ));
            lines.push(value_row(
                "Milliseconds",
                result.millis.to_string(),
                self.copy_control('Y', CopyTarget::DateEpochMillis, theme),
                theme,
            ));
        }

        f.render_widget(Paragraph::new(lines), inner);

        if focused {
            set_input_cursor(f, inner, self.date_input.cursor());
        }
    }

    fn draw_mode(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let option = |mode: TimezoneMode| {
            if mode == self.mode {
                Span::styled(
                    format!(" {} ", mode.label()),
                    Style::default()
                        .fg(theme.background_colour)
                        .bg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {} ", mode.label()), Style::default().fg(theme.muted_colour))
            }
        };

        let line = Line::from(vec![
            Span::styled(" Timezone ", Style::default().fg(theme.text_colour)),
            option(TimezoneMode::Local),
            option(TimezoneMode::Utc),
            Span::styled("  [u] toggle  [n] date to now", Style::default().fg(theme.muted_colour)),
        ]);

        f.render_widget(Paragraph::new(line), area);
    }

    fn copy_control(&self, key: char, target: CopyTarget, theme: &Theme) -> Span<'static> {
        if self.copy_feedback.is_copied(target) {
            Span::styled("  Copied!", Style::default().fg(theme.success_colour))
        } else {
            Span::styled(format!("  [{key}] copy"), Style::default().fg(theme.muted_colour))
        }
    }
}

fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(format!(" {title} "), Style::default().fg(theme.text_colour)))
}

fn value_row(label: &str, value: String, control: Span<'static>, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label:<width$}", width = LABEL_WIDTH),
            Style::default().fg(theme.muted_colour),
        ),
        Span::styled(value, Style::default().fg(theme.text_colour)),
        control,
    ])
}

fn input_line(value: &str, hint: &str, style: Style, theme: &Theme) -> Line<'static> {
    let prompt = Span::styled(INPUT_PROMPT, Style::default().fg(theme.accent_colour));

    if value.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(hint.to_string(), style.fg(theme.muted_colour)),
        ])
    } else {
        Line::from(vec![prompt, Span::styled(value.to_string(), style)])
    }
}

fn set_input_cursor(f: &mut Frame, inner: Rect, cursor: usize) {
    let x = inner.x + (INPUT_PROMPT.len() + cursor) as u16;
    f.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
}
