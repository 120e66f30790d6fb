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

//! Render the toast notification.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{components::Toast, theme::Theme};

const MARGIN: u16 = 1;

pub(crate) fn draw_toast(f: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
    if !toast.is_visible() {
        return;
    }

    let message = toast.message();
    let width = (message.chars().count() as u16 + 4).min(area.width.saturating_sub(MARGIN * 2));
    let height = 3.min(area.height);
    if width == 0 || height == 0 {
        return;
    }

    let toast_area = Rect {
        x: area.right().saturating_sub(width + MARGIN),
        y: area.y + MARGIN.min(area.height - height),
        width,
        height,
    };

    f.render_widget(Clear, toast_area);
    f.render_widget(
        Paragraph::new(format!(" {message}"))
            .style(Style::default().fg(theme.text_colour).bg(theme.surface_colour))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.success_colour).bg(theme.surface_colour)),
            ),
        toast_area,
    );
}
