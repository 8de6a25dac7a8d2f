//! Status Bar Widget
//!
//! `[timestamp] emoji message            [source] ● connection`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;
        if area.height < 1 || area.width < 4 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        // Right side first, the message gets what is left
        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}] ", vm.source)
        };
        let right_width = (source.chars().count() + vm.connection.chars().count() + 1) as u16;
        let right_x = area.x + area.width.saturating_sub(right_width);
        let (x, _) = buf.set_stringn(right_x, area.y, &source, usize::MAX, vm.metadata_style);
        buf.set_string(x, area.y, &vm.connection, vm.connection_style);

        let mut x = area.x + 1;
        if !vm.timestamp.is_empty() {
            let ts = format!("[{}] ", vm.timestamp);
            x = buf.set_stringn(x, area.y, &ts, usize::MAX, vm.metadata_style).0;
        }

        let emoji = format!("{} ", vm.emoji);
        x = buf.set_stringn(x, area.y, &emoji, usize::MAX, vm.message_style).0;

        let available = right_x.saturating_sub(x + 1) as usize;
        let message = if vm.message.chars().count() > available {
            let truncated: String = vm
                .message
                .chars()
                .take(available.saturating_sub(1))
                .collect();
            format!("{}…", truncated)
        } else {
            vm.message.clone()
        };
        buf.set_stringn(x, area.y, &message, available, vm.message_style);
    }
}
