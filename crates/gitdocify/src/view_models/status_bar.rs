//! Status Bar View Model

use crate::state::{AppState, StatusKind};
use docify_client::ConnectionState;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// Formatted as "14:32:05", empty for the welcome message
    pub timestamp: String,
    pub source: String,
    /// Live update connection, e.g. "● live"
    pub connection: String,
    pub message_style: Style,
    pub connection_style: Style,
    pub bg_color: Color,
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);

        let connection_color = match state.live_update.connection {
            ConnectionState::Open => theme.status_success,
            ConnectionState::Connecting => theme.status_warning,
            ConnectionState::Closed => theme.text_muted,
        };
        let connection = format!("● {}", state.live_update.connection.label());
        let connection_style = Style::default().fg(connection_color);

        let Some(msg) = state.status_bar.latest() else {
            return Self {
                emoji: "👋",
                message: "Welcome to GitDocify - press n to document a repository".to_string(),
                timestamp: String::new(),
                source: String::new(),
                connection,
                message_style: metadata_style.add_modifier(Modifier::ITALIC),
                connection_style,
                bg_color: theme.bg_primary,
                metadata_style,
            };
        };

        let fg = match msg.kind {
            StatusKind::Running | StatusKind::Warning => theme.status_warning,
            StatusKind::Success => theme.status_success,
            StatusKind::Error => theme.status_error,
            StatusKind::Info => theme.status_info,
        };

        Self {
            emoji: msg.kind.emoji(),
            message: msg.message.clone(),
            timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
            source: msg.source.clone(),
            connection,
            message_style: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            connection_style,
            bg_color: theme.bg_primary,
            metadata_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::StatusBarAction;
    use crate::reducers::status_bar_reducer::reduce_status_bar;

    #[test]
    fn test_welcome_without_messages() {
        let state = AppState::default();
        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.emoji, "👋");
        assert!(vm.timestamp.is_empty());
        assert_eq!(vm.connection, "● offline");
    }

    #[test]
    fn test_latest_message_is_shown() {
        let mut state = AppState::default();
        state.status_bar = reduce_status_bar(
            state.status_bar,
            &StatusBarAction::error("Export failed", "export"),
        );
        state.live_update.connection = ConnectionState::Open;

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.emoji, "🚨");
        assert_eq!(vm.message, "Export failed");
        assert_eq!(vm.source, "export");
        assert_eq!(vm.connection, "● live");
    }
}
