//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. It only
//! reads state: the session for modes, the `ViewState` for what the core
//! last rendered, and the playback handle for elapsed time.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use crate::audio::PlaybackHandle;
use crate::config::UiSettings;
use crate::presentation::ViewState;
use crate::session::{PlaybackState, PlayerSession};

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("j/k".to_string(), "up/down".to_string());
    map.insert("gg/G".to_string(), "top/bottom".to_string());
    map.insert("enter".to_string(), "play selected song".to_string());
    map.insert("space/p".to_string(), "play/pause".to_string());
    map.insert("h/l".to_string(), "prev/next song".to_string());
    map.insert("a".to_string(), "add folder".to_string());
    map.insert("s".to_string(), "shuffle".to_string());
    map.insert("r".to_string(), "repeat".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["j/k", "h/l", "enter", "space/p", "gg/G", "a", "s", "r", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the entire UI into the provided `frame`.
///
/// `cursor` is the highlighted row in the track list; `prompt` is the
/// in-progress folder path while the add-folder dialog is open.
pub fn draw(
    frame: &mut Frame,
    session: &PlayerSession,
    view: &ViewState,
    playback: &PlaybackHandle,
    cursor: usize,
    prompt: Option<&str>,
    ui_settings: &UiSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" vivace ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        let state_text = match session.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        };

        if let Some(song) = &view.now_playing {
            let elapsed = playback.lock().ok().map(|info| info.elapsed);
            if let Some(elapsed) = elapsed {
                parts.push(format!("Song: {} [{}]", song, format_mmss(elapsed)));
            } else {
                parts.push(format!("Song: {}", song));
            }
        }
        parts.push(state_text.to_string());

        if session.is_shuffled() {
            parts.push("Shuffle: ON".to_string());
        } else {
            parts.push("Shuffle: OFF".to_string());
        }
        if session.repeat {
            parts.push("Repeat: ON".to_string());
        } else {
            parts.push("Repeat: OFF".to_string());
        }

        if let Some(art) = &view.album_art {
            let name = art
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown");
            parts.push(format!("Art: {}", name));
        }

        parts.push(format!("Folders: {}", session.registry.len()));

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Main list: the working ordering, windowed around the cursor.
    {
        let total = view.list.len();
        let list_height = chunks[2].height as usize;
        let sel_pos = cursor.min(total.saturating_sub(1));
        let (start, end, selected_pos_in_visible) = if total <= list_height || list_height == 0 {
            (0, total, sel_pos)
        } else {
            let half = list_height / 2;
            let mut start = if sel_pos > half { sel_pos - half } else { 0 };
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height, sel_pos - start)
        };

        let visible_items: Vec<ListItem> = view.list[start..end]
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect();

        let list = List::new(visible_items)
            .block(Block::default().borders(Borders::ALL).title(" tracks "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if total > 0 {
            state.select(Some(selected_pos_in_visible));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Add-folder prompt overlay (keeps list visible under it).
    if let Some(input) = prompt {
        let popup_area = centered_rect_sized(60, 3, chunks[2]);
        frame.render_widget(Clear, popup_area);

        let prompt_par = Paragraph::new(input).block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" add folder (enter confirms, esc cancels) "),
        );
        frame.render_widget(prompt_par, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[3]);
}
