//! Achievement browser overlay UI.
//!
//! A browsable list of achievements organized by category, with a detail
//! panel showing description (or secret hint) and unlock status.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::achievements::catalog::Catalog;
use crate::achievements::types::{Category, PlayerAchievementRecord};
use crate::ui::notification::tier_color;

/// UI state for the achievement browser overlay.
pub struct AchievementBrowserState {
    pub showing: bool,
    pub selected_category: Category,
    pub selected_index: usize,
}

impl AchievementBrowserState {
    pub fn new() -> Self {
        Self {
            showing: false,
            selected_category: Category::Combat,
            selected_index: 0,
        }
    }

    pub fn open(&mut self) {
        self.showing = true;
        self.selected_index = 0;
    }

    pub fn close(&mut self) {
        self.showing = false;
    }

    pub fn next_category(&mut self) {
        let pos = Category::ALL
            .iter()
            .position(|c| *c == self.selected_category)
            .unwrap_or(0);
        self.selected_category = Category::ALL[(pos + 1) % Category::ALL.len()];
        self.selected_index = 0;
    }

    pub fn prev_category(&mut self) {
        let pos = Category::ALL
            .iter()
            .position(|c| *c == self.selected_category)
            .unwrap_or(0);
        self.selected_category =
            Category::ALL[(pos + Category::ALL.len() - 1) % Category::ALL.len()];
        self.selected_index = 0;
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self, max_items: usize) {
        if self.selected_index + 1 < max_items {
            self.selected_index += 1;
        }
    }
}

impl Default for AchievementBrowserState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the achievement browser overlay.
pub fn render_achievement_browser(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    record: &PlayerAchievementRecord,
    ui_state: &AchievementBrowserState,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(
            " Achievements ({:.1}% Complete, {} pts) ",
            record.completion_percentage(catalog),
            record.total_points(catalog)
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Help
        ])
        .split(inner);

    render_category_tabs(frame, chunks[0], catalog, record, ui_state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_achievement_list(frame, content_chunks[0], catalog, record, ui_state);
    render_achievement_detail(frame, content_chunks[1], catalog, record, ui_state);

    let help = Paragraph::new("[</>] Category  [Up/Down] Select  [Esc] Close")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn render_category_tabs(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    record: &PlayerAchievementRecord,
    ui_state: &AchievementBrowserState,
) {
    let mut spans = Vec::new();

    for cat in Category::ALL {
        let (unlocked, total) = record.count_by_category(catalog, cat);

        let style = if cat == ui_state.selected_category {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::styled(
            format!(" {} ({}/{}) ", cat.name(), unlocked, total),
            style,
        ));
    }

    let tabs = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(tabs, area);
}

fn render_achievement_list(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    record: &PlayerAchievementRecord,
    ui_state: &AchievementBrowserState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let defs = catalog.by_category(ui_state.selected_category);

    let items: Vec<ListItem> = defs
        .iter()
        .enumerate()
        .map(|(i, def)| {
            let is_unlocked = record.is_unlocked(def.id);
            let is_selected = i == ui_state.selected_index;

            let (icon, name) = if is_unlocked || !def.secret {
                (def.icon, def.name)
            } else {
                ("?", "???")
            };

            let prefix = if is_selected { "> " } else { "  " };
            let checkmark = if is_unlocked { "[X] " } else { "[ ] " };

            let style = if is_unlocked {
                Style::default().fg(tier_color(def.tier))
            } else if is_selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(
                    checkmark,
                    if is_unlocked {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    },
                ),
                Span::raw(format!("{} ", icon)),
                Span::styled(name, style),
            ]))
        })
        .collect();

    let list = List::new(items);
    frame.render_widget(list, inner);
}

fn render_achievement_detail(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    record: &PlayerAchievementRecord,
    ui_state: &AchievementBrowserState,
) {
    let defs = catalog.by_category(ui_state.selected_category);
    let Some(def) = defs.get(ui_state.selected_index) else {
        return;
    };

    let is_unlocked = record.is_unlocked(def.id);
    let show_name = is_unlocked || !def.secret;

    let title = if show_name { def.name } else { "???" };
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_unlocked {
            Color::Green
        } else {
            Color::DarkGray
        }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    if show_name {
        lines.push(Line::from(Span::styled(
            format!("{} {}", def.icon, def.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} tier  ·  {} pts", def.tier.name(), def.points),
            Style::default().fg(tier_color(def.tier)),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        def.display_description(is_unlocked),
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(""));

    if is_unlocked {
        if let Some(unlocked_at) = record.unlocked_at(def.id) {
            let timestamp = chrono::DateTime::from_timestamp(unlocked_at, 0)
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "Unknown".to_string());

            lines.push(Line::from(Span::styled(
                format!("[X] Unlocked: {}", timestamp),
                Style::default().fg(Color::Green),
            )));
        }

        if let Some(message) = def.unlock_message {
            lines.push(Line::from(Span::styled(
                format!("\"{message}\""),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "[ ] Not yet unlocked",
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "Reward: +{} gold, +{} XP",
                def.gold_reward, def.experience_reward
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(detail, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_cycling_wraps() {
        let mut state = AchievementBrowserState::new();
        assert_eq!(state.selected_category, Category::Combat);

        for _ in 0..Category::ALL.len() {
            state.next_category();
        }
        assert_eq!(state.selected_category, Category::Combat);

        state.prev_category();
        assert_eq!(state.selected_category, Category::Secret);
    }

    #[test]
    fn test_selection_movement_is_clamped() {
        let mut state = AchievementBrowserState::new();

        state.move_up();
        assert_eq!(state.selected_index, 0);

        state.move_down(3);
        state.move_down(3);
        state.move_down(3);
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn test_category_change_resets_selection() {
        let mut state = AchievementBrowserState::new();
        state.move_down(5);
        assert_eq!(state.selected_index, 1);

        state.next_category();
        assert_eq!(state.selected_index, 0);
    }
}
