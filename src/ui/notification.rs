//! Renders unlock notices as styled text lines.
//!
//! A single unlock gets a detailed card; several unlocks from one pass
//! get one consolidated card. The caller hands the lines to whatever
//! surface owns the terminal.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::achievements::notifier::NotificationBatch;
use crate::achievements::types::{AchievementDef, Tier};

/// Badge color for a tier.
pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Bronze => Color::Rgb(205, 127, 50),
        Tier::Silver => Color::Gray,
        Tier::Gold => Color::Yellow,
        Tier::Platinum => Color::White,
        Tier::Diamond => Color::LightCyan,
    }
}

/// Render a drained batch into presentation lines.
pub fn render_batch(batch: &NotificationBatch) -> Vec<Line<'static>> {
    if batch.is_single() {
        render_single(&batch.entries()[0])
    } else {
        render_consolidated(batch)
    }
}

fn header(text: String) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn title_line(def: &AchievementDef) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{} ", def.icon)),
        Span::styled(
            def.name,
            Style::default()
                .fg(tier_color(def.tier))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", def.tier.name()),
            Style::default().fg(tier_color(def.tier)),
        ),
    ])
}

fn render_single(def: &AchievementDef) -> Vec<Line<'static>> {
    let mut lines = vec![header("Achievement Unlocked!".to_string()), title_line(def)];

    lines.push(Line::from(Span::styled(
        // The entry is unlocked by the time it is displayed, so secret
        // entries show their real description here.
        def.display_description(true),
        Style::default().fg(Color::White),
    )));

    lines.push(Line::from(Span::styled(
        format!(
            "+{} gold   +{} XP   ({} pts)",
            def.gold_reward, def.experience_reward, def.points
        ),
        Style::default().fg(Color::Green),
    )));

    if let Some(message) = def.unlock_message {
        lines.push(Line::from(Span::styled(
            format!("\"{message}\""),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

fn render_consolidated(batch: &NotificationBatch) -> Vec<Line<'static>> {
    let mut lines = vec![header(format!(
        "{} Achievements Unlocked!",
        batch.count()
    ))];

    for def in batch.listed() {
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", def.icon)),
            Span::styled(def.name, Style::default().fg(tier_color(def.tier))),
            Span::styled(
                format!("  [{}]", def.tier.name()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    if batch.overflow() > 0 {
        lines.push(Line::from(Span::styled(
            format!("  +{} more", batch.overflow()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(Span::styled(
        format!(
            "Total rewards: +{} gold   +{} XP",
            batch.total_gold(),
            batch.total_experience()
        ),
        Style::default().fg(Color::Green),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::catalog::Catalog;
    use crate::achievements::notifier::PendingUnlocks;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.clone()).collect()
    }

    #[test]
    fn test_single_notice_layout() {
        let catalog = Catalog::standard();
        let mut pending = PendingUnlocks::new();
        pending.push(catalog.get("first_blood").unwrap().clone());

        let lines = render_batch(&pending.drain().unwrap());
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(text[0], "Achievement Unlocked!");
        assert!(text[1].contains("First Blood"));
        assert!(text[1].contains("[Bronze]"));
        assert!(text.iter().any(|l| l.contains("+25 gold")));
        // Flavor line present for this entry
        assert!(text.iter().any(|l| l.contains("Every legend")));
    }

    #[test]
    fn test_consolidated_notice_layout() {
        let catalog = Catalog::standard();
        let mut pending = PendingUnlocks::new();
        for id in ["first_blood", "boss_breaker", "the_crown"] {
            pending.push(catalog.get(id).unwrap().clone());
        }

        let lines = render_batch(&pending.drain().unwrap());
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert_eq!(text[0], "3 Achievements Unlocked!");
        // Highest tier listed first
        assert!(text[1].contains("The Crown"));
        assert!(text.last().unwrap().starts_with("Total rewards:"));
    }

    #[test]
    fn test_consolidated_overflow_line() {
        let catalog = Catalog::standard();
        let mut pending = PendingUnlocks::new();
        for def in catalog.all().iter().take(10) {
            pending.push(def.clone());
        }

        let lines = render_batch(&pending.drain().unwrap());
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert!(text.iter().any(|l| l.trim() == "+2 more"));
    }
}
