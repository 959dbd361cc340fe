//! Plain-text projection of a feed view for terminal output

use super::feed_render::{FeedList, FeedView, ListItem, PageControls};

const DEFAULT_TAG: &str = "Suggestion";
const NO_POINTS: &str = "(none)";

/// Render a view as newline-separated text with no trailing newline
pub fn render_text(view: &FeedView) -> String {
    let mut lines = vec![format!(
        "Suggestions (page {}/{})",
        view.controls.current_page, view.controls.total_pages
    )];

    match &view.list {
        FeedList::Empty { message } => {
            lines.push(String::new());
            lines.push(message.clone());
        }
        FeedList::Items { items } => {
            for item in items {
                lines.push(String::new());
                push_item(&mut lines, item);
            }
        }
    }

    if let Some(controls) = controls_line(&view.controls) {
        lines.push(String::new());
        lines.push(controls);
    }

    lines.join("\n")
}

fn push_item(lines: &mut Vec<String>, item: &ListItem) {
    let tag = item.tag.as_deref().unwrap_or(DEFAULT_TAG);
    let marker = if item.executed { " [executed]" } else { "" };
    lines.push(format!("{}. {}{}", item.display_index, tag, marker));

    push_points(lines, "Strategy", &item.strategy_points);
    push_points(lines, "Outcome", &item.outcome_points);
}

fn push_points(lines: &mut Vec<String>, heading: &str, points: &[String]) {
    lines.push(format!("   {}:", heading));
    if points.is_empty() {
        lines.push(format!("     {}", NO_POINTS));
    }
    for point in points {
        lines.push(format!("     - {}", point));
    }
}

/// `« ‹ [1] 2 › »`, with disabled buttons shown as `-`
fn controls_line(controls: &PageControls) -> Option<String> {
    if controls.buttons.is_empty() {
        return None;
    }

    let labels: Vec<String> = controls
        .buttons
        .iter()
        .map(|button| {
            if button.disabled {
                "-".to_string()
            } else if button.active {
                format!("[{}]", button.label)
            } else {
                button.label.clone()
            }
        })
        .collect();

    Some(labels.join(" "))
}

#[cfg(test)]
#[path = "text_render_tests.rs"]
mod text_render_tests;
