//! Plain-text rendering shared by the commands.

use crate::game::{GameState, Task};
use crate::session::{reward_text, Journal};

pub(crate) fn print_hero(state: &GameState) {
    let hero = &state.hero;
    let summary = state.summary();
    println!("Hero: {}", hero.hero_name);
    println!(
        "Level {}  {}/{} XP ({:.0}%)  {} gold",
        hero.level,
        hero.current_xp,
        hero.xp_to_next_level,
        summary.xp_progress * 100.0,
        hero.gold
    );
    println!("Quests: {} pending, {} completed", summary.pending, summary.completed);
}

pub(crate) fn print_tasks(state: &GameState) {
    if state.tasks.is_empty() {
        println!("No quests in the log.");
        return;
    }

    let rows: Vec<[String; 5]> = state
        .tasks
        .iter()
        .map(|task| {
            [
                task.id.to_string(),
                task.description.clone(),
                task.effort.label().to_string(),
                reward_text(task.effort),
                status_label(task, state).to_string(),
            ]
        })
        .collect();

    let headers = ["ID", "QUEST", "EFFORT", "REWARD", "STATUS"];
    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(headers[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    print_row(&headers, &widths);
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    print_row(&dashes.iter().map(String::as_str).collect::<Vec<_>>(), &widths);
    for row in &rows {
        print_row(&row.iter().map(String::as_str).collect::<Vec<_>>(), &widths);
    }
}

fn print_row(cells: &[&str], widths: &[usize]) {
    let padded: Vec<String> =
        cells.iter().zip(widths).map(|(cell, &width)| format!("{cell:<width$}")).collect();
    println!("{}", padded.join("  ").trim_end());
}

pub(crate) fn print_journal(journal: &Journal) {
    if journal.is_empty() {
        println!("No quests completed this session.");
        return;
    }
    println!("Journal:");
    for entry in journal.entries() {
        let level = if entry.leveled_up() {
            format!("  level {} -> {}", entry.level_before, entry.level_after)
        } else {
            String::new()
        };
        println!(
            "  {}  #{} {}  +{} XP +{} gold{level}",
            entry.at.format("%Y-%m-%d %H:%M:%S"),
            entry.task_id,
            entry.description,
            entry.xp,
            entry.gold
        );
    }
    println!("Total: +{} XP, +{} gold", journal.total_xp(), journal.total_gold());
}

fn status_label(task: &Task, state: &GameState) -> &'static str {
    match (task.is_completed, state.selected == Some(task.id)) {
        (true, true) => "completed *",
        (true, false) => "completed",
        (false, true) => "pending *",
        (false, false) => "pending",
    }
}
