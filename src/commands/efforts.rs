//! `questlog efforts` command.

use crate::game::EffortLevel;

/// Execute the `efforts` command: one line per effort level with its rewards.
pub fn run() {
    println!("{:<10}  {:<8}  {:>4}  {:>4}", "EFFORT", "LABEL", "XP", "GOLD");
    println!("{:-<10}  {:-<8}  {:->4}  {:->4}", "", "", "", "");
    for effort in EffortLevel::ALL {
        println!(
            "{:<10}  {:<8}  {:>4}  {:>4}",
            effort.as_str(),
            effort.label(),
            effort.xp(),
            effort.gold()
        );
    }
}
