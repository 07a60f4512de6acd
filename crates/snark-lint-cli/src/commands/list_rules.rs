//! List rules command implementation.

use snark_lint_rules::default_catalog;

/// Runs the list-rules command.
pub fn run() {
    let catalog = default_catalog();

    println!("Available rules:\n");
    println!("{:<22} Description", "Name");
    println!("{}", "-".repeat(72));

    for rule in catalog.tree_rules() {
        println!("{:<22} {}", rule.name(), rule.description());
    }
    for rule in catalog.text_rules() {
        println!("{:<22} {}", rule.name(), rule.description());
    }

    println!("\nEvery rule is always on. Configuration tunes parameters only, e.g.:");
    println!("  [rules.single-letter-name]");
    println!("  exempt = [\"i\", \"j\"]");
}
