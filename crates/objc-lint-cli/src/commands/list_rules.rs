//! List rules command implementation.

use objc_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<28} {:<10} Description", "Code", "Name", "Kind");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        println!(
            "{:<8} {:<28} {:<10} {}",
            rule.code(),
            rule.name(),
            rule.kind().to_string(),
            rule.description()
        );
    }

    println!("\nAll rules run on every declaration outside the configured system prefix.");
    println!("Feed declarations from a front end, e.g.:");
    println!("  objc-lint check decls.json");
    println!("  objc-lint check --system-prefix /Library/Developer/CommandLineTools/ -");
}
