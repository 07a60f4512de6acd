//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# snark-lint configuration
#
# Every rule is always on. These tables tune parameters only; keys like
# `enabled`, `severity`, or `ignore` do nothing here.

[rules.single-letter-name]
# Names the rule will let slide
exempt = []

# [rules.short-docstring]
# min_length = 10

# [rules.comment-length]
# max_length = 72

# [rules.line-length]
# code_limit = 79
# comment_limit = 72
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("snark-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created snark-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit snark-lint.toml to tune rule parameters");
    println!("  2. Run: snark-lint check your_file.py");

    Ok(())
}
