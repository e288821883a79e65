//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# objc-lint configuration

[origin]
# Declarations in files under this prefix belong to the toolchain (SDK
# headers, compiler resources) and are never checked.
# Can be overridden with --system-prefix or OBJC_LINT_SYSTEM_PREFIX.
system_prefix = "/Applications/Xcode.app/"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_default(Path::new("objc-lint.toml"), force)?;

    println!("Created objc-lint.toml");
    println!("\nNext steps:");
    println!("  1. Point system_prefix at your toolchain install");
    println!("  2. Run: objc-lint check <declarations.json>");

    Ok(())
}

fn write_default(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use objc_lint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses_to_defaults() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("objc-lint.toml");
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_default(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        write_default(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
