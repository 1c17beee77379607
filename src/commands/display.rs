//! Console output for the generate commands.

use crate::config::GenerationConfig;
use crate::generator::GenerationReport;

/// Print the verbose header before generation starts.
pub fn print_start(config: &GenerationConfig) {
    println!(
        "Creating {} project: {}",
        config.project_type().label(),
        config.name()
    );
    println!("Output directory: {}", config.destination().display());
}

/// Print what a generation run produced (verbose only).
pub fn print_report(report: &GenerationReport) {
    println!();
    println!("Created directories ({}):", report.directories.len());
    for dir in &report.directories {
        println!("  {}/", relative(report, dir));
    }
    println!("Created files ({}):", report.files.len());
    for file in &report.files {
        println!("  {}", relative(report, file));
    }
    for warning in &report.warnings {
        println!("Warning: {}", warning);
    }
    println!();
}

pub fn print_success(config: &GenerationConfig) {
    println!(
        "✅ {} project '{}' created successfully!",
        config.project_type().label(),
        config.name()
    );
}

pub fn print_next_steps(name: &str) {
    print!("{}", next_steps(name));
}

/// The "next steps" block shown after a successful run.
pub fn next_steps(name: &str) -> String {
    format!(
        "\n📝 Next steps:\n   cd {}\n   go mod tidy\n   go run main.go\n\n\
         📚 For more information, check the README.md file in your project\n",
        name
    )
}

fn relative(report: &GenerationReport, path: &std::path::Path) -> String {
    path.strip_prefix(&report.root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_steps_names_project_directory() {
        let text = next_steps("acme");
        assert!(text.contains("📝 Next steps:"));
        assert!(text.contains("   cd acme\n"));
        assert!(text.contains("   go mod tidy\n"));
        assert!(text.ends_with("check the README.md file in your project\n"));
    }

    #[test]
    fn test_relative_strips_root() {
        let report = GenerationReport {
            root: "/tmp/out/acme".into(),
            ..GenerationReport::default()
        };
        let path = std::path::Path::new("/tmp/out/acme/cmd/root.go");
        assert_eq!(relative(&report, path), "cmd/root.go");
    }
}
