use mondrui::{Renderer, UiError, ValidationReport};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: mondrui-validate <file.json>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  mondrui-validate form.json");
        eprintln!("  mondrui-validate specs/*.json");
        process::exit(1);
    }

    let renderer = Renderer::with_builtins();
    let mut exit_code = 0;

    for file_path in &args[1..] {
        match validate_file(file_path, &renderer) {
            Ok(()) => {
                println!("✓ {} is valid", file_path);
            }
            Err(errors) => {
                eprintln!("✗ {} has errors:", file_path);
                for error in &errors {
                    print_error(error);
                }
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn validate_file(path: &str, renderer: &Renderer) -> Result<(), Vec<UiError>> {
    let content = fs::read_to_string(path)
        .map_err(|e| vec![UiError::MalformedJson { reason: format!("failed to read file: {}", e) }])?;

    let envelope: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| vec![UiError::MalformedJson { reason: e.to_string() }])?;

    let report = ValidationReport::check_with_registry(&envelope, renderer.components());
    if report.is_valid() {
        Ok(())
    } else {
        Err(report.errors().to_vec())
    }
}

fn print_error(error: &UiError) {
    match error {
        UiError::InvalidEnvelope { found } => {
            eprintln!("  Invalid envelope:");
            eprintln!("    expected type 'ui.render', found '{}'", found);
        }
        UiError::MissingComponent => {
            eprintln!("  Missing component name");
        }
        UiError::UnknownComponent { component } => {
            eprintln!("  Unknown component '{}':", component);
            eprintln!("    not a built-in kind (custom components and templates are registered at runtime)");
        }
        UiError::InvalidProps { component, reason } => {
            eprintln!("  Invalid props for component '{}':", component);
            eprintln!("    {}", reason);
        }
        UiError::TemplateExpansion { template, reason } => {
            eprintln!("  Template '{}' failed to expand:", template);
            eprintln!("    {}", reason);
        }
        UiError::MalformedJson { reason } => {
            eprintln!("  Malformed JSON:");
            eprintln!("    {}", reason);
        }
        UiError::MaxNestingDepthExceeded { max_depth } => {
            eprintln!("  Maximum nesting depth ({}) exceeded", max_depth);
            eprintln!("    Components are nested too deeply");
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
