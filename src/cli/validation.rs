use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if args.init_config {
        return Ok(());
    }
    if let Some(raw) = args.output_format.as_deref() {
        if crate::output::OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --format '{raw}', expected text, json or xml"
            ));
        }
    }
    if let Some(path) = args.output.as_deref() {
        if path.trim().is_empty() {
            return Err("invalid --output, expected a file path".to_string());
        }
    }
    if args.pages.is_none() {
        return Err("missing --pages, expected the total number of pages".to_string());
    }
    if let Some(raw) = args.page.as_deref() {
        if raw.trim().is_empty() {
            return Err("invalid --page, selection is empty".to_string());
        }
    }
    Ok(())
}
