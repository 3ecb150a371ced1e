use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};
use colored::Colorize;

use crate::cache::WindowCache;
use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::output::{self, OutputFormat, WindowRecord};

const DEFAULT_SIBLINGS: usize = 1;

fn format_kv_line(label: &str, value: &str) {
    eprintln!(":: {:<10}: {}", label, value);
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn format_label(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
        OutputFormat::Xml => "xml",
    }
}

#[derive(Clone, Debug)]
struct RunConfig {
    num_pages: usize,
    pages: Vec<usize>,
    siblings: usize,
    one_based: bool,
    output: Option<String>,
    output_format: OutputFormat,
    no_color: bool,
    verbose: u8,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let num_pages = args
        .pages
        .ok_or_else(|| "missing --pages, expected the total number of pages".to_string())?;
    let siblings = args.siblings.or(cfg.siblings).unwrap_or(DEFAULT_SIBLINGS);
    let one_based = match args.zero_based {
        Some(zero_based) => !zero_based,
        None => cfg.one_based.unwrap_or(true),
    };

    let pages = match args.page.as_deref() {
        Some(raw) => crate::utils::parse_page_selection(raw, num_pages, one_based)
            .map_err(|e| format!("invalid --page '{raw}': {e}"))?,
        None if num_pages == 0 => Vec::new(),
        None => vec![0],
    };

    let output = args.output.or(cfg.output).filter(|p| !p.trim().is_empty());
    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}', expected text, json or xml"))?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    Ok(RunConfig {
        num_pages,
        pages,
        siblings,
        one_based,
        output,
        output_format,
        no_color,
        verbose: args.verbose,
    })
}

fn compute_records(run: &RunConfig, cache: &mut WindowCache) -> Result<Vec<WindowRecord>, String> {
    let mut records = Vec::with_capacity(run.pages.len());
    for &page_index in &run.pages {
        let buttons = cache
            .get_or_compute(run.num_pages, page_index, run.siblings)
            .map_err(|e| e.to_string())?;
        records.push(output::build_record(
            run.num_pages,
            page_index,
            run.siblings,
            &buttons,
            run.one_based,
        ));
    }
    Ok(records)
}

fn run(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }

    if run.verbose > 0 {
        format_kv_line("Pages", &run.num_pages.to_string());
        format_kv_line("Selected", &run.pages.len().to_string());
        format_kv_line("Siblings", &run.siblings.to_string());
        format_kv_line("One-based", format_bool(run.one_based));
        format_kv_line("Format", format_label(run.output_format));
        format_kv_line("Output", run.output.as_deref().unwrap_or("stdout"));
        eprintln!();
    }

    let mut cache = WindowCache::default();
    let records = compute_records(&run, &mut cache)?;

    if run.verbose > 1 {
        for record in &records {
            eprintln!(
                "{} {}",
                "::".bold().green(),
                output::summary_line(record, run.one_based)
            );
        }
    }

    let rendered = output::render(run.output_format, &records);
    match run.output.as_deref() {
        Some(path) => {
            let path = config::expand_tilde(path);
            std::fs::write(&path, rendered)
                .map_err(|e| format!("failed to write output '{}': {e}", path.display()))?;
            if run.verbose > 0 {
                eprintln!(
                    ":: {} :: {} windows written to {} ::",
                    "Completed".bold().green(),
                    records.len(),
                    path.display()
                );
            }
        }
        None => print!("{}", String::from_utf8_lossy(&rendered)),
    }

    if run.verbose > 0 {
        format_kv_line("Computed", &cache.misses().to_string());
        format_kv_line("Cached", &cache.hits().to_string());
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>) -> Result<(), String> {
    let path = path
        .or_else(config::default_config_path)
        .ok_or_else(|| "unable to determine config path, pass --config".to_string())?;
    if config::ensure_default_config_file(&path)? {
        println!(":: {} :: wrote {}", "Config".bold().green(), path.display());
    } else {
        println!(":: {} :: {} already exists", "Config".bold().yellow(), path.display());
    }
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));
    if args.init_config {
        return init_config(user_config_path);
    }

    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run_config = build_run_config(args, cfg)?;
    run(run_config)
}
