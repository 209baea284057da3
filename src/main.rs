use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;

use a11y_lint::cli::{
    Cli, Commands, ListRulesArgs, ReportArgs, ScanArgs, ScorecardArgs, ValidateArgs,
};
use a11y_lint::config::{Config, load_config};
use a11y_lint::message::Level;
use a11y_lint::output::{
    JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter, print_error,
    print_error_full,
};
use a11y_lint::rules::{RuleCategory, check_messages_structure};
use a11y_lint::scanner::Scanner;
use a11y_lint::schema::{SCHEMA_JSON, validate_json_file};
use a11y_lint::scorecard::{Scorecard, badge_markdown};
use a11y_lint::{A11yLintError, EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Scan(args) => run(run_scan(args, &cli)),
        Commands::Validate(args) => run(run_validate(args, &cli)),
        Commands::Scorecard(args) => run(run_scorecard(args, &cli)),
        Commands::Report(args) => run(run_report(args, &cli)),
        Commands::ListRules(args) => run(run_list_rules(args)),
        Commands::Schema => run(run_schema()),
    };

    std::process::exit(exit_code);
}

fn run(result: a11y_lint::Result<i32>) -> i32 {
    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Reads the input text and its source name from a file or stdin.
fn read_input(input: Option<&Path>, stdin: bool) -> a11y_lint::Result<(String, String)> {
    if stdin {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes).map_err(|_| A11yLintError::Decode {
            source_name: "<stdin>".to_string(),
        })?;
        return Ok((text, "<stdin>".to_string()));
    }

    let Some(path) = input else {
        return Err(A11yLintError::Config(
            "Must specify an INPUT file or --stdin.".to_string(),
        ));
    };
    let bytes = fs::read(path).map_err(|source| A11yLintError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let source_name = path.display().to_string();
    let text = String::from_utf8(bytes).map_err(|_| A11yLintError::Decode {
        source_name: source_name.clone(),
    })?;
    Ok((text, source_name))
}

/// Builds a scanner from config plus CLI rule selection.
///
/// A non-empty enable list (CLI taking precedence over config) switches to
/// allow-list mode; disable lists apply afterwards.
fn build_scanner(config: &Config, enable: &[String], disable: &[String]) -> a11y_lint::Result<Scanner> {
    let mut scanner = Scanner::with_settings(&config.rule_settings());

    let enable_list: &[String] = if enable.is_empty() {
        &config.rules.enable
    } else {
        enable
    };
    if !enable_list.is_empty() {
        scanner.enable_only(enable_list)?;
    }
    for name in config.rules.disable.iter().chain(disable) {
        scanner.disable_rule(name)?;
    }
    Ok(scanner)
}

fn write_output(path: Option<&PathBuf>, content: &str, quiet: bool) -> a11y_lint::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            if !quiet {
                println!("Output written to {}", path.display());
            }
        }
        None => {
            if !quiet {
                print!("{content}");
            }
        }
    }
    Ok(())
}

fn run_scan(args: &ScanArgs, cli: &Cli) -> a11y_lint::Result<i32> {
    let config = load_config(args.config.as_deref())?;
    let scanner = build_scanner(&config, &args.enable, &args.disable)?;

    let (text, source) = read_input(args.input.as_deref(), args.stdin)?;
    let messages = scanner.scan_text(&text, Some(&source));

    let format = if args.json {
        OutputFormat::Json
    } else {
        args.format
    };
    let output = match format {
        OutputFormat::Plain => {
            TextFormatter::new(cli.color.to_mode()).format(&messages)?
        }
        OutputFormat::Json => JsonFormatter::new(&source).format(&messages)?,
        OutputFormat::Markdown => {
            MarkdownFormatter::new(&format!("Accessibility Report: {source}")).format(&messages)?
        }
    };
    write_output(args.output.as_ref(), &output, cli.quiet)?;

    let errors = messages.iter().filter(|m| m.level == Level::Error).count();
    let warnings = messages.iter().filter(|m| m.level == Level::Warn).count();
    if errors > 0 || (args.strict && warnings > 0) {
        Ok(EXIT_FINDINGS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn run_validate(args: &ValidateArgs, cli: &Cli) -> a11y_lint::Result<i32> {
    let validation = validate_json_file(&args.input)?;

    if !validation.is_all_valid() {
        print_error_full(
            &format!(
                "{} schema validation issue(s) found in {}",
                validation.issues.len(),
                args.input.display()
            ),
            Some("Messages that break the cli.error.v0.1 contract cannot be consumed reliably."),
            Some("Correct the listed fields; run with --verbose for details."),
        );
        if args.verbose {
            eprintln!("{}", validation.error_report());
        }
        return Ok(EXIT_FINDINGS);
    }

    // Schema-valid messages still get the What/Why/Fix structure check.
    let structure_findings = check_messages_structure(&validation.valid);
    if !structure_findings.is_empty() {
        let formatter = TextFormatter::new(cli.color.to_mode());
        if !cli.quiet {
            print!("{}", formatter.format(&structure_findings)?);
        }
        return Ok(EXIT_FINDINGS);
    }

    if !cli.quiet {
        println!("[OK] {}", validation.summary());
    }
    Ok(EXIT_SUCCESS)
}

fn run_scorecard(args: &ScorecardArgs, cli: &Cli) -> a11y_lint::Result<i32> {
    let config = load_config(args.config.as_deref())?;
    let scanner = build_scanner(&config, &[], &[])?.with_ok_summary(true);

    let (text, source) = read_input(args.input.as_deref(), args.stdin)?;
    let messages = scanner.scan_text(&text, Some(&source));
    let card = Scorecard::with_weights(&messages, &args.name, config.score_weights());

    let output = if args.json {
        serde_json::to_string_pretty(&card)? + "\n"
    } else if args.badge {
        badge_markdown(card.overall_score, "a11y") + "\n"
    } else {
        card.summary() + "\n"
    };
    if !cli.quiet {
        print!("{output}");
    }

    if card.is_passing {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FINDINGS)
    }
}

fn run_report(args: &ReportArgs, cli: &Cli) -> a11y_lint::Result<i32> {
    let config = load_config(args.config.as_deref())?;
    let scanner = build_scanner(&config, &[], &[])?;

    let (text, source) = read_input(args.input.as_deref(), args.stdin)?;
    let messages = scanner.scan_text(&text, Some(&source));

    let markdown = MarkdownFormatter::new(&args.title).format(&messages)?;
    write_output(args.output.as_ref(), &markdown, cli.quiet)?;

    let has_errors = messages.iter().any(|m| m.level == Level::Error);
    if has_errors {
        Ok(EXIT_FINDINGS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn run_list_rules(args: &ListRulesArgs) -> a11y_lint::Result<i32> {
    let scanner = Scanner::new();

    if args.verbose {
        println!("Available rules:\n");
        println!("WCAG Rules (mapped to WCAG success criteria):");
        for rule in scanner.rules() {
            if rule.category() == RuleCategory::Wcag {
                let wcag = rule
                    .wcag_ref()
                    .map_or_else(String::new, |r| format!(" [WCAG {r}]"));
                println!("  - {}{wcag}: {}", rule.name(), rule.description());
            }
        }
        println!("\nPolicy Rules (cognitive accessibility best practices):");
        for rule in scanner.rules() {
            if rule.category() == RuleCategory::Policy {
                println!("  - {}: {}", rule.name(), rule.description());
            }
        }
        println!("\nNote: Policy rules are not WCAG requirements but improve");
        println!("accessibility for users with cognitive disabilities.");
    } else {
        println!("Available rules:");
        for name in scanner.rule_names() {
            println!("  - {name}");
        }
    }
    Ok(EXIT_SUCCESS)
}

fn run_schema() -> a11y_lint::Result<i32> {
    print!("{SCHEMA_JSON}");
    Ok(EXIT_SUCCESS)
}
