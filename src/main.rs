use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use miette::{IntoDiagnostic, Result};

use labelgen_core::{LabelgenConfig, DEFAULT_CONFIG_FILE};
use labelgen_history::git::GitHistory;
use labelgen_report::{label_revisions, list_history, write_report};
use labelgen_rules::RuleSet;

#[derive(Parser)]
#[command(
    name = "labelgen",
    version,
    about = "Label every commit that touched a file",
    long_about = "Label every commit that touched a file.\n\n\
                   Walks the history of one tracked file, diffs each revision against the\n\
                   previous one, and tags it from a built-in keyword table. The report is\n\
                   written as plain text, one `<short id> - <labels>` line per revision.\n\n\
                   Examples:\n  \
                     labelgen                              Label index.html in the current repo\n  \
                     labelgen --path docs/index.html       Label another file\n  \
                     labelgen --output labels.txt -v       Write elsewhere, echo each line\n  \
                     labelgen init                         Write a default .labelgen.toml"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: .labelgen.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Repository path (default: current directory)
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Tracked file, relative to the repository root (default: index.html)
    #[arg(long)]
    path: Option<String>,

    /// Report file, overwritten on each run (default: generated_commit_labels.txt)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    /// When to use colors
    #[arg(long, global = true, default_value = "auto")]
    color: ColorChoice,
}

#[derive(Subcommand)]
enum Command {
    /// Create a default .labelgen.toml in the current directory
    Init,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

const DEFAULT_CONFIG: &str = r#"# labelgen configuration
# Command-line flags take precedence over these values.

[report]
# File whose history is labelled, relative to the repository root.
# path = "index.html"

# Report file, overwritten on every run.
# output = "generated_commit_labels.txt"
"#;

fn load_config(explicit: Option<&Path>) -> Result<LabelgenConfig> {
    let config = match explicit {
        Some(path) => LabelgenConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                LabelgenConfig::from_file(default_path)?
            } else {
                LabelgenConfig::default()
            }
        }
    };
    Ok(config)
}

fn progress_bar(len: usize, use_color: bool) -> Result<Option<ProgressBar>> {
    if !std::io::stderr().is_terminal() {
        return Ok(None);
    }
    let template = if use_color {
        "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{bar:30}] {pos}/{len} {msg}"
    };
    let pb = ProgressBar::new(len as u64);
    pb.set_style(ProgressStyle::with_template(template).into_diagnostic()?);
    pb.set_message("Labelling revisions...");
    Ok(Some(pb))
}

fn run_report(cli: &Cli, config: &LabelgenConfig, use_color: bool) -> Result<()> {
    let path = cli.path.clone().unwrap_or_else(|| config.report.path.clone());
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| config.report.output.clone());

    // Hint: not a git repository
    if git2::Repository::discover(&cli.repo).is_err() {
        miette::bail!(miette::miette!(
            help = "Run labelgen from inside a git repository, or specify --repo",
            "Not a git repository: {}",
            cli.repo.display()
        ));
    }

    let rules = RuleSet::builtin()?;
    let history = GitHistory::open(&cli.repo)?;

    if cli.verbose {
        eprintln!("Keyword rules: {} loaded", rules.len());
    }
    eprintln!(
        "Labelling history of {} in {}...",
        path,
        cli.repo.display()
    );

    let revisions = list_history(&history, &path)?;

    let progress = progress_bar(revisions.len(), use_color)?;
    let records = label_revisions(&history, &revisions, &path, &rules, |record| {
        if cli.verbose {
            match &progress {
                Some(pb) => pb.println(record.to_string()),
                None => eprintln!("{record}"),
            }
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    })
    .inspect_err(|_e| {
        if let Some(pb) = &progress {
            pb.finish_with_message("Failed");
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_with_message("Done");
    }

    write_report(&output, &records)?;
    eprintln!(
        "Wrote {} labels to {}.",
        records.len(),
        output.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    };

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .color(use_color)
                .build(),
        )
    }))
    .into_diagnostic()?;

    match cli.command {
        Some(Command::Init) => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                miette::bail!("{DEFAULT_CONFIG_FILE} already exists");
            }
            std::fs::write(path, DEFAULT_CONFIG).into_diagnostic()?;
            println!("Created {DEFAULT_CONFIG_FILE} with default configuration");
        }
        None => {
            let config = load_config(cli.config.as_deref())?;
            if cli.verbose {
                eprintln!(
                    "config: path={} output={}",
                    config.report.path,
                    config.report.output.display()
                );
            }
            run_report(&cli, &config, use_color)?;
        }
    }

    Ok(())
}
