//! CLI commands implementation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pkgview::{
    badge_for_diff_state, calculate_revision_on_state, classify_syntax, expand_diff, file_url,
    human_readable_size, humanize_time, nbsp_with_width, package_bread_crumb, removable_file,
    render_bread_crumb, repo_type_and_priority, uploadable, Crumb, ViewConfig,
};

#[derive(Parser)]
#[command(name = "pkgview")]
#[command(about = "Package page view helpers")]
#[command(version)]
pub struct Cli {
    /// View config file (TOML)
    #[arg(long, global = true, env = "PKGVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Guess the highlighting class for file names
    Classify {
        /// File names to classify
        #[arg(required = true)]
        filenames: Vec<String>,
    },

    /// Format a byte count
    Size {
        bytes: u64,
    },

    /// Format a duration given in seconds
    Duration {
        seconds: u64,
    },

    /// Join words with non-breaking spaces (HTML output)
    Nbsp {
        text: String,
        /// Override the configured wrap width
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Show the badge class for a diff state
    Badge {
        state: String,
    },

    /// Check whether a diff row starts expanded
    Expand {
        filename: String,
        state: String,
    },

    /// Revision a diff row links to
    Revision {
        revision: String,
        state: String,
    },

    /// Check whether a package file can be deleted
    Removable {
        filename: String,
        /// The package belongs to a product
        #[arg(long)]
        product: bool,
    },

    /// Build the URL of a source file
    Url {
        project: String,
        package: String,
        filename: String,
        /// Pin to a revision
        #[arg(short, long)]
        rev: Option<String>,
    },

    /// Check whether a build result can go to a cloud upload target
    Uploadable {
        filename: String,
        #[arg(short, long, default_value = "x86_64")]
        arch: String,
    },

    /// Render the breadcrumb trail for a package page (HTML output)
    Crumbs {
        project: String,
        package: String,
        /// Current page is the package overview
        #[arg(long)]
        show: bool,
        /// Extra trailing entries (last one is the current page)
        trail: Vec<String>,
    },

    /// Describe a repository by type and priority
    Repo {
        #[arg(long = "type")]
        repo_type: Option<String>,
        #[arg(long)]
        priority: Option<i64>,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ViewConfig::load(cli.config.as_deref())?;
    tracing::info!(
        verbose = cli.verbose,
        "wrap_width={} source_prefix={:?}",
        config.wrap_width,
        config.source_prefix
    );

    match cli.command {
        Commands::Classify { filenames } => cmd_classify(&filenames),
        Commands::Size { bytes } => println!("{}", human_readable_size(bytes)),
        Commands::Duration { seconds } => println!("{}", humanize_time(seconds)),
        Commands::Nbsp { text, width } => {
            let width = width.unwrap_or(config.wrap_width);
            println!("{}", nbsp_with_width(&text, width));
        }
        Commands::Badge { state } => println!("{}", badge_for_diff_state(state.as_str())),
        Commands::Expand { filename, state } => {
            println!("{}", expand_diff(&filename, state.as_str()))
        }
        Commands::Revision { revision, state } => {
            println!("{}", calculate_revision_on_state(&revision, state.as_str()))
        }
        Commands::Removable { filename, product } => {
            println!("{}", removable_file(&filename, product))
        }
        Commands::Url {
            project,
            package,
            filename,
            rev,
        } => println!(
            "{}",
            file_url(&project, &package, &filename, rev.as_deref(), &config)
        ),
        Commands::Uploadable { filename, arch } => println!("{}", uploadable(&filename, &arch)),
        Commands::Crumbs {
            project,
            package,
            show,
            trail,
        } => cmd_crumbs(&project, &package, show, trail)?,
        Commands::Repo {
            repo_type,
            priority,
        } => println!("{}", repo_type_and_priority(repo_type.as_deref(), priority)),
    }

    Ok(())
}

fn cmd_classify(filenames: &[String]) {
    let width = filenames.iter().map(|f| f.len()).max().unwrap_or(0);
    for filename in filenames {
        let class = classify_syntax(filename);
        let class = if class.is_empty() { "-" } else { class };
        println!("{:<width$}  {}", filename, class, width = width);
    }
}

fn cmd_crumbs(project: &str, package: &str, show: bool, trail: Vec<String>) -> anyhow::Result<()> {
    let last = trail.len().saturating_sub(1);
    let trail = trail
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            if i == last {
                Crumb::text(label)
            } else {
                Crumb::link(label, "#")
            }
        })
        .collect();

    let crumbs = package_bread_crumb(project, package, show, trail);
    println!("{}", render_bread_crumb(&crumbs)?);
    Ok(())
}
