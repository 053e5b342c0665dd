//! fairhire CLI - resume scrubbing and review tool
//!
//! Extracts text from a resume PDF, removes identity markers, and stores
//! the result under a pseudonymous candidate id. The employer-side
//! commands list scrubbed resumes, reveal originals for hired candidates,
//! and report aggregate fairness metrics.

use clap::{Parser, Subcommand};
use colored::*;
use fairhire::{extract_pdf_text, Portal, ResumeRecord, HIRED_FILE, RESUMES_FILE};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

/// Resume scrubbing and anonymous candidate review
#[derive(Parser)]
#[command(
    name = "fairhire",
    version,
    about = "Scrub identity markers from resumes and review candidates anonymously",
    long_about = "fairhire - resume scrubbing and anonymous review tool.\n\n\
                  Extracts text from a resume PDF, removes name, city, emails,\n\
                  phone numbers, street addresses, school names, profile links,\n\
                  and postal codes, and stores original + scrubbed text under a\n\
                  pseudonymous candidate id.\n\n\
                  Usage:\n  \
                  fairhire submit resume.pdf --name \"Jane Smith\" --city Boston\n  \
                  fairhire list\n  \
                  fairhire hire \"Candidate #AB12\""
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding resumes.json and hired.json
    #[arg(long, global = true, default_value = ".")]
    store_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, scrub, and store a resume PDF
    Submit {
        /// Input PDF file
        input: PathBuf,

        /// Full name as it appears on the resume
        #[arg(long)]
        name: Option<String>,

        /// City as it appears on the resume
        #[arg(long)]
        city: Option<String>,
    },

    /// List stored candidates with scrubbed previews
    #[command(visible_alias = "ls")]
    List,

    /// Show a candidate's scrubbed resume
    Show {
        /// Candidate id (e.g. "Candidate #AB12")
        candidate_id: String,

        /// Show the original text instead (hired candidates only)
        #[arg(long)]
        original: bool,
    },

    /// Mark a candidate as hired, revealing their original resume
    Hire {
        /// Candidate id
        candidate_id: String,
    },

    /// List hired candidates with their original resumes
    Hired,

    /// Clear the hired set
    Wipe,

    /// Show fairness metrics across all candidates
    Stats,

    /// Write a candidate's scrubbed resume to a text file
    Export {
        /// Candidate id
        candidate_id: String,

        /// Output file (default: "<candidate id>_scrubbed.txt")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut portal = Portal::open(
        cli.store_dir.join(RESUMES_FILE),
        cli.store_dir.join(HIRED_FILE),
    );

    match cli.command {
        Commands::Submit { input, name, city } => {
            let pb = create_spinner("Extracting text...");
            let text = extract_pdf_text(&input)?;
            pb.set_message("Scrubbing identity markers...");

            let record = portal.submit(&text, name.as_deref(), city.as_deref())?;
            pb.finish_and_clear();

            if record.original_text.is_empty() {
                println!(
                    "{} Document yielded no extractable text; stored an empty record",
                    "!".yellow().bold()
                );
            }

            println!("{}", "Original Extracted Text".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}", record.original_text);
            println!();
            println!(
                "{} ({})",
                "Anonymized Resume".cyan().bold(),
                record.candidate_id
            );
            println!("{}", "─".repeat(40));
            println!("{}", record.scrubbed_text);
            println!();
            println!(
                "{} Saved as {} ({} markers removed)",
                "✓".green().bold(),
                record.candidate_id.bold(),
                record.markers_removed
            );
        }

        Commands::List => {
            if portal.candidates().is_empty() {
                println!("{} No candidates stored yet", "!".yellow().bold());
                return Ok(());
            }
            println!("{}", "Candidates".cyan().bold());
            println!("{}", "─".repeat(40));
            for record in portal.candidates() {
                let hired = if portal.is_hired(&record.candidate_id) {
                    " [hired]".green().to_string()
                } else {
                    String::new()
                };
                println!(
                    "{}{} - {} markers removed",
                    record.candidate_id.bold(),
                    hired,
                    record.markers_removed
                );
                println!("  {}", preview(&record.scrubbed_text));
            }
        }

        Commands::Show {
            candidate_id,
            original,
        } => {
            let record = find_record(&portal, &candidate_id)?;
            if original {
                if !portal.is_hired(&candidate_id) {
                    return Err(format!(
                        "{} is not hired; the original resume stays hidden",
                        candidate_id
                    )
                    .into());
                }
                println!("{}", "Original Resume".cyan().bold());
                println!("{}", "─".repeat(40));
                println!("{}", record.original_text);
            } else {
                println!(
                    "{} ({})",
                    "Scrubbed Resume (Anonymous)".cyan().bold(),
                    record.candidate_id
                );
                println!("{}", "─".repeat(40));
                println!("{}", record.scrubbed_text);
            }
        }

        Commands::Hire { candidate_id } => {
            if portal.hire(&candidate_id)? {
                println!("{} {} has been hired", "✓".green().bold(), candidate_id);
            } else {
                println!("{} {} is already hired", "!".yellow().bold(), candidate_id);
            }
        }

        Commands::Hired => {
            if portal.hired().is_empty() {
                println!("{} No candidates hired yet", "!".yellow().bold());
                return Ok(());
            }
            println!("{}", "Hired Candidates".cyan().bold());
            println!("{}", "─".repeat(40));
            for record in portal.hired() {
                println!("{}", record.candidate_id.bold());
                println!("{}", record.original_text);
                println!();
            }
        }

        Commands::Wipe => {
            portal.wipe_hired()?;
            println!("{} Hired set cleared", "✓".green().bold());
        }

        Commands::Stats => {
            let metrics = portal.metrics();
            println!("{}", "Fairness Metrics".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "Total Resumes Processed".bold(),
                metrics.total_resumes
            );
            println!(
                "{}: {}",
                "Total Identity Markers Removed".bold(),
                metrics.total_markers_removed
            );
            println!(
                "{}: {:.2}",
                "Avg Markers per Resume".bold(),
                metrics.avg_markers_removed
            );
        }

        Commands::Export {
            candidate_id,
            output,
        } => {
            let record = find_record(&portal, &candidate_id)?;
            let path = output
                .unwrap_or_else(|| PathBuf::from(format!("{}_scrubbed.txt", record.candidate_id)));
            fs::write(&path, &record.scrubbed_text)?;
            println!(
                "{} Exported scrubbed resume to {}",
                "✓".green().bold(),
                path.display()
            );
        }
    }

    Ok(())
}

fn find_record<'a>(
    portal: &'a Portal,
    candidate_id: &str,
) -> Result<&'a ResumeRecord, Box<dyn std::error::Error>> {
    portal
        .find(candidate_id)
        .ok_or_else(|| format!("unknown candidate: {}", candidate_id).into())
}

/// First non-empty line of the scrubbed text, truncated for the list view.
fn preview(text: &str) -> String {
    const MAX: usize = 60;
    let line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let mut preview: String = line.chars().take(MAX).collect();
    if line.chars().count() > MAX {
        preview.push('…');
    }
    preview
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
