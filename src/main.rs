use chrono::Local;
use clap::Parser;
use emoscope::report::{self, AnalysisRecord, Summary};
use emoscope::{AnalyticsDeriver, EmotionLabel};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "emoscope")]
#[command(author, version, about = "Derive dashboard analytics from speech emotion classification results")]
struct Args {
    /// Classifier result file (.json) or directory to analyze
    path: PathBuf,

    /// Output report file (.html, .json, .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for auto-generated reports
    #[arg(long, default_value = "emoscope-reports")]
    report_dir: PathBuf,

    /// Don't auto-generate HTML report
    #[arg(long)]
    no_report: bool,

    /// Don't prompt to open report
    #[arg(long)]
    no_open: bool,

    /// Number of parallel workers (default: number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Show ranked scores and summary sentence per file
    #[arg(short, long)]
    verbose: bool,

    /// Only show summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    // Set up thread pool
    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    // Collect classifier result files
    let files: Vec<PathBuf> = if args.path.is_dir() {
        WalkDir::new(&args.path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("json"))
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect()
    } else {
        vec![args.path.clone()]
    };

    if files.is_empty() {
        eprintln!("No classifier result files found (expected .json)");
        std::process::exit(1);
    }

    if !args.quiet {
        eprintln!("\x1b[1mEmoscope - Speech Emotion Analytics\x1b[0m");
        eprintln!("{}", "─".repeat(70));
        eprintln!("Found {} result file(s)\n", files.len());
    }

    // Set up progress bar
    let pb = if !args.quiet && files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Derive analytics in parallel
    let deriver = AnalyticsDeriver::new();
    let records: Vec<AnalysisRecord> = files
        .par_iter()
        .map(|path| {
            let record = AnalysisRecord::analyze_file(&deriver, path);
            if let Some(ref pb) = pb {
                pb.inc(1);
                pb.set_message(record.file_name.clone());
            }
            record
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    // Print results
    if !args.quiet {
        for r in &records {
            print_record(r, args.verbose);
        }
    }

    // Summary
    let summary = Summary::from_records(&records);
    if !args.quiet {
        eprintln!("\n{}", "─".repeat(70));
        eprintln!("\x1b[1mSummary:\x1b[0m");
        for label in EmotionLabel::ALL {
            let count = summary.dominant(label);
            if count > 0 {
                eprintln!("  {:<9} {}", format!("{}:", label), count);
            }
        }
        if summary.errors > 0 {
            eprintln!("  \x1b[90merrors:\x1b[0m   {}", summary.errors);
        }
    }

    // Determine report path
    let report_path = if let Some(ref output) = args.output {
        Some(output.clone())
    } else if !args.no_report {
        // Auto-generate report
        std::fs::create_dir_all(&args.report_dir).ok();
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("emoscope_report_{}.html", timestamp);
        Some(args.report_dir.join(filename))
    } else {
        None
    };

    // Generate report
    if let Some(ref output_path) = report_path {
        if let Err(e) = report::generate(output_path, &records) {
            eprintln!("Failed to write report: {}", e);
            std::process::exit(1);
        }
        if !args.quiet {
            eprintln!("\n\x1b[32mReport saved: {}\x1b[0m", output_path.display());
        }

        // Open report
        if !args.no_open && !args.quiet {
            eprint!("\nOpen report in browser? [Y/n] ");
            io::stderr().flush().ok();

            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_ok() {
                let input = input.trim().to_lowercase();
                if input.is_empty() || input == "y" || input == "yes" {
                    if let Err(e) = open::that(output_path) {
                        eprintln!("Failed to open report: {}", e);
                    }
                }
            }
        }
    }

    if !args.quiet {
        eprintln!("\n\x1b[90mAnalysis complete.\x1b[0m");
    }

    if summary.errors > 0 {
        std::process::exit(1);
    }
}

fn print_record(record: &AnalysisRecord, verbose: bool) {
    let analytics = &record.analytics;

    let color = if record.error.is_some() {
        "\x1b[90m" // Gray
    } else if analytics.confidence_percent >= 70.0 {
        "\x1b[32m" // Green
    } else if analytics.confidence_percent >= 40.0 {
        "\x1b[33m" // Yellow
    } else {
        "\x1b[31m" // Red
    };
    let reset = "\x1b[0m";

    let top3 = format!(
        "{} > {} > {}",
        analytics.primary, analytics.secondary, analytics.tertiary
    );

    println!(
        "{}{:<10}{} {:>5.1}%  {:<8}  {:<28}  {}",
        color,
        format!("[{}]", analytics.primary),
        reset,
        analytics.confidence_percent,
        truncate(&analytics.confidence_level, 8),
        truncate(&top3, 28),
        &record.file_name
    );

    if let Some(ref error) = record.error {
        eprintln!("    \x1b[90m{}\x1b[0m", error);
    }

    if verbose && record.error.is_none() {
        for entry in &analytics.ranked {
            eprintln!("    {:<8} {:>6.2}%", entry.label, entry.score);
        }
        eprintln!("    {}", analytics.summary_sentence);
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
