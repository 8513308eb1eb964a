// src/cli.rs
use std::{io, path::PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::consts::{DEFAULT_LIMIT, DEFAULT_OUT_DIR, MAX_LIMIT, MIN_LIMIT},
    config::options::{AppOptions, FailurePolicy, ScrapeOptions},
    csv, file, scrape,
    data::{DataSet, SearchResult},
    error::Failure,
    progress::Progress,
};

/// Collect Naver blog posts for a keyword into a CSV file.
///
/// Non-Naver posts in the first N listing items are dropped, so fewer than N
/// posts may come back.
#[derive(Debug, Parser)]
#[command(name = "cli", version)]
pub struct Args {
    /// Search keyword
    pub keyword: String,

    /// Number of listing items to examine (1-50)
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
    pub limit: usize,

    /// Output directory; the file is named naver_blog_<keyword>.csv
    #[arg(short = 'o', long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Stop at the first failed page, item or body instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Print CSV to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Omit the header row
    #[arg(long)]
    pub no_headers: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let policy = if self.strict { FailurePolicy::Abort } else { FailurePolicy::Degrade };
        let mut opts = AppOptions {
            scrape: ScrapeOptions::new(self.keyword.clone(), self.limit).with_policy(policy),
            ..AppOptions::default()
        };
        opts.export.set_dir(&self.out_dir.to_string_lossy());
        opts.export.include_headers = !self.no_headers;
        opts
    }
}

fn parse_limit(s: &str) -> Result<usize, String> {
    let n: usize = s.trim().parse().map_err(|e| format!("{e}"))?;
    if (MIN_LIMIT..=MAX_LIMIT).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between {MIN_LIMIT} and {MAX_LIMIT}"))
    }
}

/// Prints per-post lines and warnings to stderr.
#[derive(Default)]
struct CliProgress {
    limit: usize,
    warnings: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, limit: usize) {
        self.limit = limit;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, result: &SearchResult) {
        eprintln!("[{}/{}] {}", result.seq(), self.limit, result.title());
    }
    fn warn(&mut self, failure: &Failure) {
        self.warnings += 1;
        eprintln!("warning: {failure}");
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init_stderr(args.verbose);

    let opts = args.to_options();
    let mut prog = CliProgress::default();

    let results = scrape::run(&opts.scrape, Some(&mut prog))
        .wrap_err_with(|| format!("search for `{}` failed", opts.scrape.keyword))?;

    if args.stdout {
        let ds = DataSet::from_results(&results);
        csv::write_export(io::stdout().lock(), &ds, opts.export.include_headers, false)?;
    } else {
        let path = file::export_results(&opts.export, &opts.scrape.keyword, &results)
            .wrap_err("could not write CSV")?;
        eprintln!("Wrote {}", path.display());
    }

    eprintln!("Collected {} post(s), {} warning(s)", results.len(), prog.warnings);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_parser_bounds() {
        assert_eq!(parse_limit("1"), Ok(1));
        assert_eq!(parse_limit("50"), Ok(50));
        assert!(parse_limit("0").is_err());
        assert!(parse_limit("51").is_err());
        assert!(parse_limit("x").is_err());
    }

    #[test]
    fn args_map_to_options() {
        let args = Args::try_parse_from(["cli", "커피", "-n", "5", "--strict", "-o", "exports"]).unwrap();
        let opts = args.to_options();
        assert_eq!(opts.scrape.keyword, "커피");
        assert_eq!(opts.scrape.limit, 5);
        assert_eq!(opts.scrape.policy, FailurePolicy::Abort);
        assert_eq!(opts.export.out_path("커피"), PathBuf::from("exports").join("naver_blog_커피.csv"));
    }

    #[test]
    fn default_limit_is_thirty() {
        let args = Args::try_parse_from(["cli", "coffee"]).unwrap();
        assert_eq!(args.limit, 30);
        assert!(!args.strict);
    }
}
