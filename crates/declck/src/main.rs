//! declck - declaration checker for assignment programs
//!
//! Usage: declck [OPTIONS] <input>

use anyhow::Context;
use clap::Parser as ClapParser;
use declck::common::DiagnosticReporter;
use declck::driver::{check_source, CheckConfig, CheckContext};
use declck::printer;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "declck")]
#[command(version)]
#[command(about = "Check that every variable is declared once and before use", long_about = None)]
struct Args {
    /// Input source file
    #[arg(required = true)]
    input: PathBuf,

    /// Names declared by an enclosing scope (repeatable or comma separated)
    #[arg(short, long = "declare", value_name = "NAME", value_delimiter = ',')]
    declare: Vec<String>,

    /// Print the syntax tree to stdout after a successful check
    #[arg(long)]
    print_tree: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dump the tree before analysis (for debugging)
    #[arg(long)]
    dump_tree: bool,

    /// Dump tokens (for debugging)
    #[arg(long)]
    dump_tokens: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let filename = args.input.display().to_string();

    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);

    if args.verbose {
        eprintln!("Checking {}", filename);
    }

    let config = CheckConfig {
        predeclared: args.declare.clone(),
        dump_tokens: args.dump_tokens,
        dump_tree: args.dump_tree,
        verbose: args.verbose,
    };

    let ctx = CheckContext::new(filename.clone(), file_id, &reporter);
    let report = check_source(&source, &ctx, &config)
        .with_context(|| format!("{} failed the declaration check", filename))?;

    if args.print_tree {
        print!("{}", printer::print_program(&report.program));
    }
    println!("ok: {} symbols", report.declared.len());

    Ok(())
}
