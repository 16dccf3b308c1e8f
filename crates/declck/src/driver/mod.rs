//! Check pipeline: lex, parse, analyze

use crate::ast::Program;
use crate::common::{CompileError, CompileResult, DiagnosticReporter};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::printer;
use crate::sema::SemanticAnalyzer;

/// Options for a single check run
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Names treated as declared before the program starts
    pub predeclared: Vec<String>,
    pub dump_tokens: bool,
    pub dump_tree: bool,
    pub verbose: bool,
}

/// File being checked and where its diagnostics go
pub struct CheckContext<'a> {
    pub filename: String,
    pub file_id: usize,
    pub reporter: &'a DiagnosticReporter,
}

impl<'a> CheckContext<'a> {
    pub fn new(filename: String, file_id: usize, reporter: &'a DiagnosticReporter) -> Self {
        Self { filename, file_id, reporter }
    }

    fn fail<T>(&self, error: CompileError) -> CompileResult<T> {
        self.reporter.report_error(self.file_id, &error);
        Err(error)
    }
}

/// Result of a successful check
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub program: Program,
    /// Every declared name, seeded ones first, in declaration order
    pub declared: Vec<String>,
}

/// Run the whole pipeline over `source`.
///
/// Errors are reported through the context's reporter before being returned.
pub fn check_source(
    source: &str,
    ctx: &CheckContext,
    config: &CheckConfig,
) -> CompileResult<CheckReport> {
    // Phase 1: Lexing (optional token dump)
    if config.dump_tokens {
        match Lexer::new(source).tokenize_all() {
            Ok(tokens) => {
                eprintln!("=== Tokens ===");
                for token in &tokens {
                    eprintln!("{:?}", token);
                }
                eprintln!("=== End Tokens ===\n");
            }
            Err(e) => return ctx.fail(e),
        }
    }

    // Phase 2: Parsing
    if config.verbose {
        eprintln!("Parsing {}...", ctx.filename);
    }

    let program = match Parser::new(source).and_then(|mut parser| parser.parse()) {
        Ok(program) => program,
        Err(e) => return ctx.fail(e),
    };

    if config.dump_tree {
        eprintln!("=== Tree ===");
        eprint!("{}", printer::print_program(&program));
        eprintln!("=== End Tree ===\n");
    }

    // Phase 3: Semantic analysis
    if config.verbose {
        eprintln!(
            "Analyzing {} statement(s) with {} predeclared name(s)...",
            program.statements.len(),
            config.predeclared.len()
        );
    }

    let mut analyzer = SemanticAnalyzer::with_predeclared(&config.predeclared);
    if let Err(e) = analyzer.analyze_program(&program) {
        return ctx.fail(e.into());
    }

    let declared: Vec<String> = analyzer.symbols().names().map(str::to_string).collect();

    if config.verbose {
        eprintln!("Declared: {}", declared.join(", "));
    }

    Ok(CheckReport { program, declared })
}
