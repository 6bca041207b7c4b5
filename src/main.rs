use anyhow::{Context, Result};
use clap::Parser as _;

use regex_sampler::{Ast, Generator, Limits, Parser, TreePrinter};

const DEMO_PATTERNS: [&str; 3] = ["(a|b)(c|d)E+G?", "P(Q|R|S)T(UV|W|X)*Z+", "1(0|1)*2(3|4){5}36"];

/// enumerate and count the strings a restricted regular expression accepts
#[derive(clap::Parser, Debug)]
#[command(version)]
struct CommandLineInterface {
    /// patterns to process (the built-in demo patterns if omitted)
    patterns: Vec<String>,

    /// stand-in upper bound for `*`, `+` and `{n,}`
    #[arg(long, default_value_t = Limits::DEFAULT_REPETITION_LIMIT)]
    limit: u32,

    /// most combinations generated per pattern
    #[arg(long, default_value_t = Limits::DEFAULT_MAX_COMBINATIONS)]
    max: usize,

    /// how many distinct combinations to print
    #[arg(long, default_value_t = 10)]
    show: usize,

    /// reject unbalanced delimiters and bad repeat counts instead of tolerating them
    #[arg(long)]
    strict: bool,

    /// print the syntax tree
    #[arg(long)]
    tree: bool,

    /// print a step-by-step walkthrough of parsing and generation
    #[arg(long)]
    steps: bool,

    /// print how the total was computed
    #[arg(long)]
    explain: bool,
}

impl CommandLineInterface {
    fn parse_pattern(&self, pattern: &str) -> Result<Ast> {
        match self.strict {
            true => Parser::parse_strict(pattern).with_context(|| format!("invalid pattern {:?}", pattern)),
            false => Ok(Parser::parse(pattern)),
        }
    }

    fn run(&self) -> Result<()> {
        let generator = Generator::new(
            Limits::default()
                .with_repetition_limit(self.limit)
                .with_max_combinations(self.max),
        );
        let patterns: Vec<&str> = match self.patterns.is_empty() {
            true => DEMO_PATTERNS.to_vec(),
            false => self.patterns.iter().map(String::as_str).collect(),
        };

        for (i, pattern) in patterns.iter().enumerate() {
            let ast = self.parse_pattern(pattern)?;
            println!("==== Pattern {}: {} ====", i + 1, pattern);

            let combinations = generator.distinct(&ast);
            println!("\nGenerated valid combinations:");
            for combination in combinations.iter().take(self.show) {
                println!(" - {}", combination);
            }
            if combinations.len() > self.show {
                println!(" ... and {} more combinations", combinations.len() - self.show);
            }

            println!("\nTotal valid combinations generated: {}", combinations.len());
            println!("Total possible combinations: {}", generator.count(&ast));

            if self.tree {
                println!("\nRegex syntax tree:");
                print!("{}", TreePrinter::visualize(&ast));
            }
            if self.steps {
                println!();
                print!("{}", TreePrinter::explain_processing(pattern, &ast, self.limit));
            }
            if self.explain {
                println!("\nExplanation of pattern processing:");
                print!("{}", generator.explain_pattern(pattern));
            }
            println!();
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    CommandLineInterface::parse().run()
}
