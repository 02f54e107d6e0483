use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use minicalc::{
    ast::SyntaxElement,
    interpreter::compilation::{Compilation, EvaluationResult},
    util::logging::init_tracing,
};

/// minicalc evaluates integer and boolean expressions such as `(1 + 2) * 3`
/// or `!true == false`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the syntax tree of every expression before its result.
    #[arg(short, long)]
    show_tree: bool,

    /// Evaluates this expression and exits instead of starting the prompt.
    expression: Option<String>,
}

struct Session {
    show_tree: bool,
}

/// What a line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Blank,
    ToggleTree,
    Clear,
    /// Evaluates the line as typed, so diagnostic spans match what the user
    /// sees.
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Recognizes `#` commands on the trimmed line.
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Self::Blank,
            "#showtree" => Self::ToggleTree,
            "#cls" | "#clear" => Self::Clear,
            _ => Self::Evaluate(line),
        }
    }
}

impl Session {
    /// Evaluates one line and prints its outcome. Returns `false` if the line
    /// produced diagnostics or a fatal error.
    fn run(&self, text: &str) -> bool {
        let compilation = Compilation::new(text);

        if self.show_tree {
            print_tree(SyntaxElement::Node(compilation.syntax_tree().root()), "", true);
        }

        match compilation.evaluate() {
            Ok(EvaluationResult::Value(value)) => {
                println!("{value}");
                true
            },
            Ok(EvaluationResult::Diagnostics(diagnostics)) => {
                for diagnostic in diagnostics {
                    eprintln!("{diagnostic}");
                }
                false
            },
            Err(e) => {
                eprintln!("fatal: {e}");
                false
            },
        }
    }

    /// Handles one line typed at the prompt, including `#` commands.
    fn process_input(&mut self, line: &str) {
        match Command::parse(line) {
            Command::Blank => println!("You have to enter a valid term\n"),
            Command::ToggleTree => {
                self.show_tree = !self.show_tree;
                if self.show_tree {
                    println!("Showing parse trees");
                } else {
                    println!("Hiding parse trees");
                }
            },
            Command::Clear => print!("\x1B[2J\x1B[1;1H"),
            Command::Evaluate(term) => {
                self.run(term);
            },
        }
    }

    fn repl(&mut self) -> ExitCode {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            println!("Enter a mathematical term");
            if io::stdout().flush().is_err() {
                return ExitCode::FAILURE;
            }

            match lines.next() {
                Some(Ok(line)) => self.process_input(&line),
                Some(Err(e)) => {
                    eprintln!("Failed to read input: {e}");
                    return ExitCode::FAILURE;
                },
                None => return ExitCode::SUCCESS,
            }
        }
    }
}

/// Prints a syntax tree with box-drawing guides, one element per line.
fn print_tree(element: SyntaxElement<'_>, indent: &str, is_last: bool) {
    let marker = if is_last { "└──" } else { "├──" };
    println!("{indent}{marker}{element}");

    let indent = format!("{indent}{}", if is_last { "    " } else { "│   " });
    let children = element.children();
    let last = children.len().saturating_sub(1);
    for (i, child) in children.into_iter().enumerate() {
        print_tree(child, &indent, i == last);
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let mut session = Session { show_tree: args.show_tree };

    match args.expression {
        Some(expression) => {
            if session.run(&expression) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        None => session.repl(),
    }
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn commands_ignore_surrounding_whitespace() {
        assert_eq!(Command::parse("   "), Command::Blank);
        assert_eq!(Command::parse(" #showtree "), Command::ToggleTree);
        assert_eq!(Command::parse("#cls"), Command::Clear);
        assert_eq!(Command::parse("\t#clear"), Command::Clear);
    }

    #[test]
    fn terms_are_evaluated_untrimmed() {
        assert_eq!(Command::parse("  1 + true"), Command::Evaluate("  1 + true"));
    }
}
