use crate::CheckResult;
use colored::*;
use std::path::Path;

/// Stable sort by ascending line; results without a line come first.
pub fn sort_by_line(results: &mut [CheckResult]) {
    results.sort_by_key(|result| result.line);
}

pub fn format_result(result: &CheckResult) -> String {
    match result.line {
        Some(line) => format!("{} On Line: {}", result.message, line),
        None => format!("{} On Line: unknown", result.message),
    }
}

pub fn print_header(file_path: &Path, colored_output: bool) {
    let file_name = file_path.display().to_string();
    if colored_output {
        println!("Checking Spelling on: {}", file_name.yellow().bold());
    } else {
        println!("Checking Spelling on: {}", file_name);
    }
}

pub fn print_results(results: &[CheckResult]) {
    for result in results {
        println!("{}", format_result(result));
    }
}

pub fn print_usage(colored_output: bool) {
    println!("lintspell checks spelling on js files");
    if colored_output {
        println!("Usage: lintspell {}", "<file>".green());
    } else {
        println!("Usage: lintspell <file>");
    }
}
