use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
};

use exparse::{ast::ast::Expr, display_error, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        panic!("Incorrect arguments provided!");
    }

    if args.len() == 2 {
        let file_path: &str = &args[1];
        let file_name = if file_path.contains("/") {
            file_path.split("/").last().unwrap()
        } else {
            file_path
        };

        let contents = read_to_string(file_path).expect("Failed to read file!");

        // One expression per line, same as the interactive shell
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }

            run_line(line, Some(String::from(file_name)));
        }
    } else {
        repl();
    }
}

fn repl() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        run_line(line, None);
    }
}

fn run_line(line: &str, file: Option<String>) {
    let (parser, expr) = parse(String::from(line), file);

    if parser.had_error() {
        for error in parser.diagnostics() {
            display_error(error, line);
        }
    } else {
        println!("{}", expr.to_sexpr());
    }
}
