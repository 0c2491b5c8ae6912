use std::{env, fs::read_to_string, process::exit, time::Instant};

use exprc::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: exprc <file>");
        exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (parser, result) = parse(tokens);

    let nodes = match result {
        Ok(nodes) => nodes,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!();

    for (index, node) in nodes.iter().enumerate() {
        println!("stmt {}: {}", index, node);
    }

    if !parser.locals().is_empty() {
        println!();
        println!("frame layout ({} bytes):", parser.locals().frame_size());
        for local in parser.locals().iter() {
            println!("  {} -> [rbp-{}]", local.name, local.offset);
        }
    }
}

fn display_error(error: &Error, source: &str) {
    /*
        Error: message
        -> final.expr
           |
        20 | a = #;
           | ----^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.1);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
