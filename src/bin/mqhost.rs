//! MQJS host-shim shell
//!
//! Interactive tool for poking at the builtin table: registers the default
//! functions, substitutes a real `print`, installs a demo host callback,
//! and dispatches `name arg...` lines through the table.

use mqjs_host::{register_default_functions, Context, FunctionTable, Value};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut table = register_default_functions();
    // Swap the print placeholder for console output, the way a real
    // embedder would.
    if let Err(e) = table.set("print", shell_print) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut ctx = Context::new();
    // Demo host callback: load(x, ...) echoes x.
    ctx.set_host_fn(|_ctx, _this, args| args.first().cloned().unwrap_or_default());

    if args.len() > 1 {
        run_file(&args[1], &table, &mut ctx);
    } else {
        run_repl(&table, &mut ctx);
    }
}

fn shell_print(_ctx: &mut Context, _this: &Value, args: &[Value]) -> Value {
    let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));
    Value::Undefined
}

fn run_file(filename: &str, table: &FunctionTable, ctx: &mut Context) {
    let source = match std::fs::read_to_string(filename) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {}", filename, e);
            std::process::exit(1);
        }
    };

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(e) = dispatch_line(line, table, ctx) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_repl(table: &FunctionTable, ctx: &mut Context) {
    println!("MQJS host shim shell");
    println!("Commands: <builtin> [args...], 'names', Ctrl+D to exit.\n");

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Error initializing line editor: {}", e);
            std::process::exit(1);
        }
    };

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                if line == "names" {
                    for name in table.names() {
                        println!("{}", name);
                    }
                    continue;
                }

                if let Err(e) = dispatch_line(line, table, ctx) {
                    println!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }
}

fn dispatch_line(line: &str, table: &FunctionTable, ctx: &mut Context) -> Result<(), String> {
    let tokens = tokenize(line)?;
    let (name, arg_tokens) = tokens
        .split_first()
        .ok_or_else(|| "empty command".to_string())?;

    let args: Vec<Value> = arg_tokens.iter().map(|t| parse_value(t)).collect();

    let result = table
        .call(ctx, name, &Value::Undefined, &args)
        .map_err(|e| e.to_string())?;

    if let Some(err) = ctx.take_exception() {
        println!("Uncaught: {}", err);
    } else if !result.is_undefined() {
        println!("{}", result);
    }
    Ok(())
}

/// Split a command line on whitespace, honoring double-quoted strings.
fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                if in_quotes {
                    // Closing quote: emit even if empty
                    tokens.push(std::mem::take(&mut current));
                }
                in_quotes = !in_quotes;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated string".to_string());
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parse a token as a scalar literal; anything unrecognized is a string.
fn parse_value(token: &str) -> Value {
    match token {
        "undefined" => Value::Undefined,
        "null" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if let Ok(i) = token.parse::<i32>() {
                Value::Int(i)
            } else if let Ok(f) = token.parse::<f64>() {
                Value::Float(f)
            } else {
                Value::string(token)
            }
        }
    }
}
