#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    ir::basic_block::FunctionCfg,
    ir::lower::lower_program,
    passes::global_init::hoist_global_initializers,
    semantic::{global::GlobalEnv, resolve::resolve_declarations},
};

pub mod ast;
pub mod errors;
pub mod ir;
pub mod passes;
pub mod semantic;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// The output of the semantic core: the populated global environment and
/// one control-flow graph per function, ready for code generation.
#[derive(Debug)]
pub struct Analysis {
    pub env: GlobalEnv,
    pub cfgs: Vec<FunctionCfg>,
}

/// Runs the semantic pipeline over a parsed program, in order: global
/// environment construction, declaration resolution, global initializer
/// hoisting, per-function lowering.
///
/// Hoisting completes before any function is lowered, so `main`'s
/// statement list is final by the time its body becomes a CFG.
pub fn analyze_program(program: &mut Program) -> Result<Analysis, Vec<Error>> {
    let mut env = GlobalEnv::new();

    let diagnostics = resolve_declarations(&mut env, program);
    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    if let Err(error) = hoist_global_initializers(&env, program) {
        return Err(vec![error]);
    }

    let cfgs = lower_program(&env, program);
    Ok(Analysis { env, cfgs })
}

pub fn get_line_at_position(file: PathBuf, position: u32) -> (usize, String, usize) {
    let content = fs::read_to_string(&file).unwrap();
    let pos = position as usize;

    if pos >= content.len() {
        panic!("Position exceeds file length");
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    panic!("Failed to find line containing position");
}


pub fn display_error(error: Error, file: PathBuf) {
    /*
        error: message
        -> final.mx
           |
        20 | int a = #;
           | --------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(file.clone(), position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos - removed_whitespace + 1;

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
