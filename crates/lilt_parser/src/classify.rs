//! Statement classification.
//!
//! Rules are tried in a fixed order; the first rule whose token positions
//! match claims the line. The order places assignment (`is` at position 1)
//! after value declaration (`value` at position 0) but before the remaining
//! keyword-led kinds, so e.g. `run is fast` is an assignment to `run`, while
//! a line beginning with `value` is always a declaration.

use lilt_lexer::{scan_line, SourceLine};
use lilt_syntax::{Error, Initializer, Result, ReturnValue, Statement};

/// A scanned line together with its classification.
#[derive(Debug, Clone)]
pub struct ParsedLine {
    /// 1-based line number in the source text.
    pub number: usize,
    pub line: SourceLine,
    pub statement: Statement,
}

/// Scan and classify every line of a lilt source text.
///
/// Stops at the first failure, tagging the error with its line number.
pub fn parse_source(source: &str) -> Result<Vec<ParsedLine>> {
    source
        .split('\n')
        .enumerate()
        .map(|(idx, raw)| {
            let number = idx + 1;
            let line = scan_line(raw).map_err(|e| e.at_line(number))?;
            let statement = classify(&line).map_err(|e| e.at_line(number))?;
            Ok(ParsedLine {
                number,
                line,
                statement,
            })
        })
        .collect()
}

/// Classify one scanned line by its leading keyword or shape.
pub fn classify(line: &SourceLine) -> Result<Statement> {
    let input = line.trimmed.as_str();
    let tokens = &line.tokens;

    if input.is_empty() {
        return Ok(Statement::Empty);
    }
    if input.starts_with("//") {
        return Ok(Statement::Comment {
            text: input.to_string(),
        });
    }
    if token_at(tokens, 0) == Some("value") {
        return value_decl(tokens);
    }
    if token_at(tokens, 1) == Some("is") {
        return assignment(tokens);
    }
    match token_at(tokens, 0) {
        Some("when") => return conditional(tokens),
        Some("until") => return bounded_loop(tokens),
        Some("run") => return call(input, tokens),
        Some("log") => return log(input),
        Some("task") => return task_open(input, tokens),
        Some("end") => return Ok(Statement::BlockEnd),
        Some("return") => return return_statement(input, tokens),
        Some("object") => return object_decl(input, tokens),
        _ => {}
    }
    if token_at(tokens, 1) == Some("property") {
        return property_assignment(tokens);
    }
    if token_at(tokens, 0) == Some("using") {
        return import(input, tokens);
    }

    Err(invalid(input))
}

fn value_decl(tokens: &[String]) -> Result<Statement> {
    if token_at(tokens, 2) != Some("is") {
        return Err(Error::ValueWithoutIs);
    }
    let name = tokens[1].clone();

    // `value <name> is from <task> with <args>` captures a task result.
    if tokens.iter().any(|t| t == "from") {
        let function = token_at(tokens, 4).ok_or_else(|| invalid(&tokens.join(" ")))?;
        return Ok(Statement::ValueDecl {
            name,
            init: Initializer::TaskResult {
                function: function.to_string(),
                args: rest(tokens, 6),
            },
        });
    }

    Ok(Statement::ValueDecl {
        name,
        init: Initializer::Expression(tokens[3..].join(" ")),
    })
}

fn assignment(tokens: &[String]) -> Result<Statement> {
    let target = tokens[0].clone();

    // More than a bare expression after `is` must be a `from` capture.
    if tokens.len() > 3 {
        if token_at(tokens, 2) != Some("from") {
            return Err(Error::AssignWithoutFrom);
        }
        return Ok(Statement::Assignment {
            target,
            value: Initializer::TaskResult {
                function: tokens[3].clone(),
                args: rest(tokens, 5),
            },
        });
    }

    Ok(Statement::Assignment {
        target,
        value: Initializer::Expression(tokens[2..].join(" ")),
    })
}

fn conditional(tokens: &[String]) -> Result<Statement> {
    if tokens.len() < 4 {
        return Err(Error::ConditionTooShort);
    }
    Ok(Statement::Conditional {
        lhs: tokens[1].clone(),
        op: tokens[2].clone(),
        rhs: tokens[3].clone(),
    })
}

fn bounded_loop(tokens: &[String]) -> Result<Statement> {
    if token_at(tokens, 2) != Some("equals") {
        return Err(Error::UntilWithoutEquals);
    }
    let limit = token_at(tokens, 3).ok_or(Error::UntilWithoutEquals)?;
    Ok(Statement::BoundedLoop {
        var: tokens[1].clone(),
        limit: limit.to_string(),
    })
}

fn call(input: &str, tokens: &[String]) -> Result<Statement> {
    if tokens.len() > 2 && token_at(tokens, 2) != Some("with") {
        return Err(Error::CallWithoutWith);
    }
    let function = token_at(tokens, 1).ok_or_else(|| invalid(input))?;
    Ok(Statement::Call {
        function: function.to_string(),
        args: rest(tokens, 3),
    })
}

fn log(input: &str) -> Result<Statement> {
    // The literal may contain spaces, so it is cut from the trimmed content
    // rather than reassembled from tokens.
    let start = input.find('\'').ok_or(Error::LogWithoutLiteral)?;
    let tail = &input[start + 1..];
    let end = tail.find('\'').ok_or(Error::LogWithoutLiteral)?;
    Ok(Statement::Log {
        literal: tail[..end].to_string(),
    })
}

fn task_open(input: &str, tokens: &[String]) -> Result<Statement> {
    if tokens.len() > 2 && !tokens.iter().any(|t| t == "gets") {
        return Err(Error::TaskWithoutGets);
    }
    let name = token_at(tokens, 1).ok_or_else(|| invalid(input))?;
    Ok(Statement::TaskOpen {
        name: name.to_string(),
        params: rest(tokens, 3),
    })
}

fn return_statement(input: &str, tokens: &[String]) -> Result<Statement> {
    if matches!(token_at(tokens, 1), Some("run") | Some("from")) {
        let function = token_at(tokens, 2).ok_or_else(|| invalid(input))?;
        return Ok(Statement::Return {
            value: ReturnValue::TaskResult {
                function: function.to_string(),
                args: rest(tokens, 4),
            },
        });
    }
    Ok(Statement::Return {
        value: ReturnValue::Expression(rest(tokens, 1).join(" ")),
    })
}

fn object_decl(input: &str, tokens: &[String]) -> Result<Statement> {
    let name = token_at(tokens, 1).ok_or_else(|| invalid(input))?;
    Ok(Statement::ObjectDecl {
        name: name.to_string(),
    })
}

fn property_assignment(tokens: &[String]) -> Result<Statement> {
    if token_at(tokens, 3) != Some("is") {
        return Err(Error::PropertyWithoutIs);
    }
    Ok(Statement::PropertyAssignment {
        object: tokens[0].clone(),
        property: tokens[2].clone(),
        value: rest(tokens, 4).join(" "),
    })
}

fn import(input: &str, tokens: &[String]) -> Result<Statement> {
    let library = token_at(tokens, 1).ok_or_else(|| invalid(input))?;
    Ok(Statement::Import {
        library: library.to_string(),
    })
}

fn invalid(input: &str) -> Error {
    Error::InvalidStatement {
        statement: input.to_string(),
    }
}

fn token_at(tokens: &[String], idx: usize) -> Option<&str> {
    tokens.get(idx).map(String::as_str)
}

fn rest(tokens: &[String], idx: usize) -> Vec<String> {
    tokens.get(idx..).map(<[String]>::to_vec).unwrap_or_default()
}
