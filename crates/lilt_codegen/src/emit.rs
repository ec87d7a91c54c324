//! Per-variant JavaScript emission.

use lilt_syntax::{Initializer, Result, ReturnValue, Statement};

use crate::registry;

/// Emit the JavaScript text for one classified statement.
///
/// Pure: the same statement always yields the same text, independent of
/// surrounding lines. Indentation is the emitter's concern, not this one's.
pub fn emit_statement(statement: &Statement) -> Result<String> {
    Ok(match statement {
        Statement::Empty => String::new(),
        Statement::Comment { text } => text.clone(),
        Statement::ValueDecl { name, init } => match init {
            Initializer::Expression(expr) => format!("let {name} = {expr};"),
            // Capturing a task result is the one place lilt awaits: library
            // helpers such as fetch are async.
            Initializer::TaskResult { function, args } => {
                format!("let {name} = await {function}({});", args.join(", "))
            }
        },
        Statement::Assignment { target, value } => match value {
            Initializer::Expression(expr) => format!("{target} = {expr};"),
            Initializer::TaskResult { function, args } => {
                format!("{target} = {function}({});", args.join(", "))
            }
        },
        Statement::Conditional { lhs, op, rhs } => format!("if ({lhs} {op} {rhs}) {{"),
        Statement::BoundedLoop { var, limit } => format!("while ({var} !== {limit}) {{"),
        Statement::Call { function, args } => format!("{function}({});", args.join(", ")),
        Statement::Log { literal } => {
            // Purely textual: `{` opens an interpolation; the matching `}`
            // already closes it in template-literal syntax.
            format!("console.log(`{}`);", literal.replace('{', "${"))
        }
        Statement::TaskOpen { name, params } => {
            format!("function {name} ({}) {{", params.join(", "))
        }
        Statement::BlockEnd => "}".to_string(),
        Statement::Return { value } => match value {
            ReturnValue::Expression(expr) => format!("return {expr};"),
            ReturnValue::TaskResult { function, args } => {
                format!("return {function}({});", args.join(", "))
            }
        },
        Statement::ObjectDecl { name } => format!("let {name} = {{}};"),
        Statement::PropertyAssignment {
            object,
            property,
            value,
        } => format!("{object}['{property}'] = {value};"),
        Statement::Import { library } => registry::lookup(library)?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use lilt_lexer::scan_line;
    use lilt_parser::classify;
    use rstest::rstest;

    use super::*;

    /// Classify and emit a single trimmed line.
    fn transform(input: &str) -> Result<String> {
        emit_statement(&classify(&scan_line(input)?)?)
    }

    #[rstest]
    #[case("", "")]
    #[case("// a comment", "// a comment")]
    #[case("value counter is 25", "let counter = 25;")]
    #[case("value result is 10 + 12", "let result = 10 + 12;")]
    #[case("value result is 'ten' + 'four'", "let result = 'ten' + 'four';")]
    #[case("value body is from fetch with url", "let body = await fetch(url);")]
    #[case("counter is 100", "counter = 100;")]
    #[case("counter is from increment with counter", "counter = increment(counter);")]
    #[case("when some_value <= 10", "if (some_value <= 10) {")]
    #[case("when a > b trailing junk", "if (a > b) {")]
    #[case("until counter equals maximum", "while (counter !== maximum) {")]
    #[case("run increment", "increment();")]
    #[case("run increment with counter", "increment(counter);")]
    #[case("run increment with counter1 counter2", "increment(counter1, counter2);")]
    #[case("log 'Hello, world!'", "console.log(`Hello, world!`);")]
    #[case("log 'Hello, {name}!'", "console.log(`Hello, ${name}!`);")]
    #[case("task my_task", "function my_task () {")]
    #[case("task my_task gets some_value", "function my_task (some_value) {")]
    #[case("task pair gets left right", "function pair (left, right) {")]
    #[case("end", "}")]
    #[case("return", "return ;")]
    #[case("return some_value", "return some_value;")]
    #[case("return run increment with counter", "return increment(counter);")]
    #[case("object config", "let config = {};")]
    #[case("config property retries is 3", "config['retries'] = 3;")]
    #[case("config property label is 'demo run'", "config['label'] = 'demo run';")]
    fn emits_expected_javascript(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(transform(input).unwrap(), expected);
    }

    #[rstest]
    #[case("value counter")]
    #[case("until counter")]
    #[case("when some_value 100")]
    #[case("run increment counter")]
    #[case("counter is run increment with counter")]
    #[case("counter is increment with counter")]
    #[case("log counter")]
    #[case("task my_task some_value")]
    #[case("using unknown_library")]
    #[case("the meaning of life")]
    fn rejects_malformed_statements(#[case] input: &str) {
        assert!(transform(input).is_err());
    }

    #[test]
    fn emission_is_a_pure_function_of_the_statement() {
        let first = transform("until counter equals maximum").unwrap();
        let second = transform("until counter equals maximum").unwrap();
        assert_eq!(first, second);
    }
}
