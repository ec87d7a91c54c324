//! The line emitter: drives scanning, classification, and emission for every
//! input line and assembles the final JavaScript document.

use lilt_parser::parse_source;
use lilt_syntax::{EmitOptions, Result};

use crate::emit::emit_statement;

/// Comment block prepended once to every generated file.
const HEADER: &str = "// generated from lilt source\n// do not edit by hand\n\n";

/// Assembles a JavaScript document from lilt source: one emitted line per
/// input line, each prefixed with two spaces per nesting level.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    options: EmitOptions,
}

impl Emitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Transform a whole lilt source text into JavaScript.
    ///
    /// Aborts on the first failing line; there is no partial output.
    pub fn emit_source(&self, source: &str) -> Result<String> {
        let parsed = parse_source(source)?;
        let mut output = String::from(HEADER);

        for entry in &parsed {
            let emitted =
                emit_statement(&entry.statement).map_err(|e| e.at_line(entry.number))?;
            let indent = "  ".repeat(entry.line.depth);

            output.push_str(&indent);
            if self.options.annotate_source && !entry.line.trimmed.is_empty() {
                output.push_str("// ");
                output.push_str(&entry.line.trimmed);
                output.push('\n');
                output.push_str(&indent);
            }
            output.push_str(&emitted);
            output.push('\n');
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_prepended_once() {
        let out = Emitter::default().emit_source("end").unwrap();
        assert_eq!(out, format!("{HEADER}}}\n"));
    }

    #[test]
    fn nesting_depth_prefixes_emitted_lines() {
        let out = Emitter::default()
            .emit_source("task t\n  return 1\nend")
            .unwrap();
        assert_eq!(out, format!("{HEADER}function t () {{\n  return 1;\n}}\n"));
    }

    #[test]
    fn annotation_echoes_the_source_at_the_same_depth() {
        let options = EmitOptions {
            annotate_source: true,
        };
        let out = Emitter::new(options)
            .emit_source("// note\ntask t\n  return 1\nend")
            .unwrap();
        // Notation comments are annotated like any other non-empty line.
        assert_eq!(
            out,
            format!(
                "{HEADER}// // note\n// note\n// task t\nfunction t () {{\n  \
                 // return 1\n  return 1;\n// end\n}}\n"
            )
        );
    }

    #[test]
    fn empty_lines_are_never_annotated() {
        let options = EmitOptions {
            annotate_source: true,
        };
        let out = Emitter::new(options).emit_source("\nend").unwrap();
        assert_eq!(out, format!("{HEADER}\n// end\n}}\n"));
    }

    #[test]
    fn first_failure_aborts_with_its_line_number() {
        let err = Emitter::default()
            .emit_source("value a is 1\nusing sockets\nvalue b is 2")
            .unwrap_err();
        assert!(err.to_string().starts_with("line 2:"));
    }
}
