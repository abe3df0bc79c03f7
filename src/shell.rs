use crate::classify::{classify, Disposition};
use crate::engine::{Engine, Outcome};
use crate::error::ShellError;
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

/// Prompt issued before every read.
pub const PROMPT: &str = "basic > ";

/// Session label handed to the engine with every statement. Diagnostic only;
/// the shell never looks at it.
pub const SOURCE_LABEL: &str = "<stdin>";

/// The interactive dispatch loop.
///
/// One iteration reads a line, classifies it, and either stops the session,
/// re-prompts, or hands the statement to the engine and renders the answer.
/// Nothing is carried from one iteration to the next.
pub struct Shell<E> {
    engine: E,
}

impl<E: Engine> Shell<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Run the session until the quit keyword or end-of-input.
    ///
    /// Rendered output goes to stdout. Ctrl+C and Ctrl+D end the session the
    /// same way the quit keyword does: silently, as a normal exit.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut editor = DefaultEditor::new()?;
        let mut out = io::stdout();

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if self.step(&line, &mut out)? == Disposition::Terminate {
                        break;
                    }
                }
                // Handle Ctrl+C or Ctrl+D
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    break;
                }
                Err(e) => {
                    return Err(ShellError::Readline(e));
                }
            }
        }
        Ok(())
    }

    /// Process one line: classify it and, for a candidate statement, evaluate
    /// and render. Returns the line's disposition so the caller can stop the
    /// loop on [`Disposition::Terminate`].
    pub fn step<W: Write>(&mut self, raw: &str, out: &mut W) -> Result<Disposition, ShellError> {
        let disposition = classify(raw);
        if disposition == Disposition::Evaluate {
            self.dispatch(raw, out)?;
        }
        Ok(disposition)
    }

    /// Send the raw statement text to the engine and render its answer.
    ///
    /// Writes at most one line: the error's display form if the engine
    /// reported a failure, the sole value's debug form for a one-element
    /// result, the whole container's debug form otherwise, and nothing at all
    /// when the engine answered with neither.
    fn dispatch<W: Write>(&mut self, raw: &str, out: &mut W) -> Result<(), ShellError> {
        debug!("evaluating {:?}", raw);
        let evaluation = self.engine.evaluate(SOURCE_LABEL, raw);

        match evaluation.into_outcome() {
            // A reported failure wins over any result the engine also sent.
            Outcome::Failure(error) => writeln!(out, "{}", error)?,
            Outcome::Success(values) => match values.single() {
                // One statement evaluated: show its value without the list wrapper.
                Some(value) => writeln!(out, "{:?}", value)?,
                None => writeln!(out, "{:?}", values)?,
            },
            Outcome::Empty => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Evaluation;
    use std::collections::VecDeque;

    /// Engine double that replays scripted outcomes and records every call.
    struct ScriptedEngine {
        outcomes: VecDeque<Evaluation<i64, String>>,
        calls: Vec<(String, String)>,
    }

    impl ScriptedEngine {
        fn new(outcomes: Vec<Evaluation<i64, String>>) -> Self {
            Self {
                outcomes: outcomes.into(),
                calls: Vec::new(),
            }
        }
    }

    impl Engine for ScriptedEngine {
        type Value = i64;
        type Error = String;

        fn evaluate(&mut self, source: &str, text: &str) -> Evaluation<i64, String> {
            self.calls.push((source.to_string(), text.to_string()));
            self.outcomes.pop_front().unwrap_or_else(Evaluation::empty)
        }
    }

    fn step(shell: &mut Shell<ScriptedEngine>, raw: &str) -> (Disposition, String) {
        let mut out = Vec::new();
        let disposition = shell.step(raw, &mut out).unwrap();
        (disposition, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quit_keyword_terminates_without_evaluating() {
        let mut shell = Shell::new(ScriptedEngine::new(vec![]));
        let (disposition, output) = step(&mut shell, "end");
        assert_eq!(disposition, Disposition::Terminate);
        assert!(output.is_empty());
        assert!(shell.engine.calls.is_empty());
    }

    #[test]
    fn blank_lines_never_reach_the_engine() {
        let mut shell = Shell::new(ScriptedEngine::new(vec![]));
        for raw in ["", "   ", "\t"] {
            let (disposition, output) = step(&mut shell, raw);
            assert_eq!(disposition, Disposition::Skip);
            assert!(output.is_empty());
        }
        assert!(shell.engine.calls.is_empty());
    }

    #[test]
    fn comment_lines_never_reach_the_engine() {
        let mut shell = Shell::new(ScriptedEngine::new(vec![]));
        for raw in ["# set x to 1", "   # indented"] {
            let (disposition, output) = step(&mut shell, raw);
            assert_eq!(disposition, Disposition::Skip);
            assert!(output.is_empty());
        }
        assert!(shell.engine.calls.is_empty());
    }

    #[test]
    fn candidate_statement_is_forwarded_untrimmed() {
        let mut shell = Shell::new(ScriptedEngine::new(vec![Evaluation::empty()]));
        step(&mut shell, "  1 + 2  ");
        assert_eq!(
            shell.engine.calls,
            vec![(SOURCE_LABEL.to_string(), "  1 + 2  ".to_string())]
        );
    }

    #[test]
    fn failure_is_printed_verbatim_and_suppresses_the_result() {
        let mut shell = Shell::new(ScriptedEngine::new(vec![Evaluation {
            result: Some(vec![7].into()),
            error: Some("Invalid Syntax: expected expression".to_string()),
        }]));
        let (_, output) = step(&mut shell, "x +");
        assert_eq!(output, "Invalid Syntax: expected expression\n");
    }

    #[test]
    fn single_value_renders_without_its_container() {
        let mut shell = Shell::new(ScriptedEngine::new(vec![Evaluation::success(vec![3].into())]));
        let (_, output) = step(&mut shell, "1 + 2");
        assert_eq!(output, "3\n");
    }

    #[test]
    fn several_values_render_as_the_container() {
        let mut shell = Shell::new(ScriptedEngine::new(vec![Evaluation::success(
            vec![3, 12].into(),
        )]));
        let (_, output) = step(&mut shell, "1 + 2; 3 * 4");
        assert_eq!(output, "[3, 12]\n");
    }

    #[test]
    fn empty_container_renders_as_the_container() {
        let mut shell = Shell::new(ScriptedEngine::new(vec![Evaluation::success(vec![].into())]));
        let (_, output) = step(&mut shell, ";");
        assert_eq!(output, "[]\n");
    }

    #[test]
    fn outcome_with_neither_slot_renders_nothing() {
        let mut shell = Shell::new(ScriptedEngine::new(vec![Evaluation::empty()]));
        let (disposition, output) = step(&mut shell, "noop");
        assert_eq!(disposition, Disposition::Evaluate);
        assert!(output.is_empty());
        assert_eq!(shell.engine.calls.len(), 1);
    }
}
