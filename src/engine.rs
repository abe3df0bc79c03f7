use std::fmt;

/// Interface to the evaluation engine.
///
/// The shell understands none of the language it front-ends: every candidate
/// statement goes through this single operation, and the engine answers with
/// an [`Evaluation`]. Implementations must be safe to call once per statement
/// for the lifetime of a session.
pub trait Engine {
    /// The value of one evaluated statement.
    type Value: fmt::Debug;
    /// The engine's failure report. Its `Display` form is shown to the
    /// operator verbatim.
    type Error: fmt::Display;

    /// Evaluate one statement.
    ///
    /// `source` is a fixed label identifying the session for the engine's own
    /// diagnostics; the shell never inspects it. `text` is the operator's raw
    /// line, whitespace and all.
    fn evaluate(&mut self, source: &str, text: &str) -> Evaluation<Self::Value, Self::Error>;
}

/// Ordered container of statement values, as returned by the engine.
pub struct ValueList<V> {
    elements: Vec<V>,
}

impl<V> ValueList<V> {
    pub fn new(elements: Vec<V>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The sole element, if the container holds exactly one.
    pub fn single(&self) -> Option<&V> {
        match self.elements.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.elements.iter()
    }
}

impl<V> From<Vec<V>> for ValueList<V> {
    fn from(elements: Vec<V>) -> Self {
        Self::new(elements)
    }
}

/// Renders like a plain list (`[3, 12]`), element by element.
impl<V: fmt::Debug> fmt::Debug for ValueList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.elements).finish()
    }
}

/// The engine's answer for one statement: two independently optional slots,
/// exactly as the engine reports them.
///
/// The engine's contract says at most one slot carries meaningful content,
/// but the shell does not enforce that; [`Evaluation::into_outcome`] resolves
/// the pair into the one of three cases the renderer acts on.
#[derive(Debug)]
pub struct Evaluation<V, E> {
    pub result: Option<ValueList<V>>,
    pub error: Option<E>,
}

impl<V, E> Evaluation<V, E> {
    pub fn success(values: ValueList<V>) -> Self {
        Self {
            result: Some(values),
            error: None,
        }
    }

    pub fn failure(error: E) -> Self {
        Self {
            result: None,
            error: Some(error),
        }
    }

    /// Neither result nor error; the shell renders nothing for it.
    pub fn empty() -> Self {
        Self {
            result: None,
            error: None,
        }
    }

    /// Resolve the optional pair into the three-way outcome.
    ///
    /// A present error always wins, even if the engine also filled the result
    /// slot.
    pub fn into_outcome(self) -> Outcome<V, E> {
        match (self.result, self.error) {
            (_, Some(error)) => Outcome::Failure(error),
            (Some(values), None) => Outcome::Success(values),
            (None, None) => Outcome::Empty,
        }
    }
}

/// What one evaluation amounted to, after resolving the boundary pair.
#[derive(Debug)]
pub enum Outcome<V, E> {
    Success(ValueList<V>),
    Failure(E),
    /// The engine reported neither a result nor an error.
    Empty,
}
