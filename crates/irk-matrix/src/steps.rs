//! Step narration recorded alongside every computation.
//!
//! A [`StepTrace`] is an append-only builder owned by a single engine call. The
//! engine pushes one [`Step`] per row operation or intermediate value and hands
//! the finished trace back with its result; nothing ever removes or rewrites a
//! step once pushed.
use std::fmt;
use std::slice::Iter;

use serde::Serialize;

/// One narration unit: a single line, or a titled multi-line snapshot of the
/// working matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Line { text: String },
    Snapshot { title: Option<String>, block: String },
}

impl Step {
    pub fn line(text: impl Into<String>) -> Self {
        Step::Line { text: text.into() }
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, Step::Snapshot { .. })
    }

    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Line { text } => f.write_str(text),
            Step::Snapshot { title, block } => {
                let mut out = String::new();
                if let Some(title) = title.as_deref().filter(|t| !t.trim().is_empty()) {
                    out.push_str(title);
                    out.push('\n');
                }
                out.push_str(block);
                f.write_str(out.trim_end())
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, line: impl Into<String>) {
        self.steps.push(Step::line(line));
    }

    pub fn snapshot(&mut self, title: Option<&str>, block: impl Into<String>) {
        self.steps.push(Step::Snapshot {
            title: title.map(str::to_string),
            block: block.into(),
        });
    }

    /// Append every step of `other`, preserving order.
    pub fn append(&mut self, other: StepTrace) {
        self.steps.extend(other.steps);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Rendered text of every step, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(Step::text).collect()
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
