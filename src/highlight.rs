#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alignment::{EditOp, EditScript};

/// How a segment relates to the other text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Unchanged,
    Removed,
    Added,
}

impl From<&EditOp> for Role {
    fn from(operation: &EditOp) -> Self {
        match operation {
            EditOp::Equal(..) => Role::Unchanged,
            EditOp::Delete(..) => Role::Removed,
            EditOp::Insert(..) => Role::Added,
        }
    }
}

/// A run of text sharing the same `Role`, ready to be rendered.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    text: String,
    role: Role,
}

impl Segment {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Segment {
            text: text.into(),
            role,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn role(&self) -> Role { self.role }
}

/// The two side-by-side views of a comparison: the original text with its
/// removed parts marked, and the modified text with its added parts marked.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightResult {
    pub original_view: Vec<Segment>,
    pub modified_view: Vec<Segment>,
}

/// Turn an edit script into display segments.
///
/// Operations that follow each other in the script and share a role are
/// merged into one segment. Unchanged text separated by an insertion
/// therefore stays in two segments in the original view, mirroring the
/// modified view.
#[must_use]
pub fn build_views(script: &EditScript) -> HighlightResult {
    let mut result = HighlightResult::default();
    let mut previous_role: Option<Role> = None;

    for operation in script {
        let role = Role::from(operation);
        let extends_previous = previous_role == Some(role);

        if let Some(token) = operation.original_token() {
            push_or_extend(&mut result.original_view, token.text(), role, extends_previous);
        }
        if let Some(token) = operation.modified_token() {
            push_or_extend(&mut result.modified_view, token.text(), role, extends_previous);
        }

        previous_role = Some(role);
    }

    result
}

fn push_or_extend(view: &mut Vec<Segment>, text: &str, role: Role, extends_previous: bool) {
    match view.last_mut() {
        Some(last) if extends_previous => {
            debug_assert_eq!(last.role, role, "Only segments of the same role can be joined");
            last.text.push_str(text);
        }
        _ => view.push(Segment::new(text, role)),
    }
}

impl HighlightResult {
    /// The full text of the original view.
    #[must_use]
    pub fn original_text(&self) -> String { self.original_view.iter().map(Segment::text).collect() }

    /// The full text of the modified view.
    #[must_use]
    pub fn modified_text(&self) -> String { self.modified_view.iter().map(Segment::text).collect() }
}
