//! Notes handed to the external notebook.
//!
//! The core only builds note content; storing it is the sink's business.

use crate::assistant::AssistantReply;
use crate::citation::Citation;
use crate::graph::PathInsight;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use uuid::Uuid;

/// A note ready to append to the notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Short title
    pub title: String,
    /// Body text
    pub content: String,
    /// Citations backing the content
    pub citation_ids: Vec<String>,
}

impl NotebookEntry {
    /// Create an entry with a fresh id.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        citation_ids: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            citation_ids,
        }
    }

    /// Note describing a path found in the insight panel.
    pub fn from_insight(insight: &PathInsight, citations: &[Citation]) -> Self {
        let (title, content) = match (insight.path.first(), insight.path.last()) {
            (Some(first), Some(last)) => {
                let label = |id: &str| {
                    insight
                        .nodes
                        .iter()
                        .find(|node| node.id == id)
                        .map_or(id.to_string(), |node| node.label.clone())
                };
                (
                    format!("Path: {} to {}", label(first.as_str()), label(last.as_str())),
                    format!("{} ({} hops)", insight.describe(), insight.hops()),
                )
            }
            _ => ("Path".to_string(), "No connection found".to_string()),
        };
        Self::new(
            title,
            content,
            citations.iter().map(|c| c.id.clone()).collect(),
        )
    }

    /// Note saving an assistant answer.
    pub fn from_reply(question: &str, reply: &AssistantReply) -> Self {
        Self::new(question, reply.text.clone(), reply.citation_ids.clone())
    }

    /// Full note text, with a source list when citations are attached.
    pub fn render(&self) -> String {
        let mut output = format!("{}\n\n{}", self.title, self.content);
        if !self.citation_ids.is_empty() {
            let _ = write!(output, "\n\nSources: {}", self.citation_ids.join(", "));
        }
        output
    }
}

/// Append-only notebook store. Fire-and-forget: failures are the sink's concern.
pub trait NotebookSink {
    /// Append an entry.
    fn append(&self, entry: NotebookEntry);
}
