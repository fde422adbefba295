//! Flat scan of element start-tags.
//!
//! The document is parsed with `roxmltree`, then walked in document order.
//! Only element starts are yielded; end tags are implicit in the tree, and
//! comments and text are skipped. Any other node kind ends the scan with an
//! error. Nesting is not reported: consumers see a flat, ordered stream.

use roxmltree::{Descendants, Document, ExpandedName, Node, NodeType, TextPos};

use super::utils::{get_attribute, get_namespace, get_tag_name, non_empty_attribute};
use crate::error::{GeneratorError, Result};
use crate::types::SourcePosition;

/// A parsed markup document ready to be scanned.
pub struct MarkupDocument<'input> {
    doc: Document<'input>,
    file: String,
}

impl<'input> MarkupDocument<'input> {
    /// Parse document text.
    ///
    /// # Arguments
    /// * `text` - Raw markup
    /// * `file` - Source file identifier used in positions
    ///
    /// # Errors
    /// Returns `MarkupParse` when the text is not well-formed. The position
    /// is the one reported by the XML parser, except for input that ends
    /// early: there it is the last unterminated `<`, else the end of input.
    pub fn parse(text: &'input str, file: impl Into<String>) -> Result<Self> {
        let file = file.into();
        let doc = Document::parse(text).map_err(|err| {
            let pos = if matches!(
                err,
                roxmltree::Error::UnexpectedEndOfStream | roxmltree::Error::UnclosedRootNode
            ) {
                end_of_input_pos(text)
            } else {
                err.pos()
            };
            GeneratorError::MarkupParse {
                position: position_from(&file, pos),
                message: err.to_string(),
            }
        })?;

        Ok(Self { doc, file })
    }

    /// Source file identifier.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Start a scan over the element start-tags.
    ///
    /// Each call returns a fresh reader; a reader itself cannot be restarted.
    #[must_use]
    pub fn elements(&self) -> MarkupReader<'_, 'input> {
        MarkupReader {
            doc: &self.doc,
            nodes: self.doc.root().descendants(),
            file: &self.file,
            finished: false,
        }
    }
}

/// Lazy iterator over element start events.
///
/// Yields `Err` at most once, after which it is exhausted.
pub struct MarkupReader<'a, 'input> {
    doc: &'a Document<'input>,
    nodes: Descendants<'a, 'input>,
    file: &'a str,
    finished: bool,
}

impl<'a, 'input> Iterator for MarkupReader<'a, 'input> {
    type Item = Result<ElementStart<'a, 'input>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for node in self.nodes.by_ref() {
            let position = || position_from(self.file, self.doc.text_pos_at(node.range().start));
            match node.node_type() {
                NodeType::Element => {
                    return Some(Ok(ElementStart {
                        node,
                        position: position(),
                    }));
                }
                NodeType::Root | NodeType::Comment | NodeType::Text => {}
                NodeType::PI => {
                    let position = position();
                    self.finished = true;
                    return Some(Err(GeneratorError::UnexpectedNode {
                        kind: "processing instruction",
                        position,
                    }));
                }
            }
        }

        self.finished = true;
        None
    }
}

/// One element start-tag with its attributes and position.
#[derive(Debug, Clone)]
pub struct ElementStart<'a, 'input> {
    node: Node<'a, 'input>,
    pub position: SourcePosition,
}

impl<'a, 'input> ElementStart<'a, 'input> {
    /// Local element name, without prefix.
    #[must_use]
    pub fn local_name(&self) -> &'a str {
        get_tag_name(self.node)
    }

    /// Resolved namespace URI, or `""`.
    #[must_use]
    pub fn namespace(&self) -> &'a str {
        get_namespace(self.node)
    }

    /// Raw attribute value.
    pub fn attribute<'n, 'm>(&self, name: impl Into<ExpandedName<'n, 'm>>) -> Option<&'a str> {
        get_attribute(self.node, name)
    }

    /// Attribute value, with empty or blank values treated as absent.
    pub fn name_attribute<'n, 'm>(
        &self,
        name: impl Into<ExpandedName<'n, 'm>>,
    ) -> Option<&'a str> {
        non_empty_attribute(self.node, name)
    }

    /// The underlying tree node.
    #[must_use]
    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }
}

/// The parser reports 1:1 for truncated input. Point at the last tag that
/// was never closed with `>`, or just past the last character.
fn end_of_input_pos(text: &str) -> TextPos {
    let offset = match text.rfind('<') {
        Some(start) if !text[start..].contains('>') => start,
        _ => text.len(),
    };

    let before = &text[..offset];
    let row = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    TextPos::new(
        u32::try_from(row).unwrap_or(u32::MAX),
        u32::try_from(col).unwrap_or(u32::MAX),
    )
}

fn position_from(file: &str, pos: TextPos) -> SourcePosition {
    SourcePosition::new(file, pos.row, pos.col)
}
