//! Comment text extraction and doc attachment over tree-sitter siblings

use tree_sitter::Node;

const COMMENT_KIND: &str = "comment";

/// A non-comment node with the comments that belong to it
#[derive(Debug, Clone)]
pub struct Attached<'t> {
    pub node: Node<'t>,
    /// Comment run ending on the line right above the node
    pub doc: String,
    /// Comment starting on the line where the node ends
    pub line_comment: String,
}

/// Pair every named, non-comment child of `parent` with its comments
///
/// A run of comments on consecutive lines is a node's doc when its last line
/// is directly above the node. A comment on the same line as the end of the
/// previous node trails that node and never joins the next doc.
pub fn attach_comments<'t>(parent: Node<'t>, source: &str) -> Vec<Attached<'t>> {
    let mut attached: Vec<Attached<'t>> = Vec::new();
    let mut run: Vec<Node<'t>> = Vec::new();
    let mut prev_end_row: Option<usize> = None;

    let mut cursor = parent.walk();
    for child in parent.named_children(&mut cursor) {
        if child.kind() == COMMENT_KIND {
            let row = child.start_position().row;

            if run.is_empty() && prev_end_row == Some(row) {
                if let Some(last) = attached.last_mut() {
                    append_line_comment(&mut last.line_comment, node_text(&child, source));
                }
                continue;
            }

            match run.last() {
                Some(last) if last.end_position().row + 1 == row => run.push(child),
                _ => run = vec![child],
            }
            continue;
        }

        let doc = match run.last() {
            Some(last) if last.end_position().row + 1 == child.start_position().row => {
                comment_group_text(run.iter().map(|c| node_text(c, source)))
            }
            _ => String::new(),
        };
        run.clear();

        prev_end_row = Some(child.end_position().row);
        attached.push(Attached {
            node: child,
            doc,
            line_comment: String::new(),
        });
    }

    attached
}

/// Join the text of adjacent comments
///
/// Markers and one following space are removed, compiler directives are
/// dropped, leading and trailing blank lines go away and inner blank runs
/// collapse to one. Indentation inside the text is kept.
pub fn comment_group_text<'a>(comments: impl IntoIterator<Item = &'a str>) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for raw in comments {
        if let Some(rest) = raw.strip_prefix("//") {
            if is_directive(rest) {
                continue;
            }
            lines.push(rest.strip_prefix(' ').unwrap_or(rest).trim_end());
        } else if let Some(rest) = raw.strip_prefix("/*") {
            let body = rest.strip_suffix("*/").unwrap_or(rest);
            lines.extend(body.lines().map(str::trim_end));
        }
    }

    let mut text = String::new();
    let mut pending_blank = false;
    for line in lines {
        if line.is_empty() {
            pending_blank = !text.is_empty();
            continue;
        }
        if pending_blank {
            text.push('\n');
            pending_blank = false;
        }
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(line);
    }

    text
}

fn is_directive(after_slashes: &str) -> bool {
    after_slashes.starts_with("go:") || after_slashes.starts_with("line ")
}

fn append_line_comment(target: &mut String, raw: &str) {
    let text = comment_group_text([raw]);
    if text.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(&text);
}

/// Source text covered by a node
pub fn node_text<'a>(node: &Node<'_>, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}
