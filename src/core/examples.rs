//! Example code mining from free-text doc comments
//!
//! A block starts at a line beginning with `Example:` or `Usage:`, or at a
//! code fence. Only indented lines (one tab or four spaces) inside a block
//! become code; the block ends at a bare closing fence or at the first blank
//! line once something has been collected. A marker line or a tagged fence
//! (```` ```go ````) inside a block starts it over.

const EXAMPLE_MARKERS: [&str; 2] = ["Example:", "Usage:"];
const FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MinerState {
    Outside,
    InExample,
}

/// Lazy scanner yielding one code block per detected example
///
/// Never fails: unterminated or malformed markup only means fewer blocks.
#[derive(Debug, Clone)]
pub struct ExampleMiner<'a> {
    lines: std::str::Lines<'a>,
    state: MinerState,
    buffer: String,
    finished: bool,
}

impl<'a> ExampleMiner<'a> {
    pub fn new(doc: &'a str) -> Self {
        Self {
            lines: doc.lines(),
            state: MinerState::Outside,
            buffer: String::new(),
            finished: false,
        }
    }

    fn take_buffer(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buffer))
        }
    }
}

impl Iterator for ExampleMiner<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        while let Some(line) = self.lines.next() {
            let trimmed = line.trim();

            if opens_block(trimmed) {
                self.state = MinerState::InExample;
                self.buffer.clear();
                continue;
            }

            match self.state {
                MinerState::Outside => {
                    if trimmed.contains(FENCE) {
                        self.state = MinerState::InExample;
                        self.buffer.clear();
                    }
                }
                MinerState::InExample => {
                    if trimmed.contains(FENCE) || (trimmed.is_empty() && !self.buffer.is_empty()) {
                        self.state = MinerState::Outside;
                        if let Some(block) = self.take_buffer() {
                            return Some(block);
                        }
                        continue;
                    }

                    if let Some(code) = strip_indent(line) {
                        self.buffer.push_str(code);
                        self.buffer.push('\n');
                    }
                }
            }
        }

        self.finished = true;
        match self.state {
            MinerState::InExample => self.take_buffer(),
            MinerState::Outside => None,
        }
    }
}

impl std::iter::FusedIterator for ExampleMiner<'_> {}

/// Start a fresh scan over a doc comment
pub fn mine_examples(doc: &str) -> ExampleMiner<'_> {
    ExampleMiner::new(doc)
}

/// A marker line or a fence carrying a language tag
fn opens_block(trimmed: &str) -> bool {
    EXAMPLE_MARKERS.iter().any(|marker| trimmed.starts_with(marker)) || is_tagged_fence(trimmed)
}

fn is_tagged_fence(trimmed: &str) -> bool {
    trimmed
        .find(FENCE)
        .map(|at| trimmed[at + FENCE.len()..].trim_start_matches('`').trim())
        .is_some_and(|tag| !tag.is_empty())
}

fn strip_indent(line: &str) -> Option<&str> {
    line.strip_prefix('\t').or_else(|| line.strip_prefix("    "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(doc: &str) -> Vec<String> {
        mine_examples(doc).collect()
    }

    #[test]
    fn test_usage_block_ends_at_blank_line() {
        let blocks = collect("Usage:\n    x.Do()\n    y.Do()\n\nTrailing");
        assert_eq!(blocks, vec!["x.Do()\ny.Do()\n".to_string()]);
    }

    #[test]
    fn test_no_marker_no_examples() {
        assert!(collect("Do does things.\n    indented but unmarked\n").is_empty());
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_unterminated_block_is_emitted() {
        let blocks = collect("Example:\n\tclient := New()\n\tclient.Run()");
        assert_eq!(blocks, vec!["client := New()\nclient.Run()\n".to_string()]);
    }

    #[test]
    fn test_marker_without_code_yields_nothing() {
        assert!(collect("Example:\nnothing indented here").is_empty());
        assert!(collect("Usage:\n\n\n").is_empty());
    }

    #[test]
    fn test_fenced_block() {
        let doc = "Parse reads input.\n```go\n    v := Parse(r)\n\tfmt.Println(v)\n```\nMore text.";
        assert_eq!(collect(doc), vec!["v := Parse(r)\nfmt.Println(v)\n".to_string()]);
    }

    #[test]
    fn test_marker_then_tagged_fence() {
        assert_eq!(collect("Usage:\n```go\n    x.Do()\n```\n"), vec!["x.Do()\n".to_string()]);
        assert_eq!(collect("Example:\n```go\n\ty.Do()\n"), vec!["y.Do()\n".to_string()]);
    }

    #[test]
    fn test_fence_roles() {
        assert!(is_tagged_fence("```go"));
        assert!(is_tagged_fence("``` go"));
        assert!(!is_tagged_fence("```"));
        assert!(!is_tagged_fence("plain text"));
    }

    #[test]
    fn test_marker_inside_block_starts_over() {
        let doc = "Usage:\n    dropped()\nExample:\n    kept()\n";
        assert_eq!(collect(doc), vec!["kept()\n".to_string()]);
    }

    #[test]
    fn test_bare_fences_pair_up() {
        let doc = "```\n    one()\n```\ntext\n```\n    two()\n```\n";
        assert_eq!(collect(doc), vec!["one()\n".to_string(), "two()\n".to_string()]);
    }

    #[test]
    fn test_unindented_lines_are_ignored_inside_block() {
        let doc = "Example:\n    a()\nprose in between\n    b()\n";
        assert_eq!(collect(doc), vec!["a()\nb()\n".to_string()]);
    }

    #[test]
    fn test_only_one_indent_layer_is_removed() {
        let doc = "Example:\n    if ok {\n        run()\n    }\n";
        assert_eq!(collect(doc), vec!["if ok {\n    run()\n}\n".to_string()]);
    }

    #[test]
    fn test_multiple_blocks_in_order() {
        let doc = "Example:\n    first()\n\nText.\nUsage:\n    second()\n";
        assert_eq!(collect(doc), vec!["first()\n".to_string(), "second()\n".to_string()]);
    }

    #[test]
    fn test_restartable() {
        let doc = "Usage:\n    run()\n";
        let first: Vec<_> = mine_examples(doc).collect();
        let second: Vec<_> = mine_examples(doc).collect();
        assert_eq!(first, second);

        let mut miner = mine_examples(doc);
        assert!(miner.next().is_some());
        assert!(miner.next().is_none());
        assert!(miner.next().is_none());
    }
}
