//! Line diff for the comparison drawer

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOp {
    Same,
    Removed,
    Added,
}

impl LineOp {
    pub fn marker(self) -> &'static str {
        match self {
            LineOp::Same => "  ",
            LineOp::Removed => "- ",
            LineOp::Added => "+ ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub op: LineOp,
    pub text: String,
}

impl DiffLine {
    fn new(op: LineOp, text: &str) -> Self {
        Self {
            op,
            text: text.to_string(),
        }
    }
}

/// Lines of `left` and `right` aligned on their longest common subsequence
pub fn diff_lines(left: &str, right: &str) -> Vec<DiffLine> {
    let a: Vec<&str> = left.lines().collect();
    let b: Vec<&str> = right.lines().collect();

    // common[i][j]: length of the common subsequence of a[i..] and b[j..]
    let mut common = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            common[i][j] = if a[i] == b[j] {
                common[i + 1][j + 1] + 1
            } else {
                common[i + 1][j].max(common[i][j + 1])
            };
        }
    }

    let mut out = Vec::with_capacity(a.len().max(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            out.push(DiffLine::new(LineOp::Same, a[i]));
            i += 1;
            j += 1;
        } else if common[i + 1][j] >= common[i][j + 1] {
            out.push(DiffLine::new(LineOp::Removed, a[i]));
            i += 1;
        } else {
            out.push(DiffLine::new(LineOp::Added, b[j]));
            j += 1;
        }
    }
    out.extend(a[i..].iter().map(|line| DiffLine::new(LineOp::Removed, line)));
    out.extend(b[j..].iter().map(|line| DiffLine::new(LineOp::Added, line)));
    out
}

/// (removed, added) line counts
pub fn change_counts(lines: &[DiffLine]) -> (usize, usize) {
    lines.iter().fold((0, 0), |(removed, added), line| match line.op {
        LineOp::Removed => (removed + 1, added),
        LineOp::Added => (removed, added + 1),
        LineOp::Same => (removed, added),
    })
}

/// Pretty-printed JSON, or the text unchanged when it is not JSON
pub fn pretty_json(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| text.to_string())
}

/// One tag per line, so markup diffs line by line
pub fn break_tags(html: &str) -> String {
    html.replace("><", ">\n<")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(lines: &[DiffLine]) -> Vec<(LineOp, &str)> {
        lines.iter().map(|l| (l.op, l.text.as_str())).collect()
    }

    #[test]
    fn test_changed_line_is_removed_then_added() {
        let lines = diff_lines("a\nb\nc", "a\nx\nc");
        assert_eq!(
            ops(&lines),
            vec![
                (LineOp::Same, "a"),
                (LineOp::Removed, "b"),
                (LineOp::Added, "x"),
                (LineOp::Same, "c"),
            ]
        );
        assert_eq!(change_counts(&lines), (1, 1));
    }

    #[test]
    fn test_tails_and_empty_sides() {
        assert_eq!(
            ops(&diff_lines("a", "a\nb\nc")),
            vec![(LineOp::Same, "a"), (LineOp::Added, "b"), (LineOp::Added, "c")]
        );
        assert_eq!(ops(&diff_lines("a\nb", "")), vec![(LineOp::Removed, "a"), (LineOp::Removed, "b")]);
        assert!(diff_lines("", "").is_empty());
    }

    #[test]
    fn test_pretty_json_keeps_non_json() {
        assert_eq!(pretty_json(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
        assert_eq!(pretty_json("not json"), "not json");
    }

    #[test]
    fn test_break_tags() {
        assert_eq!(break_tags("<p>x</p><img src=\"a\">"), "<p>x</p>\n<img src=\"a\">");
    }
}
