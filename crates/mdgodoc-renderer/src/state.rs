//! Output state for comment rendering.

/// Continuation marker written for every line break.
const CONTINUATION: &str = "\n//";

/// Most line breaks `cr` keeps pending: one ends the line, two leave a blank line.
const MAX_BREAKS: usize = 2;

/// Writer that lays text out as a `//` line comment.
///
/// Line breaks and separating spaces are recorded as pending and only written
/// when more text follows, so the comment never starts with a blank line and
/// never ends with one.
pub(crate) struct CommentWriter {
    buf: String,
    /// Byte length of the last emitted token; zero until something is emitted.
    last_len: usize,
    pending_breaks: usize,
    pending_space: bool,
    ends_with_space: bool,
    /// The opening `Package <name> is the ...` sentence still needs an ending.
    sentence_open: bool,
}

impl CommentWriter {
    /// Start a package comment: `// Package <name> is the `.
    pub(crate) fn new(package: &str) -> Self {
        let mut buf = String::with_capacity(4096);
        buf.push_str("// Package ");
        buf.push_str(package);
        buf.push_str(" is the ");
        Self {
            buf,
            last_len: 0,
            pending_breaks: 0,
            pending_space: false,
            ends_with_space: true,
            sentence_open: true,
        }
    }

    /// Emit a token, resolving pending breaks and spaces first.
    pub(crate) fn out(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for _ in 0..self.pending_breaks {
            self.buf.push_str(CONTINUATION);
        }
        if self.pending_space {
            self.buf.push(' ');
        }
        self.pending_breaks = 0;
        self.pending_space = false;

        self.buf.push_str(text);
        self.last_len = text.len();
        self.ends_with_space = text.ends_with(' ');
    }

    /// Request a line break. Runs collapse to a single blank line.
    pub(crate) fn cr(&mut self) {
        if self.last_len == 0 {
            return;
        }
        if self.pending_breaks < MAX_BREAKS {
            self.pending_breaks += 1;
        }
        self.pending_space = true;
    }

    /// Request a line break that is never collapsed (code block lines).
    pub(crate) fn line_break(&mut self) {
        if self.last_len == 0 {
            return;
        }
        self.pending_breaks += 1;
        self.pending_space = true;
    }

    /// Request a separating space before the next token on this line.
    pub(crate) fn space(&mut self) {
        if !self.ends_with_space {
            self.pending_space = true;
        }
    }

    /// Whether any token has been emitted after the opening words.
    pub(crate) fn has_written(&self) -> bool {
        self.last_len > 0
    }

    pub(crate) fn sentence_open(&self) -> bool {
        self.sentence_open
    }

    /// Mark the opening sentence as complete without a period.
    pub(crate) fn complete_sentence(&mut self) {
        self.sentence_open = false;
    }

    /// End the opening sentence with a period right after the last token.
    ///
    /// Pending breaks stay pending, so the period lands on the line that was
    /// just written. A token already ending in `.` is left alone. With no
    /// tokens yet the result is `is the .`.
    pub(crate) fn close_sentence(&mut self) {
        if !self.sentence_open {
            return;
        }
        self.sentence_open = false;
        if !self.buf.ends_with('.') {
            self.buf.push('.');
        }
        self.last_len = self.last_len.max(1);
        self.ends_with_space = false;
    }

    /// Close the comment and append the package clause.
    ///
    /// Pending breaks are dropped. An opening sentence that is still open
    /// gets its period here.
    pub(crate) fn finish(mut self, package: &str) -> Vec<u8> {
        self.close_sentence();
        self.buf.push_str("\npackage ");
        self.buf.push_str(package);
        self.buf.push('\n');
        self.buf.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Finish as if a heading had completed the opening sentence.
    fn finish(mut writer: CommentWriter) -> String {
        writer.complete_sentence();
        String::from_utf8(writer.finish("pkg")).unwrap()
    }

    fn finish_open(writer: CommentWriter) -> String {
        String::from_utf8(writer.finish("pkg")).unwrap()
    }

    #[test]
    fn test_opening_sentence() {
        let writer = CommentWriter::new("pkg");
        assert_eq!(finish(writer), "// Package pkg is the \npackage pkg\n");
    }

    #[test]
    fn test_open_sentence_gets_period_at_finish() {
        let writer = CommentWriter::new("pkg");
        assert_eq!(
            finish_open(writer),
            "// Package pkg is the .\npackage pkg\n"
        );
    }

    #[test]
    fn test_close_sentence_before_pending_breaks() {
        let mut writer = CommentWriter::new("pkg");
        writer.out("intro");
        writer.cr();
        writer.cr();
        writer.close_sentence();
        writer.out("more");
        assert_eq!(
            finish_open(writer),
            "// Package pkg is the intro.\n//\n// more\npackage pkg\n"
        );
    }

    #[test]
    fn test_close_sentence_only_once() {
        let mut writer = CommentWriter::new("pkg");
        writer.out("one");
        writer.close_sentence();
        writer.cr();
        writer.out("two");
        writer.close_sentence();
        assert_eq!(
            finish_open(writer),
            "// Package pkg is the one.\n// two\npackage pkg\n"
        );
    }

    #[test]
    fn test_close_sentence_keeps_existing_period() {
        let mut writer = CommentWriter::new("pkg");
        writer.out("Makes widgets.");
        writer.close_sentence();
        assert_eq!(
            finish_open(writer),
            "// Package pkg is the Makes widgets.\npackage pkg\n"
        );
    }

    #[test]
    fn test_close_sentence_with_nothing_written_allows_breaks() {
        let mut writer = CommentWriter::new("pkg");
        writer.close_sentence();
        writer.cr();
        writer.out("next");
        assert_eq!(
            finish_open(writer),
            "// Package pkg is the .\n// next\npackage pkg\n"
        );
    }

    #[test]
    fn test_completed_sentence_gets_no_period() {
        let mut writer = CommentWriter::new("pkg");
        writer.out("Title");
        writer.complete_sentence();
        writer.close_sentence();
        assert_eq!(
            finish_open(writer),
            "// Package pkg is the Title\npackage pkg\n"
        );
    }

    #[test]
    fn test_break_before_content_is_dropped() {
        let mut writer = CommentWriter::new("pkg");
        writer.cr();
        writer.cr();
        writer.out("thing");
        assert_eq!(finish(writer), "// Package pkg is the thing\npackage pkg\n");
    }

    #[test]
    fn test_break_adds_continuation_prefix() {
        let mut writer = CommentWriter::new("pkg");
        writer.out("one");
        writer.cr();
        writer.out("two");
        assert_eq!(
            finish(writer),
            "// Package pkg is the one\n// two\npackage pkg\n"
        );
    }

    #[test]
    fn test_break_runs_collapse_to_blank_line() {
        let mut writer = CommentWriter::new("pkg");
        writer.out("one");
        writer.cr();
        writer.cr();
        writer.cr();
        writer.cr();
        writer.out("two");
        assert_eq!(
            finish(writer),
            "// Package pkg is the one\n//\n// two\npackage pkg\n"
        );
    }

    #[test]
    fn test_line_break_is_not_collapsed() {
        let mut writer = CommentWriter::new("pkg");
        writer.out("one");
        writer.line_break();
        writer.line_break();
        writer.line_break();
        writer.out("two");
        assert_eq!(
            finish(writer),
            "// Package pkg is the one\n//\n//\n// two\npackage pkg\n"
        );
    }

    #[test]
    fn test_trailing_breaks_are_dropped() {
        let mut writer = CommentWriter::new("pkg");
        writer.out("end");
        writer.cr();
        writer.cr();
        assert_eq!(finish(writer), "// Package pkg is the end\npackage pkg\n");
    }

    #[test]
    fn test_space_is_written_only_before_more_text() {
        let mut writer = CommentWriter::new("pkg");
        writer.out("one");
        writer.space();
        writer.out("two");
        writer.space();
        assert_eq!(
            finish(writer),
            "// Package pkg is the one two\npackage pkg\n"
        );
    }

    #[test]
    fn test_space_after_space_is_skipped() {
        let mut writer = CommentWriter::new("pkg");
        writer.space();
        writer.out("one ");
        writer.space();
        writer.out("two");
        assert_eq!(
            finish(writer),
            "// Package pkg is the one two\npackage pkg\n"
        );
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let mut writer = CommentWriter::new("pkg");
        writer.out("");
        writer.cr();
        writer.out("one");
        assert_eq!(finish(writer), "// Package pkg is the one\npackage pkg\n");
    }
}
