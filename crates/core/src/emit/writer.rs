const INDENT: &str = "    ";

/// Line-oriented text builder with four-space indentation
#[derive(Debug, Default)]
pub struct CodeWriter {
    buffer: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth; empty lines carry no indentation
    pub fn line(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    pub fn lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in lines {
            self.line(text.as_ref());
        }
        self
    }

    /// `{` at the current depth, then one level deeper
    pub fn open_block(&mut self) -> &mut Self {
        self.line("{");
        self.depth += 1;
        self
    }

    pub fn close_block(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line("}")
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
