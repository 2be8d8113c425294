//! Builder for indented text.

/// Fluent API for building text with proper indentation.
///
/// # Example
///
/// ```
/// use kiln_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::yaml();
/// builder
///     .push_line("on:")
///     .push_indent()
///     .push_line("pull_request: {}")
///     .push_dedent();
///
/// assert_eq!(builder.build(), "on:\n  pull_request: {}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    /// Spaces per level; YAML forbids tabs.
    width: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Indent each level by `width` spaces.
    pub fn with_width(width: usize) -> Self {
        Self {
            depth: 0,
            width,
            buffer: String::new(),
        }
    }

    /// Two-space indentation for YAML.
    pub fn yaml() -> Self {
        Self::with_width(2)
    }

    /// No indentation, for line-per-rule files such as `.gitignore`.
    pub fn flat() -> Self {
        Self::with_width(0)
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of `lines` at the current indentation.
    pub fn push_lines<S: AsRef<str>>(&mut self, lines: impl IntoIterator<Item = S>) -> &mut Self {
        for line in lines {
            self.push_line(line.as_ref());
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `# ` comment line.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("# ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write `header`, then the lines added by `body` one level deeper.
    pub fn push_block(&mut self, header: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.push_line(header);
        self.push_indent();
        body(self);
        self.push_dedent();
        self
    }

    /// Build the final string.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer contents.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        let spaces = self.depth * self.width;
        self.buffer.extend(std::iter::repeat_n(' ', spaces));
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::yaml()
    }
}
