//! Configuration types for Go emission.

/// How nested lines are indented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indent {
    /// One tab per level, as `gofmt` does
    #[default]
    Tab,
    /// A fixed number of spaces per level
    Spaces(usize),
}

/// Text layout of the rendered source.
///
/// Defaults reproduce `gofmt` (`go/printer` with `UseSpaces | TabIndent`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Indentation of struct bodies
    pub indent: Indent,
    /// Minimum gap between aligned columns
    pub padding: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indent: Indent::Tab,
            padding: 1,
        }
    }
}

/// Configuration for Go emission.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Non-required string fields become `*string` instead of `string`
    pub(crate) string_pointers_when_key_missing: bool,
    /// Timestamps are declared as `string` instead of `time.Time`
    pub(crate) time_as_str: bool,
    /// Output layout
    pub(crate) layout: Layout,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether missing string keys produce pointer fields.
    pub fn string_pointers_when_key_missing(mut self, value: bool) -> Self {
        self.string_pointers_when_key_missing = value;
        self
    }

    /// Set whether timestamps are declared as plain strings.
    pub fn time_as_str(mut self, value: bool) -> Self {
        self.time_as_str = value;
        self
    }

    /// Set the output layout.
    pub fn layout(mut self, value: Layout) -> Self {
        self.layout = value;
        self
    }

    /// Set the indentation, keeping the rest of the layout.
    pub fn indent(mut self, value: Indent) -> Self {
        self.layout.indent = value;
        self
    }
}
