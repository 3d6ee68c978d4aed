//! Processing options

/// How a document's fragments are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Minify every fragment
    #[default]
    Minify,
    /// Return fragments untouched, for passes that must see the source text
    PassThrough,
}

/// Options for a single document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Processing mode
    pub mode: Mode,
}

impl Options {
    /// Options for design-time passes, where nothing is minified
    pub fn pass_through() -> Self {
        Self {
            mode: Mode::PassThrough,
        }
    }

    /// True when fragments are returned untouched
    pub fn is_pass_through(&self) -> bool {
        self.mode == Mode::PassThrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_minify() {
        let options = Options::default();
        assert_eq!(options.mode, Mode::Minify);
        assert!(!options.is_pass_through());
    }

    #[test]
    fn pass_through() {
        assert!(Options::pass_through().is_pass_through());
    }
}
