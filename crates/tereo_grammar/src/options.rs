//! Grammar engine configuration.

/// How Ko sentences render a plural (`ngā`) noun.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KoPlural {
    /// Keep the singular gloss; 3-card translations get a ` (plural)` note.
    #[default]
    Annotate,
    /// Pluralize the gloss; 4-card translations say `These are`/`Those are`.
    Pluralize,
}

/// Options threaded through validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrammarOptions {
    /// Ko plural rendering.
    pub ko_plural: KoPlural,
}

impl GrammarOptions {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets Ko plural rendering.
    #[must_use]
    pub fn with_ko_plural(mut self, ko_plural: KoPlural) -> Self {
        self.ko_plural = ko_plural;
        self
    }
}
