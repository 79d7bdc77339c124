/// One image in the carousel's display sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    source: String,
    alt_text: String,
}

impl Slide {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }

    /// URI of the image, relative to the host's asset directory.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

/// Built-in slide list shown on the documentation home page.
pub const DEFAULT_SLIDES: [(&str, &str); 2] = [
    ("images/theme-light.png", "Plugin panel rendered with the light color theme"),
    ("images/theme-dark.png", "Plugin panel rendered with the dark color theme"),
];

pub fn default_slides() -> Vec<Slide> {
    DEFAULT_SLIDES
        .iter()
        .map(|(source, alt)| Slide::new(*source, *alt))
        .collect()
}
