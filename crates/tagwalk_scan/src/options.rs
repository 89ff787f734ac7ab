//! Scanner configuration.

/// Element whose content is opaque to the markup scanner.
///
/// After the opening tag of a special element, the scanner jumps straight to
/// its closing tag, so `<` inside a script or stylesheet never produces tag
/// events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialTag {
    /// Lowercase element name.
    pub name: String,
    /// Accepted `type` attribute values.
    ///
    /// `None` means the content is always skipped. `Some(types)` skips the
    /// content only when the element has no `type` attribute or its value is
    /// one of `types` (compared ASCII case-insensitively); any other type
    /// (e.g. `text/template`) is scanned as markup.
    pub types: Option<Vec<String>>,
}

impl SpecialTag {
    /// Special element whose content is always skipped.
    pub fn always(name: &str) -> Self {
        SpecialTag {
            name: name.to_string(),
            types: None,
        }
    }

    /// Special element whose content is skipped for the given `type` values.
    pub fn with_types(name: &str, types: &[&str]) -> Self {
        SpecialTag {
            name: name.to_string(),
            types: Some(types.iter().map(|t| (*t).to_string()).collect()),
        }
    }

    /// Check if a `type` attribute value (or its absence) selects opaque
    /// content for this element.
    pub fn skips_type(&self, value: Option<&str>) -> bool {
        match (&self.types, value) {
            (None, _) | (Some(_), None) => true,
            (Some(types), Some(value)) => {
                let value = value.trim();
                value.is_empty() || types.iter().any(|t| t.eq_ignore_ascii_case(value))
            }
        }
    }
}

/// `type` values that keep `<script>` content opaque.
const SCRIPT_TYPES: &[&str] = &[
    "text/javascript",
    "application/x-javascript",
    "javascript",
    "typescript",
    "ts",
    "coffee",
    "coffeescript",
    "module",
];

/// HTML void elements: never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Options for the markup scanner and tag balancing.
///
/// The default is HTML mode with opaque `script`/`style` content and the
/// standard void element list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// XML mode: tag names are case-sensitive and only `/>` self-closes.
    pub xml: bool,
    /// Elements whose content is skipped.
    pub special: Vec<SpecialTag>,
    /// Elements treated as self-closing in HTML mode.
    pub empty: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            xml: false,
            special: vec![
                SpecialTag::always("style"),
                SpecialTag::with_types("script", SCRIPT_TYPES),
            ],
            empty: VOID_ELEMENTS.iter().map(|name| (*name).to_string()).collect(),
        }
    }
}

impl ScanOptions {
    /// Default options in XML mode.
    pub fn xml() -> Self {
        ScanOptions {
            xml: true,
            ..ScanOptions::default()
        }
    }

    /// Look up the special-tag entry for `name`.
    pub fn special_tag(&self, name: &str) -> Option<&SpecialTag> {
        self.special
            .iter()
            .find(|tag| self.names_match(&tag.name, name))
    }

    /// Check if an element with `name` never has a closing tag.
    ///
    /// Always `false` in XML mode.
    pub fn is_empty_element(&self, name: &str) -> bool {
        !self.xml && self.empty.iter().any(|e| e.eq_ignore_ascii_case(name))
    }

    /// Compare tag names: exact in XML mode, ASCII case-insensitive in HTML.
    pub fn names_match(&self, a: &str, b: &str) -> bool {
        if self.xml {
            a == b
        } else {
            a.eq_ignore_ascii_case(b)
        }
    }
}
