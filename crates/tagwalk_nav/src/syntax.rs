//! Document syntax classification.
//!
//! Decides which navigator a document goes to and whether markup is
//! scanned in XML mode.

use std::fmt;
use std::str::FromStr;

use tagwalk_scan::ScanOptions;

/// A document syntax the navigators understand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Syntax {
    // Markup
    Html,
    Xml,
    Xsl,
    Jsx,
    Haml,
    Jade,
    Pug,
    Slim,
    // Stylesheet
    Css,
    Scss,
    Sass,
    Less,
    Sss,
    Stylus,
    Postcss,
}

impl Syntax {
    pub const ALL: [Syntax; 15] = [
        Syntax::Html,
        Syntax::Xml,
        Syntax::Xsl,
        Syntax::Jsx,
        Syntax::Haml,
        Syntax::Jade,
        Syntax::Pug,
        Syntax::Slim,
        Syntax::Css,
        Syntax::Scss,
        Syntax::Sass,
        Syntax::Less,
        Syntax::Sss,
        Syntax::Stylus,
        Syntax::Postcss,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Syntax::Html => "html",
            Syntax::Xml => "xml",
            Syntax::Xsl => "xsl",
            Syntax::Jsx => "jsx",
            Syntax::Haml => "haml",
            Syntax::Jade => "jade",
            Syntax::Pug => "pug",
            Syntax::Slim => "slim",
            Syntax::Css => "css",
            Syntax::Scss => "scss",
            Syntax::Sass => "sass",
            Syntax::Less => "less",
            Syntax::Sss => "sss",
            Syntax::Stylus => "stylus",
            Syntax::Postcss => "postcss",
        }
    }

    /// Syntax for a file extension (without the dot), compared
    /// case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Syntax> {
        let syntax = match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" | "xhtml" | "vue" | "svelte" => Syntax::Html,
            "xml" | "svg" | "xaml" | "plist" => Syntax::Xml,
            "xsl" | "xslt" => Syntax::Xsl,
            "jsx" | "tsx" => Syntax::Jsx,
            "haml" => Syntax::Haml,
            "jade" => Syntax::Jade,
            "pug" => Syntax::Pug,
            "slim" => Syntax::Slim,
            "css" => Syntax::Css,
            "scss" => Syntax::Scss,
            "sass" => Syntax::Sass,
            "less" => Syntax::Less,
            "sss" => Syntax::Sss,
            "styl" | "stylus" => Syntax::Stylus,
            "pcss" | "postcss" => Syntax::Postcss,
            _ => return None,
        };
        Some(syntax)
    }

    /// Check if the syntax is a stylesheet language.
    pub fn is_stylesheet(self) -> bool {
        matches!(
            self,
            Syntax::Css
                | Syntax::Scss
                | Syntax::Sass
                | Syntax::Less
                | Syntax::Sss
                | Syntax::Stylus
                | Syntax::Postcss
        )
    }

    /// Check if the syntax is an XML dialect.
    pub fn is_xml(self) -> bool {
        matches!(self, Syntax::Xml | Syntax::Xsl | Syntax::Jsx)
    }

    /// Check if the syntax is HTML or an XML dialect, i.e. tag-based.
    pub fn is_html(self) -> bool {
        self == Syntax::Html || self.is_xml()
    }

    /// Check if the stylesheet navigator applies: plain CSS and the
    /// brace-based supersets SCSS and LESS.
    pub fn is_css(self) -> bool {
        matches!(self, Syntax::Css | Syntax::Scss | Syntax::Less)
    }

    /// Markup scanner options for this syntax.
    pub fn scan_options(self) -> ScanOptions {
        if self.is_xml() {
            ScanOptions::xml()
        } else {
            ScanOptions::default()
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a [`Syntax`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSyntax(pub String);

impl fmt::Display for UnknownSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown syntax `{}`", self.0)
    }
}

impl std::error::Error for UnknownSyntax {}

impl FromStr for Syntax {
    type Err = UnknownSyntax;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Syntax::ALL
            .into_iter()
            .find(|syntax| syntax.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSyntax(s.to_string()))
    }
}
