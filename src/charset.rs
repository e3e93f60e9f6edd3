//! The `Charset` module holds the box-drawing glyph sets the printer draws
//! frames and rules with. Two frame styles exist, a standard one and a
//! heavier "outer" one, each available as Unicode box-drawing glyphs or as
//! a plain ASCII rendition for terminals that cannot render the former.

use crate::error::PrintError::InvalidCharset;
use crate::error::PrintResult;
use std::str::FromStr;
use strum_macros::EnumString;

/// The glyphs used to draw one frame style: four corners plus the
/// horizontal and vertical edge pieces.
pub struct FrameGlyphs {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

static UNICODE_FRAME: FrameGlyphs = FrameGlyphs {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    horizontal: "─",
    vertical: "│",
};

static UNICODE_OUTER_FRAME: FrameGlyphs = FrameGlyphs {
    top_left: "╔",
    top_right: "╗",
    bottom_left: "╚",
    bottom_right: "╝",
    horizontal: "═",
    vertical: "║",
};

static ASCII_FRAME: FrameGlyphs = FrameGlyphs {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal: "-",
    vertical: "|",
};

static ASCII_OUTER_FRAME: FrameGlyphs = FrameGlyphs {
    top_left: "#",
    top_right: "#",
    bottom_left: "#",
    bottom_right: "#",
    horizontal: "=",
    vertical: "#",
};

#[derive(EnumString, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Charset {
    Unicode,
    Ascii,
}
impl Charset {
    /// Picks the charset for the host platform. Windows consoles are not
    /// reliable with box-drawing glyphs, so they get the ASCII set.
    pub fn detect() -> Charset {
        if cfg!(windows) {
            Charset::Ascii
        } else {
            Charset::Unicode
        }
    }

    /// Gets a `Charset` for the given `charset_name`.
    pub fn get(charset_name: &str) -> PrintResult<Charset> {
        if let Ok(charset) = Charset::from_str(&charset_name.to_lowercase()) {
            Ok(charset)
        } else {
            Err(InvalidCharset(charset_name.to_string()))
        }
    }

    pub fn frame(&self) -> &'static FrameGlyphs {
        match self {
            Charset::Unicode => &UNICODE_FRAME,
            Charset::Ascii => &ASCII_FRAME,
        }
    }

    pub fn outer_frame(&self) -> &'static FrameGlyphs {
        match self {
            Charset::Unicode => &UNICODE_OUTER_FRAME,
            Charset::Ascii => &ASCII_OUTER_FRAME,
        }
    }

    /// The glyph used for full-width horizontal rules.
    pub fn thin_rule(&self) -> &'static str {
        match self {
            Charset::Unicode => "─",
            Charset::Ascii => "-",
        }
    }
}

//
// TESTS
//

#[cfg(test)]
mod tests {
    use crate::charset::Charset;

    #[test]
    fn it_should_get_unicode() {
        if Charset::get("unicode").is_err() {
            panic!("unicode charset broken");
        }
    }

    #[test]
    fn it_should_get_ascii() {
        if Charset::get("ascii").is_err() {
            panic!("ascii charset broken");
        }
    }

    #[test]
    fn it_should_get_charsets_case_insensitively() {
        assert_eq!(Charset::get("ASCII").unwrap(), Charset::Ascii);
    }

    #[test]
    fn it_should_reject_an_unknown_charset() {
        assert!(Charset::get("ebcdic").is_err());
    }

    #[test]
    fn it_keeps_the_outer_glyphs_visually_distinct() {
        for charset in [Charset::Unicode, Charset::Ascii] {
            let inner = charset.frame();
            let outer = charset.outer_frame();
            assert_ne!(inner.horizontal, outer.horizontal);
            assert_ne!(inner.vertical, outer.vertical);
        }
    }
}
