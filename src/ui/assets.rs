//! Image assets referenced by the pages.
//!
//! The terminal cannot show the images, so each asset carries a glyph stand-in.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub path: &'static str,
    pub glyph: &'static str,
}

pub const LOGO: Asset = Asset {
    path: "/img/logo.svg",
    glyph: "◆",
};

pub const AVATAR: Asset = Asset {
    path: "/img/avatar.png",
    glyph: "◉",
};

pub const UPLOAD: Asset = Asset {
    path: "/img/upload.svg",
    glyph: "⇪",
};

pub const DOCUMENT: Asset = Asset {
    path: "/img/doc.svg",
    glyph: "▤",
};

pub const DELETE: Asset = Asset {
    path: "/img/delete.svg",
    glyph: "✕",
};

/// Wordmark drawn next to the logo glyph
pub const WORDMARK: &str = "LeanVision";

/// Empty frame drawn where a violation snapshot would sit
pub const PICTURE_PLACEHOLDER: &str = "▣";
