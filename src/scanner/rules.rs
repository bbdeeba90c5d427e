//! The fixed marker table.
//!
//! Checks run in table order and are non-exclusive: every rule is tried
//! against every line, so a single line can trigger several emissions.
//! Block tokens are plain in-place swaps (text around them survives);
//! payload tokens consume the rest of the line from the token onward.

/// What a matched marker emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerAction {
    /// Replace every occurrence of the token with a fixed HTML fragment.
    Swap(&'static str),

    /// `%-%text`: bulleted list item wrapping the rest of the line.
    ListItem,

    /// `%*%text`: named-anchor heading list item.
    TitleItem,

    /// `%<-%name`: bare named anchor.
    Anchor,

    /// `#!rgb::text`: colored text; the `::` separator is required.
    InlineColor,

    /// `#$text`: bold text.
    InlineBold,

    /// `%->%target:label`: anchor list item; the `:` separator is required.
    CrossReference,
}

/// A single entry of the marker table.
#[derive(Debug, Clone, Copy)]
pub struct MarkerRule {
    /// The literal token scanned for.
    pub token: &'static str,

    /// Emission action on match.
    pub action: MarkerAction,
}

/// The complete marker grammar, in match order.
///
/// Open/close pairs are not balance-checked here; unmatched markers yield
/// unmatched HTML tags. See [`super::check_balance`] for the opt-in
/// structural pass.
pub const MARKER_TABLE: &[MarkerRule] = &[
    MarkerRule {
        token: "++<",
        action: MarkerAction::Swap("<div class=\"p_wrapper\"><p>"),
    },
    MarkerRule {
        token: ">++",
        action: MarkerAction::Swap("</p></div><br>"),
    },
    MarkerRule {
        token: "==<",
        action: MarkerAction::Swap("<div class=\"inside\"><div class=\"sp_bullets\">"),
    },
    MarkerRule {
        token: ">==",
        action: MarkerAction::Swap("</div></div><br>"),
    },
    MarkerRule {
        token: "%-%",
        action: MarkerAction::ListItem,
    },
    MarkerRule {
        token: "%%<",
        action: MarkerAction::Swap("<pre><br>"),
    },
    MarkerRule {
        token: ">%%",
        action: MarkerAction::Swap("</pre><br>"),
    },
    MarkerRule {
        token: "%*%",
        action: MarkerAction::TitleItem,
    },
    MarkerRule {
        token: "%<-%",
        action: MarkerAction::Anchor,
    },
    MarkerRule {
        token: "#!",
        action: MarkerAction::InlineColor,
    },
    MarkerRule {
        token: "#$",
        action: MarkerAction::InlineBold,
    },
    MarkerRule {
        token: "%->%",
        action: MarkerAction::CrossReference,
    },
];
