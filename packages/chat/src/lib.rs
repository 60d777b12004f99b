#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Keyword-matched canned safety responses.
//!
//! The safety assistant is a pure function: a priority-ordered list of
//! `(keywords, response)` pairs matched case-insensitively as substrings.
//! Responses use `<br>` line breaks because the chat widget injects them
//! as HTML. No state, no ML.

/// One canned reply: the substrings that trigger it and the fixed text.
#[derive(Debug, Clone, Copy)]
pub struct CannedReply {
    /// Lowercase substrings that trigger this reply.
    pub keywords: &'static [&'static str],
    /// The reply body, with `<br>` line breaks.
    pub response: &'static str,
}

/// Replies in priority order; the first entry with a matching keyword
/// wins.
pub const REPLIES: &[CannedReply] = &[
    CannedReply {
        keywords: &["felony"],
        response: "Felonies are the most serious category of crime, shown in red on the map.<br>\
            Stay alert in brightly shaded areas, keep valuables out of sight, and stick to \
            well-lit streets after dark.",
    },
    CannedReply {
        keywords: &["misdemeanor"],
        response: "Misdemeanors are mid-level offenses, shown in orange on the map.<br>\
            They include things like petty theft and harassment.<br>\
            Keep your phone and bag secure in crowded areas.",
    },
    CannedReply {
        keywords: &["violation"],
        response: "Violations are the least serious reported offenses, shown in yellow.<br>\
            They rarely pose a personal safety risk, but dense clusters can signal a busy area.",
    },
    CannedReply {
        keywords: &["safety", "safe"],
        response: "A few general tips:<br>\
            1. Prefer routes that avoid the brightest areas of the heat map.<br>\
            2. Stay on well-lit, populated streets at night.<br>\
            3. Keep valuables out of sight and stay aware of your surroundings.",
    },
    CannedReply {
        keywords: &["route", "directions"],
        response: "Enter your start and destination as latitude,longitude pairs and I'll show \
            alternative driving routes.<br>\
            Compare them against the heat map and prefer the ones that skirt the hot spots.",
    },
];

/// Reply used when no keyword matches.
pub const DEFAULT_RESPONSE: &str =
    "I can explain felonies, misdemeanors, and violations, share safety tips, or help you plan \
     a route.<br>What would you like to know?";

/// Picks the canned reply for a message.
///
/// Matching is case-insensitive; the first entry of [`REPLIES`] with any
/// keyword present in the message wins.
#[must_use]
pub fn respond(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    for reply in REPLIES {
        if reply.keywords.iter().any(|k| lowered.contains(k)) {
            return reply.response;
        }
    }
    DEFAULT_RESPONSE
}
