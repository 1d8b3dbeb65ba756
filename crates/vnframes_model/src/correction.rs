//! Corrections for known inconsistencies in the resource.
//!
//! Primary strings are corrected before tokenizing, and WordNet sense ids
//! before they are written out. Entries are matched on the exact string.

/// One verified fix to a frame's primary string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimaryCorrection {
    /// The primary string as it appears in the resource.
    pub primary: &'static str,
    /// Restricts the fix to one class. Never fires when the class is unknown.
    pub class_id: Option<&'static str>,
    /// The replacement primary string.
    pub corrected: &'static str,
}

/// The correction table, consulted in order.
pub const PRIMARY_CORRECTIONS: &[PrimaryCorrection] = &[
    PrimaryCorrection {
        primary: "NP v",
        class_id: None,
        corrected: "NP V",
    },
    PrimaryCorrection {
        primary: "NP V NP-dative NP",
        class_id: None,
        corrected: "NP V NP-Dative NP",
    },
    // build-26.1
    PrimaryCorrection {
        primary: "NP V NP P.asset",
        class_id: None,
        corrected: "NP V NP PP.asset",
    },
    // swarm-47.5-1-1: the syntax has a noun phrase in first position
    PrimaryCorrection {
        primary: "PP.location V PP.theme",
        class_id: None,
        corrected: "NP.location V PP.theme",
    },
    // search-35.2
    PrimaryCorrection {
        primary: "NP V PP.theme NP.location",
        class_id: None,
        corrected: "NP V PP.theme PP.location",
    },
    // get-13.5.1
    PrimaryCorrection {
        primary: "NP V NP PP.source NP.asset",
        class_id: None,
        corrected: "NP V NP PP.source PP.asset",
    },
    PrimaryCorrection {
        primary: "NP.location V NP",
        class_id: Some("entity_specific_modes_being-47.2"),
        corrected: "PP.location V NP",
    },
    PrimaryCorrection {
        primary: "NP.location V NP.theme",
        class_id: Some("sound_existence-47.4"),
        corrected: "NP.location V PP.theme",
    },
];

/// Applies the correction table to a primary string.
#[must_use]
pub fn correct_primary<'a>(primary: &'a str, class_id: Option<&str>) -> &'a str {
    PRIMARY_CORRECTIONS
        .iter()
        .find(|c| {
            c.primary == primary
                && c.class_id
                    .is_none_or(|required| class_id.is_some_and(|id| id == required))
        })
        .map_or(primary, |c| c.corrected)
}

/// Corrects a WordNet sense id.
///
/// Uncertain senses are marked with a leading `?`, which is dropped; one
/// sense id that does not exist in WordNet is replaced.
#[must_use]
pub fn correct_wn_sense(sense: &str) -> &str {
    if let Some(rest) = sense.strip_prefix('?') {
        return rest;
    }
    if sense == "moult%2:39:00" {
        return "molt%2:29:00";
    }
    sense
}
