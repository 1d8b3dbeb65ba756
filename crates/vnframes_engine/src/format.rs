//! Named frame formats.

use std::fmt;
use std::str::FromStr;

use vnframes_foundation::Error;

/// A textual projection of a frame.
///
/// Names have two parts: `gt` (ground truth), `cx` (collapsed), `ex`
/// (expanded by preposition) or `et` (expanded, theta-marked), followed by
/// `ns` (no semantics), `ss` (selectional restrictions), `tr` (theta roles),
/// `st` (both) or `cx` (collapsed after expansion).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FrameFormat {
    /// The primary tokens as written.
    GtNs,
    /// Placeholders annotated with selectional restrictions.
    GtSs,
    /// Placeholders qualified with their thematic role.
    GtTr,
    /// Qualifiers stripped and idioms collapsed.
    CxNs,
    /// [`FrameFormat::GtSs`] with qualifiers stripped from each stem.
    CxSs,
    /// [`FrameFormat::CxNs`] qualified with thematic roles.
    CxTr,
    /// One string per licensed preposition combination.
    ExNs,
    /// [`FrameFormat::ExNs`] over [`FrameFormat::GtSs`].
    ExSs,
    /// [`FrameFormat::ExNs`] over [`FrameFormat::GtTr`].
    ExTr,
    /// [`FrameFormat::ExNs`] with qualifiers stripped.
    ExCx,
    /// [`FrameFormat::ExCx`] qualified with thematic roles.
    EtCx,
    /// Roles and restrictions, idioms collapsed.
    CxSt,
    /// Roles and restrictions, expanded by preposition.
    ExSt,
}

impl FrameFormat {
    /// Every format, in canonical order.
    pub const ALL: [FrameFormat; 13] = [
        Self::GtNs,
        Self::GtSs,
        Self::GtTr,
        Self::CxNs,
        Self::CxSs,
        Self::CxTr,
        Self::ExNs,
        Self::ExSs,
        Self::ExTr,
        Self::ExCx,
        Self::EtCx,
        Self::CxSt,
        Self::ExSt,
    ];

    /// Returns the format name, e.g. `gt-ns`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GtNs => "gt-ns",
            Self::GtSs => "gt-ss",
            Self::GtTr => "gt-tr",
            Self::CxNs => "cx-ns",
            Self::CxSs => "cx-ss",
            Self::CxTr => "cx-tr",
            Self::ExNs => "ex-ns",
            Self::ExSs => "ex-ss",
            Self::ExTr => "ex-tr",
            Self::ExCx => "ex-cx",
            Self::EtCx => "et-cx",
            Self::CxSt => "cx-st",
            Self::ExSt => "ex-st",
        }
    }

    /// Returns the formats this one is derived from.
    #[must_use]
    pub fn depends_on(self) -> &'static [FrameFormat] {
        match self {
            Self::GtNs | Self::ExNs => &[],
            Self::GtSs | Self::GtTr | Self::CxNs => &[Self::GtNs],
            Self::CxSs => &[Self::GtSs],
            Self::CxTr => &[Self::CxNs, Self::GtTr],
            Self::ExSs => &[Self::GtSs, Self::ExNs],
            Self::ExTr => &[Self::GtTr, Self::ExNs],
            Self::ExCx => &[Self::ExNs, Self::CxNs],
            Self::EtCx => &[Self::ExCx, Self::GtTr],
            Self::CxSt => &[Self::GtTr, Self::GtSs],
            Self::ExSt => &[Self::GtTr, Self::GtSs, Self::ExNs],
        }
    }

    /// Returns true if the format may yield several strings per frame.
    ///
    /// These are also the formats that need a preposition class hierarchy.
    #[must_use]
    pub fn is_expanded(self) -> bool {
        matches!(
            self,
            Self::ExNs | Self::ExSs | Self::ExTr | Self::ExCx | Self::EtCx | Self::ExSt
        )
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrameFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| Error::unknown_format(s))
    }
}
