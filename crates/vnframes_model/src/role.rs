//! Thematic roles.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vnframes_foundation::{Error, Result, SelrestrSet};

/// A thematic role (`Agent`, `Theme`, ...) with its selectional restrictions.
///
/// Restriction sets are kept sorted and deduplicated, so two roles built from
/// the same sets in different orders compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThematicRole {
    role_type: String,
    selrestrs: Vec<SelrestrSet>,
}

impl ThematicRole {
    /// Creates a role, sorting and deduplicating its restriction sets.
    pub fn new<I>(role_type: impl Into<String>, selrestrs: I) -> Self
    where
        I: IntoIterator<Item = SelrestrSet>,
    {
        let mut selrestrs: Vec<SelrestrSet> = selrestrs.into_iter().collect();
        selrestrs.sort();
        selrestrs.dedup();
        Self {
            role_type: role_type.into(),
            selrestrs,
        }
    }

    /// Creates a role with no restrictions.
    #[must_use]
    pub fn bare(role_type: impl Into<String>) -> Self {
        Self::new(role_type, std::iter::empty())
    }

    /// Returns the role type.
    #[must_use]
    pub fn role_type(&self) -> &str {
        &self.role_type
    }

    /// Returns the restriction sets.
    #[must_use]
    pub fn selrestrs(&self) -> &[SelrestrSet] {
        &self.selrestrs
    }

    /// Unions the restrictions of two roles of the same type.
    ///
    /// # Errors
    ///
    /// Returns a role mismatch error if the role types differ.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        if self.role_type != other.role_type {
            return Err(Error::role_mismatch(&self.role_type, &other.role_type));
        }
        Ok(Self::new(
            self.role_type.clone(),
            self.selrestrs.iter().chain(&other.selrestrs).cloned(),
        ))
    }

    /// Merges same-typed roles, keeping the order in which types first appear.
    pub fn merge_all<I>(roles: I) -> Vec<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut merged: Vec<Self> = Vec::new();
        for role in roles {
            match merged.iter_mut().find(|r| r.role_type == role.role_type) {
                Some(existing) => {
                    existing.selrestrs.extend(role.selrestrs);
                    existing.selrestrs.sort();
                    existing.selrestrs.dedup();
                }
                None => merged.push(role),
            }
        }
        merged
    }

    /// Returns the rendered restriction labels of every set, in set order.
    ///
    /// OR and AND sets render as one `+OR(...)`/`+AND(...)` label each.
    #[must_use]
    pub fn selrestr_labels(&self) -> Vec<String> {
        self.selrestrs
            .iter()
            .flat_map(SelrestrSet::rendered_labels)
            .collect()
    }
}

impl fmt::Display for ThematicRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.role_type)?;
        for set in &self.selrestrs {
            write!(f, "{set}")?;
        }
        Ok(())
    }
}
