//! String collation used when ranking by keyword fields.
//!
//! Keyword values are compared with a collation rather than raw bytes, so
//! `"Ångström"`, `"apple"`, `"éclair"` and `"Zebra"` rank alphabetically
//! regardless of case or accents.
//!
//! # Available Collations
//!
//! - **Locale** (default): the Unicode Collation Algorithm with CLDR
//!   tailoring for a configured locale, backed by ICU4X
//! - **Binary**: plain byte order

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RummageError};

/// Comparison rules for keyword values.
///
/// Implementations must define a deterministic order, since the ranker relies
/// on it for a reproducible sort.
pub trait Collation: Send + Sync + 'static {
    fn kind(&self) -> CollationKind;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn compare(&self, left: &str, right: &str) -> Ordering;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollationKind {
    /// Locale-tailored Unicode collation.
    Locale,
    /// Byte-wise comparison.
    Binary,
}

impl TryFrom<&str> for CollationKind {
    type Error = RummageError;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "locale" => Ok(CollationKind::Locale),
            "binary" => Ok(CollationKind::Binary),
            _ => Err(RummageError::InvalidRequest(format!(
                "Unrecognized collation: {name}"
            ))),
        }
    }
}

impl CollationKind {
    pub const fn name(&self) -> &'static str {
        match self {
            CollationKind::Locale => "locale",
            CollationKind::Binary => "binary",
        }
    }

    /// Instantiate the collation of this kind. `locale` is a BCP-47 tag and
    /// is only consulted by [`CollationKind::Locale`].
    pub fn create(self, locale: &str) -> Result<Box<dyn Collation>> {
        match self {
            CollationKind::Locale => Ok(Box::new(LocaleCollation::new(locale)?)),
            CollationKind::Binary => Ok(Box::new(BinaryCollation)),
        }
    }
}

/// Unicode Collation Algorithm with CLDR tailoring for one locale.
///
/// Uses tertiary strength: base letters first, then accents, then case.
pub struct LocaleCollation {
    collator: Collator,
    locale: Locale,
}

impl LocaleCollation {
    pub fn new(locale: &str) -> Result<Self> {
        let locale: Locale = locale
            .parse()
            .map_err(|e| RummageError::InvalidLocale(format!("{locale}: {e:?}")))?;

        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&(&locale).into(), options)
            .map_err(|e| RummageError::InvalidLocale(format!("{locale}: {e:?}")))?;

        Ok(Self { collator, locale })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl Collation for LocaleCollation {
    fn kind(&self) -> CollationKind {
        CollationKind::Locale
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

pub struct BinaryCollation;

impl Collation for BinaryCollation {
    fn kind(&self) -> CollationKind {
        CollationKind::Binary
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        left.as_bytes().cmp(right.as_bytes())
    }
}
