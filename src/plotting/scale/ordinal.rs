//! Ordinal category-to-color scale.

use indexmap::IndexSet;

use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::style::Color;

/// The Tableau 10 categorical palette.
pub const TABLEAU10: [Color; 10] = [
    Color::Rgb(0x4e, 0x79, 0xa7),
    Color::Rgb(0xf2, 0x8e, 0x2c),
    Color::Rgb(0xe1, 0x57, 0x59),
    Color::Rgb(0x76, 0xb7, 0xb2),
    Color::Rgb(0x59, 0xa1, 0x4f),
    Color::Rgb(0xed, 0xc9, 0x48),
    Color::Rgb(0xb0, 0x7a, 0xa1),
    Color::Rgb(0xff, 0x9d, 0xa7),
    Color::Rgb(0x9c, 0x75, 0x5f),
    Color::Rgb(0xba, 0xb0, 0xab),
];

/// Distinct category values in first-observed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDomain {
    values: IndexSet<String>,
}

impl CategoryDomain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; returns true if it was not present yet.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        self.values.insert(value.into())
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.values.get_index_of(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CategoryDomain {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        CategoryDomain {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Maps each category of a domain to a palette color by position.
///
/// Distinct categories get distinct colors as long as the domain is no larger
/// than the palette; past that the palette wraps around.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    domain: CategoryDomain,
    palette: Vec<Color>,
}

impl OrdinalScale {
    /// Ordinal scale over `domain` using the Tableau 10 palette.
    pub fn new(domain: CategoryDomain) -> Self {
        OrdinalScale {
            domain,
            palette: TABLEAU10.to_vec(),
        }
    }

    /// Ordinal scale with a custom palette.
    pub fn with_palette(domain: CategoryDomain, palette: Vec<Color>) -> PlotResult<Self> {
        if palette.is_empty() {
            return Err(PlotError::InvalidConfig(
                "Ordinal scale palette must not be empty".to_string(),
            ));
        }
        Ok(OrdinalScale { domain, palette })
    }

    /// Append categories that are not yet in the domain, after the existing ones.
    pub fn extend<'a>(&mut self, categories: impl IntoIterator<Item = &'a str>) {
        for category in categories {
            self.domain.insert(category);
        }
    }

    /// Color for `category`, or `None` if it is outside the domain.
    pub fn color(&self, category: &str) -> Option<&Color> {
        self.domain
            .index_of(category)
            .map(|i| &self.palette[i % self.palette.len()])
    }

    pub fn domain(&self) -> &CategoryDomain {
        &self.domain
    }
}
