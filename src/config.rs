//! Tree configuration loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::{QuadTree, Rectangle, Result};

/// Construction parameters for a [`QuadTree`].
///
/// Missing fields fall back to the full `i64` plane and a leaf capacity of
/// 400.
///
/// # Example
/// ```
/// use quadtree64::{Point, TreeConfig};
///
/// let config = TreeConfig::from_toml_str("x_min = 0\ny_min = 0\nmax_objects_per_leaf = 16")?;
/// let mut tree = config.build::<Point>()?;
/// tree.insert(Point::new(3, 4, ()))?;
/// assert_eq!(tree.max_objects_per_leaf(), 16);
/// # Ok::<(), quadtree64::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TreeConfig {
    /// Inclusive lower X bound.
    #[serde(default = "default_min")]
    pub x_min: i64,
    /// Exclusive upper X bound.
    #[serde(default = "default_max")]
    pub x_max: i64,
    /// Inclusive lower Y bound.
    #[serde(default = "default_min")]
    pub y_min: i64,
    /// Exclusive upper Y bound.
    #[serde(default = "default_max")]
    pub y_max: i64,
    /// Objects a leaf holds before it splits.
    #[serde(default = "default_max_objects_per_leaf")]
    pub max_objects_per_leaf: u16,
}

impl TreeConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    /// [`Error::Config`](crate::Error::Config) on malformed TOML, unknown
    /// keys, or out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Renders the configuration as TOML text.
    ///
    /// # Errors
    /// [`Error::ConfigSerialize`](crate::Error::ConfigSerialize) if rendering fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The configured area.
    ///
    /// # Errors
    /// [`Error::InvalidRange`](crate::Error::InvalidRange) if a lower bound
    /// exceeds its upper bound.
    pub fn area(&self) -> Result<Rectangle> {
        Rectangle::from_bounds(self.x_min, self.x_max, self.y_min, self.y_max)
    }

    /// Builds an empty tree from this configuration.
    ///
    /// # Errors
    /// Same as [`QuadTree::new`].
    pub fn build<T>(&self) -> Result<QuadTree<T>> {
        QuadTree::with_area(self.area()?, self.max_objects_per_leaf)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            x_min: default_min(),
            x_max: default_max(),
            y_min: default_min(),
            y_max: default_max(),
            max_objects_per_leaf: default_max_objects_per_leaf(),
        }
    }
}

const fn default_min() -> i64 {
    i64::MIN
}

const fn default_max() -> i64 {
    i64::MAX
}

const fn default_max_objects_per_leaf() -> u16 {
    400
}
