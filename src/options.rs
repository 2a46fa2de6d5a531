//! Configuration options for conversion.
//!
//! The plain conversion functions walk any depth of nesting. When the input
//! comes from an untrusted source, [`ConvertOptions::with_max_depth`] bounds
//! the recursion instead.
//!
//! ## Examples
//!
//! ```rust
//! use docjson::{convert_with_options, doc, ConvertOptions, Error};
//!
//! let nested = doc!([[[1]]]);
//!
//! let options = ConvertOptions::new().with_max_depth(2);
//! let result = convert_with_options(&nested, &options);
//! assert_eq!(result, Err(Error::DepthLimitExceeded { limit: 2 }));
//! ```

/// Configuration options for [`convert_with_options`](crate::convert_with_options).
///
/// # Examples
///
/// ```rust
/// use docjson::ConvertOptions;
///
/// let options = ConvertOptions::new();
/// assert_eq!(options.max_depth, None);
///
/// let options = ConvertOptions::new().with_max_depth(64);
/// assert_eq!(options.max_depth, Some(64));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Deepest container nesting accepted; the root container is depth 1.
    /// `None` accepts any depth.
    pub max_depth: Option<usize>,
}

impl ConvertOptions {
    /// Creates default options (no depth limit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deepest container nesting the converter will enter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docjson::ConvertOptions;
    ///
    /// let options = ConvertOptions::default().with_max_depth(8);
    /// assert_eq!(options.max_depth, Some(8));
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
