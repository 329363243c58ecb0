use crate::errors::DelimitedProviderError;

/// Layout of a delimited profile table.
///
/// # Examples
/// ```
/// use goeburst_providers_delimited::DelimitedFormat;
///
/// let format = DelimitedFormat::default().with_delimiter(b',').with_header(true);
/// assert_eq!(format.delimiter(), b',');
/// assert_eq!(format.absent_sentinel(), "0");
/// assert!(format.has_header());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DelimitedFormat {
    delimiter: u8,
    absent_sentinel: String,
    has_header: bool,
}

impl Default for DelimitedFormat {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            absent_sentinel: "0".to_owned(),
            has_header: false,
        }
    }
}

impl DelimitedFormat {
    /// Sets the byte separating cells.
    ///
    /// Only ASCII bytes are usable; loading with any other byte fails with
    /// [`crate::DelimitedProviderError::NonAsciiDelimiter`].
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the cell value that marks a locus as absent.
    #[must_use]
    pub fn with_absent_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.absent_sentinel = sentinel.into();
        self
    }

    /// Sets whether the first non-blank line holds locus names.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Returns the cell delimiter.
    #[must_use]
    #[rustfmt::skip]
    pub fn delimiter(&self) -> u8 { self.delimiter }

    /// Returns the absent-locus sentinel.
    #[must_use]
    #[rustfmt::skip]
    pub fn absent_sentinel(&self) -> &str { &self.absent_sentinel }

    /// Returns whether the input starts with a header line.
    #[must_use]
    #[rustfmt::skip]
    pub fn has_header(&self) -> bool { self.has_header }

    pub(crate) const fn check_delimiter(&self) -> Result<(), DelimitedProviderError> {
        if self.delimiter.is_ascii() {
            Ok(())
        } else {
            Err(DelimitedProviderError::NonAsciiDelimiter {
                byte: self.delimiter,
            })
        }
    }

    pub(crate) fn split<'a>(&self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        line.split(char::from(self.delimiter)).map(str::trim)
    }

    pub(crate) fn is_absent(&self, cell: &str) -> bool {
        cell.is_empty() || cell == self.absent_sentinel
    }
}
