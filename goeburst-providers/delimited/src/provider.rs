//! Delimited profile provider and its ingestion loop.
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use goeburst_core::{Allele, ProfileError, ProfileSource, ProfileTable};
use tracing::debug;

use crate::{errors::DelimitedProviderError, format::DelimitedFormat, intern::AlleleInterner};

/// Profile table loaded from delimited text.
///
/// # Examples
/// ```
/// use goeburst_core::ProfileSource;
/// use goeburst_providers_delimited::{DelimitedFormat, DelimitedProfileProvider};
///
/// let input = "A\tB\nA\tC\nX\tC\n";
/// let provider = DelimitedProfileProvider::try_from_reader(
///     "demo",
///     input.as_bytes(),
///     &DelimitedFormat::default(),
/// )?;
/// assert_eq!(provider.len(), 3);
/// assert_eq!(provider.loci(), 2);
/// assert_eq!(provider.distance(0, 2)?.differences(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct DelimitedProfileProvider {
    table: ProfileTable,
    locus_names: Option<Vec<String>>,
    allele_labels: Vec<Vec<String>>,
}

impl DelimitedProfileProvider {
    /// Reads a profile table from `path`.
    ///
    /// # Errors
    /// Returns [`DelimitedProviderError::Io`] when the file cannot be opened
    /// or read, plus every error of [`Self::try_from_reader`].
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        format: &DelimitedFormat,
    ) -> Result<Self, DelimitedProviderError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, file, format)
    }

    /// Reads a profile table from any byte stream.
    ///
    /// Blank lines are skipped and cells are trimmed. A cell equal to the
    /// absent sentinel, or empty, marks the locus as absent.
    ///
    /// # Errors
    /// Returns [`DelimitedProviderError::NonAsciiDelimiter`] when the format's
    /// delimiter is not ASCII,
    /// [`DelimitedProviderError::EmptyInput`] when no data rows are
    /// present, [`DelimitedProviderError::RaggedRow`] when a row's width
    /// differs from the header or first row, and
    /// [`DelimitedProviderError::Io`] when reading fails.
    pub fn try_from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
        format: &DelimitedFormat,
    ) -> Result<Self, DelimitedProviderError> {
        format.check_delimiter()?;
        let mut locus_names: Option<Vec<String>> = None;
        let mut width: Option<usize> = None;
        let mut interner = AlleleInterner::default();
        let mut rows: Vec<Vec<Allele>> = Vec::new();

        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let line_number = index + 1;

            if format.has_header() && locus_names.is_none() {
                let names: Vec<String> = format.split(&line).map(str::to_owned).collect();
                width = Some(names.len());
                interner = AlleleInterner::with_loci(names.len());
                locus_names = Some(names);
                continue;
            }

            let cells: Vec<&str> = format.split(&line).collect();
            let expected = *width.get_or_insert(cells.len());
            if cells.len() != expected {
                return Err(DelimitedProviderError::RaggedRow {
                    line: line_number,
                    expected,
                    found: cells.len(),
                });
            }

            let row = cells
                .iter()
                .enumerate()
                .map(|(locus, cell)| {
                    if format.is_absent(cell) {
                        Ok(Allele::ABSENT)
                    } else {
                        interner.intern(locus, cell)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(DelimitedProviderError::EmptyInput);
        }

        let table = ProfileTable::new(name, rows)?;
        debug!(
            data_source = table.name(),
            profiles = table.len(),
            loci = table.loci(),
            "delimited profiles loaded"
        );
        Ok(Self {
            table,
            locus_names,
            allele_labels: interner.into_labels(),
        })
    }

    /// Returns the header's locus names, when the format declared a header.
    #[must_use]
    pub fn locus_names(&self) -> Option<&[String]> {
        self.locus_names.as_deref()
    }

    /// Returns the original label of `allele` at `locus`.
    ///
    /// Absent alleles and unknown codes yield `None`.
    #[must_use]
    pub fn allele_label(&self, locus: usize, allele: Allele) -> Option<&str> {
        let index = usize::try_from(allele.code()).ok()?.checked_sub(1)?;
        self.allele_labels
            .get(locus)?
            .get(index)
            .map(String::as_str)
    }

    /// Borrows the decoded profile table.
    #[must_use]
    #[rustfmt::skip]
    pub fn table(&self) -> &ProfileTable { &self.table }

    /// Consumes the provider, returning the decoded profile table.
    #[must_use]
    pub fn into_table(self) -> ProfileTable {
        self.table
    }
}

impl ProfileSource for DelimitedProfileProvider {
    fn len(&self) -> usize {
        self.table.len()
    }

    fn name(&self) -> &str {
        self.table.name()
    }

    fn loci(&self) -> usize {
        self.table.loci()
    }

    fn profile(&self, index: usize) -> Result<&[Allele], ProfileError> {
        self.table.profile(index)
    }
}
