//! Per-locus allele interning.

use std::collections::HashMap;

use goeburst_core::Allele;

use crate::errors::DelimitedProviderError;

/// Maps allele labels to non-zero codes, one dictionary per locus, assigning
/// codes in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct AlleleInterner {
    loci: Vec<LocusDictionary>,
}

#[derive(Debug, Default)]
struct LocusDictionary {
    codes: HashMap<String, u32>,
    labels: Vec<String>,
}

impl AlleleInterner {
    pub(crate) fn with_loci(loci: usize) -> Self {
        Self {
            loci: (0..loci).map(|_| LocusDictionary::default()).collect(),
        }
    }

    pub(crate) fn intern(
        &mut self,
        locus: usize,
        label: &str,
    ) -> Result<Allele, DelimitedProviderError> {
        if locus >= self.loci.len() {
            self.loci.resize_with(locus + 1, LocusDictionary::default);
        }
        let dictionary = &mut self.loci[locus];
        if let Some(&code) = dictionary.codes.get(label) {
            return Ok(Allele::new(code));
        }

        let code = u32::try_from(dictionary.labels.len() + 1)
            .ok()
            .filter(|&code| code != u32::MAX)
            .ok_or(DelimitedProviderError::TooManyAlleles { locus })?;
        dictionary.codes.insert(label.to_owned(), code);
        dictionary.labels.push(label.to_owned());
        Ok(Allele::new(code))
    }

    /// Consumes the interner, returning each locus's labels indexed by
    /// `code - 1`.
    pub(crate) fn into_labels(self) -> Vec<Vec<String>> {
        self.loci.into_iter().map(|locus| locus.labels).collect()
    }
}
