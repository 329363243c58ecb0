use goeburst_core::{Allele, ProfileError, ProfileSource};

/// Minimal in-memory source that can be told to reject one profile index.
#[derive(Clone)]
pub struct Scripted {
    name: &'static str,
    rows: Vec<Vec<Allele>>,
    broken: Option<usize>,
    reported_loci: Option<usize>,
}

impl Scripted {
    #[must_use]
    pub fn new(name: &'static str, rows: Vec<Vec<u32>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Allele::new).collect())
            .collect();
        Self {
            name,
            rows,
            broken: None,
            reported_loci: None,
        }
    }

    #[must_use]
    pub fn with_broken_profile(mut self, index: usize) -> Self {
        self.broken = Some(index);
        self
    }

    /// Overrides the locus count the source reports, leaving rows untouched.
    #[must_use]
    pub fn with_reported_loci(mut self, loci: usize) -> Self {
        self.reported_loci = Some(loci);
        self
    }
}

impl ProfileSource for Scripted {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn name(&self) -> &str {
        self.name
    }

    fn loci(&self) -> usize {
        self.reported_loci
            .unwrap_or_else(|| self.rows.first().map_or(0, Vec::len))
    }

    fn profile(&self, index: usize) -> Result<&[Allele], ProfileError> {
        if self.broken == Some(index) {
            return Err(ProfileError::OutOfBounds { index });
        }
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(ProfileError::OutOfBounds { index })
    }
}
