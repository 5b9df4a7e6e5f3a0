use std::fmt;

/// Closed-form summary of a distribution for its current parameters.
///
/// Informational only. Moments a distribution has no simple closed form for
/// are `None`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moments {
    pub mean: f64,
    pub median: Option<f64>,
    pub mode: Option<f64>,
    pub variance: f64,
    pub skewness: f64,
    pub kurtosis: Option<f64>,
    pub entropy: Option<f64>,
}

impl Moments {
    /// `(name, value)` pairs for every moment that is present, in a fixed order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("mean", Some(self.mean)),
            ("median", self.median),
            ("mode", self.mode),
            ("variance", Some(self.variance)),
            ("skewness", Some(self.skewness)),
            ("kurtosis", self.kurtosis),
            ("entropy", self.entropy),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }
}

impl fmt::Display for Moments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}
