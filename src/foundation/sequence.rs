use crate::foundation::error::{DuskrError, DuskrResult};

/// Position of a file within an ordered capture series, parsed from its filename.
///
/// The sequence number is the first maximal run of ASCII digits. `prefix` and
/// `suffix` are the exact text around that run, so
/// `prefix + digits-as-written + suffix` always rebuilds the filename, zero
/// padding included.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SequenceInfo {
    /// Parsed sequence number.
    pub number: u64,
    /// Text before the digit run.
    pub prefix: String,
    /// Text after the digit run.
    pub suffix: String,
    /// Length of the digit run as written (includes leading zeros).
    pub width: usize,
}

impl SequenceInfo {
    /// Parse sequence information out of `filename`.
    ///
    /// Fails with [`DuskrError::MissingSequenceNumber`] when the name has no digit, or when the
    /// digit run does not fit a `u64`.
    pub fn parse(filename: &str) -> DuskrResult<Self> {
        let missing = || DuskrError::MissingSequenceNumber {
            filename: filename.to_owned(),
        };

        let start = filename
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(missing)?;
        let tail = &filename[start..];
        let len = tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len());
        let number = tail[..len].parse::<u64>().map_err(|_| missing())?;

        Ok(Self {
            number,
            prefix: filename[..start].to_owned(),
            suffix: tail[len..].to_owned(),
            width: len,
        })
    }

    /// `true` when the digit run was written with leading zeros (`"007"`).
    pub fn is_zero_padded(&self) -> bool {
        self.width > decimal_len(self.number)
    }

    /// Digit run exactly as it appeared in the filename.
    pub fn digits(&self) -> String {
        format!("{:0width$}", self.number, width = self.width)
    }

    /// Rebuild the filename this info was parsed from.
    pub fn filename(&self) -> String {
        format!("{}{}{}", self.prefix, self.digits(), self.suffix)
    }
}

/// Naming rule for synthesized members of a series: `prefix + number + suffix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceNaming {
    /// Shared filename prefix.
    pub prefix: String,
    /// Shared filename suffix.
    pub suffix: String,
    /// Minimum digit count; `0` prints numbers without padding.
    pub pad_width: usize,
}

impl SequenceNaming {
    /// Derive the naming rule from a set of parsed control point names.
    ///
    /// Prefix and suffix come from the first info. Numbers are zero-padded to the widest
    /// zero-padded digit run found among `infos`, or left unpadded when none is padded.
    pub fn from_infos<'a>(infos: impl IntoIterator<Item = &'a SequenceInfo>) -> Option<Self> {
        let mut iter = infos.into_iter();
        let first = iter.next()?;
        let pad_width = std::iter::once(first)
            .chain(iter)
            .filter(|info| info.is_zero_padded())
            .map(|info| info.width)
            .max()
            .unwrap_or(0);
        Some(Self {
            prefix: first.prefix.clone(),
            suffix: first.suffix.clone(),
            pad_width,
        })
    }

    /// Filename for sequence position `number`.
    pub fn filename(&self, number: u64) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            number,
            self.suffix,
            width = self.pad_width
        )
    }
}

fn decimal_len(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |l| l as usize + 1)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/sequence.rs"]
mod tests;
