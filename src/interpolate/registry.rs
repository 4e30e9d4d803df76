use std::collections::BTreeMap;

use crate::{
    document::store::AttributeStore,
    foundation::{
        error::{DuskrError, DuskrResult},
        sequence::{SequenceInfo, SequenceNaming},
    },
};

/// A manually developed keyframe at a known position in the series.
#[derive(Clone, Debug)]
pub struct ControlPoint<S> {
    /// Sequence information parsed from `filename`.
    pub sequence: SequenceInfo,
    /// Filename the keyframe was registered under.
    pub filename: String,
    /// Keyframe settings.
    pub store: S,
}

impl<S> ControlPoint<S> {
    /// Position in the series.
    pub fn number(&self) -> u64 {
        self.sequence.number
    }
}

/// Control points indexed by sequence number.
///
/// Registering a second document at the same sequence number replaces the first.
#[derive(Clone, Debug)]
pub struct ControlPointRegistry<S> {
    points: BTreeMap<u64, ControlPoint<S>>,
}

impl<S> Default for ControlPointRegistry<S> {
    fn default() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }
}

impl<S: AttributeStore> ControlPointRegistry<S> {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `store` under `filename`, returning the control point it replaced.
    pub fn add(&mut self, filename: &str, store: S) -> DuskrResult<Option<ControlPoint<S>>> {
        let sequence = SequenceInfo::parse(filename)?;
        Ok(self.insert(sequence, filename, store))
    }

    /// Register `store` under already parsed sequence information.
    pub fn insert(
        &mut self,
        sequence: SequenceInfo,
        filename: &str,
        store: S,
    ) -> Option<ControlPoint<S>> {
        self.points.insert(
            sequence.number,
            ControlPoint {
                sequence,
                filename: filename.to_owned(),
                store,
            },
        )
    }

    /// Number of registered control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` when a control point sits at `number`.
    pub fn contains(&self, number: u64) -> bool {
        self.points.contains_key(&number)
    }

    /// Control point at `number`.
    pub fn get(&self, number: u64) -> Option<&ControlPoint<S>> {
        self.points.get(&number)
    }

    /// Control points in ascending sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint<S>> {
        self.points.values()
    }

    /// Naming rule shared by the registered control points.
    pub fn naming(&self) -> Option<SequenceNaming> {
        SequenceNaming::from_infos(self.points.values().map(|cp| &cp.sequence))
    }

    /// Check, in order and failing on the first violation, that
    /// 1. at least two control points are registered,
    /// 2. all share the same filename prefix,
    /// 3. all share the same filename suffix,
    /// 4. every document carries development settings.
    pub fn check_integrity(&self) -> DuskrResult<()> {
        if self.points.len() < 2 {
            return Err(DuskrError::InsufficientControlPoints {
                count: self.points.len(),
            });
        }

        let Some(first) = self.points.values().next() else {
            return Err(DuskrError::InsufficientControlPoints { count: 0 });
        };

        if let Some(cp) = self.iter().find(|cp| cp.sequence.prefix != first.sequence.prefix) {
            return Err(DuskrError::PrefixMismatch {
                expected: first.sequence.prefix.clone(),
                found: cp.sequence.prefix.clone(),
            });
        }

        if let Some(cp) = self.iter().find(|cp| cp.sequence.suffix != first.sequence.suffix) {
            return Err(DuskrError::SuffixMismatch {
                expected: first.sequence.suffix.clone(),
                found: cp.sequence.suffix.clone(),
            });
        }

        if let Some(cp) = self.iter().find(|cp| !cp.store.has_settings()) {
            return Err(DuskrError::BlankSettings {
                filename: cp.filename.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interpolate/registry.rs"]
mod tests;
