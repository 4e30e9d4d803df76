use crate::{
    document::{
        settings::DevelopSettings,
        store::{AttributeStore, DocumentCodec},
    },
    foundation::{
        curve::ToneCurve,
        error::{DuskrError, DuskrResult},
        sequence::SequenceInfo,
        value::AttributeValue,
    },
    interpolate::{
        collection::{Collection, CollectionEntry},
        config::InterpolatorConfig,
        curves::interpolate_channel,
        registry::ControlPointRegistry,
    },
};

/// Keyframe interpolation engine.
///
/// Register at least two developed keyframes, then call [`Interpolator::interpolate`] to obtain
/// one document per integer sequence number between the first and last keyframe. Intermediates
/// are clones of the first keyframe with every numeric setting and every tone curve replaced by
/// its spline-interpolated value.
///
/// Registered keyframes are never mutated; crop propagation and curve padding work on copies.
#[derive(Clone, Debug)]
pub struct Interpolator<S = DevelopSettings> {
    config: InterpolatorConfig,
    registry: ControlPointRegistry<S>,
    collection: Collection<S>,
}

impl<S: AttributeStore> Default for Interpolator<S> {
    fn default() -> Self {
        Self::with_config(InterpolatorConfig::default())
    }
}

impl<S: AttributeStore> Interpolator<S> {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit configuration.
    pub fn with_config(config: InterpolatorConfig) -> Self {
        Self {
            config,
            registry: ControlPointRegistry::new(),
            collection: Collection::default(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &InterpolatorConfig {
        &self.config
    }

    /// Registered control points.
    pub fn registry(&self) -> &ControlPointRegistry<S> {
        &self.registry
    }

    /// Register an already decoded keyframe. Clears the last computed collection.
    #[tracing::instrument(skip(self, store))]
    pub fn add_control_store(&mut self, filename: &str, store: S) -> DuskrResult<()> {
        let sequence = SequenceInfo::parse(filename)?;
        self.register(sequence, filename, store);
        Ok(())
    }

    /// Validate the registered control points without interpolating.
    #[tracing::instrument(skip(self), fields(control_points = self.registry.len()))]
    pub fn check_control_point_integrity(&self) -> DuskrResult<()> {
        self.registry.check_integrity()
    }

    /// Last computed collection; empty before the first successful [`Interpolator::interpolate`]
    /// and after any control point is added.
    pub fn collection(&self) -> &Collection<S> {
        &self.collection
    }

    /// Validate the control points and rebuild the collection from scratch.
    ///
    /// On failure the previous collection is left untouched.
    #[tracing::instrument(skip(self), fields(control_points = self.registry.len()))]
    pub fn interpolate(&mut self) -> DuskrResult<&Collection<S>> {
        self.registry.check_integrity()?;
        let collection = self.build()?;
        tracing::debug!(entries = collection.len(), "interpolation complete");
        self.collection = collection;
        Ok(&self.collection)
    }

    fn register(&mut self, sequence: SequenceInfo, filename: &str, store: S) {
        if let Some(previous) = self.registry.insert(sequence, filename, store) {
            tracing::debug!(previous = %previous.filename, "replaced control point");
        }
        self.collection.clear();
    }

    fn build(&self) -> DuskrResult<Collection<S>> {
        let naming = self
            .registry
            .naming()
            .ok_or(DuskrError::InsufficientControlPoints { count: 0 })?;

        let mut keyframes: Vec<(u64, S)> = self
            .registry
            .iter()
            .map(|cp| (cp.number(), cp.store.clone()))
            .collect();
        let (Some(&(first, _)), Some(&(last, _))) = (keyframes.first(), keyframes.last()) else {
            return Err(DuskrError::InsufficientControlPoints {
                count: keyframes.len(),
            });
        };

        if keyframes.iter().any(|(_, store)| store.has_crop()) {
            tracing::debug!("cropping enabled on a keyframe, propagating to all");
            for (_, store) in &mut keyframes {
                store.enable_crop(&self.config.crop_defaults);
            }
        }

        let template = &keyframes[0].1;
        let mut intermediates: Vec<(u64, S)> = (first..=last)
            .filter(|n| !self.registry.contains(*n))
            .map(|n| {
                let mut store = template.clone();
                store.set_raw_filename(&naming.filename(n));
                (n, store)
            })
            .collect();

        if !intermediates.is_empty() {
            self.interpolate_attributes(&keyframes, &mut intermediates)?;
            self.interpolate_curves(&keyframes, &mut intermediates)?;
        }

        let mut entries: Vec<CollectionEntry<S>> = keyframes
            .into_iter()
            .map(|(n, store)| (n, store, true))
            .chain(intermediates.into_iter().map(|(n, store)| (n, store, false)))
            .map(|(number, store, is_control_point)| CollectionEntry {
                number,
                filename: naming.filename(number),
                store,
                is_control_point,
            })
            .collect();
        entries.sort_by_key(|e| e.number);
        Ok(Collection::from_sorted(entries))
    }

    fn interpolate_attributes(
        &self,
        keyframes: &[(u64, S)],
        intermediates: &mut [(u64, S)],
    ) -> DuskrResult<()> {
        let xs: Vec<f64> = keyframes.iter().map(|(n, _)| *n as f64).collect();
        let template = &keyframes[0].1;

        for name in template.attribute_names() {
            if self.config.excluded_attributes.contains(&name) {
                continue;
            }
            if number_of(template, &name).is_none() {
                continue;
            }
            let ys: Option<Vec<f64>> = keyframes
                .iter()
                .map(|(_, store)| number_of(store, &name))
                .collect();
            let Some(ys) = ys else {
                tracing::warn!(attribute = %name, "not numeric at every keyframe, skipped");
                continue;
            };

            let spline = self.config.spline.build(xs.clone(), ys)?;
            for (n, store) in intermediates.iter_mut() {
                store.set_attribute(&name, AttributeValue::Number(spline.interpolate(*n as f64)));
            }
        }
        Ok(())
    }

    fn interpolate_curves(
        &self,
        keyframes: &[(u64, S)],
        intermediates: &mut [(u64, S)],
    ) -> DuskrResult<()> {
        let keys: Vec<u64> = keyframes.iter().map(|(n, _)| *n).collect();
        let targets: Vec<u64> = intermediates.iter().map(|(n, _)| *n).collect();

        let mut sampled = Vec::with_capacity(self.config.channels.len());
        for &channel in &self.config.channels {
            let found: Vec<Option<ToneCurve>> = keyframes
                .iter()
                .map(|(_, store)| store.curve(channel))
                .collect();
            if found.iter().all(Option::is_none) {
                tracing::debug!(%channel, "no keyframe carries this curve, skipped");
                continue;
            }
            let curves: Vec<ToneCurve> = found
                .into_iter()
                .map(|c| c.unwrap_or_else(ToneCurve::identity))
                .collect();
            let per_target = interpolate_channel(
                channel,
                &keys,
                &curves,
                &targets,
                self.config.spline,
                self.config.curve_padding,
                self.config.curve_sampling(),
            )?;
            sampled.push((channel, per_target));
        }

        // every channel validated before any intermediate is touched
        for (channel, per_target) in sampled {
            for ((_, store), curve) in intermediates.iter_mut().zip(per_target) {
                store.set_curve(channel, curve);
            }
        }
        Ok(())
    }
}

impl<S: AttributeStore + DocumentCodec> Interpolator<S> {
    /// Decode `document` and register it as the keyframe for `filename`.
    ///
    /// The filename is parsed first, so a name without digits fails with
    /// [`DuskrError::MissingSequenceNumber`] before the document is read.
    #[tracing::instrument(skip(self, document))]
    pub fn add_control_point(&mut self, filename: &str, document: &str) -> DuskrResult<()> {
        let sequence = SequenceInfo::parse(filename)?;
        let store = S::decode(document)?;
        self.register(sequence, filename, store);
        Ok(())
    }
}

fn number_of<S: AttributeStore>(store: &S, name: &str) -> Option<f64> {
    store.attribute(name).and_then(|v| v.as_number())
}

#[cfg(test)]
#[path = "../../tests/unit/interpolate/engine.rs"]
mod tests;
