use std::collections::BTreeMap;

use crate::foundation::error::{RepeaterError, RepeaterResult};
use crate::params::registry::ParamId;

/// Values of the host controls for one frame.
///
/// Slots may be empty; extraction fails with [`RepeaterError::BadParameter`] when a required slot
/// is missing. JSON form is an object keyed by [`ParamId::name`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct ParamSnapshot {
    slots: [Option<f64>; ParamId::COUNT],
}

impl ParamSnapshot {
    /// Snapshot with every slot empty.
    pub fn empty() -> Self {
        Self {
            slots: [None; ParamId::COUNT],
        }
    }

    /// Snapshot with every slot set to its registered default.
    pub fn defaults() -> Self {
        let mut s = Self::empty();
        for id in ParamId::ALL {
            s.set(id, id.spec().default);
        }
        s
    }

    pub fn set(&mut self, id: ParamId, value: f64) -> &mut Self {
        self.slots[id.index()] = Some(value);
        self
    }

    pub fn with(mut self, id: ParamId, value: f64) -> Self {
        self.set(id, value);
        self
    }

    pub fn clear(&mut self, id: ParamId) -> &mut Self {
        self.slots[id.index()] = None;
        self
    }

    pub fn get(&self, id: ParamId) -> Option<f64> {
        self.slots[id.index()]
    }

    /// Read a required finite slot.
    pub fn require(&self, id: ParamId) -> RepeaterResult<f64> {
        let v = self.get(id).ok_or_else(|| {
            RepeaterError::bad_parameter(format!("parameter '{}' is missing", id.name()))
        })?;
        if !v.is_finite() {
            return Err(RepeaterError::bad_parameter(format!(
                "parameter '{}' is not finite ({v})",
                id.name()
            )));
        }
        Ok(v)
    }

    /// Overwrite slots from `(name, value)` pairs. Unknown names are rejected.
    pub fn apply_named<I, S>(&mut self, pairs: I) -> RepeaterResult<()>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        for (name, value) in pairs {
            let name = name.as_ref();
            let id = ParamId::from_name(name).ok_or_else(|| {
                RepeaterError::bad_parameter(format!("unknown parameter '{name}'"))
            })?;
            self.set(id, value);
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParamId, f64)> + '_ {
        ParamId::ALL
            .into_iter()
            .filter_map(|id| self.get(id).map(|v| (id, v)))
    }
}

impl Default for ParamSnapshot {
    fn default() -> Self {
        Self::defaults()
    }
}

impl TryFrom<BTreeMap<String, f64>> for ParamSnapshot {
    type Error = RepeaterError;

    fn try_from(map: BTreeMap<String, f64>) -> RepeaterResult<Self> {
        let mut s = Self::empty();
        s.apply_named(map)?;
        Ok(s)
    }
}

impl From<ParamSnapshot> for BTreeMap<String, f64> {
    fn from(s: ParamSnapshot) -> Self {
        s.iter()
            .map(|(id, v)| (id.name().to_string(), v))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/snapshot.rs"]
mod tests;
