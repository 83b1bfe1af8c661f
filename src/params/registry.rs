use crate::params::strings::{self, StrId};

/// One host control, in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamId {
    CopiesX,
    CopiesY,
    CopiesZ,
    StepX,
    StepY,
    StepZ,
    StepRotateX,
    StepRotateY,
    StepRotateZ,
    StepScale,
    BasePosX,
    BasePosY,
    BasePosZ,
    BaseRotX,
    BaseRotY,
    BaseRotZ,
    BaseScale,
    BaseOpacity,
    OpacityStart,
    OpacityEnd,
    CameraAware,
}

/// Widget flavour of a control. Only affects presentation and defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Count,
    Distance,
    Angle,
    Percent,
    Checkbox,
}

/// Registration metadata for one control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    pub id: ParamId,
    pub name: &'static str,
    pub label: StrId,
    pub kind: ParamKind,
    pub default: f64,
    pub slider_min: f64,
    pub slider_max: f64,
}

const COUNT_MIN: f64 = 1.0;
const COUNT_MAX: f64 = 10.0;
const TRANSLATE: f64 = 500.0;
const ROTATE: f64 = 360.0;
const SCALE_MIN: f64 = 10.0;
const SCALE_MAX: f64 = 200.0;

const fn spec(
    id: ParamId,
    name: &'static str,
    label: StrId,
    kind: ParamKind,
    default: f64,
) -> ParamSpec {
    let (slider_min, slider_max) = match kind {
        ParamKind::Count => (COUNT_MIN, COUNT_MAX),
        ParamKind::Distance => (-TRANSLATE, TRANSLATE),
        ParamKind::Angle => (-ROTATE, ROTATE),
        ParamKind::Percent => (SCALE_MIN, SCALE_MAX),
        ParamKind::Checkbox => (0.0, 1.0),
    };
    ParamSpec {
        id,
        name,
        label,
        kind,
        default,
        slider_min,
        slider_max,
    }
}

const fn opacity(id: ParamId, name: &'static str, label: StrId) -> ParamSpec {
    let mut s = spec(id, name, label, ParamKind::Percent, 100.0);
    s.slider_min = 0.0;
    s.slider_max = 100.0;
    s
}

static REGISTRY: [ParamSpec; ParamId::COUNT] = [
    spec(ParamId::CopiesX, "copies_x", StrId::CopiesX, ParamKind::Count, 3.0),
    spec(ParamId::CopiesY, "copies_y", StrId::CopiesY, ParamKind::Count, 1.0),
    spec(ParamId::CopiesZ, "copies_z", StrId::CopiesZ, ParamKind::Count, 1.0),
    spec(ParamId::StepX, "step_x", StrId::StepX, ParamKind::Distance, 0.0),
    spec(ParamId::StepY, "step_y", StrId::StepY, ParamKind::Distance, 0.0),
    spec(ParamId::StepZ, "step_z", StrId::StepZ, ParamKind::Distance, 0.0),
    spec(ParamId::StepRotateX, "step_rotate_x", StrId::StepRotateX, ParamKind::Angle, 0.0),
    spec(ParamId::StepRotateY, "step_rotate_y", StrId::StepRotateY, ParamKind::Angle, 0.0),
    spec(ParamId::StepRotateZ, "step_rotate_z", StrId::StepRotateZ, ParamKind::Angle, 0.0),
    spec(ParamId::StepScale, "step_scale", StrId::StepScale, ParamKind::Percent, 100.0),
    spec(ParamId::BasePosX, "base_position_x", StrId::BasePosX, ParamKind::Distance, 0.0),
    spec(ParamId::BasePosY, "base_position_y", StrId::BasePosY, ParamKind::Distance, 0.0),
    spec(ParamId::BasePosZ, "base_position_z", StrId::BasePosZ, ParamKind::Distance, 0.0),
    spec(ParamId::BaseRotX, "base_rotation_x", StrId::BaseRotX, ParamKind::Angle, 0.0),
    spec(ParamId::BaseRotY, "base_rotation_y", StrId::BaseRotY, ParamKind::Angle, 0.0),
    spec(ParamId::BaseRotZ, "base_rotation_z", StrId::BaseRotZ, ParamKind::Angle, 0.0),
    spec(ParamId::BaseScale, "base_scale", StrId::BaseScale, ParamKind::Percent, 100.0),
    opacity(ParamId::BaseOpacity, "base_opacity", StrId::BaseOpacity),
    opacity(ParamId::OpacityStart, "opacity_start", StrId::OpacityStart),
    opacity(ParamId::OpacityEnd, "opacity_end", StrId::OpacityEnd),
    spec(ParamId::CameraAware, "camera_aware", StrId::CameraAware, ParamKind::Checkbox, 1.0),
];

impl ParamId {
    pub const COUNT: usize = 21;

    pub const ALL: [ParamId; Self::COUNT] = [
        ParamId::CopiesX,
        ParamId::CopiesY,
        ParamId::CopiesZ,
        ParamId::StepX,
        ParamId::StepY,
        ParamId::StepZ,
        ParamId::StepRotateX,
        ParamId::StepRotateY,
        ParamId::StepRotateZ,
        ParamId::StepScale,
        ParamId::BasePosX,
        ParamId::BasePosY,
        ParamId::BasePosZ,
        ParamId::BaseRotX,
        ParamId::BaseRotY,
        ParamId::BaseRotZ,
        ParamId::BaseScale,
        ParamId::BaseOpacity,
        ParamId::OpacityStart,
        ParamId::OpacityEnd,
        ParamId::CameraAware,
    ];

    /// Slot index in a [`crate::ParamSnapshot`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static ParamSpec {
        &REGISTRY[self.index()]
    }

    /// Stable key used in JSON job files.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn label(self) -> &'static str {
        strings::string(self.spec().label)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        REGISTRY.iter().find(|s| s.name == name).map(|s| s.id)
    }
}

/// Every registered control, in host order.
pub fn registry() -> &'static [ParamSpec] {
    &REGISTRY
}

#[cfg(test)]
#[path = "../../tests/unit/params/registry.rs"]
mod tests;
