use crate::foundation::core::{MAX_COPIES, Vec3};
use crate::foundation::error::{RepeaterError, RepeaterResult};
use crate::params::registry::ParamId;
use crate::params::snapshot::ParamSnapshot;

/// Resolved repeater configuration for one render.
///
/// Built fresh per frame by [`RepeaterState::from_params`] and read-only afterwards. Scale and
/// opacity fields are percentages (100 = identity / fully opaque), rotations are degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct RepeaterState {
    /// Copies along x, y and z.
    pub copies: [u32; 3],
    pub base_position: Vec3,
    pub base_rotation: Vec3,
    pub base_scale: f64,
    pub base_opacity: f64,
    /// Added per step along each grid axis.
    pub step_position: Vec3,
    /// Added per flat copy index.
    pub step_rotation: Vec3,
    /// Ratio (in percent) applied once per flat copy index.
    pub step_scale: f64,
    pub opacity_start: f64,
    pub opacity_end: f64,
    pub camera_aware: bool,
}

impl Default for RepeaterState {
    fn default() -> Self {
        Self {
            copies: [3, 1, 1],
            base_position: Vec3::ZERO,
            base_rotation: Vec3::ZERO,
            base_scale: 100.0,
            base_opacity: 100.0,
            step_position: Vec3::ZERO,
            step_rotation: Vec3::ZERO,
            step_scale: 100.0,
            opacity_start: 100.0,
            opacity_end: 100.0,
            camera_aware: true,
        }
    }
}

impl RepeaterState {
    /// Extract the state from a host parameter snapshot.
    ///
    /// Every control must be present and finite. Copy counts are rounded and clamped to
    /// `[1, MAX_COPIES]`; their product is checked later by [`RepeaterState::total_copies`].
    pub fn from_params(params: &ParamSnapshot) -> RepeaterResult<Self> {
        let vec3 = |x, y, z| -> RepeaterResult<Vec3> {
            Ok(Vec3::new(
                params.require(x)?,
                params.require(y)?,
                params.require(z)?,
            ))
        };

        Ok(Self {
            copies: [
                count(params, ParamId::CopiesX)?,
                count(params, ParamId::CopiesY)?,
                count(params, ParamId::CopiesZ)?,
            ],
            step_position: vec3(ParamId::StepX, ParamId::StepY, ParamId::StepZ)?,
            step_rotation: vec3(
                ParamId::StepRotateX,
                ParamId::StepRotateY,
                ParamId::StepRotateZ,
            )?,
            step_scale: params.require(ParamId::StepScale)?,
            base_position: vec3(ParamId::BasePosX, ParamId::BasePosY, ParamId::BasePosZ)?,
            base_rotation: vec3(ParamId::BaseRotX, ParamId::BaseRotY, ParamId::BaseRotZ)?,
            base_scale: params.require(ParamId::BaseScale)?,
            base_opacity: params.require(ParamId::BaseOpacity)?,
            opacity_start: params.require(ParamId::OpacityStart)?,
            opacity_end: params.require(ParamId::OpacityEnd)?,
            camera_aware: params.require(ParamId::CameraAware)? != 0.0,
        })
    }

    /// Validate copy counts and return `copies_x * copies_y * copies_z`.
    pub fn total_copies(&self) -> RepeaterResult<u32> {
        for (axis, &n) in ["x", "y", "z"].iter().zip(&self.copies) {
            if !(1..=MAX_COPIES).contains(&n) {
                return Err(RepeaterError::bad_parameter(format!(
                    "copies_{axis} = {n} is outside [1, {MAX_COPIES}]"
                )));
            }
        }

        let [x, y, z] = self.copies;
        let total = x
            .checked_mul(y)
            .and_then(|xy| xy.checked_mul(z))
            .ok_or_else(|| RepeaterError::bad_parameter("copy count product overflows"))?;
        if total > MAX_COPIES {
            return Err(RepeaterError::bad_parameter(format!(
                "{x} x {y} x {z} = {total} copies exceeds the cap of {MAX_COPIES}"
            )));
        }
        Ok(total)
    }

    /// `true` when every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        self.base_position.is_finite()
            && self.base_rotation.is_finite()
            && self.step_position.is_finite()
            && self.step_rotation.is_finite()
            && [
                self.base_scale,
                self.base_opacity,
                self.step_scale,
                self.opacity_start,
                self.opacity_end,
            ]
            .iter()
            .all(|v| v.is_finite())
    }
}

fn count(params: &ParamSnapshot, id: ParamId) -> RepeaterResult<u32> {
    let v = params.require(id)?.round();
    Ok(v.clamp(1.0, f64::from(MAX_COPIES)) as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
