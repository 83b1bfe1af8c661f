//! Display strings for the effect and its controls.
//!
//! The table is a `static`, built at compile time and shared for the life of the process.

pub const MAJOR_VERSION: u32 = 1;
pub const MINOR_VERSION: u32 = 1;

/// Identifier of one display string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum StrId {
    None,
    Name,
    Description,
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

// Indexed by `StrId as usize`; keep in declaration order.
static STRINGS: [(StrId, &str); 24] = [
    (StrId::None, ""),
    (StrId::Name, "3D Repeater"),
    (StrId::Description, "3D camera-aware layer repeater effect."),
    (StrId::CopiesX, "Copies X"),
    (StrId::CopiesY, "Copies Y"),
    (StrId::CopiesZ, "Copies Z"),
    (StrId::StepX, "Step X"),
    (StrId::StepY, "Step Y"),
    (StrId::StepZ, "Step Z"),
    (StrId::StepRotateX, "Step Rotate X"),
    (StrId::StepRotateY, "Step Rotate Y"),
    (StrId::StepRotateZ, "Step Rotate Z"),
    (StrId::StepScale, "Step Scale"),
    (StrId::BasePosX, "Position X"),
    (StrId::BasePosY, "Position Y"),
    (StrId::BasePosZ, "Position Z"),
    (StrId::BaseRotX, "Rotation X"),
    (StrId::BaseRotY, "Rotation Y"),
    (StrId::BaseRotZ, "Rotation Z"),
    (StrId::BaseScale, "Scale"),
    (StrId::BaseOpacity, "Opacity"),
    (StrId::OpacityStart, "Opacity Start"),
    (StrId::OpacityEnd, "Opacity End"),
    (StrId::CameraAware, "Camera Aware"),
];

/// Look up the display string for `id`.
pub fn string(id: StrId) -> &'static str {
    STRINGS[id as usize].1
}

/// Text shown by the host's "about" command.
pub fn about_text() -> String {
    format!(
        "{} v{}.{}\n{}",
        string(StrId::Name),
        MAJOR_VERSION,
        MINOR_VERSION,
        string(StrId::Description)
    )
}
