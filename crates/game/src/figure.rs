//! The humanoid figure: twelve rigid parts hung off a torso.

use glam::Vec3;
use marionette_rig::{
    Node, NodeDesc, NodeId, Rotation, ShapeKind, Skeleton, SkeletonError, TextureKind,
};
use serde::{Deserialize, Serialize};

/// Named body parts of the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    Body,
    Head,
    LeftHorn,
    RightHorn,
    LeftUpperArm,
    LeftForearm,
    RightUpperArm,
    RightForearm,
    LeftThigh,
    LeftCalf,
    RightThigh,
    RightCalf,
}

impl Part {
    /// All parts, parents before children.
    pub const ALL: [Self; 12] = [
        Self::Body,
        Self::Head,
        Self::LeftHorn,
        Self::RightHorn,
        Self::LeftUpperArm,
        Self::LeftForearm,
        Self::RightUpperArm,
        Self::RightForearm,
        Self::LeftThigh,
        Self::LeftCalf,
        Self::RightThigh,
        Self::RightCalf,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Head => "head",
            Self::LeftHorn => "left_horn",
            Self::RightHorn => "right_horn",
            Self::LeftUpperArm => "left_upper_arm",
            Self::LeftForearm => "left_forearm",
            Self::RightUpperArm => "right_upper_arm",
            Self::RightForearm => "right_forearm",
            Self::LeftThigh => "left_thigh",
            Self::LeftCalf => "left_calf",
            Self::RightThigh => "right_thigh",
            Self::RightCalf => "right_calf",
        }
    }

    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Body => None,
            Self::Head | Self::LeftUpperArm | Self::RightUpperArm => Some(Self::Body),
            Self::LeftThigh | Self::RightThigh => Some(Self::Body),
            Self::LeftHorn | Self::RightHorn => Some(Self::Head),
            Self::LeftForearm => Some(Self::LeftUpperArm),
            Self::RightForearm => Some(Self::RightUpperArm),
            Self::LeftCalf => Some(Self::LeftThigh),
            Self::RightCalf => Some(Self::RightThigh),
        }
    }

    /// Construction parameters, without the parent link.
    fn desc(self) -> NodeDesc {
        // Limbs hang from their top end
        const LIMB: Vec3 = Vec3::new(0.5, 1.0, 0.5);
        const HANG: Vec3 = Vec3::new(0.0, -0.5, 0.0);
        const HORN: Vec3 = Vec3::new(0.15, 0.15, 0.15);
        const HORN_TILT: f32 = 30.0;
        const HORN_RADIUS: f32 = 0.45;

        let limb = |texture: TextureKind, offset: Vec3| {
            NodeDesc::new(self.name(), ShapeKind::Cube, texture)
                .scale(LIMB)
                .pivot(HANG)
                .offset(offset)
        };
        let horn = |tilt: f32| {
            let (sin, cos) = tilt.to_radians().sin_cos();
            NodeDesc::new(self.name(), ShapeKind::Cone, TextureKind::Horn)
                .scale(HORN)
                .pivot(Vec3::new(0.0, 0.15, 0.0))
                .offset(Vec3::new(0.0, HORN_RADIUS * cos, HORN_RADIUS * sin))
                .rotation(Rotation::about_x(tilt))
        };

        match self {
            Self::Body => NodeDesc::new(self.name(), ShapeKind::Cube, TextureKind::Torso)
                .scale(Vec3::new(1.0, 2.0, 1.2))
                .offset(Vec3::new(0.0, 3.0, 0.0)),
            Self::Head => NodeDesc::new(self.name(), ShapeKind::Sphere, TextureKind::Head)
                .offset(Vec3::new(0.0, 1.5, 0.0)),
            Self::LeftHorn => horn(HORN_TILT),
            Self::RightHorn => horn(-HORN_TILT),
            Self::LeftUpperArm => limb(TextureKind::UpperArm, Vec3::new(0.0, 1.0, 0.85)),
            Self::RightUpperArm => limb(TextureKind::UpperArm, Vec3::new(0.0, 1.0, -0.85)),
            Self::LeftForearm | Self::RightForearm => limb(TextureKind::Forearm, HANG),
            Self::LeftThigh => limb(TextureKind::LeftThigh, Vec3::new(0.0, -1.0, 0.35)),
            Self::RightThigh => limb(TextureKind::RightThigh, Vec3::new(0.0, -1.0, -0.35)),
            Self::LeftCalf | Self::RightCalf => limb(TextureKind::Calf, HANG),
        }
    }
}

/// Skeleton of the humanoid plus a lookup from [`Part`] to node.
///
/// Serializes as its skeleton; loading resolves every part by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "Skeleton", try_from = "Skeleton")]
pub struct Figure {
    skeleton: Skeleton,
    ids: [NodeId; 12],
}

impl TryFrom<Skeleton> for Figure {
    type Error = SkeletonError;

    fn try_from(skeleton: Skeleton) -> Result<Self, Self::Error> {
        let mut ids = [NodeId(0); 12];
        for part in Part::ALL {
            ids[part as usize] = skeleton.find(part.name())?;
        }
        Ok(Self { skeleton, ids })
    }
}

impl From<Figure> for Skeleton {
    fn from(figure: Figure) -> Self {
        figure.skeleton
    }
}

impl Figure {
    /// Assemble the humanoid.
    pub fn humanoid() -> Result<Self, SkeletonError> {
        let mut skeleton = Skeleton::new();
        let mut ids = [NodeId(0); 12];

        for part in Part::ALL {
            let mut desc = part.desc();
            if let Some(parent) = part.parent() {
                desc = desc.parent(ids[parent as usize]);
            }
            ids[part as usize] = skeleton.add(desc)?;
        }

        log::debug!("Assembled humanoid with {} parts", skeleton.len());
        Self::try_from(skeleton)
    }

    #[inline]
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    #[inline]
    pub fn id(&self, part: Part) -> NodeId {
        self.ids[part as usize]
    }

    #[inline]
    pub fn part(&self, part: Part) -> &Node {
        &self.skeleton[self.id(part)]
    }

    #[inline]
    pub fn part_mut(&mut self, part: Part) -> &mut Node {
        let id = self.id(part);
        &mut self.skeleton[id]
    }

    /// Restore every part to its initial pose.
    pub fn reset(&mut self) {
        self.skeleton.reset();
    }
}
