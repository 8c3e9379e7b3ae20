//! Humanoid bone mapping

use crate::json_enum;
use crate::schema_object;

schema_object! {
    /// A Unity-style vector, written as `{"x":..,"y":..,"z":..}`.
    #[derive(Copy)]
    pub struct Vector3 {
        pub x: f32 = 0.0 => "x",
        pub y: f32 = 0.0 => "y",
        pub z: f32 = 0.0 => "z",
    }
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

json_enum! {
    /// Humanoid bone names. Matching is exact: `"hips"`, never `"Hips"`.
    pub enum HumanBoneName: string {
        Hips = "hips",
        LeftUpperLeg = "leftUpperLeg",
        RightUpperLeg = "rightUpperLeg",
        LeftLowerLeg = "leftLowerLeg",
        RightLowerLeg = "rightLowerLeg",
        LeftFoot = "leftFoot",
        RightFoot = "rightFoot",
        Spine = "spine",
        Chest = "chest",
        Neck = "neck",
        Head = "head",
        LeftShoulder = "leftShoulder",
        RightShoulder = "rightShoulder",
        LeftUpperArm = "leftUpperArm",
        RightUpperArm = "rightUpperArm",
        LeftLowerArm = "leftLowerArm",
        RightLowerArm = "rightLowerArm",
        LeftHand = "leftHand",
        RightHand = "rightHand",
        LeftToes = "leftToes",
        RightToes = "rightToes",
        LeftEye = "leftEye",
        RightEye = "rightEye",
        Jaw = "jaw",
        LeftThumbProximal = "leftThumbProximal",
        LeftThumbIntermediate = "leftThumbIntermediate",
        LeftThumbDistal = "leftThumbDistal",
        LeftIndexProximal = "leftIndexProximal",
        LeftIndexIntermediate = "leftIndexIntermediate",
        LeftIndexDistal = "leftIndexDistal",
        LeftMiddleProximal = "leftMiddleProximal",
        LeftMiddleIntermediate = "leftMiddleIntermediate",
        LeftMiddleDistal = "leftMiddleDistal",
        LeftRingProximal = "leftRingProximal",
        LeftRingIntermediate = "leftRingIntermediate",
        LeftRingDistal = "leftRingDistal",
        LeftLittleProximal = "leftLittleProximal",
        LeftLittleIntermediate = "leftLittleIntermediate",
        LeftLittleDistal = "leftLittleDistal",
        RightThumbProximal = "rightThumbProximal",
        RightThumbIntermediate = "rightThumbIntermediate",
        RightThumbDistal = "rightThumbDistal",
        RightIndexProximal = "rightIndexProximal",
        RightIndexIntermediate = "rightIndexIntermediate",
        RightIndexDistal = "rightIndexDistal",
        RightMiddleProximal = "rightMiddleProximal",
        RightMiddleIntermediate = "rightMiddleIntermediate",
        RightMiddleDistal = "rightMiddleDistal",
        RightRingProximal = "rightRingProximal",
        RightRingIntermediate = "rightRingIntermediate",
        RightRingDistal = "rightRingDistal",
        RightLittleProximal = "rightLittleProximal",
        RightLittleIntermediate = "rightLittleIntermediate",
        RightLittleDistal = "rightLittleDistal",
        UpperChest = "upperChest",
        /// Placeholder some exporters write for unmapped bones.
        Unknown = "unknown",
    }
}

schema_object! {
    /// One humanoid bone bound to a scene node, with Unity `HumanLimit` data.
    pub struct HumanBone {
        pub bone: HumanBoneName = HumanBoneName::Hips => "bone",
        /// Index into `nodes`, or [`HumanBone::NO_NODE`].
        pub node: i32 = HumanBone::NO_NODE => "node",
        pub use_default_values: bool = true => "useDefaultValues",
        pub min: Vector3 = Vector3::ZERO => "min",
        pub max: Vector3 = Vector3::ZERO => "max",
        pub center: Vector3 = Vector3::ZERO => "center",
        pub axis_length: f32 = 0.0 => "axisLength",
    }
}

impl HumanBone {
    /// Value of `node` when the bone is bound to no node.
    pub const NO_NODE: i32 = -1;

    /// A bone bound to `node` with default limits.
    ///
    /// Returns `None` if `node` does not fit the wire's `i32` index.
    pub fn new(bone: HumanBoneName, node: usize) -> Option<Self> {
        let node = i32::try_from(node).ok()?;
        Some(Self {
            bone,
            node,
            ..Self::default()
        })
    }

    /// The bound node index, or `None` for the `-1` sentinel (or any other
    /// negative value).
    pub fn node_index(&self) -> Option<usize> {
        usize::try_from(self.node).ok()
    }
}

schema_object! {
    /// Humanoid description, mirroring Unity's `HumanDescription`.
    pub struct Humanoid {
        pub human_bones: Vec<HumanBone> = Vec::new() => "humanBones",
        pub arm_stretch: f32 = 0.05 => "armStretch",
        pub leg_stretch: f32 = 0.05 => "legStretch",
        pub upper_arm_twist: f32 = 0.5 => "upperArmTwist",
        pub lower_arm_twist: f32 = 0.5 => "lowerArmTwist",
        pub upper_leg_twist: f32 = 0.5 => "upperLegTwist",
        pub lower_leg_twist: f32 = 0.5 => "lowerLegTwist",
        pub feet_spacing: f32 = 0.0 => "feetSpacing",
        pub has_translation_dof: bool = false => "hasTranslationDoF",
    }
}

impl Humanoid {
    /// First entry for `name`, if mapped.
    pub fn bone(&self, name: HumanBoneName) -> Option<&HumanBone> {
        self.human_bones.iter().find(|b| b.bone == name)
    }

    /// Node index bound to `name`, if mapped to a node.
    pub fn bone_node(&self, name: HumanBoneName) -> Option<usize> {
        self.bone(name).and_then(HumanBone::node_index)
    }
}
