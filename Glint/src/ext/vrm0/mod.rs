//! VRM 0.x avatar metadata (`extensions.VRM`)
//!
//! Only the humanoid description is mapped. Other VRM 0.x sections stay in
//! the raw extension JSON and are written back unchanged.

mod humanoid;

pub use humanoid::{HumanBone, HumanBoneName, Humanoid, Vector3};

use crate::schema::{Extension, Value};
use crate::schema_object;

schema_object! {
    /// The `VRM` root extension object.
    pub struct Vrm {
        /// Name and version of the exporting tool, e.g. `"UniVRM-0.53.0"`.
        pub exporter_version: Option<String> = None => "exporterVersion" (ignorable),
        /// VRM specification version, e.g. `"0.0"`.
        pub spec_version: Option<String> = None => "specVersion" (ignorable),
        pub humanoid: Humanoid = Humanoid::default() => "humanoid",
        pub meta: Value = Value::Null => "meta" (ignorable),
        pub first_person: Value = Value::Null => "firstPerson" (ignorable),
        pub blend_shape_master: Value = Value::Null => "blendShapeMaster" (ignorable),
        pub secondary_animation: Value = Value::Null => "secondaryAnimation" (ignorable),
        pub material_properties: Value = Value::Null => "materialProperties" (ignorable),
    }
}

impl Extension for Vrm {
    const NAME: &'static str = "VRM";
}
