use glint::ext::vrm0::{HumanBone, HumanBoneName, Vrm};
use glint::glb::{GltfContainer, parse_glb_bytes, serialize_glb};
use glint::prelude::*;
use glint::schema::{SchemaObject, from_json_str, to_json_string};
use glint::types::{AccessorType, ComponentType, MagFilter, PrimitiveMode, WrapMode};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn bone(name: &str, node: i64) -> Value {
    json!({
        "bone": name,
        "node": node,
        "useDefaultValues": true,
        "min": { "x": 0.0, "y": 0.0, "z": 0.0 },
        "max": { "x": 0.0, "y": 0.0, "z": 0.0 },
        "center": { "x": 0.0, "y": 0.0, "z": 0.0 },
        "axisLength": 0.0
    })
}

fn vrm_document(bones: Vec<Value>) -> Value {
    json!({
        "asset": { "version": "2.0", "generator": "UniVRM-0.53.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [
            { "name": "Hips", "children": [1] },
            { "name": "Spine", "translation": [0.0, 0.1, 0.0] }
        ],
        "extensionsUsed": ["VRM"],
        "extensions": {
            "VRM": {
                "exporterVersion": "UniVRM-0.53.0",
                "specVersion": "0.0",
                "humanoid": {
                    "humanBones": bones,
                    "armStretch": 0.05,
                    "legStretch": 0.05,
                    "upperArmTwist": 0.5,
                    "lowerArmTwist": 0.5,
                    "upperLegTwist": 0.5,
                    "lowerLegTwist": 0.5,
                    "feetSpacing": 0.0,
                    "hasTranslationDoF": false
                },
                "meta": { "title": "Sample", "author": "nobody" }
            }
        }
    })
}

#[test]
fn test_vrm_humanoid_is_decoded() {
    let document = vrm_document(vec![bone("hips", 0), bone("spine", 1), bone("jaw", -1)]);
    let gltf = Gltf::from_json_value(&document).unwrap();
    let vrm = gltf.extension::<Vrm>().unwrap().unwrap();

    assert_eq!(vrm.spec_version.as_deref(), Some("0.0"));
    assert_eq!(vrm.humanoid.human_bones.len(), 3);
    assert_eq!(vrm.humanoid.bone_node(HumanBoneName::Spine), Some(1));
    assert_eq!(vrm.humanoid.bone(HumanBoneName::Jaw).map(|b| b.node), Some(HumanBone::NO_NODE));
    assert_eq!(vrm.humanoid.arm_stretch, 0.05);
    assert_eq!(vrm.meta, json!({ "title": "Sample", "author": "nobody" }));
}

#[test]
fn test_document_round_trips_exactly() {
    let document = vrm_document(vec![bone("hips", 0), bone("spine", 1)]);
    let gltf = Gltf::from_json_value(&document).unwrap();
    assert_eq!(gltf.to_json_value(), document);
    assert_eq!(Gltf::from_json_value(&gltf.to_json_value()).unwrap(), gltf);
}

#[test]
fn test_bone_name_is_case_sensitive() {
    let gltf = Gltf::from_json_value(&vrm_document(vec![bone("hips", 0)])).unwrap();
    assert!(gltf.extension::<Vrm>().is_ok());

    let gltf = Gltf::from_json_value(&vrm_document(vec![bone("Hips", 0)])).unwrap();
    let err = gltf.extension::<Vrm>().unwrap_err();
    assert!(err.is_schema_violation());
    match err {
        Error::UnknownEnumValue { type_name, value, path } => {
            assert_eq!(type_name, "HumanBoneName");
            assert_eq!(value, "\"Hips\"");
            assert_eq!(path, "$.extensions.VRM.humanoid.humanBones[0].bone");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_vrm_through_glb() {
    let gltf = Gltf::from_json_value(&vrm_document(vec![bone("hips", 0)])).unwrap();
    let bytes = serialize_glb(&GltfContainer::new(gltf)).unwrap();
    let container = parse_glb_bytes(&bytes).unwrap();
    let vrm = container.vrm().unwrap().unwrap();
    assert_eq!(vrm.humanoid.human_bones[0].bone, HumanBoneName::Hips);
}

#[test]
fn test_set_extension_registers_name() {
    let mut gltf = Gltf::default();
    let mut vrm = Vrm::default();
    vrm.humanoid.human_bones.push(HumanBone::new(HumanBoneName::Head, 3).unwrap());
    gltf.set_extension(&vrm);
    gltf.set_extension(&vrm);

    assert_eq!(gltf.extensions_used, vec!["VRM".to_string()]);
    assert_eq!(gltf.extension::<Vrm>().unwrap(), Some(vrm));
}

#[test]
fn test_mixed_enum_encodings() {
    let text = r#"{
        "asset": { "version": "2.0" },
        "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 }, "mode": 1 }] }],
        "accessors": [{ "componentType": 5123, "count": 6, "type": "SCALAR" }],
        "samplers": [{ "magFilter": 9728, "wrapS": 33071 }]
    }"#;
    let gltf: Gltf = from_json_str(text).unwrap();

    assert_eq!(gltf.meshes[0].primitives[0].mode, PrimitiveMode::Lines);
    assert_eq!(gltf.accessors[0].component_type, ComponentType::UnsignedShort);
    assert_eq!(gltf.accessors[0].accessor_type, AccessorType::Scalar);
    assert_eq!(gltf.samplers[0].mag_filter, Some(MagFilter::Nearest));
    assert_eq!(gltf.samplers[0].wrap_s, WrapMode::ClampToEdge);
    assert_eq!(gltf.samplers[0].wrap_t, WrapMode::Repeat);

    let written = to_json_string(&gltf).unwrap();
    assert!(written.contains(r#""samplers":[{"magFilter":9728,"wrapS":33071}]"#));
    assert!(written.contains(r#""type":"SCALAR""#));
}

#[test]
fn test_integer_field_rejects_fraction() {
    let err = Gltf::from_json_str(r#"{"asset":{"version":"2.0"},"scene":0.5}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch { ref path, expected: "usize", .. } if path == "$.scene"
    ));
}

glint::schema_object! {
    /// Custom vendor data attached to the root.
    struct StudioTag {
        studio: String = String::new() => "studio",
        build: u32 = 0 => "build" (ignorable),
        labels: Vec<String> = Vec::new() => "labels" (ignorable),
    }
}

impl Extension for StudioTag {
    const NAME: &'static str = "ACME_studio_tag";
}

#[test]
fn test_custom_extension_needs_no_mapper_changes() {
    assert_eq!(StudioTag::SCHEMA.fields.len(), 3);

    let gltf = Gltf::from_json_str(
        r#"{"asset":{"version":"2.0"},"extensions":{"ACME_studio_tag":{"studio":"north","labels":["a"]}}}"#,
    )
    .unwrap();
    let tag = gltf.extension::<StudioTag>().unwrap().unwrap();
    assert_eq!(tag.studio, "north");
    assert_eq!(tag.build, 0);
    assert_eq!(tag.labels, vec!["a".to_string()]);
    assert!(gltf.extension::<Vrm>().unwrap().is_none());
}
