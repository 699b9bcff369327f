//! End-to-end decode tests
//!
//! These build whole containers in memory and check the decoded object
//! graph: defaults, required fields, transform composition, lookup
//! semantics, and buffer resolution.

mod common;

use common::{glb, glb_with};
use glam::{Mat4, Vec3, Vec4};
use libglb::{
    AccessorIndex, AlphaMode, Camera, ComponentType, ElementKind, Error, GlbFile, ImageKind,
    NodeIndex, PrimitiveMode, SceneIndex,
};

#[test]
fn minimal_scene_decodes_end_to_end() {
    let data = glb(r#"{ "scene": 0, "scenes": [{ "nodes": [0] }], "nodes": [{}] }"#);
    let file = GlbFile::from_slice(&data).unwrap();

    assert_eq!(file.scene, Some(SceneIndex(0)));

    let scene = file.scene(SceneIndex(0)).unwrap();
    assert_eq!(scene.nodes, [NodeIndex(0)]);
    assert_eq!(scene.name, "");

    let node = file.node(NodeIndex(0)).unwrap();
    assert_eq!(node.matrix, Mat4::IDENTITY);
    assert!(node.children.is_empty());

    // Out-of-range lookups miss instead of failing the decode.
    assert!(file.scene(SceneIndex(1)).is_none());
    assert!(file.node(NodeIndex(7)).is_none());
}

#[test]
fn translation_only_node_is_pure_translation() {
    let data = glb(r#"{ "nodes": [{ "translation": [1.0, 2.0, 3.0] }] }"#);
    let file = GlbFile::from_slice(&data).unwrap();
    assert_eq!(
        file.nodes[0].matrix,
        Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
    );
}

#[test]
fn scale_only_node_is_pure_scale() {
    let data = glb(r#"{ "nodes": [{ "scale": [2.0, 2.0, 2.0] }] }"#);
    let file = GlbFile::from_slice(&data).unwrap();
    assert_eq!(file.nodes[0].matrix, Mat4::from_scale(Vec3::splat(2.0)));
}

#[test]
fn translation_and_scale_compose_in_order() {
    let data = glb(r#"{ "nodes": [{ "scale": [2.0, 2.0, 2.0], "translation": [1.0, 2.0, 3.0] }] }"#);
    let file = GlbFile::from_slice(&data).unwrap();
    let expected =
        Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::from_scale(Vec3::splat(2.0));
    assert_eq!(file.nodes[0].matrix, expected);
}

#[test]
fn explicit_matrix_composes_with_trs() {
    // The matrix field is a base factor, not an alternative to TRS.
    let data = glb(
        r#"{ "nodes": [{
            "matrix": [1,0,0,0, 0,1,0,0, 0,0,1,0, 10,0,0,1],
            "translation": [1.0, 0.0, 0.0]
        }] }"#,
    );
    let file = GlbFile::from_slice(&data).unwrap();
    let expected = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0))
        * Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(file.nodes[0].matrix, expected);
}

#[test]
fn node_references_and_names() {
    let data = glb(
        r#"{ "nodes": [
            { "name": "root", "children": [1, 2], "mesh": 0 },
            { "camera": 0 },
            {}
        ] }"#,
    );
    let file = GlbFile::from_slice(&data).unwrap();
    assert_eq!(file.nodes[0].name, "root");
    assert_eq!(file.nodes[0].children, [NodeIndex(1), NodeIndex(2)]);
    assert!(file.nodes[0].mesh.is_some());
    assert!(file.nodes[0].camera.is_none());
    assert!(file.nodes[1].camera.is_some());
}

#[test]
fn material_defaults_survive_missing_pbr_block() {
    let data = glb(r#"{ "materials": [{}] }"#);
    let file = GlbFile::from_slice(&data).unwrap();
    let mat = &file.materials[0];
    assert_eq!(mat.pbr_metallic_roughness.base_color_factor, Vec4::ONE);
    assert_eq!(mat.pbr_metallic_roughness.metallic_factor, 1.0);
    assert_eq!(mat.pbr_metallic_roughness.roughness_factor, 1.0);
    assert_eq!(mat.emissive_factor, Vec3::ZERO);
    assert_eq!(mat.alpha_mode, AlphaMode::Opaque);
}

#[test]
fn accessor_missing_count_fails() {
    let data = glb(r#"{ "accessors": [{ "type": "VEC3", "componentType": 5126 }] }"#);
    assert!(matches!(
        GlbFile::from_slice(&data),
        Err(Error::InvalidSchema { .. })
    ));
}

#[test]
fn buffer_view_missing_byte_length_fails() {
    let data = glb(r#"{ "bufferViews": [{ "buffer": 0 }] }"#);
    assert!(matches!(
        GlbFile::from_slice(&data),
        Err(Error::InvalidSchema { .. })
    ));
}

#[test]
fn camera_type_mismatch_fails() {
    let data = glb(
        r#"{ "cameras": [{
            "type": "perspective",
            "orthographic": { "xmag": 1.0, "ymag": 1.0, "zfar": 100.0, "znear": 0.01 }
        }] }"#,
    );
    assert!(matches!(
        GlbFile::from_slice(&data),
        Err(Error::InvalidSchema { .. })
    ));
}

#[test]
fn one_failing_entity_fails_the_whole_decode() {
    // Second accessor is valid, first is not; nothing survives.
    let data = glb(
        r#"{
            "scenes": [{ "nodes": [0] }],
            "accessors": [
                { "type": "VEC3", "componentType": 5126 },
                { "type": "SCALAR", "componentType": 5123, "count": 3 }
            ]
        }"#,
    );
    assert!(GlbFile::from_slice(&data).is_err());
}

#[test]
fn full_asset_decodes() {
    let bin: Vec<u8> = (0u8..48).collect();
    let data = glb_with(
        r#"{
            "scene": 0,
            "scenes": [{ "name": "main", "nodes": [0] }],
            "nodes": [{ "mesh": 0 }],
            "meshes": [{ "primitives": [{
                "mode": 1,
                "indices": 1,
                "material": 0,
                "attributes": { "POSITION": 0 }
            }] }],
            "materials": [{ "alphaMode": "BLEND", "doubleSided": true }],
            "accessors": [
                { "bufferView": 0, "type": "VEC3", "componentType": 5126, "count": 3,
                  "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 1.0] },
                { "bufferView": 1, "type": "SCALAR", "componentType": 5123, "count": 3 }
            ],
            "bufferViews": [
                { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
                { "buffer": 0, "byteOffset": 36, "byteLength": 6 }
            ],
            "textures": [{ "source": 0 }],
            "images": [{ "bufferView": 1, "mimeType": "image/png" }],
            "buffers": [{ "byteLength": 48 }]
        }"#,
        &bin,
    );
    let file = GlbFile::from_slice(&data).unwrap();

    let prim = &file.meshes[0].primitives[0];
    assert_eq!(prim.mode, PrimitiveMode::Lines);
    assert_eq!(prim.attribute("POSITION"), Some(AccessorIndex(0)));
    assert!(file.material(prim.material.unwrap()).is_some());

    let indices = file.accessor(prim.indices.unwrap()).unwrap();
    assert_eq!(indices.kind, ElementKind::Scalar);
    assert_eq!(indices.component_type, ComponentType::UnsignedShort);
    assert!(indices.min.is_none());

    let positions = file.accessor(AccessorIndex(0)).unwrap();
    assert_eq!(positions.max.as_deref(), Some(&[1.0f32, 1.0, 1.0][..]));

    assert_eq!(file.images[0].kind, ImageKind::Png);
    assert_eq!(file.buffers[0].byte_length, 48);

    // Resolve raw bytes through the second view.
    let view = file.buffer_view(indices.buffer_view.unwrap()).unwrap();
    assert_eq!(file.view_bytes(view).unwrap(), &bin[36..42]);
}

#[test]
fn view_bytes_rejects_other_buffers_and_overruns() {
    let data = glb_with(
        r#"{ "bufferViews": [
            { "buffer": 1, "byteLength": 2 },
            { "buffer": 0, "byteOffset": 2, "byteLength": 4 }
        ] }"#,
        b"abcd",
    );
    let file = GlbFile::from_slice(&data).unwrap();

    assert!(matches!(
        file.view_bytes(&file.buffer_views[0]),
        Err(Error::Unsupported(_))
    ));
    assert!(matches!(
        file.view_bytes(&file.buffer_views[1]),
        Err(Error::InvalidContainer(_))
    ));
}

#[test]
fn unknown_top_level_keys_are_skipped() {
    let data = glb(
        r#"{
            "asset": { "version": "2.0", "generator": "test" },
            "animations": [{ "channels": [] }],
            "skins": [],
            "nodes": [{}]
        }"#,
    );
    let file = GlbFile::from_slice(&data).unwrap();
    assert_eq!(file.nodes.len(), 1);
}

#[test]
fn default_scene_with_wrong_kind_fails() {
    let data = glb(r#"{ "scene": [0] }"#);
    assert!(matches!(
        GlbFile::from_slice(&data),
        Err(Error::InvalidSchema { .. })
    ));
}

#[test]
fn decode_is_a_pure_function_of_the_bytes() {
    let data = glb_with(
        r#"{
            "scene": 0,
            "scenes": [{ "nodes": [0, 1] }],
            "nodes": [{ "translation": [1.0, 2.0, 3.0] }, { "mesh": 0 }],
            "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
            "accessors": [{ "type": "VEC3", "componentType": 5126, "count": 1 }],
            "materials": [{}]
        }"#,
        b"\x00\x01\x02\x03",
    );

    let first = GlbFile::from_slice(&data).unwrap();
    let second = GlbFile::from_slice(&data).unwrap();

    assert_eq!(first.scene, second.scene);
    assert_eq!(first.scenes, second.scenes);
    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.meshes, second.meshes);
    assert_eq!(first.materials, second.materials);
    assert_eq!(first.accessors, second.accessors);
    assert_eq!(first.bin_bytes(), second.bin_bytes());
}

#[test]
fn ownership_modes_agree() {
    let data = glb_with(r#"{ "nodes": [{}] }"#, b"xyz");

    let borrowed = GlbFile::from_slice(&data).unwrap();
    let copied = GlbFile::from_slice_copied(&data).unwrap();
    let owned = GlbFile::from_vec(data.clone()).unwrap();

    assert_eq!(borrowed.nodes, copied.nodes);
    assert_eq!(copied.nodes, owned.nodes);
    assert_eq!(borrowed.bin_bytes(), b"xyz");
    assert_eq!(copied.bin_bytes(), b"xyz");
    assert_eq!(owned.bin_bytes(), b"xyz");
}

#[test]
fn from_reader_decodes() {
    let data = glb(r#"{ "scenes": [{}] }"#);
    let file = GlbFile::from_reader(std::io::Cursor::new(data)).unwrap();
    assert_eq!(file.scenes.len(), 1);
}

#[test]
fn perspective_and_orthographic_cameras_decode() {
    let data = glb(
        r#"{ "cameras": [
            { "type": "perspective", "perspective": { "yfov": 0.7, "znear": 0.1, "zfar": 100.0 } },
            { "type": "orthographic", "orthographic": { "xmag": 2.0, "ymag": 2.0, "zfar": 50.0, "znear": 0.5 } }
        ] }"#,
    );
    let file = GlbFile::from_slice(&data).unwrap();

    match &file.cameras[0] {
        Camera::Perspective(persp) => {
            assert_eq!(persp.yfov, 0.7);
            assert_eq!(persp.zfar, 100.0);
        }
        other => panic!("expected perspective, got {other:?}"),
    }
    match &file.cameras[1] {
        Camera::Orthographic(ortho) => assert_eq!(ortho.xmag, 2.0),
        other => panic!("expected orthographic, got {other:?}"),
    }
}
