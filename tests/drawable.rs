mod common;

use shade::prelude::*;

use crate::common::RecordingVisitor;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn build(visitor: &mut RecordingVisitor) -> Program {
    Program::build(visitor, &[fixture("simple.vert"), fixture("simple.frag")]).unwrap()
}

#[test]
fn uploads_exactly_what_the_inputs_need() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = build(&mut visitor);

    // 3 vertices of vec3, with 4 floats of trailing slack that must not be
    // uploaded.
    let positions = vec![1.0f32; 13];
    let colors = vec![0.5f32; 9];

    let set = DrawableSet::with_f32(
        &mut visitor,
        &program,
        3,
        &[("in_Position", &positions), ("in_Color", &colors)],
    )
    .unwrap();

    assert_eq!(set.vertices(), 3);
    assert_eq!(visitor.buffers_created, 2);
    assert_eq!(visitor.uploads.len(), 2);
    for (_, data) in &visitor.uploads {
        assert_eq!(data.len(), 3 * 3 * 4);
    }
}

#[test]
fn unknown_and_short_slots_are_skipped() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = build(&mut visitor);

    let positions = vec![1.0f32; 9];
    let short = vec![1.0f32; 8];

    let set = DrawableSet::with_f32(
        &mut visitor,
        &program,
        3,
        &[
            ("in_Position", &positions),
            ("in_Normal", &positions),
            ("in_Color", &short),
        ],
    )
    .unwrap();

    assert_eq!(set.vertices(), 3);
    assert_eq!(visitor.buffers_created, 1);
    assert_eq!(visitor.uploads.len(), 1);
}

#[test]
fn draw_balances_attribute_state() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = build(&mut visitor);

    let positions = vec![1.0f32; 9];
    let colors = vec![0.5f32; 9];
    let set = DrawableSet::with_f32(
        &mut visitor,
        &program,
        3,
        &[("in_Position", &positions), ("in_Color", &colors)],
    )
    .unwrap();

    set.draw(&mut visitor).unwrap();
    assert_eq!(visitor.draws, vec![3]);
    assert_eq!(visitor.enabled, vec![0, 1]);
    assert_eq!(visitor.disabled, vec![0, 1]);
}

#[test]
fn failed_draw_still_disables_attributes() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = build(&mut visitor);

    let positions = vec![1.0f32; 9];
    let set =
        DrawableSet::with_f32(&mut visitor, &program, 3, &[("in_Position", &positions)]).unwrap();

    visitor.fail_draw = true;
    assert!(set.draw(&mut visitor).is_err());
    assert_eq!(visitor.enabled, visitor.disabled);
}

#[test]
fn delete_releases_everything() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = build(&mut visitor);

    let positions = vec![1.0f32; 9];
    let set =
        DrawableSet::with_f32(&mut visitor, &program, 3, &[("in_Position", &positions)]).unwrap();

    set.delete(&mut visitor).unwrap();
    assert_eq!(visitor.live_buffers(), 0);
    assert_eq!(visitor.live_vaos(), 0);
}

#[test]
fn set_uniform_transposes_row_major_data() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = Program::build(&mut visitor, &[fixture("simple.vert")]).unwrap();

    let m = [
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        9.0, 10.0, 11.0, 12.0, //
        13.0, 14.0, 15.0, 16.0f32,
    ];
    program
        .set_uniform(&mut visitor, "modelMatrix", &m)
        .unwrap();

    assert_eq!(visitor.matrices.len(), 1);
    let upload = &visitor.matrices[0];
    assert_eq!((upload.cols, upload.rows, upload.count), (4, 4, 1));
    assert!(upload.transpose);

    // First column as the device sees it is the first row of the input.
    let cm = upload.column_major();
    assert_eq!(&cm[..4], &[1.0, 5.0, 9.0, 13.0]);
}

#[test]
fn short_uniform_slices_never_reach_the_device() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = Program::build(&mut visitor, &[fixture("simple.vert")]).unwrap();

    // A mat4 needs 16 floats; anything less is skipped.
    program
        .set_uniform(&mut visitor, "modelMatrix", &[1.0])
        .unwrap();
    program
        .set_uniform(&mut visitor, "modelMatrix", &[0.0; 15])
        .unwrap();
    assert!(visitor.matrices.is_empty());

    program
        .set_uniform(&mut visitor, "modelMatrix", &[0.0; 16])
        .unwrap();
    assert_eq!(visitor.matrices.len(), 1);
}

#[test]
fn locationless_inputs_are_skipped() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    visitor.unresolved.push("in_Color".into());
    let program = build(&mut visitor);

    assert_eq!(program.input("in_Color").unwrap().location, -1);

    let positions = vec![1.0f32; 9];
    let colors = vec![0.5f32; 9];
    let set = DrawableSet::with_f32(
        &mut visitor,
        &program,
        3,
        &[("in_Position", &positions), ("in_Color", &colors)],
    )
    .unwrap();

    assert_eq!(visitor.buffers_created, 1);

    set.draw(&mut visitor).unwrap();
    assert_eq!(visitor.enabled, vec![0]);
}

#[test]
fn two_by_two_round_trip() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = Program::build(&mut visitor, &[fixture("tint.frag")]).unwrap();

    program
        .set_uniform(&mut visitor, "swirl", &[1.0, 2.0, 3.0, 4.0])
        .unwrap();

    // Row-major [1 2; 3 4] lands column-major on the device.
    assert_eq!(visitor.matrices[0].column_major(), vec![1.0, 3.0, 2.0, 4.0]);
}

#[test]
fn vectors_ride_the_matrix_path() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = Program::build(&mut visitor, &[fixture("tint.frag")]).unwrap();

    program
        .set_uniform(&mut visitor, "tint", &[1.0, 0.0, 0.0, 1.0])
        .unwrap();

    let upload = &visitor.matrices[0];
    assert_eq!((upload.cols, upload.rows, upload.count), (4, 4, 1));
}

#[test]
fn unwired_uniform_shapes_are_skipped() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = Program::build(&mut visitor, &[fixture("tint.frag")]).unwrap();

    // Integer scalars have no float upload path.
    program.set_uniform(&mut visitor, "frame", &[1.0]).unwrap();
    assert!(visitor.matrices.is_empty());
}

#[test]
fn unknown_uniform_is_skipped() {
    common::setup();

    let mut visitor = RecordingVisitor::new();
    let program = Program::build(&mut visitor, &[fixture("simple.vert")]).unwrap();

    program
        .set_uniform(&mut visitor, "no_such", &[0.0; 16])
        .unwrap();
    assert!(visitor.matrices.is_empty());
}
