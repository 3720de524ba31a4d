use kinematics::{PhysicalObject, Vec3};

#[test]
fn zero_vertical_gravity_degrades_without_panicking() {
    let floating = PhysicalObject::with_gravity(
        [0.0, 0.0, 10.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
    );
    assert_eq!(floating.coefficient_a().z, 0.0);

    let (r1, r2) = floating.equation().roots();
    assert!(!r1.z.is_finite(), "r1={r1}");
    assert!(!r2.z.is_finite(), "r2={r2}");

    let t = floating.equation().time_of_ground_contact();
    assert!(!t.is_finite());
    assert!(!floating.equation().position_at_ground_contact().is_finite());
}

#[test]
fn boundary_above_a_falling_body_has_no_real_root() {
    let object = PhysicalObject::new([0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [0.0, 0.0, 5.0]);
    let eq = object.vertical_equation();
    assert!(eq.discriminant() < 0.0);
    assert!(eq.time_of_ground_contact().is_nan());
}

#[test]
fn axes_without_acceleration_stay_nan_in_vector_roots() {
    let ball = PhysicalObject::new([0.0, 0.0, 10.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    let (r1, _) = ball.equation().roots();
    assert!(r1.x.is_nan());
    assert!(r1.y.is_nan());
    assert!(r1.z.is_finite());
}

#[test]
fn repeated_calls_are_identical() {
    let object = PhysicalObject::new([1.0, 2.0, 3.0], [0.5, -0.5, 4.0], [0.0, 0.0, 0.25]);
    let first = object.equation();
    let second = object.equation();
    assert_eq!(first, second);
    assert_eq!(first.roots(), second.roots());
    assert_eq!(first.roots(), first.roots());
    assert_eq!(
        object.vertical_equation().coefficients(),
        object.vertical_equation().coefficients()
    );
    assert_eq!(object.coefficient_c(), Vec3::new(1.0, 2.0, 2.75));
}
