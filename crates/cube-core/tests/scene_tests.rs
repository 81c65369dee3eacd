// Host-side tests for scene geometry: ray/box intersection, transforms, the
// render mesh and the camera helpers.

use cube_core::mesh::unit_box;
use cube_core::{
    cube_half_extents, ray_aabb, BoxObject, Camera, Intersect, Ray, Scene, Unproject, CAMERA_Z,
    CUBE_COLOR, CUBE_SIZE,
};
use glam::Vec3;

fn ray_down_z(x: f32, y: f32) -> Ray {
    Ray::through(Vec3::new(x, y, 5.0), Vec3::new(x, y, 0.0)).unwrap()
}

#[test]
fn ray_aabb_hits_front_face() {
    let t = ray_aabb(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::splat(-0.5),
        Vec3::splat(0.5),
    );
    assert!((t.unwrap() - 4.5).abs() < 1e-5);
}

#[test]
fn ray_aabb_misses_to_the_side() {
    let t = ray_aabb(
        Vec3::new(2.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::splat(-0.5),
        Vec3::splat(0.5),
    );
    assert!(t.is_none());
}

#[test]
fn ray_aabb_ignores_boxes_behind_the_origin() {
    let t = ray_aabb(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::splat(-0.5),
        Vec3::splat(0.5),
    );
    assert!(t.is_none());
}

#[test]
fn ray_aabb_from_inside_reports_no_hit() {
    let t = ray_aabb(
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::splat(-0.5),
        Vec3::splat(0.5),
    );
    assert!(t.is_none());
}

#[test]
fn ray_through_rejects_coincident_and_non_finite_points() {
    assert!(Ray::through(Vec3::ONE, Vec3::ONE).is_none());
    assert!(Ray::through(Vec3::ZERO, Vec3::new(f32::INFINITY, 0.0, 0.0)).is_none());
    assert!(Ray::through(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE).is_none());

    let ray = Ray::through(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)).unwrap();
    assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    assert!((ray.at(5.0) - Vec3::new(3.0, 4.0, 0.0)).length() < 1e-5);
}

#[test]
fn rotated_cube_is_hit_at_its_edge() {
    let mut cube = BoxObject::cube(1.0, CUBE_COLOR);
    cube.transform.rotation.y = std::f32::consts::FRAC_PI_4;
    let t = cube.intersect_ray(&ray_down_z(0.0, 0.0)).unwrap();
    // the vertical edge now faces the camera
    let expected = 5.0 - 0.5 * std::f32::consts::SQRT_2;
    assert!((t - expected).abs() < 1e-4, "t={t} expected={expected}");
}

#[test]
fn rotation_changes_silhouette() {
    // x = 0.6 misses the axis-aligned unit cube but grazes the rotated one
    let ray = ray_down_z(0.6, 0.0);
    let mut cube = BoxObject::cube(1.0, CUBE_COLOR);
    assert!(cube.intersect_ray(&ray).is_none());
    cube.transform.rotation.y = std::f32::consts::FRAC_PI_4;
    assert!(cube.intersect_ray(&ray).is_some());
}

#[test]
fn translated_and_scaled_boxes_use_world_distances() {
    let mut cube = BoxObject::cube(2.0, CUBE_COLOR).at(Vec3::new(3.0, 0.0, -1.0));
    let t = cube.intersect_ray(&ray_down_z(3.0, 0.0)).unwrap();
    assert!((t - 5.0).abs() < 1e-4, "t={t}");

    cube.transform.scale = Vec3::new(1.0, 1.0, 3.0);
    let t = cube.intersect_ray(&ray_down_z(3.0, 0.0)).unwrap();
    assert!((t - 3.0).abs() < 1e-4, "t={t}");
}

#[test]
fn zero_sized_box_is_never_hit() {
    let cube = BoxObject::cube(0.0, CUBE_COLOR);
    assert!(cube.intersect_ray(&ray_down_z(0.0, 0.0)).is_none());
}

#[test]
fn scene_intersect_only_tests_requested_objects() {
    let mut scene = Scene::new();
    let front = scene.add_box(BoxObject::cube(1.0, CUBE_COLOR).at(Vec3::new(0.0, 0.0, 1.0)));
    let back = scene.add_box(BoxObject::cube(1.0, CUBE_COLOR));
    let ray = ray_down_z(0.0, 0.0);

    let all = scene.intersect(&ray, &[front, back]);
    assert_eq!(all.len(), 2);
    assert!((all[0].distance - 3.5).abs() < 1e-4);
    assert!((all[1].distance - 4.5).abs() < 1e-4);

    let only_back = scene.intersect(&ray, &[back]);
    assert_eq!(only_back.len(), 1);
    assert_eq!(only_back[0].object, back);
}

#[test]
fn scene_handles_are_stable_indices() {
    let mut scene = Scene::new();
    assert!(scene.is_empty());
    let a = scene.add_box(BoxObject::cube(1.0, CUBE_COLOR));
    let b = scene.add_box(BoxObject::cube(2.0, CUBE_COLOR));
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(scene.len(), 2);
    assert_eq!(scene.get(b).unwrap().half_extents, Vec3::ONE);

    scene.get_mut(a).unwrap().transform.rotation.x += 0.01;
    let ids: Vec<_> = scene.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![a, b]);
}

#[test]
fn default_cube_matches_constants() {
    let cube = BoxObject::cube(CUBE_SIZE, CUBE_COLOR);
    assert_eq!(cube.half_extents, cube_half_extents());
    assert_eq!(cube.transform.translation, Vec3::ZERO);
}

#[test]
fn unit_box_mesh_matches_pick_bounds() {
    let (vertices, indices) = unit_box();
    assert_eq!(vertices.len(), 24);
    assert_eq!(indices.len(), 36);
    for v in &vertices {
        let p = Vec3::from(v.pos);
        let n = Vec3::from(v.normal);
        assert!(p.abs().max_element() <= 0.5 + 1e-6);
        // every vertex sits on the face plane its normal points out of
        assert!((p.dot(n) - 0.5).abs() < 1e-6);
    }
}

#[test]
fn unit_box_triangles_wind_counter_clockwise_from_outside() {
    let (vertices, indices) = unit_box();
    for tri in indices.chunks(3) {
        let a = Vec3::from(vertices[tri[0] as usize].pos);
        let b = Vec3::from(vertices[tri[1] as usize].pos);
        let c = Vec3::from(vertices[tri[2] as usize].pos);
        let n = Vec3::from(vertices[tri[0] as usize].normal);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn camera_unproject_inverts_project() {
    let cam = Camera::looking_at_origin(CAMERA_Z, 16.0 / 9.0);
    let world = Vec3::new(0.7, -0.3, 0.2);
    let back = cam.unproject(cam.project(world));
    assert!((back - world).length() < 1e-2, "got {back}");
}

#[test]
fn camera_aspect_ignores_empty_sizes() {
    let mut cam = Camera::default();
    cam.set_aspect_from_size(1280, 720);
    assert!((cam.aspect - 1280.0 / 720.0).abs() < 1e-6);
    cam.set_aspect_from_size(0, 720);
    cam.set_aspect_from_size(1280, 0);
    assert!((cam.aspect - 1280.0 / 720.0).abs() < 1e-6);
    assert_eq!(cam.position(), Vec3::new(0.0, 0.0, CAMERA_Z));
}
