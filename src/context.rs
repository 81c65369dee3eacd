use crate::navigate;
use cube_core::{
    BoxObject, Camera, ObjectId, PickingController, Scene, CAMERA_Z, CUBE_COLOR,
    CUBE_SIZE, CUBE_SPIN_PER_FRAME,
};

/// Everything the pointer handlers and the frame loop share. Owned by the
/// entry point behind an `Rc<RefCell<_>>`.
pub struct SceneContext {
    pub scene: Scene,
    pub camera: Camera,
    pub picker: PickingController<String>,
    pub cube: ObjectId,
    pub hovered: Option<ObjectId>,
}

impl SceneContext {
    /// One green unit cube at the origin linking to `url`, camera pulled back
    /// along +Z.
    pub fn with_linked_cube(url: &str, width: u32, height: u32) -> Self {
        let mut scene = Scene::new();
        let cube = scene.add_box(BoxObject::cube(CUBE_SIZE, CUBE_COLOR));

        let mut camera = Camera::looking_at_origin(CAMERA_Z, 1.0);
        camera.set_aspect_from_size(width, height);

        let mut picker = PickingController::new(|url: &String| navigate::open_in_new_tab(url));
        picker.register_pickable(cube, url.to_string());
        log::info!("[scene] cube {:?} -> {}", cube, url);

        Self {
            scene,
            camera,
            picker,
            cube,
            hovered: None,
        }
    }

    pub fn spin_cube(&mut self) {
        if let Some(cube) = self.scene.get_mut(self.cube) {
            cube.transform.rotation.x += CUBE_SPIN_PER_FRAME;
            cube.transform.rotation.y += CUBE_SPIN_PER_FRAME;
        }
    }
}
