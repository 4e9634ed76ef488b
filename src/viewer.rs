//! The per-frame control loop.
//!
//! One iteration is fully synchronous and single-threaded: drain pending
//! input events, dispatch each as a [`ViewerCommand`], fold the frame's
//! rotation deltas into the orientation quaternion, then hand the frame to
//! the display surface. The present call may block on vertical sync and is
//! the only scheduling point — there is no pipelining of input processing
//! with rendering of a prior frame.

use crate::camera::Camera;
use crate::command::ViewerCommand;
use crate::display::{DisplaySurface, FrameParams};
use crate::error::ViewerError;
use crate::input::{InputEvent, InputProcessor};
use crate::math::Vector3;
use crate::model::Model;
use crate::options::Options;
use crate::orientation::OrientationController;

/// A source of discrete input events.
///
/// Implemented by the host's window system glue. Each call appends a
/// finite, ordered batch of pending events and returns without blocking;
/// an empty batch simply means an idle frame.
pub trait EventSource {
    /// Append all pending events to `events` without blocking.
    fn poll(&mut self, events: &mut Vec<InputEvent>);
}

/// Viewer loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Processing input and rendering frames.
    Running,
    /// Terminal; no further rendering or input processing.
    Stopped,
}

/// The viewer: camera, orientation, display flags, and the control loop
/// tying them to the external collaborators.
///
/// Owns its [`Camera`] and [`OrientationController`] exclusively; nothing
/// is shared across threads, so no concurrent mutation is possible by
/// construction.
pub struct Viewer<M, D, E>
where
    M: Model,
    D: DisplaySurface,
    E: EventSource,
{
    model: M,
    display: D,
    events: E,
    camera: Camera,
    orientation: OrientationController,
    processor: InputProcessor,
    /// Render filled polygons (`false` = wireframe).
    show_solid: bool,
    /// The user's texturing preference; only effective while solid is on.
    show_texture: bool,
    /// Render-time centering translation, `-center / scale`.
    model_offset: Vector3,
    state: LoopState,
}

impl<M, D, E> Viewer<M, D, E>
where
    M: Model,
    D: DisplaySurface,
    E: EventSource,
{
    /// Assemble a viewer around a loaded model, a display surface, and an
    /// event source.
    ///
    /// Pushes the initial projection to the display. Fails with
    /// [`ViewerError::InvalidModelScale`] if the model reports a
    /// non-positive scale, in which case the loop never enters `Running`.
    pub fn new(
        model: M,
        display: D,
        events: E,
        options: Options,
    ) -> Result<Self, ViewerError> {
        let scale = model.scale();
        if scale <= 0.0 {
            return Err(ViewerError::InvalidModelScale(scale));
        }
        let model_offset = model.center() * (-1.0 / scale);

        log::info!(
            "model ready: {} texture file(s), smooth shading {}",
            model.texture_files().len(),
            if model.is_smooth() { "on" } else { "off" },
        );

        let camera = Camera::new(options.camera.clone());
        let processor = InputProcessor::new(
            options.keybindings,
            options.camera.roll_step,
        );

        let mut viewer = Self {
            model,
            display,
            events,
            camera,
            orientation: OrientationController::new(),
            processor,
            show_solid: options.display.show_solid,
            show_texture: options.display.show_texture,
            model_offset,
            state: LoopState::Running,
        };
        let projection = viewer.camera.projection();
        viewer.display.set_projection(&projection);
        Ok(viewer)
    }

    /// Run until a quit command arrives.
    ///
    /// The quit flag is observed at the top of each iteration: the frame in
    /// flight when a quit arrives still completes, and nothing renders
    /// afterwards.
    pub fn run(&mut self) {
        log::info!("viewer loop running");
        let mut batch = Vec::new();
        while self.state == LoopState::Running {
            self.events.poll(&mut batch);
            for event in batch.drain(..) {
                self.handle_input(&event);
            }
            self.orientation.resolve();
            self.draw_frame();
        }
        log::info!("viewer loop stopped");
    }

    /// Route one raw input event through the processor and execute the
    /// resulting command, if any.
    pub fn handle_input(&mut self, event: &InputEvent) {
        if let Some(command) = self.processor.handle_event(event) {
            self.execute(command);
        }
    }

    /// Perform one viewer command.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Rotate { dx, dy } => {
                // Vertical motion pitches about X, horizontal yaws about Y.
                let pitch = self.camera.rotation_angle_for(dy, Vector3::X);
                let yaw = self.camera.rotation_angle_for(dx, Vector3::Y);
                self.orientation.rotate_by(Vector3::new(pitch, yaw, 0.0));
            }
            ViewerCommand::Pan { dx, dy } => self.camera.pan(dx, dy),
            ViewerCommand::Zoom { delta } => self.camera.zoom(delta),
            ViewerCommand::Roll { degrees } => self.camera.roll(degrees),
            ViewerCommand::ResetView => {
                self.camera.reset();
                self.orientation.reset();
            }
            ViewerCommand::ToggleSolid => {
                self.show_solid = !self.show_solid;
            }
            ViewerCommand::ToggleTexture => {
                self.show_texture = !self.show_texture;
            }
            ViewerCommand::Resize { width, height } => {
                self.camera.resize(width, height);
                let projection = self.camera.projection();
                self.display.set_projection(&projection);
            }
            ViewerCommand::Quit => {
                log::info!("quit requested");
                self.state = LoopState::Stopped;
            }
        }
    }

    /// Build this frame's parameters and hand them to the display.
    fn draw_frame(&mut self) {
        let frame = FrameParams {
            view: self.camera.view(),
            rotation_angle: self.orientation.resolved_angle(),
            rotation_axis: self.orientation.resolved_axis(),
            model_offset: self.model_offset,
            solid: self.show_solid,
            textured: self.effective_texture(),
        };
        self.display.draw_frame(&frame, &self.model);
        self.display.present();
    }

    /// The effective texturing flag: the user's preference AND solid mode.
    ///
    /// Derived rather than destructive — turning solid off never clears the
    /// stored texture preference, so it is honored again when solid comes
    /// back on.
    #[must_use]
    pub fn effective_texture(&self) -> bool {
        self.show_texture && self.show_solid
    }

    /// Whether solid (filled) rendering is on.
    #[must_use]
    pub fn show_solid(&self) -> bool {
        self.show_solid
    }

    /// The user's stored texturing preference, ignoring solid mode.
    #[must_use]
    pub fn show_texture(&self) -> bool {
        self.show_texture
    }

    /// Current loop state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The camera, for hosts that need to inspect view parameters.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The orientation controller.
    #[must_use]
    pub fn orientation(&self) -> &OrientationController {
        &self.orientation
    }

    /// The render-time centering translation, `-center / scale`.
    #[must_use]
    pub fn model_offset(&self) -> Vector3 {
        self.model_offset
    }

    /// The display surface (primarily for host teardown and tests).
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::path::PathBuf;

    use super::*;
    use crate::camera::Projection;
    use crate::input::{ButtonState, Modifiers};

    struct FakeModel {
        center: Vector3,
        scale: f32,
    }

    impl FakeModel {
        fn unit() -> Self {
            Self {
                center: Vector3::ZERO,
                scale: 1.0,
            }
        }
    }

    impl Model for FakeModel {
        fn draw(&self, _with_texture: bool) {}

        fn center(&self) -> Vector3 {
            self.center
        }

        fn scale(&self) -> f32 {
            self.scale
        }

        fn is_smooth(&self) -> bool {
            false
        }

        fn texture_files(&self) -> Vec<PathBuf> {
            Vec::new()
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        frames: Vec<FrameParams>,
        projections: Vec<Projection>,
        presents: usize,
    }

    impl DisplaySurface for RecordingDisplay {
        fn set_projection(&mut self, projection: &Projection) {
            self.projections.push(*projection);
        }

        fn draw_frame(&mut self, frame: &FrameParams, _model: &dyn Model) {
            self.frames.push(*frame);
        }

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    /// Yields one scripted batch per poll, then a quit event forever.
    struct ScriptedEvents {
        batches: VecDeque<Vec<InputEvent>>,
    }

    impl ScriptedEvents {
        fn new(batches: Vec<Vec<InputEvent>>) -> Self {
            Self {
                batches: batches.into(),
            }
        }
    }

    impl EventSource for ScriptedEvents {
        fn poll(&mut self, events: &mut Vec<InputEvent>) {
            match self.batches.pop_front() {
                Some(batch) => events.extend(batch),
                None => events.push(InputEvent::Quit),
            }
        }
    }

    fn drag(dx: i32, dy: i32, modifiers: Modifiers) -> InputEvent {
        InputEvent::MouseMotion {
            dx,
            dy,
            buttons: ButtonState::LEFT,
            modifiers,
        }
    }

    fn viewer_with(
        batches: Vec<Vec<InputEvent>>,
    ) -> Viewer<FakeModel, RecordingDisplay, ScriptedEvents> {
        match Viewer::new(
            FakeModel::unit(),
            RecordingDisplay::default(),
            ScriptedEvents::new(batches),
            Options::default(),
        ) {
            Ok(viewer) => viewer,
            Err(e) => unreachable!("default viewer must assemble: {e}"),
        }
    }

    #[test]
    fn quit_stops_after_current_frame() {
        let mut viewer = viewer_with(vec![vec![InputEvent::Quit]]);
        viewer.run();
        assert_eq!(viewer.state(), LoopState::Stopped);
        // The frame in flight when quit arrived still completed.
        assert_eq!(viewer.display().frames.len(), 1);
        assert_eq!(viewer.display().presents, 1);
    }

    #[test]
    fn events_after_quit_in_same_batch_are_still_drained() {
        let mut viewer = viewer_with(vec![vec![
            InputEvent::Quit,
            InputEvent::KeyDown {
                key: "KeyZ".into(),
            },
        ]]);
        viewer.run();
        assert!(!viewer.show_solid());
        assert_eq!(viewer.display().frames.len(), 1);
    }

    #[test]
    fn effective_texture_is_and_of_both_flags() {
        let mut viewer = viewer_with(vec![]);
        assert!(viewer.show_solid());
        assert!(viewer.show_texture());
        assert!(viewer.effective_texture());

        viewer.execute(ViewerCommand::ToggleSolid);
        assert!(!viewer.effective_texture());
        // The stored preference survives the solid-off period.
        assert!(viewer.show_texture());

        viewer.execute(ViewerCommand::ToggleSolid);
        assert!(viewer.effective_texture());

        viewer.execute(ViewerCommand::ToggleTexture);
        assert!(!viewer.effective_texture());
        assert!(viewer.show_solid());
    }

    #[test]
    fn rendered_frames_carry_effective_texture() {
        let mut viewer = viewer_with(vec![
            vec![InputEvent::KeyDown {
                key: "KeyZ".into(),
            }],
            vec![InputEvent::KeyDown {
                key: "KeyZ".into(),
            }],
        ]);
        viewer.run();
        // Frame 1: solid off → untextured wireframe. Frame 2: solid back
        // on → preference honored again. Frame 3: quit frame.
        let frames = &viewer.display().frames;
        assert_eq!(frames.len(), 3);
        assert!(!frames[0].solid);
        assert!(!frames[0].textured);
        assert!(frames[1].solid);
        assert!(frames[1].textured);
    }

    #[test]
    fn pan_scenario_640x480() {
        let mut viewer = viewer_with(vec![
            vec![InputEvent::Resized {
                width: 640,
                height: 480,
            }],
            vec![drag(-64, 48, Modifiers::SHIFT)],
        ]);
        viewer.run();
        // The dispatch negates the raw horizontal delta: -(-64)/640 = 0.1.
        assert_eq!(viewer.camera().eye.x, 0.1);
        assert_eq!(viewer.camera().eye.y, 0.1);
    }

    #[test]
    fn rotate_drag_resolves_about_viewport_axes() {
        let mut viewer = viewer_with(vec![
            vec![InputEvent::Resized {
                width: 640,
                height: 480,
            }],
            vec![drag(64, 0, Modifiers::NONE)],
        ]);
        // 64 pixels of horizontal drag across a 640-wide viewport.
        let expected = (64.0_f32 / 640.0).asin().to_degrees();
        viewer.run();
        let angle = viewer.orientation().resolved_angle();
        let axis = viewer.orientation().resolved_axis();
        assert!((angle - expected).abs() < 1e-3);
        assert!((axis - Vector3::Y).length() < 1e-4);
    }

    #[test]
    fn wheel_zooms_and_resize_pushes_projection() {
        let mut viewer = viewer_with(vec![vec![
            InputEvent::Resized {
                width: 800,
                height: 400,
            },
            InputEvent::Wheel { delta: 2 },
        ]]);
        viewer.run();
        assert!((viewer.camera().eye.z - 0.2).abs() < 1e-6);
        // Startup projection plus the resize push.
        let projections = &viewer.display().projections;
        assert_eq!(projections.len(), 2);
        assert!((projections[1].aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn reset_key_restores_default_state() {
        let mut viewer = viewer_with(vec![
            vec![
                InputEvent::Resized {
                    width: 640,
                    height: 480,
                },
                drag(30, -12, Modifiers::NONE),
                drag(-10, 4, Modifiers::SHIFT),
                InputEvent::Wheel { delta: 7 },
            ],
            vec![InputEvent::KeyDown {
                key: "KeyX".into(),
            }],
        ]);
        viewer.run();

        let mut fresh = Camera::default();
        fresh.resize(640, 480);
        assert_eq!(*viewer.camera(), fresh);
        assert_eq!(*viewer.orientation(), OrientationController::new());
    }

    #[test]
    fn model_offset_is_negated_center_over_scale() {
        let viewer = match Viewer::new(
            FakeModel {
                center: Vector3::new(2.0, 4.0, -6.0),
                scale: 2.0,
            },
            RecordingDisplay::default(),
            ScriptedEvents::new(vec![]),
            Options::default(),
        ) {
            Ok(viewer) => viewer,
            Err(e) => unreachable!("viewer must assemble: {e}"),
        };
        assert_eq!(viewer.model_offset(), Vector3::new(-1.0, -2.0, 3.0));
    }

    #[test]
    fn non_positive_model_scale_is_rejected() {
        let result = Viewer::new(
            FakeModel {
                center: Vector3::ZERO,
                scale: 0.0,
            },
            RecordingDisplay::default(),
            ScriptedEvents::new(vec![]),
            Options::default(),
        );
        assert!(matches!(
            result,
            Err(ViewerError::InvalidModelScale(scale)) if scale == 0.0
        ));
    }

    #[test]
    fn frames_carry_resolved_orientation_and_offset() {
        let mut viewer = viewer_with(vec![vec![drag(0, 150, Modifiers::NONE)]]);
        viewer.run();
        let frames = &viewer.display().frames;
        assert_eq!(frames.len(), 2);
        let first = frames[0];
        assert_eq!(first.model_offset, Vector3::ZERO);
        assert!(first.rotation_angle > 0.0);
        assert!((first.rotation_axis - Vector3::X).length() < 1e-4);
        // Orientation holds steady on the idle quit frame.
        assert_eq!(frames[1].rotation_angle, first.rotation_angle);
    }
}
