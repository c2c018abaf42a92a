use bs_app::watcher::Outcome;
use bs_app::{RectI32, StartMode, selection, watcher};
use bs_capture::{CaptureSession, LaunchError};
use bs_platform::{
    HostPlatform, InputEvent, KeyCode, MouseButton, Painter, WindowId, WindowMessageHandler,
    WindowSystem,
};

use crate::Command;
use crate::command_executor::CommandExecutor;
use crate::constants::*;
use crate::context::AppContext;
use crate::core_bridge;
use crate::error::{AppError, AppResult};

/// Hides the overlay and releases the pointer when dropped.
struct OverlayTeardown<'a> {
    host: &'a dyn HostPlatform<WindowHandle = WindowId>,
    window: WindowId,
}

impl Drop for OverlayTeardown<'_> {
    fn drop(&mut self) {
        teardown_overlay(self.host, self.window);
    }
}

/// `error: cause: cause...` on one line.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

fn teardown_overlay(host: &dyn HostPlatform<WindowHandle = WindowId>, window: WindowId) {
    host.release_mouse();
    if let Err(e) = host.hide_window(window) {
        log::warn!("failed to hide the overlay: {e}");
    }
}

/// Overlay host.
///
/// Owns the run's [`AppContext`] and both core models, and turns their effects into platform
/// side effects on the single UI thread.
pub struct App {
    ctx: AppContext,

    /// Drag-to-select model (platform-neutral).
    selection: selection::Model,
    /// Created once a capture has been attempted.
    watcher: Option<watcher::Model>,
    session: Option<CaptureSession>,

    /// Host-facing platform side effects (window ops, timers, dialogs).
    host_platform: Box<dyn HostPlatform<WindowHandle = WindowId>>,
    window_system: Box<dyn WindowSystem>,

    screen_size: (i32, i32),
    overlay_visible: bool,
}

impl App {
    pub fn new(
        ctx: AppContext,
        host_platform: Box<dyn HostPlatform<WindowHandle = WindowId>>,
        window_system: Box<dyn WindowSystem>,
    ) -> AppResult<Self> {
        let screen_size = host_platform.screen_size();
        if screen_size.0 <= 0 || screen_size.1 <= 0 {
            return Err(AppError::Init(format!(
                "screen size unavailable ({}x{})",
                screen_size.0, screen_size.1
            )));
        }

        Ok(Self {
            ctx,
            selection: selection::Model::default(),
            watcher: None,
            session: None,
            host_platform,
            window_system,
            screen_size,
            overlay_visible: false,
        })
    }

    pub(crate) fn host_platform(&self) -> &dyn HostPlatform<WindowHandle = WindowId> {
        self.host_platform.as_ref()
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn watcher_phase(&self) -> Option<&watcher::Phase> {
        self.watcher.as_ref().map(watcher::Model::phase)
    }

    /// Kick off the run: schedule the overlay, or launch the stored region right away.
    pub fn start(&mut self, window: WindowId) {
        let commands = match self.ctx.start_mode {
            StartMode::Interactive => vec![Command::StartTimer(
                TIMER_OVERLAY_DELAY_ID,
                self.ctx.settings.overlay_delay_ms,
            )],
            StartMode::Direct(region) => vec![Command::Launch(region)],
        };
        self.execute_command_chain(commands, window);
    }

    pub(crate) fn dispatch_selection(&mut self, action: selection::Action) -> Vec<Command> {
        core_bridge::dispatch_selection(&mut self.selection, action)
    }

    pub(crate) fn dispatch_watcher(&mut self, action: watcher::Action) -> Vec<Command> {
        match self.watcher.as_mut() {
            Some(core) => core_bridge::dispatch_watcher(core, action),
            None => vec![],
        }
    }

    pub(crate) fn show_overlay(&mut self, window: WindowId) -> AppResult<()> {
        let (width, height) = self.screen_size;

        // A layered window stays invisible until its alpha is set.
        self.host_platform
            .set_window_alpha(window, self.ctx.settings.overlay_alpha)?;
        self.host_platform
            .set_window_topmost(window, 0, 0, width, height)?;
        self.host_platform.show_window(window)?;

        self.overlay_visible = true;
        log::debug!("overlay shown ({width}x{height})");
        Ok(())
    }

    pub(crate) fn hide_overlay(&mut self, window: WindowId) {
        if self.overlay_visible {
            teardown_overlay(self.host_platform.as_ref(), window);
            self.overlay_visible = false;
        }
    }

    pub(crate) fn launch(&mut self, window: WindowId, region: RectI32) -> Vec<Command> {
        let result = {
            let _teardown = self.overlay_visible.then(|| OverlayTeardown {
                host: self.host_platform.as_ref(),
                window,
            });
            self.ctx.launcher.launch(region)
        };
        self.overlay_visible = false;

        match result {
            Ok(session) => {
                log::info!(
                    "capture started (pid {}), waiting for its window",
                    session.process.pid
                );
                self.session = Some(session);
                self.watcher = Some(self.ctx.new_watcher());
                vec![Command::Watcher(watcher::Action::Spawned)]
            }
            Err(e @ LaunchError::DegenerateRegion { .. }) => {
                log::warn!("nothing to capture: {e}");
                vec![Command::Quit]
            }
            Err(e) => {
                self.watcher = Some(self.ctx.new_watcher());
                vec![
                    Command::ShowError(error_chain(&e)),
                    Command::Watcher(watcher::Action::SpawnFailed),
                ]
            }
        }
    }

    pub(crate) fn poll_windows(&mut self) -> Vec<Command> {
        let windows = match self.window_system.list_windows() {
            Ok(windows) => windows,
            Err(e) => {
                log::warn!("{e}");
                Vec::new()
            }
        };
        vec![Command::Watcher(watcher::Action::Poll { windows })]
    }

    pub(crate) fn lower_window(&mut self, target: WindowId) {
        match self.window_system.lower_window(target) {
            Ok(()) => log::debug!("lowered window {:#x}", target.raw()),
            Err(e) => log::warn!("failed to lower window {:#x}: {e}", target.raw()),
        }
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::Demoted => log::info!("capture window moved to the back"),
            Outcome::TimedOut => log::warn!(
                "no window matching '{}' appeared, leaving the capture where it is",
                self.ctx.settings.window_title_marker
            ),
            Outcome::SpawnFailed => {}
        }

        if outcome != Outcome::SpawnFailed && self.ctx.should_save_preset() {
            self.save_preset();
        }

        vec![Command::Quit]
    }

    fn save_preset(&self) {
        let Some(session) = self.session else {
            return;
        };
        if let Err(e) = self.ctx.store.save(&self.ctx.preset_name, session.region) {
            log::error!(
                "failed to save preset '{}': {}",
                self.ctx.preset_name,
                error_chain(&e)
            );
        }
    }

    fn paint(&self, painter: &mut dyn Painter) {
        painter.fill_background(OVERLAY_BACKGROUND);

        if let Some((_, rect)) = self.selection.active_marker() {
            painter.draw_rect(
                rect.anchor_x,
                rect.anchor_y,
                rect.x,
                rect.y,
                MARKER_FILL,
                MARKER_OUTLINE,
                MARKER_OUTLINE_WIDTH,
            );
        }
    }

    fn commands_for_input(&self, event: InputEvent) -> Option<Vec<Command>> {
        match event {
            InputEvent::Timer { id } if id == TIMER_OVERLAY_DELAY_ID => Some(vec![
                Command::StopTimer(TIMER_OVERLAY_DELAY_ID),
                Command::ShowOverlay,
            ]),
            InputEvent::Timer { id } if id == TIMER_WATCH_POLL_ID => {
                Some(vec![Command::PollWindows])
            }

            _ if !self.overlay_visible => None,

            InputEvent::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } => Some(vec![
                Command::CaptureMouse,
                Command::Selection(selection::Action::MouseDown { x, y }),
            ]),
            InputEvent::MouseMove { x, y } => {
                Some(vec![Command::Selection(selection::Action::MouseMove {
                    x,
                    y,
                })])
            }
            InputEvent::MouseUp {
                x,
                y,
                button: MouseButton::Left,
            } => Some(vec![
                Command::ReleaseMouse,
                Command::Selection(selection::Action::MouseUp { x, y }),
            ]),
            InputEvent::KeyDown { key } if key == KeyCode::ESCAPE => Some(vec![Command::Cancel]),

            _ => None,
        }
    }
}

impl WindowMessageHandler for App {
    type WindowHandle = WindowId;

    fn handle_input_event(&mut self, window: WindowId, event: InputEvent) -> Option<isize> {
        let commands = self.commands_for_input(event)?;
        self.execute_command_chain(commands, window);
        Some(0)
    }

    fn handle_paint(&mut self, _window: WindowId, painter: &mut dyn Painter) -> Option<isize> {
        if self.overlay_visible {
            self.paint(painter);
        }
        Some(0)
    }

    fn handle_close_requested(&mut self, window: WindowId) -> Option<isize> {
        let _ = self.host_platform.stop_timer(window, TIMER_OVERLAY_DELAY_ID);
        let _ = self.host_platform.stop_timer(window, TIMER_WATCH_POLL_ID);
        self.hide_overlay(window);
        None
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    use bs_capture::{CaptureCommand, CaptureProcess, CaptureSpawner, Launcher};
    use bs_platform::{PlatformServicesError, Rgb, TopLevelWindow};
    use bs_settings::{PresetStore, Presets, Settings};

    use super::*;

    const WINDOW: WindowId = WindowId::INVALID;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Show,
        Hide,
        Topmost(i32, i32, i32, i32),
        Alpha(u8),
        StartTimer(u32, u32),
        StopTimer(u32),
        Redraw,
        Capture,
        Release,
        Close,
        Error(String),
        Lower(usize),
    }

    type Calls = Rc<RefCell<Vec<Call>>>;

    struct FakePlatform {
        calls: Calls,
        screen: (i32, i32),
    }

    impl HostPlatform for FakePlatform {
        type WindowHandle = WindowId;

        fn screen_size(&self) -> (i32, i32) {
            self.screen
        }

        fn show_window(&self, _window: WindowId) -> Result<(), PlatformServicesError> {
            self.calls.borrow_mut().push(Call::Show);
            Ok(())
        }

        fn hide_window(&self, _window: WindowId) -> Result<(), PlatformServicesError> {
            self.calls.borrow_mut().push(Call::Hide);
            Ok(())
        }

        fn set_window_topmost(
            &self,
            _window: WindowId,
            x: i32,
            y: i32,
            width: i32,
            height: i32,
        ) -> Result<(), PlatformServicesError> {
            self.calls
                .borrow_mut()
                .push(Call::Topmost(x, y, width, height));
            Ok(())
        }

        fn set_window_alpha(
            &self,
            _window: WindowId,
            alpha: u8,
        ) -> Result<(), PlatformServicesError> {
            self.calls.borrow_mut().push(Call::Alpha(alpha));
            Ok(())
        }

        fn start_timer(
            &self,
            _window: WindowId,
            timer_id: u32,
            interval_ms: u32,
        ) -> Result<(), PlatformServicesError> {
            self.calls
                .borrow_mut()
                .push(Call::StartTimer(timer_id, interval_ms));
            Ok(())
        }

        fn stop_timer(&self, _window: WindowId, timer_id: u32) -> Result<(), PlatformServicesError> {
            self.calls.borrow_mut().push(Call::StopTimer(timer_id));
            Ok(())
        }

        fn request_redraw(&self, _window: WindowId) -> Result<(), PlatformServicesError> {
            self.calls.borrow_mut().push(Call::Redraw);
            Ok(())
        }

        fn capture_mouse(&self, _window: WindowId) {
            self.calls.borrow_mut().push(Call::Capture);
        }

        fn release_mouse(&self) {
            self.calls.borrow_mut().push(Call::Release);
        }

        fn request_close(&self, _window: WindowId) -> Result<(), PlatformServicesError> {
            self.calls.borrow_mut().push(Call::Close);
            Ok(())
        }

        fn show_error_message(&self, _window: WindowId, _title: &str, message: &str) {
            self.calls
                .borrow_mut()
                .push(Call::Error(message.to_string()));
        }
    }

    struct FakeWindows {
        calls: Calls,
        /// Returned by successive `list_windows` calls; empty once drained.
        script: RefCell<Vec<Vec<TopLevelWindow>>>,
    }

    impl WindowSystem for FakeWindows {
        fn list_windows(&self) -> Result<Vec<TopLevelWindow>, PlatformServicesError> {
            let mut script = self.script.borrow_mut();
            if script.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(script.remove(0))
            }
        }

        fn lower_window(&self, window: WindowId) -> Result<(), PlatformServicesError> {
            self.calls.borrow_mut().push(Call::Lower(window.raw()));
            Ok(())
        }
    }

    struct RecordingSpawner {
        spawned: Rc<RefCell<Vec<CaptureCommand>>>,
        fail: bool,
    }

    impl CaptureSpawner for RecordingSpawner {
        fn spawn(&self, command: &CaptureCommand) -> Result<CaptureProcess, LaunchError> {
            if self.fail {
                return Err(LaunchError::Spawn {
                    program: command.program.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
                });
            }
            self.spawned.borrow_mut().push(command.clone());
            Ok(CaptureProcess { pid: 99 })
        }
    }

    struct Harness {
        app: App,
        calls: Calls,
        spawned: Rc<RefCell<Vec<CaptureCommand>>>,
        store: PresetStore,
        _dir: tempfile::TempDir,
    }

    struct Setup {
        preset_name: &'static str,
        stored: Option<RectI32>,
        fail_spawn: bool,
        max_poll_attempts: u32,
        script: Vec<Vec<TopLevelWindow>>,
    }

    impl Default for Setup {
        fn default() -> Self {
            Self {
                preset_name: "",
                stored: None,
                fail_spawn: false,
                max_poll_attempts: 600,
                script: Vec::new(),
            }
        }
    }

    fn vlc_window(raw: usize) -> TopLevelWindow {
        TopLevelWindow {
            id: WindowId::from_raw(raw),
            title: "VLC (Direct3D11 output)".to_string(),
        }
    }

    fn harness(setup: Setup) -> Harness {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::new(dir.path().join("config.yaml"));
        if let Some(region) = setup.stored {
            store.save(setup.preset_name, region).unwrap();
        }
        let presets: Presets = store.load().unwrap();

        let settings = Settings {
            max_poll_attempts: setup.max_poll_attempts,
            ..Settings::default()
        };

        let spawned = Rc::new(RefCell::new(Vec::new()));
        let launcher = Launcher::new(
            settings.capture_program.clone(),
            settings.fps,
            Box::new(RecordingSpawner {
                spawned: Rc::clone(&spawned),
                fail: setup.fail_spawn,
            }),
        );
        let ctx = AppContext::new(settings, store.clone(), &presets, setup.preset_name, launcher);

        let calls: Calls = Rc::new(RefCell::new(Vec::new()));
        let app = App::new(
            ctx,
            Box::new(FakePlatform {
                calls: Rc::clone(&calls),
                screen: (1920, 1080),
            }),
            Box::new(FakeWindows {
                calls: Rc::clone(&calls),
                script: RefCell::new(setup.script),
            }),
        )
        .unwrap();

        Harness {
            app,
            calls,
            spawned,
            store,
            _dir: dir,
        }
    }

    impl Harness {
        fn send(&mut self, event: InputEvent) -> Option<isize> {
            self.app.handle_input_event(WINDOW, event)
        }

        fn open_overlay(&mut self) {
            self.app.start(WINDOW);
            self.send(InputEvent::Timer {
                id: TIMER_OVERLAY_DELAY_ID,
            });
        }

        fn drag(&mut self, from: (i32, i32), to: (i32, i32)) {
            self.send(InputEvent::MouseDown {
                x: from.0,
                y: from.1,
                button: MouseButton::Left,
            });
            self.send(InputEvent::MouseMove { x: to.0, y: to.1 });
            self.send(InputEvent::MouseUp {
                x: to.0,
                y: to.1,
                button: MouseButton::Left,
            });
        }

        fn poll(&mut self) {
            self.send(InputEvent::Timer {
                id: TIMER_WATCH_POLL_ID,
            });
        }

        fn called(&self, call: &Call) -> bool {
            self.calls.borrow().contains(call)
        }

        fn count(&self, call: &Call) -> usize {
            self.calls.borrow().iter().filter(|c| *c == call).count()
        }
    }

    #[test]
    fn interactive_start_shows_translucent_fullscreen_overlay_after_delay() {
        let mut h = harness(Setup::default());

        h.app.start(WINDOW);
        assert_eq!(
            h.calls.borrow().as_slice(),
            &[Call::StartTimer(TIMER_OVERLAY_DELAY_ID, 250)]
        );
        assert!(!h.app.is_overlay_visible());

        h.send(InputEvent::Timer {
            id: TIMER_OVERLAY_DELAY_ID,
        });

        assert!(h.app.is_overlay_visible());
        assert_eq!(
            &h.calls.borrow()[1..],
            &[
                Call::StopTimer(TIMER_OVERLAY_DELAY_ID),
                Call::Alpha(51),
                Call::Topmost(0, 0, 1920, 1080),
                Call::Show,
                Call::Redraw,
            ]
        );
    }

    #[test]
    fn mouse_input_is_ignored_until_the_overlay_is_shown() {
        let mut h = harness(Setup::default());
        h.app.start(WINDOW);

        let handled = h.send(InputEvent::MouseDown {
            x: 1,
            y: 1,
            button: MouseButton::Left,
        });

        assert_eq!(handled, None);
        assert!(!h.called(&Call::Capture));
    }

    #[test]
    fn release_launches_capture_and_tears_down_overlay() {
        let mut h = harness(Setup::default());
        h.open_overlay();

        h.drag((300, 400), (100, 50));

        let spawned = h.spawned.borrow();
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].region, RectI32::new(100, 50, 300, 400));
        assert!(h.called(&Call::Capture));
        assert!(h.called(&Call::Release));
        assert!(h.called(&Call::Hide));
        assert!(h.called(&Call::StartTimer(TIMER_WATCH_POLL_ID, 100)));
        assert!(!h.app.is_overlay_visible());
        assert_eq!(
            h.app.watcher_phase(),
            Some(&watcher::Phase::WaitingForWindow { attempts: 0 })
        );
    }

    #[test]
    fn capture_window_is_lowered_and_named_selection_saved() {
        let mut h = harness(Setup {
            preset_name: "studio",
            script: vec![Vec::new(), vec![vlc_window(0x42)]],
            ..Setup::default()
        });
        h.open_overlay();
        h.drag((0, 0), (640, 480));

        h.poll();
        assert!(!h.called(&Call::Close));

        h.poll();
        assert!(h.called(&Call::Lower(0x42)));
        assert!(h.called(&Call::StopTimer(TIMER_WATCH_POLL_ID)));
        assert_eq!(h.count(&Call::Close), 1);
        assert_eq!(
            h.store.load().unwrap().get("studio"),
            Some(RectI32::new(0, 0, 640, 480))
        );
    }

    #[test]
    fn escape_cancels_without_launching() {
        let mut h = harness(Setup {
            preset_name: "studio",
            ..Setup::default()
        });
        h.open_overlay();
        h.send(InputEvent::MouseDown {
            x: 5,
            y: 5,
            button: MouseButton::Left,
        });

        h.send(InputEvent::KeyDown {
            key: KeyCode::ESCAPE,
        });

        assert!(h.spawned.borrow().is_empty());
        assert!(h.called(&Call::Hide));
        assert!(h.called(&Call::Close));
        assert!(!h.app.is_overlay_visible());
        assert!(h.store.load().unwrap().is_empty());
    }

    #[test]
    fn click_without_drag_spawns_nothing_and_saves_nothing() {
        let mut h = harness(Setup {
            preset_name: "studio",
            ..Setup::default()
        });
        h.open_overlay();

        h.drag((10, 10), (10, 10));

        assert!(h.spawned.borrow().is_empty());
        assert!(h.called(&Call::Hide));
        assert!(h.called(&Call::Close));
        assert!(h.app.watcher_phase().is_none());
        assert!(h.store.load().unwrap().is_empty());
    }

    #[test]
    fn spawn_failure_reports_and_skips_preset() {
        let mut h = harness(Setup {
            preset_name: "studio",
            fail_spawn: true,
            ..Setup::default()
        });
        h.open_overlay();

        h.drag((0, 0), (100, 100));

        assert!(
            h.calls
                .borrow()
                .iter()
                .any(|c| matches!(c, Call::Error(msg) if msg == "failed to start vlc: program not found"))
        );
        assert!(h.called(&Call::Close));
        assert!(!h.called(&Call::StartTimer(TIMER_WATCH_POLL_ID, 100)));
        assert_eq!(
            h.app.watcher_phase(),
            Some(&watcher::Phase::Failed {
                outcome: Outcome::SpawnFailed,
                attempts: 0
            })
        );
        assert!(h.store.load().unwrap().is_empty());
    }

    #[test]
    fn timeout_still_saves_the_preset() {
        let mut h = harness(Setup {
            preset_name: "studio",
            max_poll_attempts: 2,
            ..Setup::default()
        });
        h.open_overlay();
        h.drag((0, 0), (200, 100));

        h.poll();
        h.poll();

        assert!(h.called(&Call::Close));
        assert!(!h.calls.borrow().iter().any(|c| matches!(c, Call::Lower(_))));
        assert_eq!(
            h.store.load().unwrap().get("studio"),
            Some(RectI32::new(0, 0, 200, 100))
        );
    }

    #[test]
    fn known_preset_launches_immediately_without_overlay() {
        let mut h = harness(Setup {
            preset_name: "office",
            stored: Some(RectI32::new(0, 0, 1920, 1080)),
            script: vec![vec![vlc_window(7)]],
            ..Setup::default()
        });

        h.app.start(WINDOW);

        assert!(!h.called(&Call::StartTimer(TIMER_OVERLAY_DELAY_ID, 250)));
        assert!(!h.called(&Call::Show));
        let spawned = h.spawned.borrow().clone();
        assert_eq!(spawned.len(), 1);
        assert!(spawned[0].args.contains(&"--screen-width=1920".to_string()));

        h.poll();
        assert!(h.called(&Call::Lower(7)));
        assert!(h.called(&Call::Close));
    }

    #[test]
    fn paint_draws_background_and_live_marker() {
        #[derive(Default)]
        struct RecordingPainter {
            background: Option<Rgb>,
            rects: Vec<(i32, i32, i32, i32)>,
        }

        impl Painter for RecordingPainter {
            fn fill_background(&mut self, color: Rgb) {
                self.background = Some(color);
            }

            fn draw_rect(
                &mut self,
                left: i32,
                top: i32,
                right: i32,
                bottom: i32,
                _fill: Rgb,
                _outline: Rgb,
                _outline_width: i32,
            ) {
                self.rects.push((left, top, right, bottom));
            }
        }

        let mut h = harness(Setup::default());
        h.open_overlay();
        h.send(InputEvent::MouseDown {
            x: 50,
            y: 60,
            button: MouseButton::Left,
        });
        h.send(InputEvent::MouseMove { x: 10, y: 20 });

        let mut painter = RecordingPainter::default();
        h.app.handle_paint(WINDOW, &mut painter);

        assert_eq!(painter.background, Some(OVERLAY_BACKGROUND));
        assert_eq!(painter.rects, vec![(50, 60, 10, 20)]);
    }

    #[test]
    fn zero_screen_size_is_an_init_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::new(dir.path().join("config.yaml"));
        let ctx = AppContext::with_system_launcher(Settings::default(), store, &Presets::new(), "");
        let calls: Calls = Rc::new(RefCell::new(Vec::new()));

        let result = App::new(
            ctx,
            Box::new(FakePlatform {
                calls: Rc::clone(&calls),
                screen: (0, 0),
            }),
            Box::new(FakeWindows {
                calls,
                script: RefCell::new(Vec::new()),
            }),
        );

        assert!(matches!(result, Err(AppError::Init(_))));
    }
}
