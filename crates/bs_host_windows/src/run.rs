use bs_platform::WindowId;
use bs_platform_windows::win32::{CS_HREDRAW, CS_OWNDC, CS_VREDRAW, Result};
use bs_platform_windows::windows::{WindowsHostPlatform, run_fullscreen_overlay_app};

use crate::error::AppResult;
use crate::{App, AppContext, WINDOW_CLASS_NAME};

fn create_app(window: WindowId, ctx: AppContext) -> AppResult<App> {
    let mut app = App::new(
        ctx,
        Box::new(WindowsHostPlatform::new()),
        Box::new(WindowsHostPlatform::new()),
    )?;
    app.start(window);
    Ok(app)
}

/// Run the overlay (or a headless preset launch) until the capture has been handled.
pub fn run(ctx: AppContext) -> Result<()> {
    run_fullscreen_overlay_app(
        WINDOW_CLASS_NAME,
        CS_OWNDC | CS_HREDRAW | CS_VREDRAW,
        move |window, _screen_size| create_app(window, ctx),
    )
}
