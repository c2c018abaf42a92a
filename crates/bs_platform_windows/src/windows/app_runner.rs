use std::ffi::c_void;
use std::fmt;

use bs_platform::{WindowId, WindowMessageHandler};
use windows::Win32::UI::WindowsAndMessaging::CREATESTRUCTW;

use crate::EventConverter;
use crate::win_api;
use crate::win32::{
    HWND, LPARAM, LRESULT, WINDOW_EX_STYLE, WM_CLOSE, WM_CREATE, WM_DESTROY, WM_PAINT,
    WNDCLASS_STYLES, WPARAM, WS_EX_LAYERED, WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
};

use super::gdi::GdiPainter;
use super::message_box;

struct CreateParams<F> {
    factory: Option<F>,
}

struct AppState<A> {
    app: A,
}

/// Run `create_app` on a hidden, layered, topmost, full-screen tool window.
///
/// The window stays hidden until the app shows it, so the same runner serves both the overlay
/// and headless (preset) launches. Returns when the window is destroyed.
pub fn run_fullscreen_overlay_app<A, F, E>(
    window_class_name: &str,
    class_style: WNDCLASS_STYLES,
    create_app: F,
) -> windows::core::Result<()>
where
    A: WindowMessageHandler<WindowHandle = WindowId> + 'static,
    F: FnOnce(WindowId, (i32, i32)) -> std::result::Result<A, E>,
    E: fmt::Display,
{
    // Must precede any metric query so sizes are in physical pixels.
    if let Err(e) = win_api::set_process_per_monitor_dpi_aware() {
        log::debug!("DPI awareness not changed: {e:?}");
    }

    let (width, height) = win_api::get_screen_size();

    run_popup_app(
        window_class_name,
        width,
        height,
        class_style,
        WS_EX_TOOLWINDOW | WS_EX_LAYERED | WS_EX_TOPMOST,
        |window| create_app(window, (width, height)),
    )
}

fn run_popup_app<A, F, E>(
    window_class_name: &str,
    width: i32,
    height: i32,
    class_style: WNDCLASS_STYLES,
    ex_style: WINDOW_EX_STYLE,
    create_app: F,
) -> windows::core::Result<()>
where
    A: WindowMessageHandler<WindowHandle = WindowId> + 'static,
    F: FnOnce(WindowId) -> std::result::Result<A, E>,
    E: fmt::Display,
{
    let mut create_params = CreateParams {
        factory: Some(create_app),
    };

    let _hwnd = win_api::create_hidden_popup_with_params(
        window_class_name,
        window_proc::<A, F, E>,
        width,
        height,
        class_style,
        ex_style,
        Some((&mut create_params as *mut CreateParams<F>).cast::<c_void>() as *const c_void),
    )?;

    win_api::run_message_loop();
    Ok(())
}

unsafe extern "system" fn window_proc<A, F, E>(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT
where
    A: WindowMessageHandler<WindowHandle = WindowId> + 'static,
    F: FnOnce(WindowId) -> std::result::Result<A, E>,
    E: fmt::Display,
{
    match msg {
        WM_CREATE => {
            let create_struct = unsafe { &*(lparam.0 as *const CREATESTRUCTW) };
            let create_params = create_struct.lpCreateParams as *mut CreateParams<F>;

            if create_params.is_null() {
                return LRESULT(-1);
            }

            let Some(factory) = (unsafe { (&mut *create_params).factory.take() }) else {
                return LRESULT(-1);
            };

            match factory(super::window_id(hwnd)) {
                Ok(app) => {
                    let state = Box::new(AppState { app });
                    win_api::set_window_user_data(hwnd, Box::into_raw(state) as isize);
                    LRESULT(0)
                }
                Err(e) => {
                    log::error!("app initialization failed: {e}");
                    message_box::show_error(hwnd, "broadcast_screen", &format!("{e}"));
                    LRESULT(-1)
                }
            }
        }

        WM_DESTROY => {
            let ptr = win_api::get_window_user_data(hwnd) as *mut AppState<A>;
            if !ptr.is_null() {
                let _ = unsafe { Box::from_raw(ptr) };
            }
            win_api::set_window_user_data(hwnd, 0);

            win_api::quit_message_loop(0);
            LRESULT(0)
        }

        WM_PAINT => {
            let ptr = win_api::get_window_user_data(hwnd) as *mut AppState<A>;
            if ptr.is_null() {
                return win_api::def_window_proc(hwnd, msg, wparam, lparam);
            }

            let state = unsafe { &mut *ptr };

            // The runner owns the WM_PAINT cycle.
            let ps = win_api::begin_paint(hwnd);
            let client = win_api::get_client_rect(hwnd).unwrap_or(ps.rcPaint);
            let mut painter = GdiPainter::new(ps.hdc, client);
            let result = state
                .app
                .handle_paint(super::window_id(hwnd), &mut painter)
                .unwrap_or(0);
            win_api::end_paint(hwnd, &ps);

            LRESULT(result)
        }

        WM_CLOSE => {
            let ptr = win_api::get_window_user_data(hwnd) as *mut AppState<A>;
            if !ptr.is_null() {
                let state = unsafe { &mut *ptr };
                if let Some(result) = state.app.handle_close_requested(super::window_id(hwnd)) {
                    return LRESULT(result);
                }
            }

            win_api::def_window_proc(hwnd, msg, wparam, lparam)
        }

        _ => {
            let ptr = win_api::get_window_user_data(hwnd) as *mut AppState<A>;
            if !ptr.is_null() {
                let state = unsafe { &mut *ptr };
                let window = super::window_id(hwnd);

                if let Some(event) = EventConverter::convert(msg, wparam, lparam)
                    && let Some(result) = state.app.handle_input_event(window, event)
                {
                    return LRESULT(result);
                }
            }

            win_api::def_window_proc(hwnd, msg, wparam, lparam)
        }
    }
}
