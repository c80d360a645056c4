use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::process;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod bootstrap;
mod constants;
mod credits;
mod desktop;
mod error;
mod menu;
mod render;
mod texture_loader;

use crate::bootstrap::{
    Paths, Shutdown, init_directories, init_logging, install_crash_handler, install_signal_handler,
    program_description,
};
use crate::constants::*;
use crate::credits::CreditsDesktop;
use crate::credits::script::build_pages;
use crate::desktop::{Desktop, Frame, InputEvent, Switch};
use crate::error::{AppError, EXIT_CRASH, EXIT_SETUP};
use crate::menu::MainMenuDesktop;
use crate::render::{Point, RaylibCanvas};
use crate::texture_loader::Assets;

#[derive(Parser, Debug)]
#[command(name = "rttr-credits", version, about = "Return To The Roots credits screen")]
struct Options {
    /// Directory with portraits, sprite sheets and backgrounds
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Directory for settings, logs and screenshots
    #[arg(long)]
    home: Option<PathBuf>,

    /// Width of the render texture
    #[arg(long, default_value_t = RENDER_WIDTH, value_parser = clap::value_parser!(i32).range(320..))]
    width: i32,

    /// Height of the render texture
    #[arg(long, default_value_t = RENDER_HEIGHT, value_parser = clap::value_parser!(i32).range(240..))]
    height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Start on the credits instead of the main menu
    #[arg(long)]
    credits: bool,

    /// Seed for the decoration randomness
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let options = Options::parse();
    // Flushes the log file; process::exit skips destructors
    let mut log_guard = None;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run(&options, &mut log_guard)));
    let code = exit_code(outcome);
    drop(log_guard);
    process::exit(code);
}

/// Process exit code for the outcome of [`run`].
fn exit_code(outcome: Result<Result<(), AppError>, Box<dyn Any + Send>>) -> i32 {
    match outcome {
        Ok(Ok(())) => 0,
        Ok(Err(e)) => {
            // Setup errors can happen before the logger exists
            if e.exit_code() == EXIT_SETUP {
                eprintln!("Error: {}", e);
            } else {
                error!("{}", e);
            }
            e.exit_code()
        }
        Err(_) => EXIT_CRASH,
    }
}

fn run(options: &Options, log_guard: &mut Option<WorkerGuard>) -> Result<(), AppError> {
    let cwd = std::env::current_dir().map(|p| p.display().to_string()).unwrap_or_default();
    println!("Starting in {}", cwd);

    let paths = Paths::resolve(options.home.as_deref());
    init_directories(&paths)?;
    *log_guard = Some(init_logging(&paths, &options.log_level)?);
    install_crash_handler();
    let shutdown = Shutdown::default();
    if let Err(e) = install_signal_handler(&shutdown) {
        warn!("Ctrl-C will not shut down cleanly: {}", e);
    }
    info!("{}", program_description());
    info!("Starting in {}, writing to {}", cwd, paths.home.display());

    let (width, height) = (options.width, options.height);
    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title("Return To The Roots")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(options.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape is handled by the desktops
    rl.set_exit_key(None);

    let assets = Assets::load(&mut rl, &thread, &options.assets)
        .map_err(|e| AppError::GameData(format!("{:#}", e)))?;

    let mut framebuffer = rl.load_render_texture(&thread, width as u32, height as u32)
        .map_err(|e| AppError::Window(e.to_string()))?;

    let start = if options.credits { Switch::Credits } else { Switch::MainMenu };
    let Some(mut desktop) = open_desktop(start, &assets, options, now_ms(&rl))? else {
        return Ok(());
    };
    desktop.activate(now_ms(&rl));

    // --- Main Loop ---
    while keep_running(rl.window_should_close(), &shutdown) {
        let frame = Frame { now: now_ms(&rl), fps: rl.get_fps(), width, height };

        let switch = poll_input(&mut rl, width, height)
            .into_iter()
            .find_map(|event| desktop.handle_input(event, &frame));

        if let Some(switch) = switch {
            info!("Switching to {:?}", switch);
            match open_desktop(switch, &assets, options, frame.now)? {
                Some(next) => {
                    desktop = next;
                    desktop.activate(frame.now);
                }
                None => break,
            }
        }

        desktop.update(&frame);

        // --- Render each frame into fixed size "framebuffer" ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut canvas = RaylibCanvas::new(&mut tmd, &assets, width, height);
            desktop.draw(&mut canvas, &frame);
        });

        // --- Scale the framebuffer to the window ---
        let mut d = rl.begin_drawing(&thread);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("Shutting down");
    Ok(())
}

fn keep_running(window_closed: bool, shutdown: &Shutdown) -> bool {
    !window_closed && !shutdown.is_requested()
}

fn now_ms(rl: &RaylibHandle) -> u64 {
    (rl.get_time() * 1000.0) as u64
}

/// Builds the desktop a switch asks for. `None` means the program should end.
fn open_desktop(switch: Switch, assets: &Assets, options: &Options, now: u64) -> Result<Option<Box<dyn Desktop>>, AppError> {
    let desktop: Box<dyn Desktop> = match switch {
        Switch::Quit => return Ok(None),
        Switch::MainMenu => Box::new(MainMenuDesktop::new(assets.background(), program_description())),
        Switch::Credits => {
            let pages = build_pages(|name| assets.portrait_or_default(name));
            let rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            Box::new(CreditsDesktop::new(pages, assets.background(), rng, now)?)
        }
    };
    Ok(Some(desktop))
}

/// Collects this frame's input in render texture coordinates.
fn poll_input(rl: &mut RaylibHandle, width: i32, height: i32) -> Vec<InputEvent> {
    let mut events = Vec::new();

    while let Some(key) = rl.get_key_pressed() {
        events.push(if key == KeyboardKey::KEY_ESCAPE { InputEvent::Close } else { InputEvent::KeyDown });
    }

    let mouse = rl.get_mouse_position();
    let sw = rl.get_screen_width().max(1) as f32;
    let sh = rl.get_screen_height().max(1) as f32;
    let at = Point::new((mouse.x * width as f32 / sw) as i32, (mouse.y * height as f32 / sh) as i32);

    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(InputEvent::LeftUp(at));
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_RIGHT) {
        events.push(InputEvent::RightUp(at));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::try_parse_from(["rttr-credits"]).unwrap();
        assert_eq!(options.assets, PathBuf::from("assets"));
        assert_eq!((options.width, options.height), (800, 600));
        assert_eq!(options.fps, 60);
        assert_eq!(options.log_level, "info");
        assert!(!options.credits);
        assert!(options.home.is_none());
        assert!(options.seed.is_none());
    }

    #[test]
    fn overrides() {
        let options = Options::try_parse_from([
            "rttr-credits", "--assets", "/data/rttr", "--home", "/tmp/h", "--width", "1024", "--height", "768",
            "--credits", "--seed", "9",
        ])
        .unwrap();
        assert_eq!(options.assets, PathBuf::from("/data/rttr"));
        assert_eq!(options.home, Some(PathBuf::from("/tmp/h")));
        assert_eq!((options.width, options.height), (1024, 768));
        assert!(options.credits);
        assert_eq!(options.seed, Some(9));
    }

    #[test]
    fn tiny_window_is_rejected() {
        assert!(Options::try_parse_from(["rttr-credits", "--width", "100"]).is_err());
    }

    #[test]
    fn interrupt_ends_the_loop_cleanly() {
        let shutdown = Shutdown::default();
        assert!(keep_running(false, &shutdown));
        assert!(!keep_running(true, &shutdown));

        shutdown.clone().request();
        assert!(!keep_running(false, &shutdown));
        // The loop then returns normally
        assert_eq!(exit_code(Ok(Ok(()))), 0);
    }

    #[test]
    fn exit_codes_of_run_outcomes() {
        assert_eq!(exit_code(Ok(Err(AppError::GameData("bad sheet".into())))), 2);
        assert_eq!(exit_code(Ok(Err(AppError::Logger("twice".into())))), 1);
        let crash: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(exit_code(Err(crash)), EXIT_CRASH);
    }

    #[test]
    fn quit_opens_nothing() {
        let options = Options::try_parse_from(["rttr-credits"]).unwrap();
        let assets = Assets::default();
        assert!(open_desktop(Switch::Quit, &assets, &options, 0).unwrap().is_none());
        assert!(open_desktop(Switch::MainMenu, &assets, &options, 0).unwrap().is_some());
        assert!(open_desktop(Switch::Credits, &assets, &options, 0).unwrap().is_some());
    }
}
