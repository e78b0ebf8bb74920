mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{info, Level};

use pixel_invaders::assets::Assets;
use pixel_invaders::canvas::RasterCanvas;
use pixel_invaders::compute::{init_state, render, tick};
use pixel_invaders::config::GameConfig;
use pixel_invaders::input::{FireTrigger, InputMailbox};

/// Software-rasterized alien invasion in the terminal.
#[derive(Parser, Debug)]
#[command(name = "pixel_invaders")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Simulation frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Canvas pixels per terminal column (nearest-neighbour down-sampling)
    #[arg(short, long, default_value_t = 2)]
    scale: usize,

    /// Maximum bullets in flight
    #[arg(long)]
    max_bullets: Option<usize>,

    /// Pixels moved per frame per held direction key
    #[arg(long)]
    player_speed: Option<i32>,

    /// Write logs to this file (the terminal itself is busy drawing)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        if let Some(max_bullets) = self.max_bullets {
            config.max_bullets = max_bullets;
        }
        if let Some(speed) = self.player_speed {
            config.player_speed = speed;
        }
        config
    }

    fn frame(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key counts as "held" if its last press/repeat event arrived within this
/// many frames.  Covers terminals that never report key releases: OS key
/// repeat refreshes the entry before it expires.
const HOLD_WINDOW: u64 = 8;

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

/// Net movement over every held direction key; two right keys give +2.
fn held_movement(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> i32 {
    let count = |keys: &[KeyCode]| keys.iter().filter(|k| is_held(key_frame, k, frame)).count() as i32;
    count(&RIGHT_KEYS) - count(&LEFT_KEYS)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Each frame: drain key events into the mailbox, render the current state,
/// present it, then advance the simulation with that frame's signals.
/// Render always reads the pre-update state.
///
/// Fire is edge-triggered.  On keyboard-enhancement terminals (kitty,
/// Ghostty, ...) the shot is latched on Space *release*; elsewhere it is
/// latched on press until a release event shows up.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    cli: &Cli,
    keyboard_enhanced: bool,
) -> Result<()> {
    let config = cli.game_config();
    let assets = Assets::standard().context("loading sprites")?;
    let mut state = init_state(&config, &assets).context("building initial state")?;
    let mut canvas = RasterCanvas::new(config.width, config.height, config.clear_color)?;
    let mut mailbox = InputMailbox::new();
    let mut trigger = FireTrigger::new(keyboard_enhanced);

    info!(
        width = config.width,
        height = config.height,
        aliens = state.aliens.len(),
        keyboard_enhanced,
        "game started"
    );

    let frame_len = cli.frame();
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            info!(frame = state.frame, living = state.living_aliens(), "quit");
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char(' ') => trigger.press(&mut mailbox),
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                    if code == KeyCode::Char(' ') {
                        trigger.release(&mut mailbox);
                    }
                }
            }
        }
        mailbox.set_movement(held_movement(&key_frame, frame));

        render(&state, &assets, &config, &mut canvas);
        display::present(out, &canvas, cli.scale)?;

        let signals = mailbox.take();
        state = tick(&state, &assets, &config, &signals);

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::Clear(terminal::ClearType::All))?;

    // Pushing the flags only writes an escape sequence, so ask the terminal
    // first.  Without the protocol there are no release events.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
            .is_ok();

    // Dedicate a thread to blocking event reads so the frame loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &cli, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("shutdown");
    result
}
