mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Stdout, Write};
use std::process::ExitCode;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use tracing_subscriber::EnvFilter;

use meditating_ninja::audio::{Audio, Music, Sound};
use meditating_ninja::config::GameConfig;
use meditating_ninja::error::GameError;
use meditating_ninja::session::{self, Frontend, Key, Screen};

// ── Input ─────────────────────────────────────────────────────────────────────

/// Decode a terminal key press into a game key.  Letters are upper-cased.
fn decode_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Key::Digit(c as u8 - b'0')),
        KeyCode::Char('-') => Some(Key::Minus),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Key::Letter(c.to_ascii_uppercase())),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

// ── Terminal frontend ─────────────────────────────────────────────────────────

struct TerminalFrontend {
    out: BufWriter<Stdout>,
    rx: mpsc::Receiver<Event>,
    frame: std::time::Duration,
}

impl Frontend for TerminalFrontend {
    /// Drain all pending input events (non-blocking).
    fn poll_keys(&mut self) -> Vec<Key> {
        let mut keys = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event {
                if kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(key) = decode_key(code, modifiers) {
                    keys.push(key);
                }
            }
        }
        keys
    }

    fn render(&mut self, screen: &Screen) -> std::io::Result<()> {
        display::render(&mut self.out, screen)
    }

    fn end_frame(&mut self, frame_start: Instant) {
        let elapsed = frame_start.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

/// A terminal has no mixer: sound effects ring the bell, music is silent.
struct BellAudio {
    music: Option<Music>,
}

impl Audio for BellAudio {
    fn play_sound(&mut self, sound: Sound) {
        tracing::trace!(?sound, "sound");
        let mut out = stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }

    fn play_music(&mut self, music: Music) {
        if self.music != Some(music) {
            tracing::debug!(?music, "music started");
            self.music = Some(music);
        }
    }

    fn stop_music(&mut self) {
        if let Some(music) = self.music.take() {
            tracing::debug!(?music, "music stopped");
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so logs only go to `NINJA_LOG_FILE`.
fn init_logging() {
    let Some(path) = std::env::var_os("NINJA_LOG_FILE") else {
        return;
    };
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("cannot open log file {}: {}", path.to_string_lossy(), e);
            return;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    init_logging();
    let config = GameConfig::from_env();
    tracing::info!(?config, "starting");

    match play(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session failed");
            eprintln!("meditating_ninja: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn play(config: &GameConfig) -> Result<(), GameError> {
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let mut frontend = TerminalFrontend {
        out,
        rx,
        frame: config.frame,
    };
    let mut audio = BellAudio { music: None };
    let result = session::run(config, &mut frontend, &mut audio);

    // Always restore the terminal
    let out = &mut frontend.out;
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
