/// Rendering layer — all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable view of a
/// screen.  No game logic is performed; this module only translates screen
/// state into terminal commands.  Play-field pixels are scaled onto the
/// terminal grid.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use meditating_ninja::entities::{
    Difficulty, Direction, Enemy, MovingEntity, Projectile, FIELD_WIDTH,
};
use meditating_ninja::game::{GamePhase, GameScreen};
use meditating_ninja::menu::{HighScoresScreen, MenuScreen, MAX_NAME_LEN, MENU_BUTTONS, RULES};
use meditating_ninja::session::Screen;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Yellow;
const C_TEXT: Color = Color::White;
const C_BUTTON: Color = Color::Grey;
const C_BUTTON_ACTIVE: Color = Color::Black;
const C_BUTTON_ACTIVE_BG: Color = Color::Grey;
const C_WARNING: Color = Color::Red;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_AMMO: Color = Color::Cyan;
const C_INPUT_BOX: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_PROJECTILE: Color = Color::Cyan;
const C_GROUND: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;

const TITLE: &str = "The Meditating Ninja";
const BACK_HINT: &str = "Press Q to go back.";

/// Rows used by the panel above the play field.
const PANEL_ROWS: u16 = 4;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame of whichever screen is active.
pub fn render<W: Write>(out: &mut W, screen: &Screen) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match screen {
        Screen::Menu(menu) => draw_menu(out, menu, width)?,
        Screen::Game(game) => draw_game(out, game, width, height)?,
        Screen::Rules(_) => draw_rules(out, width)?,
        Screen::HighScores(scores) => draw_high_scores(out, scores, width)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn print_at<W: Write>(out: &mut W, col: u16, row: u16, color: Color, text: &str) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn centred_col(width: u16, text: &str) -> u16 {
    (width / 2).saturating_sub(text.chars().count() as u16 / 2)
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, menu: &MenuScreen, width: u16) -> std::io::Result<()> {
    print_at(out, centred_col(width, TITLE), 1, C_TITLE, TITLE)?;

    let name = &menu.state.player_name;
    print_at(out, 2, 4, C_TEXT, "ENTER NAME: ")?;
    out.queue(style::SetBackgroundColor(Color::White))?;
    print_at(out, 14, 4, Color::Black, &format!("{:<width$}", name, width = MAX_NAME_LEN))?;
    out.queue(style::SetBackgroundColor(Color::Reset))?;

    let warning_color = if menu.name_required() { C_WARNING } else { C_HINT };
    print_at(out, 14, 5, warning_color, "Type your name before playing.")?;

    for (i, (label, _)) in MENU_BUTTONS.iter().enumerate() {
        let row = 8 + i as u16 * 2;
        let text = format!("  {:<14}", label);
        if i == menu.active_button() {
            out.queue(style::SetBackgroundColor(C_BUTTON_ACTIVE_BG))?;
            print_at(out, 2, row, C_BUTTON_ACTIVE, &text)?;
            out.queue(style::SetBackgroundColor(Color::Reset))?;
        } else {
            print_at(out, 2, row, C_BUTTON, &text)?;
        }
    }

    let sprite_col = (width / 2).max(24);
    draw_ninja_sprite(out, sprite_col, 9)?;

    print_at(out, 2, 17, C_HINT, "↑ ↓ : Choose   RETURN : Select   ESC : Quit")?;
    Ok(())
}

// ── Rules & high scores ───────────────────────────────────────────────────────

fn draw_rules<W: Write>(out: &mut W, width: u16) -> std::io::Result<()> {
    print_at(out, centred_col(width, TITLE), 1, C_TITLE, TITLE)?;
    print_at(out, centred_col(width, "Rules"), 3, C_TEXT, "Rules")?;
    for (i, rule) in RULES.iter().enumerate() {
        print_at(out, 2, 5 + i as u16, C_TEXT, rule)?;
    }
    print_at(out, 2, 5 + RULES.len() as u16 + 1, C_HINT, BACK_HINT)?;
    Ok(())
}

fn draw_high_scores<W: Write>(
    out: &mut W,
    scores: &HighScoresScreen,
    width: u16,
) -> std::io::Result<()> {
    let subtitle = "Top 10 High Scores";
    print_at(out, centred_col(width, TITLE), 1, C_TITLE, TITLE)?;
    print_at(out, centred_col(width, subtitle), 3, C_TEXT, subtitle)?;

    let entries = scores.entries();
    if entries.is_empty() {
        print_at(out, 4, 5, C_HINT, "No scores yet.")?;
    }
    for (i, (name, score)) in entries.iter().enumerate() {
        let color = if *name == scores.state.player_name { C_HUD_SCORE } else { C_TEXT };
        let line = format!("{:>2}. {:<12} {:>6}", i + 1, name, score);
        print_at(out, 4, 5 + i as u16, color, &line)?;
    }
    print_at(out, 2, 5 + entries.len().max(1) as u16 + 1, C_HINT, BACK_HINT)?;
    Ok(())
}

// ── Game ──────────────────────────────────────────────────────────────────────

fn draw_game<W: Write>(out: &mut W, game: &GameScreen, width: u16, height: u16) -> std::io::Result<()> {
    draw_panel(out, game, width)?;

    // Everything shares one lane near the bottom of the screen.
    let lane = height.saturating_sub(4).max(PANEL_ROWS + 3);
    print_at(out, 0, lane + 1, C_GROUND, &"▀".repeat(width as usize))?;

    let player_col = to_col(&game.player().body, width);
    draw_ninja_sprite(out, player_col, lane.saturating_sub(2))?;

    for enemy in game.enemies().entities() {
        draw_enemy(out, enemy, width, lane)?;
    }
    for projectile in game.projectiles().entities() {
        draw_projectile(out, projectile, width, lane)?;
    }

    if let GamePhase::GameOverPause { .. } = game.phase() {
        let msg = "╔════ GAME  OVER ════╗";
        print_at(out, centred_col(width, msg), PANEL_ROWS + 2, C_WARNING, msg)?;
    }

    print_at(
        out,
        1,
        height.saturating_sub(1),
        C_HINT,
        "0-9 - : Answer   RETURN : Submit   ← → : Throw   ESC : Quit",
    )?;
    Ok(())
}

fn draw_panel<W: Write>(out: &mut W, game: &GameScreen, width: u16) -> std::io::Result<()> {
    let panel = game.panel();

    print_at(out, 1, 0, C_TEXT, &panel.question().to_string())?;
    out.queue(style::SetBackgroundColor(C_INPUT_BOX))?;
    print_at(out, 1, 1, C_TEXT, &format!(" {:<8}", panel.pending_input()))?;
    out.queue(style::SetBackgroundColor(Color::Reset))?;

    let iq = format!("Ninja IQ: {}", panel.score());
    print_at(out, centred_col(width, &iq), 0, C_HUD_SCORE, &iq)?;

    let mode = match game.difficulty() {
        Difficulty::Easy => "[ EASY ]",
        Difficulty::Hard => "[ HARD ]",
    };
    print_at(out, centred_col(width, mode), 1, C_HINT, mode)?;

    let ammo = format!("✦ {}", panel.inventory());
    let col = width.saturating_sub(ammo.chars().count() as u16 + 2);
    print_at(out, col, 0, C_HUD_AMMO, &ammo)?;
    Ok(())
}

/// Map a body's left edge from field pixels to a terminal column.
fn to_col(body: &MovingEntity, width: u16) -> u16 {
    let col = i64::from(body.x) * i64::from(width) / i64::from(FIELD_WIDTH);
    col.clamp(0, i64::from(width.saturating_sub(1))) as u16
}

fn on_screen(body: &MovingEntity) -> bool {
    body.x + body.width >= 0 && body.x <= FIELD_WIDTH
}

// ── Sprites ───────────────────────────────────────────────────────────────────

fn draw_ninja_sprite<W: Write>(out: &mut W, col: u16, row: u16) -> std::io::Result<()> {
    // Sprite (3 rows):
    //    (-.-)      ← eyes closed
    //   \_|=|_/     ← hands on knees
    //    /___\      ← crossed legs
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col + 1, row))?;
    out.queue(Print("(-.-)"))?;
    out.queue(cursor::MoveTo(col, row + 1))?;
    out.queue(Print("\\_|=|_/"))?;
    out.queue(cursor::MoveTo(col + 1, row + 2))?;
    out.queue(Print("/___\\"))?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, width: u16, lane: u16) -> std::io::Result<()> {
    if !on_screen(&enemy.body) {
        return Ok(());
    }
    let col = to_col(&enemy.body, width);
    // Facing the ninja.
    let (head, body) = match enemy.origin {
        Direction::Left => ("(ò_ó)>", " /|\\ "),
        Direction::Right => ("<(ò_ó)", " /|\\ "),
    };
    print_at(out, col, lane.saturating_sub(1), C_ENEMY, head)?;
    print_at(out, col, lane, C_ENEMY, body)?;
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    projectile: &Projectile,
    width: u16,
    lane: u16,
) -> std::io::Result<()> {
    if !on_screen(&projectile.body) {
        return Ok(());
    }
    print_at(out, to_col(&projectile.body, width), lane, C_PROJECTILE, "✦")
}
