use meditating_ninja::menu::*;
use meditating_ninja::session::{Key, ScreenName};

fn type_name(menu: &mut MenuScreen, name: &str) {
    for c in name.chars() {
        menu.handle_key(Key::Letter(c));
    }
}

// ── Navigation ────────────────────────────────────────────────────────────────

#[test]
fn first_button_active_on_entry() {
    let menu = MenuScreen::new(String::new());
    assert_eq!(menu.active_button(), 0);
    assert!(menu.state.active);
    assert!(!menu.name_required());
}

#[test]
fn up_down_clamped_to_ends() {
    let mut menu = MenuScreen::new(String::new());
    menu.handle_key(Key::Up);
    assert_eq!(menu.active_button(), 0);
    for _ in 0..10 {
        menu.handle_key(Key::Down);
    }
    assert_eq!(menu.active_button(), MENU_BUTTONS.len() - 1);
    menu.handle_key(Key::Up);
    assert_eq!(menu.active_button(), MENU_BUTTONS.len() - 2);
}

#[test]
fn buttons_route_to_their_screens() {
    let expected = [
        ScreenName::EasyGame,
        ScreenName::HardGame,
        ScreenName::Rules,
        ScreenName::HighScores,
    ];
    for (index, screen) in expected.iter().enumerate() {
        let mut menu = MenuScreen::new("KAI".to_string());
        for _ in 0..index {
            menu.handle_key(Key::Down);
        }
        menu.handle_key(Key::Enter);
        assert!(!menu.state.active);
        assert_eq!(menu.state.next_screen, Some(*screen));
    }
}

// ── Name entry ────────────────────────────────────────────────────────────────

#[test]
fn letters_are_uppercased_and_capped() {
    let mut menu = MenuScreen::new(String::new());
    type_name(&mut menu, "abcdefghijklm");
    assert_eq!(menu.state.player_name, "ABCDEFGHIJ");
    assert_eq!(menu.state.player_name.len(), MAX_NAME_LEN);
}

#[test]
fn backspace_edits_name() {
    let mut menu = MenuScreen::new("ZEN".to_string());
    menu.handle_key(Key::Backspace);
    assert_eq!(menu.state.player_name, "ZE");
}

#[test]
fn digits_do_not_enter_the_name() {
    let mut menu = MenuScreen::new(String::new());
    menu.handle_key(Key::Digit(4));
    menu.handle_key(Key::Minus);
    assert_eq!(menu.state.player_name, "");
}

// ── Name gate ─────────────────────────────────────────────────────────────────

#[test]
fn game_refused_without_name() {
    for downs in 0..2 {
        let mut menu = MenuScreen::new(String::new());
        for _ in 0..downs {
            menu.handle_key(Key::Down);
        }
        menu.handle_key(Key::Enter);
        assert!(menu.state.active);
        assert_eq!(menu.state.next_screen, None);
        assert!(menu.name_required());
    }
}

#[test]
fn game_allowed_with_one_letter() {
    let mut menu = MenuScreen::new(String::new());
    menu.handle_key(Key::Enter);
    assert!(menu.name_required());
    type_name(&mut menu, "x");
    assert!(!menu.name_required());
    menu.handle_key(Key::Enter);
    assert_eq!(menu.state.next_screen, Some(ScreenName::EasyGame));
    assert_eq!(menu.state.player_name, "X");
}

#[test]
fn rules_and_scores_need_no_name() {
    let mut menu = MenuScreen::new(String::new());
    menu.handle_key(Key::Down);
    menu.handle_key(Key::Down);
    menu.handle_key(Key::Enter);
    assert_eq!(menu.state.next_screen, Some(ScreenName::Rules));
}

#[test]
fn quit_leaves_without_next_screen() {
    let mut menu = MenuScreen::new("KAI".to_string());
    menu.frame(&[Key::Quit, Key::Enter]);
    assert!(!menu.state.active);
    assert_eq!(menu.state.next_screen, None);
}

// ── Rules / high scores ───────────────────────────────────────────────────────

#[test]
fn q_goes_back_to_menu_keeping_name() {
    let mut rules = RulesScreen::new("KAI".to_string());
    rules.frame(&[Key::Letter('A'), Key::Digit(1)]);
    assert!(rules.state.active);
    rules.frame(&[Key::Letter('Q')]);
    assert!(!rules.state.active);
    assert_eq!(rules.state.next_screen, Some(ScreenName::Menu));
    assert_eq!(rules.state.player_name, "KAI");

    let mut scores = HighScoresScreen::new("KAI".to_string(), vec![("KAI".to_string(), 90)]);
    assert_eq!(scores.entries().to_vec(), vec![("KAI".to_string(), 90)]);
    scores.frame(&[Key::Letter('Q')]);
    assert_eq!(scores.state.next_screen, Some(ScreenName::Menu));
}

#[test]
fn quit_from_rules_ends_session() {
    let mut rules = RulesScreen::new(String::new());
    rules.frame(&[Key::Quit]);
    assert!(!rules.state.active);
    assert_eq!(rules.state.next_screen, None);
    assert_eq!(RULES.len(), 11);
}
