use std::fs;

use meditating_ninja::error::LeaderboardError;
use meditating_ninja::leaderboard::*;

use tempfile::TempDir;

fn board_at(dir: &TempDir) -> Leaderboard {
    Leaderboard::open(dir.path().join("scores.txt")).unwrap()
}

#[test]
fn missing_file_is_empty_board() {
    let dir = TempDir::new().unwrap();
    let board = board_at(&dir);
    assert!(board.is_empty());
    assert!(board.ranked().is_empty());
}

#[test]
fn submit_keeps_only_the_best() {
    let dir = TempDir::new().unwrap();
    let mut board = board_at(&dir);

    assert!(board.submit("Alice", 80).unwrap());
    assert!(!board.submit("Alice", 70).unwrap());
    assert_eq!(board.best_score("Alice"), Some(80));

    assert!(!board.submit("Alice", 80).unwrap()); // tie keeps the record
    assert!(board.submit("Alice", 90).unwrap());
    assert_eq!(board.best_score("Alice"), Some(90));
    assert_eq!(board.len(), 1);
}

#[test]
fn file_is_alternating_name_and_score_lines() {
    let dir = TempDir::new().unwrap();
    let mut board = board_at(&dir);
    board.submit("ZED", 85).unwrap();
    board.submit("AMY", 120).unwrap();

    let contents = fs::read_to_string(board.path()).unwrap();
    assert_eq!(contents, "AMY\n120\nZED\n85\n");

    let reopened = board_at(&dir);
    assert_eq!(reopened, board);
}

#[test]
fn ranking_is_by_score_then_name() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("scores.txt"),
        "BOB\n80\nCAT\n95\nAMY\n80\nDAN\n100\n",
    )
    .unwrap();
    let board = board_at(&dir);
    let names: Vec<String> = board.ranked().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["DAN", "CAT", "AMY", "BOB"]);
}

#[test]
fn top_truncates() {
    let dir = TempDir::new().unwrap();
    let mut contents = String::new();
    for i in 0..12 {
        contents.push_str(&format!("P{}\n{}\n", i, 75 + i * 5));
    }
    fs::write(dir.path().join("scores.txt"), contents).unwrap();

    let board = board_at(&dir);
    let top = board.top(TOP_N);
    assert_eq!(top.len(), 10);
    assert_eq!(top[0], ("P11".to_string(), 130));
    assert_eq!(top[9], ("P2".to_string(), 85));
}

#[test]
fn dangling_name_is_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scores.txt"), "BOB\n12\nCARL\n").unwrap();
    let board = board_at(&dir);
    assert_eq!(board.len(), 1);
    assert_eq!(board.best_score("CARL"), None);
}

#[test]
fn non_numeric_score_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.txt");
    fs::write(&path, "BOB\n12\nCARL\nlots\n").unwrap();
    match Leaderboard::open(&path) {
        Err(LeaderboardError::Malformed { line, content }) => {
            assert_eq!(line, 4);
            assert_eq!(content, "lots");
        }
        other => panic!("expected malformed error, got {:?}", other),
    }
}
