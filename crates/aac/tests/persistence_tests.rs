//! Board load/save tests

use std::fs;

use aac::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const TWO_CATEGORIES: &str = "\
img/food/plate.png food
>img/food/icons8-french-fries-96.png french fries
>img/food/icons8-watermelon-96.png watermelon
img/clothing/hanger.png clothing
>img/clothing/collaredshirt.png collared shirt
";

/// Every (category image, item image, spoken text) the board can reach.
fn walk(board: &mut Board) -> Vec<(String, String, String)> {
    board.reset();
    let mut seen = Vec::new();
    for category_loc in board.image_locs() {
        board.select(&category_loc).unwrap();
        for item_loc in board.image_locs() {
            let text = board.select(&item_loc).unwrap();
            seen.push((category_loc.clone(), item_loc, text));
        }
        board.reset();
    }
    seen
}

// ═══════════════════════════════════════════════════════════════════════
// Loading
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.txt");
    fs::write(&path, TWO_CATEGORIES).unwrap();

    let mut board = Board::from_file(&path);
    assert_eq!(board.category_count(), 2);
    board.select("img/food/plate.png").unwrap();
    assert_eq!(
        board.select("img/food/icons8-watermelon-96.png"),
        Ok("watermelon".to_string())
    );
}

// Observed quirk: a missing file is not an error, just an empty board.
#[test]
fn test_from_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let board = Board::from_file(dir.path().join("missing.txt"));
    assert_eq!(board.category_count(), 0);
    assert!(board.is_at_top());
    assert!(board.image_locs().is_empty());
}

#[test]
fn test_malformed_line_truncates_load() {
    let text = "\
img/food/plate.png food
>img/food/fries.png fries
img/broken.png
img/clothing/hanger.png clothing
>img/clothing/shirt.png shirt
";
    let mut board = Board::parse(text);
    assert_eq!(board.image_locs(), vec!["img/food/plate.png"]);
    board.select("img/food/plate.png").unwrap();
    assert_eq!(board.image_locs(), vec!["img/food/fries.png"]);
}

#[test]
fn test_malformed_item_truncates_load() {
    let board = Board::parse("a.png first\n>b.png one\n>c.png\n>d.png two\ne.png second\n");
    assert_eq!(board.image_locs(), vec!["a.png"]);
    let first = board.categories().get("a.png").unwrap();
    assert_eq!(first.image_locs(), vec!["b.png"]);
}

#[test]
fn test_blank_line_truncates_load() {
    let board = Board::parse("a.png first\n\nb.png second\n");
    assert_eq!(board.image_locs(), vec!["a.png"]);
}

#[test]
fn test_item_before_header_truncates_load() {
    let board = Board::parse(">b.png orphan\na.png first\n");
    assert_eq!(board.category_count(), 0);
}

#[test]
fn test_repeated_header_replaces_category() {
    let mut board = Board::parse("a.png first\n>b.png one\na.png again\n>c.png two\n");
    assert_eq!(board.category_count(), 1);
    board.select("a.png").unwrap();
    assert_eq!(board.category(), "again");
    assert_eq!(board.image_locs(), vec!["c.png"]);
}

#[test]
fn test_names_keep_inner_spaces() {
    let mut board = Board::parse("img/x.png my  favourite things\n>img/y.png  hello there \n");
    board.select("img/x.png").unwrap();
    assert_eq!(board.category(), "my  favourite things");
    assert_eq!(board.select("img/y.png"), Ok(" hello there ".to_string()));
}

#[test]
fn test_invalid_utf8_does_not_stop_load() {
    let bytes: &[u8] = b"img/food/plate.png food\n>img/food/cafe.png caf\xe9\nimg/clothing/hanger.png clothing\n>img/clothing/shirt.png shirt\n";
    let mut board = Board::from_reader(bytes);

    assert_eq!(board.category_count(), 2);
    board.select("img/food/plate.png").unwrap();
    assert_eq!(
        board.select("img/food/cafe.png"),
        Ok("caf\u{FFFD}".to_string())
    );

    board.reset();
    board.select("img/clothing/hanger.png").unwrap();
    assert_eq!(board.select("img/clothing/shirt.png"), Ok("shirt".to_string()));
}

#[test]
fn test_invalid_utf8_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"img/caf\xe9.png caf\xe9\r\n>img/x.png x\r\n").unwrap();

    let mut board = Board::from_file(&path);
    assert_eq!(board.image_locs(), vec!["img/caf\u{FFFD}.png"]);
    board.select("img/caf\u{FFFD}.png").unwrap();
    assert_eq!(board.category(), "caf\u{FFFD}");
    assert_eq!(board.image_locs(), vec!["img/x.png"]);
}

#[test]
fn test_from_reader_with_config() {
    let config = BoardConfig::with_extension("aac");
    let board = Board::from_reader_with_config(TWO_CATEGORIES.as_bytes(), config.clone());
    assert_eq!(board.config(), &config);
    assert_eq!(board.category_count(), 2);
}

// ═══════════════════════════════════════════════════════════════════════
// Saving
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_to_file_string_matches_input() {
    let board = Board::parse(TWO_CATEGORIES);
    assert_eq!(board.to_file_string(), TWO_CATEGORIES);
}

#[test]
fn test_write_to_file_appends_extension() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("saved");

    let board = Board::parse(TWO_CATEGORIES);
    board.write_to_file(&base);

    let written = fs::read_to_string(dir.path().join("saved.txt")).unwrap();
    assert_eq!(written, TWO_CATEGORIES);
    assert!(!base.exists());
}

#[test]
fn test_write_to_file_overwrites() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("saved");
    fs::write(dir.path().join("saved.txt"), "old contents that are much longer\n").unwrap();

    Board::parse("a.png first\n").write_to_file(&base);
    assert_eq!(
        fs::read_to_string(dir.path().join("saved.txt")).unwrap(),
        "a.png first\n"
    );
}

#[test]
fn test_try_write_to_file_returns_path() {
    let dir = TempDir::new().unwrap();
    let board = Board::with_config(BoardConfig::with_extension("aac"));
    let path = board.try_write_to_file(dir.path().join("empty")).unwrap();
    assert_eq!(path, dir.path().join("empty.aac"));
    assert_eq!(fs::read_to_string(path).unwrap(), "");
}

#[test]
fn test_try_write_to_file_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let board = Board::parse(TWO_CATEGORIES);
    let result = board.try_write_to_file(dir.path().join("no/such/dir/board"));
    assert!(matches!(result, Err(AacError::Io(_))));
}

// Observed quirk: save failures are only logged.
#[test]
fn test_write_to_file_swallows_io_error() {
    let dir = TempDir::new().unwrap();
    let board = Board::parse(TWO_CATEGORIES);
    board.write_to_file(dir.path().join("no/such/dir/board"));
    assert_eq!(board.category_count(), 2);
}

// ═══════════════════════════════════════════════════════════════════════
// Round Trip
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("round");

    let mut board = Board::parse(TWO_CATEGORIES);
    board.add_item("img/animals/dog.png", "animals");
    board.select("img/animals/dog.png").unwrap();
    board.add_item("img/animals/cat.png", "meow");
    board.reset();
    board.select("img/food/plate.png").unwrap();
    board.add_item("img/food/apple.png", "apple");

    board.write_to_file(&base);
    let mut loaded = Board::from_file(dir.path().join("round.txt"));

    assert_eq!(loaded.image_locs(), {
        board.reset();
        board.image_locs()
    });
    assert_eq!(walk(&mut loaded), walk(&mut board));
}

// Observed quirk: items added at the top level live in the default
// category too, and that category is never saved.
#[test]
fn test_round_trip_drops_default_category_items() {
    let mut board = Board::new();
    board.add_item("img/animals/dog.png", "animals");
    assert_eq!(board.default_category().len(), 1);

    let mut loaded = Board::parse(&board.to_file_string());
    assert!(loaded.default_category().is_empty());
    assert_eq!(loaded.image_locs(), vec!["img/animals/dog.png"]);
    loaded.select("img/animals/dog.png").unwrap();
    assert!(loaded.image_locs().is_empty());
}
