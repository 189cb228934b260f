use oxo_engine::tree::{uct_score, win_rate, SearchTree};
use oxo_engine::{mcts, Board, GameError, Mark, MctsConfig, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn mark(value: u8) -> Mark {
    match value {
        0 => Mark::Empty,
        1 => Mark::X,
        _ => Mark::O,
    }
}

fn board_from(cells: [u8; 9]) -> Board {
    Board::from_squares(cells.map(mark))
}

#[test]
fn uct_prefers_unvisited_children() {
    assert_eq!(uct_score(0, 0, 10, 1.414), f64::INFINITY);
    assert_eq!(uct_score(-5, 0, 10, 0.0), f64::INFINITY);
}

#[test]
fn uct_score_known_values() {
    // ln(1) = 0, so a single-visit child under a single-visit parent is
    // pure exploitation.
    assert_eq!(uct_score(1, 1, 1, 2.0), 1.0);
    // With the exploration term disabled the score is the plain win rate.
    assert_eq!(uct_score(3, 4, 100, 0.0), 0.75);
}

#[test]
fn win_rate_is_guarded_against_zero_visits() {
    assert_eq!(win_rate(0, 0), 0.0);
    assert_eq!(win_rate(3, 4), 0.75);
    assert_eq!(win_rate(-2, 4), -0.5);
}

#[test]
fn best_child_picks_the_highest_scoring_child() {
    let mut tree = SearchTree::new(Board::new());
    let root = tree.root();
    let a = tree.add_child(root, Board::new(), 0);
    let b = tree.add_child(root, Board::new(), 1);

    tree.get_mut(root).visits = 10;
    tree.get_mut(a).visits = 5;
    tree.get_mut(a).wins = 1;
    tree.get_mut(b).visits = 5;
    tree.get_mut(b).wins = 4;

    assert_eq!(tree.best_child(root, 0.0), Some(b));
}

#[test]
fn unvisited_sibling_wins_selection() {
    let mut tree = SearchTree::new(Board::new());
    let root = tree.root();
    let a = tree.add_child(root, Board::new(), 0);
    let b = tree.add_child(root, Board::new(), 1);

    tree.get_mut(root).visits = 3;
    tree.get_mut(a).visits = 3;
    tree.get_mut(a).wins = 3;

    assert_eq!(tree.best_child(root, 1.414), Some(b));
}

#[test]
fn single_iteration_credits_the_whole_path() {
    let config = MctsConfig::default().with_iterations(1);
    let mut rng = StdRng::seed_from_u64(0);
    let tree = mcts::build_tree(&Board::new(), Player::X, &config, &mut rng).unwrap();

    // One-shot expansion walks the first legal move at every level, so X
    // claims cells 0, 1 and 2 and the chain ends on a won board.
    assert_eq!(tree.len(), 4);
    let root = tree.get(tree.root());
    assert_eq!(root.visits, 1);
    assert_eq!(root.wins, 1);

    let mut cursor = root.children.first().copied();
    let mut depth = 0;
    while let Some(id) = cursor {
        let node = tree.get(id);
        assert_eq!(node.visits, 1);
        assert_eq!(node.wins, 1);
        depth += 1;
        cursor = node.children.first().copied();
    }
    assert_eq!(depth, 3);
}

#[test]
fn results_accumulate_from_the_acting_players_perspective() {
    // With O acting, the expansion chain is all O moves and ends on a
    // board O has won; the raw -1 result is negated before it is applied.
    let config = MctsConfig::default().with_iterations(1);
    let mut rng = StdRng::seed_from_u64(0);
    let tree = mcts::build_tree(&Board::new(), Player::O, &config, &mut rng).unwrap();

    let root = tree.get(tree.root());
    assert_eq!(root.visits, 1);
    assert_eq!(root.wins, 1);
}

#[test]
fn root_visits_match_the_iteration_count() {
    let config = MctsConfig::default().with_iterations(25);
    let mut rng = StdRng::seed_from_u64(0);
    let tree = mcts::build_tree(&Board::new(), Player::X, &config, &mut rng).unwrap();
    assert_eq!(tree.get(tree.root()).visits, 25);
}

#[test]
fn search_returns_a_legal_position() {
    let board = board_from([1, 2, 0, 0, 1, 0, 0, 0, 2]);
    let config = MctsConfig::default().with_iterations(100);
    let mut rng = StdRng::seed_from_u64(3);
    let position = mcts::search(&board, Player::X, &config, &mut rng).unwrap();
    assert!(board.legal_moves().contains(&position));
}

#[test]
fn search_is_deterministic_under_a_fixed_seed() {
    let config = MctsConfig::default().with_iterations(200);
    let mut first_rng = StdRng::seed_from_u64(42);
    let mut second_rng = StdRng::seed_from_u64(42);

    let first = mcts::search(&Board::new(), Player::X, &config, &mut first_rng).unwrap();
    let second = mcts::search(&Board::new(), Player::X, &config, &mut second_rng).unwrap();
    assert_eq!(first, second);
}

#[test]
fn opening_choice_is_a_corner_or_the_center() {
    // Statistical smoke test rather than an exact assertion: a healthy
    // search should not open on an edge cell.
    let config = MctsConfig::default().with_iterations(1_000);
    let mut rng = StdRng::seed_from_u64(7);
    let position = mcts::search(&Board::new(), Player::X, &config, &mut rng).unwrap();
    assert!([0, 2, 4, 6, 8].contains(&position), "chose edge {position}");
}

#[test]
fn search_rejects_a_terminal_root() {
    let board = board_from([1, 1, 1, 0, 0, 0, 0, 0, 0]);
    let config = MctsConfig::default().with_iterations(10);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        mcts::search(&board, Player::O, &config, &mut rng),
        Err(GameError::TerminalState)
    );
}

#[test]
fn zero_iterations_leave_nothing_to_choose() {
    let config = MctsConfig::default().with_iterations(0);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        mcts::search(&Board::new(), Player::X, &config, &mut rng),
        Err(GameError::ExhaustedMoves)
    );
}
