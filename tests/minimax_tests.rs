use oxo_engine::{minimax, Board, Mark, Player};

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
fn empty_board_is_a_draw_under_perfect_play() {
    let board = Board::new();
    assert_eq!(minimax::alpha_beta_search(&board, true), 0.0);
    assert_eq!(minimax::alpha_beta_search(&board, false), 0.0);
}

#[test]
fn terminal_states_evaluate_without_recursion() {
    let won = board_from([1, 1, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(minimax::alpha_beta_search(&won, true), 1.0);
    assert_eq!(minimax::alpha_beta_search(&won, false), 1.0);

    let lost = board_from([2, 2, 2, 0, 0, 0, 0, 0, 0]);
    assert_eq!(minimax::alpha_beta_search(&lost, true), -1.0);
    assert_eq!(minimax::alpha_beta_search(&lost, false), -1.0);

    let tied = board_from([1, 2, 1, 1, 1, 2, 2, 1, 2]);
    assert_eq!(minimax::alpha_beta_search(&tied, true), 0.0);
    assert_eq!(minimax::alpha_beta_search(&tied, false), 0.0);
}

#[test]
fn x_takes_the_winning_move() {
    let board = board_from([1, 1, 0, 2, 2, 0, 0, 0, 0]);
    let action = minimax::select_move(&board, Player::X).unwrap();
    assert_eq!(action.position, 2);
    assert_eq!(action.player, Player::X);

    let successor = board.generate_successor(action).unwrap();
    assert!(successor.is_win());
}

#[test]
fn o_takes_the_winning_move() {
    let board = board_from([1, 1, 0, 2, 2, 0, 0, 0, 0]);
    let action = minimax::select_move(&board, Player::O).unwrap();
    assert_eq!(action.position, 5);

    let successor = board.generate_successor(action).unwrap();
    assert!(successor.is_lose());
}

#[test]
fn o_blocks_an_immediate_threat() {
    // X threatens 0,1,2 and nothing else is forcing; any non-blocking O
    // reply loses outright.
    let board = board_from([1, 1, 0, 0, 2, 0, 0, 0, 0]);
    let action = minimax::select_move(&board, Player::O).unwrap();
    assert_eq!(action.position, 2);
}

#[test]
fn equal_values_keep_the_lowest_index_move() {
    // Every opening reply is worth 0.0 under perfect play, so the first
    // legal move survives the strict comparison.
    let action = minimax::select_move(&Board::new(), Player::X).unwrap();
    assert_eq!(action.position, 0);
}

#[test]
fn no_move_on_a_terminal_board() {
    let board = board_from([1, 1, 1, 0, 0, 0, 0, 0, 0]);
    assert!(minimax::select_move(&board, Player::O).is_none());

    let tied = board_from([1, 2, 1, 1, 1, 2, 2, 1, 2]);
    assert!(minimax::select_move(&tied, Player::X).is_none());
}
