//! Property tests for slide resolution and session bookkeeping.

use inertia::{
    Board, BoardBuilder, Direction, Entity, Lives, MoveResolver, MoveResult, PlayerId, Position,
    Session, SessionConfig,
};
use proptest::prelude::*;

const P0: PlayerId = PlayerId::new(0);

fn cell_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => Just('.'),
        1 => Just('W'),
        1 => Just('S'),
        2 => Just('G'),
        1 => Just('L'),
        1 => Just('M'),
    ]
}

/// A random single-player layout up to 6x6.
fn layout() -> impl Strategy<Value = String> {
    (1usize..=6, 1usize..=6)
        .prop_flat_map(|(rows, cols)| {
            (
                Just(cols),
                prop::collection::vec(cell_char(), rows * cols),
                0..rows * cols,
            )
        })
        .prop_map(|(cols, mut cells, player)| {
            cells[player] = '0';
            cells
                .chunks(cols)
                .map(|row| row.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// Cells entered when sliding from `from` to `to`, `to` included.
fn path(board: &Board, from: Position, to: Position, direction: Direction) -> Vec<Position> {
    let mut cells = Vec::new();
    let mut current = from;
    while current != to {
        current = current
            .offset(direction, board.rows(), board.cols())
            .expect("slide stays on the board");
        cells.push(current);
    }
    cells
}

fn expected_score(session: &Session) -> i64 {
    let state = session.game_state(P0).unwrap();
    session.board().area() as i64 + 10 * i64::from(state.num_got_gems())
        - i64::from(state.num_moves())
        - 2 * i64::from(state.num_undos())
        - 4 * i64::from(state.num_deaths())
}

proptest! {
    #[test]
    fn prop_resolve_never_mutates(layout in layout(), direction in direction()) {
        let board = BoardBuilder::parse(&layout).unwrap();
        let before = board.to_string();
        let start = board.player_position(P0).unwrap();

        let _ = MoveResolver::new(&board).resolve(start, direction, P0);
        prop_assert_eq!(board.to_string(), before);
    }

    #[test]
    fn prop_pickups_match_the_path(layout in layout(), direction in direction()) {
        let board = BoardBuilder::parse(&layout).unwrap();
        let start = board.player_position(P0).unwrap();

        match MoveResolver::new(&board).resolve(start, direction, P0) {
            MoveResult::Invalid { position } => prop_assert_eq!(position, start),
            MoveResult::Alive(mv) => {
                prop_assert_eq!(mv.orig_position, start);
                prop_assert_ne!(mv.new_position, start);

                let cells = path(&board, start, mv.new_position, direction);
                let gems: Vec<_> = cells
                    .iter()
                    .copied()
                    .filter(|&pos| board.entity(pos) == Some(Entity::Gem))
                    .collect();
                let lives: Vec<_> = cells
                    .iter()
                    .copied()
                    .filter(|&pos| board.entity(pos) == Some(Entity::ExtraLife))
                    .collect();
                prop_assert_eq!(mv.collected_gems.to_vec(), gems);
                prop_assert_eq!(mv.collected_extra_lives.to_vec(), lives);
            }
            MoveResult::Dead { orig_position, death_position } => {
                prop_assert_eq!(orig_position, start);
                prop_assert_eq!(board.entity(death_position), Some(Entity::Mine));
            }
            MoveResult::KickedOut { .. } => prop_assert!(false, "resolver never kicks out"),
        }
    }

    #[test]
    fn prop_moves_count_only_valid_results(
        layout in layout(),
        directions in prop::collection::vec(direction(), 0..20),
    ) {
        let board = BoardBuilder::parse(&layout).unwrap();
        let mut session = Session::from_board(board, &SessionConfig::new()).unwrap();

        for direction in directions {
            let before = session.game_state(P0).unwrap().num_moves();
            let result = session.process_move(direction, P0).unwrap();
            let after = session.game_state(P0).unwrap().num_moves();

            if result.is_valid() {
                prop_assert_eq!(after, before + 1);
            } else {
                prop_assert_eq!(after, before);
            }
            prop_assert_eq!(session.game_state(P0).unwrap().lives(), Lives::Unlimited);
            prop_assert!(!session.game_state(P0).unwrap().has_lost());
            prop_assert_eq!(session.score(P0).unwrap(), expected_score(&session));
        }
    }

    #[test]
    fn prop_undo_round_trip(layout in layout(), direction in direction()) {
        let board = BoardBuilder::parse(&layout).unwrap();
        let mut session = Session::from_board(board, &SessionConfig::new().with_lives(1)).unwrap();
        let board_before = session.board().to_string();
        let state_before = session.game_state(P0).unwrap().clone();

        if session.process_move(direction, P0).unwrap().is_alive() {
            prop_assert!(session.process_undo().unwrap());

            let state = session.game_state(P0).unwrap();
            prop_assert_eq!(session.board().to_string(), board_before);
            prop_assert_eq!(state.lives(), state_before.lives());
            prop_assert_eq!(state.num_got_gems(), state_before.num_got_gems());
            prop_assert_eq!(state.num_moves(), 1);
            prop_assert_eq!(state.num_undos(), 1);
        }
    }
}
