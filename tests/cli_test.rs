#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::player::cli::parse_target;
    use seabattle::{
        make_move, ui, BoardError, CliPlayer, Combatant, Coordinate, Game, InputError, MoveError, Orientation,
        Ship, ShotOutcome, ShotReport, Side, StandardBoard, TurnRecord, TurnState,
    };

    fn one_ship_board() -> StandardBoard {
        let mut board = StandardBoard::new();
        board
            .add_ship(Ship::new(Coordinate::new(1, 1), 1, Orientation::Horizontal).unwrap())
            .unwrap();
        board.seal();
        board
    }

    #[test]
    fn test_parse_target_is_one_based() {
        assert_eq!(parse_target("2 3"), Ok(Coordinate::new(1, 2)));
        assert_eq!(parse_target("  6\t6 \n"), Ok(Coordinate::new(5, 5)));
        assert_eq!(parse_target("0 1"), Ok(Coordinate::new(-1, 0)));
    }

    #[test]
    fn test_parse_target_rejects_malformed_lines() {
        assert_eq!(parse_target(""), Err(InputError::WrongTokenCount(0)));
        assert_eq!(parse_target("1 2 3"), Err(InputError::WrongTokenCount(3)));
        assert_eq!(parse_target("a 2"), Err(InputError::NotANumber));
        assert_eq!(parse_target("1 2.5"), Err(InputError::NotANumber));
        assert_eq!(parse_target("1 -"), Err(InputError::NotANumber));
    }

    #[test]
    fn test_parse_target_clamps_huge_numbers() {
        assert_eq!(parse_target("99999999999 1"), Ok(Coordinate::new(i32::MAX, 0)));
        assert_eq!(
            parse_target("1 -99999999999999999999999"),
            Ok(Coordinate::new(0, i32::MIN))
        );
        assert_eq!(parse_target("+3 2"), Ok(Coordinate::new(2, 1)));
    }

    #[test]
    fn test_cli_player_reports_huge_numbers_as_out_of_bounds() {
        let input = Cursor::new("99999999999 1\n2 2\n");
        let mut player = CliPlayer::new(input, Vec::new());
        let mut rng = SmallRng::seed_from_u64(1);
        let mut board = one_ship_board();

        let (target, _) = make_move(&mut player, &mut rng, &mut board).unwrap();
        assert_eq!(target, Coordinate::new(1, 1));

        let output = String::from_utf8(player.into_output()).unwrap();
        assert!(output.contains(&BoardError::OutOfBounds(Coordinate::new(i32::MAX, 0)).to_string()));
        assert!(!output.contains(&InputError::NotANumber.to_string()));
    }

    #[test]
    fn test_cli_player_reprompts_until_legal() {
        let input = Cursor::new("hello\n7 7\n0 3\n2 2\n");
        let mut player = CliPlayer::new(input, Vec::new());
        let mut rng = SmallRng::seed_from_u64(1);
        let mut board = one_ship_board();

        let (target, report) = make_move(&mut player, &mut rng, &mut board).unwrap();
        assert_eq!(target, Coordinate::new(1, 1));
        assert_eq!(report.outcome, ShotOutcome::Destroyed);

        let output = String::from_utf8(player.into_output()).unwrap();
        assert_eq!(output.matches("Your move: ").count(), 4);
        assert!(output.contains(&InputError::WrongTokenCount(1).to_string()));
        assert!(output.contains(&BoardError::OutOfBounds(Coordinate::new(6, 6)).to_string()));
        assert!(output.contains(&BoardError::OutOfBounds(Coordinate::new(-1, 2)).to_string()));
    }

    #[test]
    fn test_cli_player_reports_repeated_target() {
        let input = Cursor::new("3 3\n3 3\n2 2\n");
        let mut player = CliPlayer::new(input, Vec::new());
        let mut rng = SmallRng::seed_from_u64(1);
        let mut board = one_ship_board();

        let (_, first) = make_move(&mut player, &mut rng, &mut board).unwrap();
        assert_eq!(first.outcome, ShotOutcome::Miss);
        let (target, _) = make_move(&mut player, &mut rng, &mut board).unwrap();
        assert_eq!(target, Coordinate::new(1, 1));

        let output = String::from_utf8(player.into_output()).unwrap();
        assert!(output.contains("already been targeted"));
    }

    #[test]
    fn test_cli_player_end_of_input() {
        let mut player = CliPlayer::new(Cursor::new(""), Vec::new());
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            player.choose_target(&mut rng, 6).unwrap_err(),
            MoveError::Input(InputError::Closed)
        );
    }

    #[test]
    fn test_ui_narration() {
        let record = TurnRecord {
            mover: Side::Computer,
            target: Coordinate::new(0, 4),
            report: ShotReport::from(ShotOutcome::Damaged),
            state: TurnState::ComputerTurn,
        };
        assert_eq!(ui::describe(&record), "Computer fires at 1 5: Ship damaged");
        assert!(ui::announce_winner(Side::Player).ends_with("Player wins!"));
    }

    #[test]
    fn test_render_boards_hides_computer_fleet() {
        let game = Game::new(
            Box::new(CliPlayer::new(Cursor::new(""), Vec::new())),
            Box::new(seabattle::AutomatedPlayer::new()),
            one_ship_board(),
            one_ship_board().hidden(),
            SmallRng::seed_from_u64(5),
        );
        let view = ui::render_boards(&game);
        assert_eq!(view.matches('■').count(), 1);
        assert!(view.contains("Player board:"));
        assert!(view.contains("Computer board:"));
    }
}
