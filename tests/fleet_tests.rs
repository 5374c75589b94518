use seabattle::{
    random_board, random_ship, try_fleet, BoardError, FleetConfig, StandardBoard, BOARD_SIZE, FLEET, FLEET_CELLS,
    NUM_SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_random_board_places_standard_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board: StandardBoard = random_board(&mut rng, &FleetConfig::default()).unwrap();

    assert_eq!(board.ships().len(), NUM_SHIPS);
    let mut lengths: Vec<_> = board.ships().iter().map(|s| s.length()).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(lengths, FLEET.to_vec());

    let cells: usize = board.ships().iter().map(|s| s.cells().count()).sum();
    assert_eq!(cells, FLEET_CELLS);
    assert!(board.is_sealed());
    assert!(board.busy().is_empty());
    assert_eq!(board.sunk_count(), 0);
}

#[test]
fn test_same_seed_same_board() {
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let b1: StandardBoard = random_board(&mut rng1, &FleetConfig::default()).unwrap();
    let b2: StandardBoard = random_board(&mut rng2, &FleetConfig::default()).unwrap();
    assert_eq!(b1.ships(), b2.ships());
    assert_eq!(b1.to_string(), b2.to_string());
}

#[test]
fn test_random_ship_bow_range_reaches_one_past_the_grid() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut seen_edge = false;
    for _ in 0..2000 {
        let ship = random_ship::<_, BOARD_SIZE>(&mut rng, 1).unwrap();
        let bow = ship.bow();
        assert!((0..=BOARD_SIZE as i32).contains(&bow.row));
        assert!((0..=BOARD_SIZE as i32).contains(&bow.col));
        seen_edge |= bow.row == BOARD_SIZE as i32 || bow.col == BOARD_SIZE as i32;
    }
    assert!(seen_edge);
}

#[test]
fn test_try_fleet_gives_up_when_budget_is_spent() {
    let mut rng = SmallRng::seed_from_u64(3);
    let config = FleetConfig {
        placement_attempts: 0,
        ..FleetConfig::default()
    };
    assert!(try_fleet::<_, BOARD_SIZE>(&mut rng, &config).is_none());
}

#[test]
fn test_impossible_fleet_reports_failure() {
    let mut rng = SmallRng::seed_from_u64(3);
    // nine single-cell ships cannot be kept apart on a 3x3 grid
    let config = FleetConfig {
        lengths: vec![1; 9],
        placement_attempts: 50,
        board_attempts: 5,
    };
    let err = random_board::<_, 3>(&mut rng, &config).unwrap_err();
    assert_eq!(err, BoardError::FleetUnavailable { boards: 5 });
}
