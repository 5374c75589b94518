use seabattle::{BitBoard, BitBoardError};

#[test]
fn test_get_set_contains() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.contains(1, 1));
    assert!(!bb.contains(1, 2));
    assert!(!bb.contains(9, 9));
    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
    assert_eq!(bb.count_ones(), 1);

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_not_stays_inside_the_grid() {
    let bb = BitBoard::<u64, 6>::from_iter([(0, 0), (5, 5)]).unwrap();
    let rest = !bb;
    assert_eq!(rest.count_ones(), 34);
    assert!((rest & bb).is_empty());
}

#[test]
fn test_dilate_in_the_middle() {
    let bb = BitBoard::<u64, 6>::from_iter([(2, 2)]).unwrap();
    let grown = bb.dilate();
    assert_eq!(grown.count_ones(), 9);
    for r in 1..=3 {
        for c in 1..=3 {
            assert!(grown.contains(r, c));
        }
    }
}

#[test]
fn test_dilate_clips_at_corner() {
    let bb = BitBoard::<u64, 6>::from_iter([(0, 0)]).unwrap();
    let bits: Vec<_> = bb.dilate().iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

    let bb = BitBoard::<u64, 6>::from_iter([(5, 5)]).unwrap();
    assert_eq!(bb.dilate().count_ones(), 4);
}

#[test]
fn test_contour_of_a_line() {
    let line = BitBoard::<u64, 6>::from_iter([(2, 2), (2, 3)]).unwrap();
    let contour = line.dilate() & !line;
    assert_eq!(contour.count_ones(), 10);
    assert!(!contour.contains(2, 2));
    assert!(contour.contains(1, 4));
    assert!(contour.contains(3, 1));
}
