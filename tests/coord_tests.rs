use battleship::{parse_coordinate, row_index, row_label, CoordError, Coordinate};

#[test]
fn test_row_letters_round_trip() {
    for i in 0..26 {
        let letter = row_label(i).unwrap();
        assert_eq!(row_index(letter, 26), Some(i));
        assert_eq!(row_index(letter.to_ascii_lowercase(), 26), Some(i));
    }
    assert_eq!(row_label(26), None);
}

#[test]
fn test_row_index_bounded_by_board() {
    assert_eq!(row_index('D', 4), Some(3));
    assert_eq!(row_index('E', 4), None);
    assert_eq!(row_index('1', 4), None);
    assert_eq!(row_index('é', 30), None);
}

#[test]
fn test_parse_coordinate() {
    assert_eq!(parse_coordinate("A1", 5), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_coordinate("c4", 5), Ok(Coordinate::new(2, 3)));
    assert_eq!(parse_coordinate("  e 5\n", 5), Ok(Coordinate::new(4, 4)));
    // column range is left to the engine
    assert_eq!(parse_coordinate("A12", 5), Ok(Coordinate::new(0, 11)));
}

#[test]
fn test_parse_coordinate_errors() {
    assert_eq!(parse_coordinate("", 5), Err(CoordError::Empty));
    assert_eq!(parse_coordinate("   ", 5), Err(CoordError::Empty));
    assert_eq!(parse_coordinate("F1", 5), Err(CoordError::BadRow('F')));
    assert_eq!(parse_coordinate("11", 5), Err(CoordError::BadRow('1')));
    assert_eq!(parse_coordinate("A", 5), Err(CoordError::BadColumn(String::new())));
    assert_eq!(parse_coordinate("A0", 5), Err(CoordError::BadColumn("0".into())));
    assert_eq!(parse_coordinate("A-1", 5), Err(CoordError::BadColumn("-1".into())));
    assert_eq!(parse_coordinate("Ab", 5), Err(CoordError::BadColumn("b".into())));
}

#[test]
fn test_coordinate_display() {
    assert_eq!(Coordinate::new(0, 0).to_string(), "A1");
    assert_eq!(Coordinate::new(3, 9).to_string(), "D10");
    assert_eq!(
        Coordinate::new(0, usize::MAX).to_string(),
        format!("A{}", usize::MAX)
    );
}
