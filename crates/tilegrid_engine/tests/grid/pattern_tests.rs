//! Tests for Pattern construction and indexing

use tilegrid_engine::{BlockGrid, Cell, CollisionData, GridLimits, Pattern, PatternCell, Position};

#[test]
fn test_pattern_tiles_across_zero_boundary() {
    let pattern = Pattern::from_tiles(3, 2, &[0, 1, 2, 3, 4, 5]).unwrap();
    let anchor = Position::new(0, 0);

    // Walking left from the anchor continues the pattern backwards
    let row: Vec<usize> = (-4..4).map(|x| pattern.index_for(Position::new(x, 0), anchor)).collect();
    assert_eq!(row, vec![2, 0, 1, 2, 0, 1, 2, 0]);

    let column: Vec<usize> = (-3..3).map(|y| pattern.index_for(Position::new(0, y), anchor)).collect();
    assert_eq!(column, vec![3, 0, 3, 0, 3, 0]);
}

#[test]
fn test_smart_path_capability() {
    let mut pattern = Pattern::from_tiles(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    assert!(pattern.is_smart_path_capable());
    pattern.set_enabled(8, false);
    assert!(!pattern.is_smart_path_capable());
    assert!(!Pattern::from_tiles(2, 2, &[1, 2, 3, 4]).unwrap().is_smart_path_capable());
}

#[test]
fn test_from_grid_rect_clips_and_keeps_collision() {
    let mut grid = BlockGrid::new(4, 4, Cell::default(), GridLimits::default()).unwrap();
    grid.set(3, 3, Cell::new(7, 1, 2), false);
    grid.set(2, 3, Cell::new(6, 0, 1), false);

    let pattern = Pattern::from_grid_rect(&grid, 5, 5, 2, 3).unwrap();
    assert_eq!((pattern.width(), pattern.height()), (2, 1));
    assert_eq!(pattern.cell(0).unwrap().tile_id, 6);
    assert_eq!(pattern.cell(1).unwrap().tile_id, 7);
    assert_eq!(pattern.collision_at(1), Some(CollisionData::new(1, 2)));

    assert!(Pattern::from_grid_rect(&grid, 10, 10, 12, 12).is_none());
}

#[test]
fn test_collision_pattern() {
    let pattern = Pattern::collision(CollisionData::new(1, 3));
    assert!(pattern.has_collision());
    assert_eq!(pattern.collision_at(0), Some(CollisionData::new(1, 3)));
    assert_eq!(pattern.single_enabled_index(), Some(0));
}

#[test]
fn test_oversized_pattern_is_rejected() {
    assert!(Pattern::new(70_000, 70_000, vec![PatternCell::new(1)]).is_err());
}

#[test]
fn test_deserialize_goes_through_validation() {
    let pattern: Pattern = toml::from_str(
        r#"
        width = 2
        height = 1
        cells = [{ enabled = true, tile_id = 4 }, { enabled = false, tile_id = 0 }]
        "#,
    )
    .unwrap();
    assert_eq!(pattern, Pattern::new(2, 1, vec![PatternCell::new(4), PatternCell::disabled()]).unwrap());
    assert!(!pattern.has_collision());

    let zero_width = toml::from_str::<Pattern>("width = 0\nheight = 1\ncells = []\n");
    assert!(zero_width.is_err());

    let short = toml::from_str::<Pattern>("width = 2\nheight = 2\ncells = [{ enabled = true, tile_id = 1 }]\n");
    assert!(short.is_err());
}
