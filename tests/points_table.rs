use champstand::{points::PointsTable, race::ResultFlags};

#[test]
fn default_table_scores_modern_top_ten() {
    let table = PointsTable::default();
    let flags = ResultFlags::default();

    assert_eq!(table.points_for(1, &flags), 25);
    assert_eq!(table.points_for(2, &flags), 18);
    assert_eq!(table.points_for(3, &flags), 15);
    assert_eq!(table.points_for(10, &flags), 1);
    assert_eq!(table.scored_range_end(), Some(10));
}

#[test]
fn positions_beyond_scored_range_are_zero_not_an_error() {
    let table = PointsTable::default();
    let flags = ResultFlags::default();

    assert_eq!(table.points_for(11, &flags), 0);
    assert_eq!(table.points_for(999, &flags), 0);
}

#[test]
fn dnf_and_dsq_score_zero_regardless_of_position() {
    let table = PointsTable::default();

    let dnf = ResultFlags {
        dnf: true,
        dsq: false,
    };
    let dsq = ResultFlags {
        dnf: false,
        dsq: true,
    };
    assert_eq!(table.points_for(1, &dnf), 0);
    assert_eq!(table.points_for(1, &dsq), 0);
}

#[test]
fn table_is_replaceable_configuration() {
    let table = PointsTable::new([(1, 100), (2, 50)]);
    let flags = ResultFlags::default();

    assert_eq!(table.points_for(1, &flags), 100);
    assert_eq!(table.points_for(2, &flags), 50);
    assert_eq!(table.points_for(3, &flags), 0);
    assert_eq!(table.scored_range_end(), Some(2));
}

#[test]
fn empty_table_scores_nothing() {
    let table = PointsTable::new([]);
    assert_eq!(table.points_for(1, &ResultFlags::default()), 0);
    assert_eq!(table.scored_range_end(), None);
}
