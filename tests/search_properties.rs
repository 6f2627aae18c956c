use grid_util::*;
use tile_pathfinding::{PathSearch, Termination, TilePosition, TraversalSurface, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Walker {
    Boat,
    Foot,
}

/// Land with a river running down column 2. Boats may only use the river, walkers may cross it
/// anywhere but wading is expensive.
struct RiverMap {
    width: usize,
    height: usize,
    bridge_row: i32,
}

impl RiverMap {
    fn is_river(&self, p: Point) -> bool {
        p.x == 2
    }
}

impl TraversalSurface for RiverMap {
    type Mover = Walker;

    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn is_traversable(&self, mover: &Walker, tile: Point) -> bool {
        match mover {
            Walker::Boat => self.is_river(tile),
            Walker::Foot => true,
        }
    }
    fn movement_cost(&self, mover: &Walker, _from: Point, to: Point) -> f32 {
        match mover {
            Walker::Foot if self.is_river(to) && to.y != self.bridge_row => 10.0,
            _ => 1.0,
        }
    }
}

/// A 3x2 map where leaving (1, 0) to the east is expensive, so the direct route to (2, 0) is
/// discovered first but beaten by the detour through the bottom row.
struct TollMap;

impl TraversalSurface for TollMap {
    type Mover = ();

    fn width(&self) -> usize {
        3
    }
    fn height(&self) -> usize {
        2
    }
    fn is_traversable(&self, _: &(), _: Point) -> bool {
        true
    }
    fn movement_cost(&self, _: &(), from: Point, to: Point) -> f32 {
        if from == Point::new(1, 0) && to == Point::new(2, 0) {
            10.0
        } else {
            1.0
        }
    }
}

/// A 4x2 map whose bottom row is a fast lane: every step onto, along or off it costs 0.25, so
/// the straight line heuristic overestimates there. The target (3, 0) can only be entered from
/// (2, 0), over an edge costing 5.
//  ____
// |S..T|
// |~~~#|
//  ____
struct FastLane;

impl TraversalSurface for FastLane {
    type Mover = ();

    fn width(&self) -> usize {
        4
    }
    fn height(&self) -> usize {
        2
    }
    fn is_traversable(&self, _: &(), tile: Point) -> bool {
        tile != Point::new(3, 1)
    }
    fn movement_cost(&self, _: &(), from: Point, to: Point) -> f32 {
        if from.y == 1 || to.y == 1 {
            0.25
        } else if from == Point::new(2, 0) && to == Point::new(3, 0) {
            5.0
        } else {
            1.0
        }
    }
}

struct OpenField(usize, usize);

impl TraversalSurface for OpenField {
    type Mover = ();

    fn width(&self) -> usize {
        self.0
    }
    fn height(&self) -> usize {
        self.1
    }
    fn is_traversable(&self, _: &(), _: Point) -> bool {
        true
    }
    fn movement_cost(&self, _: &(), _: Point, _: Point) -> f32 {
        1.0
    }
}

#[test]
fn straight_path_on_open_field() {
    let mut search = PathSearch::new(OpenField(5, 5));
    let path = search
        .search(&(), Point::new(0, 0), Point::new(4, 0), 100)
        .unwrap();
    assert_eq!(
        path,
        vec![
            Vec2::new(1.0, 0.5),
            Vec2::new(2.0, 0.5),
            Vec2::new(3.0, 0.5),
            Vec2::new(4.0, 0.5)
        ]
    );
}

#[test]
fn relaxation_keeps_cheapest_cost() {
    let mut search = PathSearch::new(TollMap);
    let tiles = search
        .search_tiles(&(), Point::new(0, 0), Point::new(2, 0), 100)
        .unwrap();
    assert_eq!(search.node(Point::new(2, 0)).unwrap().g, 4.0);
    assert_eq!(tiles.len(), 5);
    assert_eq!(tiles[tiles.len() - 2], Point::new(2, 1));
}

#[test]
fn expanded_nodes_are_reopened_on_cheaper_route() {
    // The top row is expanded first because its heuristic is lower. The fast lane reaches
    // (1, 0) and (2, 0) more cheaply only after both have been closed.
    let mut search = PathSearch::new(FastLane);
    let tiles = search
        .search_tiles(&(), Point::new(0, 0), Point::new(3, 0), 100)
        .unwrap();
    assert_eq!(
        tiles,
        vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 0),
            Point::new(3, 0)
        ]
    );

    let gate = search.node(Point::new(2, 0)).unwrap();
    assert_eq!(gate.g, 1.0);
    assert_eq!(gate.depth, 4);
    let gate_parent = gate.parent.map(|ix| search.nodes()[ix].point);
    assert_eq!(gate_parent, Some(Point::new(2, 1)));

    let second = search.node(Point::new(1, 0)).unwrap();
    assert_eq!(second.g, 0.75);
    let second_parent = second.parent.map(|ix| search.nodes()[ix].point);
    assert_eq!(second_parent, Some(Point::new(1, 1)));

    assert_eq!(search.node(Point::new(3, 0)).unwrap().g, 6.0);
}

#[test]
fn movers_see_different_maps() {
    let map = RiverMap {
        width: 5,
        height: 6,
        bridge_row: 4,
    };
    let mut search = PathSearch::new(map);

    // Boats cannot leave the river.
    assert!(search
        .search(&Walker::Boat, Point::new(2, 0), Point::new(0, 0), 100)
        .is_none());
    assert_eq!(search.last_termination(), Some(Termination::TargetBlocked));
    let boat = search
        .search_tiles(&Walker::Boat, Point::new(2, 0), Point::new(2, 5), 100)
        .unwrap();
    assert!(boat.iter().all(|p| p.x == 2));

    // Walking down to the bridge is cheaper than wading straight across.
    let foot = search
        .search_tiles(&Walker::Foot, Point::new(0, 0), Point::new(4, 0), 100)
        .unwrap();
    let crossing = foot.iter().find(|p| p.x == 2).unwrap();
    assert_eq!(crossing.y, 4);
    assert_eq!(search.node(Point::new(4, 0)).unwrap().g, 12.0);
}

#[test]
fn repeated_searches_are_identical() {
    let map = RiverMap {
        width: 7,
        height: 7,
        bridge_row: 3,
    };
    let mut search = PathSearch::new(&map);
    let first = search.search(&Walker::Foot, Point::new(0, 6), Point::new(6, 0), 200);
    assert!(first.is_some());
    // An unrelated search in between must not influence the next result.
    search.search(&Walker::Foot, Point::new(6, 6), Point::new(0, 0), 200);
    for _ in 0..5 {
        assert_eq!(
            search.search(&Walker::Foot, Point::new(0, 6), Point::new(6, 0), 200),
            first
        );
    }
}

#[test]
fn wall_separates_source_and_target() {
    struct Walled;
    impl TraversalSurface for Walled {
        type Mover = ();
        fn width(&self) -> usize {
            6
        }
        fn height(&self) -> usize {
            4
        }
        fn is_traversable(&self, _: &(), tile: Point) -> bool {
            tile.x != 3
        }
        fn movement_cost(&self, _: &(), _: Point, _: Point) -> f32 {
            1.0
        }
    }
    let mut search = PathSearch::new(Walled);
    for budget in [5, 50, 500] {
        assert!(search
            .search(&(), Point::new(0, 0), Point::new(5, 3), budget)
            .is_none());
    }
    assert_eq!(search.last_termination(), Some(Termination::Exhausted));
}

#[test]
fn entities_supply_endpoints() {
    struct Unit {
        x: i32,
        y: i32,
    }
    impl TilePosition for Unit {
        fn tile(&self) -> Point {
            Point::new(self.x, self.y)
        }
    }
    let mut search = PathSearch::new(OpenField(4, 4));
    let hunter = Unit { x: 3, y: 3 };
    let prey = Unit { x: 3, y: 1 };
    let path = search.search_between(&(), &hunter, &prey, 10).unwrap();
    assert_eq!(path, vec![Vec2::new(3.5, 3.0), Vec2::new(3.5, 2.0)]);
    let stay = search.search_between(&(), &hunter, &hunter, 10).unwrap();
    assert_eq!(stay, vec![Vec2::new(3.5, 3.5)]);
}
