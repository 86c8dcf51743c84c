use crate::ship::ShipType;

pub const ROWS: usize = 10;
pub const COLS: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random anchors tried per ship before falling back to a board scan.
pub const PLACEMENT_ATTEMPTS: usize = 100;

pub const SEA_ICON: char = '·';
pub const HORIZONTAL_ICON: char = '>';
pub const VERTICAL_ICON: char = '^';
pub const HIT_ICON: char = '*';
pub const MISS_ICON: char = '+';

/// Name used when the player does not give one.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Sum of ship lengths, i.e. the starting hit points for a fleet.
pub fn fleet_hit_points(fleet: &[ShipType]) -> usize {
    fleet.iter().map(|s| s.length()).sum()
}
