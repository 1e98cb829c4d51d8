#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::{Barricade, Player, ResourceStock};
    use crate::constants::*;
    use crate::enums::{Direction, ResourceKind};
    use crate::events::GameEvent;
    use crate::geometry::FieldGeometry;
    use crate::state::GameSnapshot;
    use crate::types::{Position, Rect};

    /// Verify the derived movement and contact constants. Both come from
    /// integer division, so a careless refactor to floats would shift
    /// every collision threshold.
    #[test]
    fn test_derived_constants() {
        assert_eq!(ENEMY_STEP, 5);
        assert_eq!(CONTACT_RANGE, 17);
        assert_eq!(BEACON_FOOTPRINT_RADIUS, 80);
    }

    #[test]
    fn test_position_stepped() {
        let p = Position::new(100, 100);
        assert_eq!(p.stepped(Direction::Up, 20), Position::new(100, 80));
        assert_eq!(p.stepped(Direction::Down, 20), Position::new(100, 120));
        assert_eq!(p.stepped(Direction::Left, 20), Position::new(80, 100));
        assert_eq!(p.stepped(Direction::Right, 20), Position::new(120, 100));
    }

    #[test]
    fn test_position_distance_squared() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.distance_squared_to(&b), 25);
        assert_eq!(b.distance_squared_to(&a), 25);
        assert_eq!(a.distance_squared_to(&a), 0);
    }

    /// The box test is strict on both axes: 19 < 20 passes, 20 does not.
    #[test]
    fn test_position_within_box() {
        let center = Position::new(0, 0);
        assert!(center.within_box(&Position::new(19, 0), 20));
        assert!(center.within_box(&Position::new(-19, 19), 20));
        assert!(!center.within_box(&Position::new(20, 0), 20));
        assert!(!center.within_box(&Position::new(0, -20), 20));
        assert!(!center.within_box(&Position::new(19, 25), 20));
    }

    /// Rectangles are half-open: left/top edges inside, right/bottom out.
    #[test]
    fn test_rect_contains_half_open() {
        let rect = Rect::new(0, 0, 20, 20);
        assert!(rect.contains(&Position::new(0, 0)));
        assert!(rect.contains(&Position::new(19, 19)));
        assert!(!rect.contains(&Position::new(20, 0)));
        assert!(!rect.contains(&Position::new(0, 20)));
        assert!(!rect.contains(&Position::new(-1, 0)));
    }

    #[test]
    fn test_rect_center() {
        assert_eq!(Rect::new(220, 260, 80, 80).center(), Position::new(260, 300));
        assert_eq!(Rect::new(0, 0, 20, 20).center(), Position::new(10, 10));
    }

    /// Verify every rectangle for the reference 800x600 viewport.
    #[test]
    fn test_geometry_reference_viewport() {
        let g = FieldGeometry::derive(800, 600);

        // Two thirds of 800 truncates to 533; 26x30 whole cells.
        assert_eq!(g.field_width, 533);
        assert_eq!(g.field_height, 600);

        assert_eq!(g.land, Rect::new(160, 200, 200, 200));
        assert_eq!(g.beacon, Rect::new(220, 260, 80, 80));
        assert_eq!(g.beacon_center(), Position::new(260, 300));
        assert_eq!(g.player_spawn(), g.beacon_center());

        assert_eq!(g.wood_zone, Rect::new(260, 360, 20, 20));
        assert_eq!(g.stone_zone, Rect::new(320, 300, 20, 20));
        assert_eq!(g.metal_zone, Rect::new(300, 300, 20, 20));
    }

    /// The zones sit inside the land square and never overlap, so one
    /// harvest can reach at most one zone per resource.
    #[test]
    fn test_geometry_zones_inside_land_and_disjoint() {
        let g = FieldGeometry::derive(800, 600);
        let zones = [g.wood_zone, g.stone_zone, g.metal_zone];

        for zone in &zones {
            assert!(g.land.contains(&Position::new(zone.x, zone.y)));
            assert!(g.land.contains(&Position::new(
                zone.x + zone.width - 1,
                zone.y + zone.height - 1
            )));
        }
        for (i, a) in zones.iter().enumerate() {
            for b in &zones[i + 1..] {
                assert!(!a.contains(&b.center()) && !b.contains(&a.center()));
            }
        }
    }

    /// Geometry anchors stay grid-aligned for other viewport sizes too.
    #[test]
    fn test_geometry_alternate_viewport() {
        let g = FieldGeometry::derive(1200, 900);
        assert_eq!(g.field_width, 800);
        assert_eq!(g.beacon_center(), Position::new(400, 440));
        assert_eq!(g.land, Rect::new(300, 340, 200, 200));
        assert_eq!(g.beacon_center().x % CELL_SIZE, 0);
        assert_eq!(g.beacon_center().y % CELL_SIZE, 0);
    }

    #[test]
    fn test_player_starts_facing_right() {
        let player = Player::new(Position::new(260, 300));
        assert_eq!(player.facing, Direction::Right);
    }

    #[test]
    fn test_barricade_starts_at_full_health() {
        let barricade = Barricade::new(Position::new(100, 100));
        assert_eq!(barricade.health, BARRICADE_HEALTH);
    }

    #[test]
    fn test_stock_initial_values() {
        let stock = ResourceStock::initial();
        assert_eq!(stock.wood, 100);
        assert_eq!(stock.metal, 50);
        assert_eq!(stock.stone, 75);
        assert_eq!(stock.ammo, 10);
    }

    #[test]
    fn test_stock_add_capped() {
        let mut stock = ResourceStock::initial();
        stock.add_capped(ResourceKind::Wood, 30);
        assert_eq!(stock.wood, 130);
        stock.add_capped(ResourceKind::Wood, 30);
        assert_eq!(stock.wood, MAX_RESOURCES);
        // Other counters untouched.
        assert_eq!(stock.metal, 50);
        assert_eq!(stock.stone, 75);
    }

    #[test]
    fn test_stock_covers_and_spend() {
        let mut stock = ResourceStock::initial();
        assert!(stock.covers(100, 50, 75));
        assert!(!stock.covers(101, 0, 0));
        assert!(!stock.covers(0, 51, 0));

        stock.spend(10, 5, 5);
        assert_eq!(stock.wood, 90);
        assert_eq!(stock.metal, 45);
        assert_eq!(stock.stone, 70);
        assert_eq!(stock.ammo, 10);
    }

    #[test]
    fn test_harvest_amounts_per_kind() {
        assert_eq!(ResourceKind::Wood.harvest_amount(), 10);
        assert_eq!(ResourceKind::Stone.harvest_amount(), 7);
        assert_eq!(ResourceKind::Metal.harvest_amount(), 5);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Move {
                direction: Direction::Up,
            },
            PlayerCommand::Shoot,
            PlayerCommand::BuildBarricade,
            PlayerCommand::Harvest,
            PlayerCommand::RepairBeacon,
            PlayerCommand::CreateAmmo,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    /// Verify GameSnapshot can be serialized to JSON and back.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot {
            player: Some(Player::new(Position::new(260, 300))),
            enemies: vec![Position::new(0, 40), Position::new(500, 580)],
            barricades: vec![Barricade::new(Position::new(260, 320))],
            resources: ResourceStock::initial(),
            beacon_health: 90,
            geometry: FieldGeometry::derive(800, 600),
            game_over: false,
            events: vec![GameEvent::Updated, GameEvent::GameOver],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
        // Verify the empty snapshot stays reasonably small on the wire.
        let empty = serde_json::to_string(&GameSnapshot::default()).unwrap();
        assert!(empty.len() < 1024, "empty snapshot was {} bytes", empty.len());
    }
}
