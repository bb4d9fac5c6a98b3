//! Spawn policy tests - empty-cell selection, weighted values, reset

use tui_2048::core::{Grid, GridError, SpawnWeight};

#[test]
fn test_spawn_fills_only_empty_cells_one_at_a_time() {
    let mut grid = Grid::new(42);

    for expected_count in 1..=16 {
        let before: Vec<u32> = grid.cells().to_vec();
        let cell = grid.insert_random_cell().expect("board not yet full");

        assert_eq!(
            before[cell.row * grid.dim() + cell.col],
            0,
            "spawned onto an occupied cell"
        );
        assert_eq!(grid.tile_count(), expected_count);

        // Every other cell is untouched.
        for (i, &v) in grid.cells().iter().enumerate() {
            if i != cell.row * grid.dim() + cell.col {
                assert_eq!(v, before[i]);
            }
        }
    }

    assert_eq!(grid.insert_random_cell(), Err(GridError::NoEmptyCell));
}

#[test]
fn test_spawned_values_come_from_the_table() {
    let mut grid = Grid::new(7);
    for _ in 0..16 {
        let cell = grid.insert_random_cell().unwrap();
        let v = grid.get(cell.row, cell.col);
        assert!(v == 2 || v == 4, "unexpected spawn value {v}");
    }
}

#[test]
fn test_spawn_ratio_converges_to_weights() {
    // 1x1 board, cleared between trials, so every draw is a fresh spawn.
    let table = vec![SpawnWeight::new(2, 9), SpawnWeight::new(4, 1)];
    let mut grid = Grid::with_config(1, 1, table, 987654321);

    let trials = 10_000;
    let mut twos = 0u32;
    for _ in 0..trials {
        grid.set(0, 0, 0);
        grid.insert_random_cell().unwrap();
        if grid.get(0, 0) == 2 {
            twos += 1;
        }
    }

    let ratio = twos as f64 / trials as f64;
    assert!(
        (0.85..=0.95).contains(&ratio),
        "2-spawn ratio {ratio} strayed from the 9:1 weighting"
    );
}

#[test]
fn test_single_entry_table_always_selected() {
    let table = vec![SpawnWeight::new(8, 3)];
    let mut grid = Grid::with_config(2, 1, table, 5);
    for _ in 0..8 {
        grid.set(0, 0, 0);
        grid.set(0, 1, 0);
        grid.set(1, 0, 0);
        grid.set(1, 1, 0);
        let cell = grid.insert_random_cell().unwrap();
        assert_eq!(grid.get(cell.row, cell.col), 8);
    }
}

#[test]
fn test_reset_places_exactly_start_cells_tiles() {
    for seed in 1..20u32 {
        let mut grid = Grid::new(seed);
        // Dirty the board first so reset provably clears it.
        grid.set(0, 0, 1024);
        grid.set(3, 3, 512);

        grid.reset().unwrap();

        assert_eq!(grid.tile_count(), grid.start_cells());
        for &v in grid.cells() {
            assert!(v == 0 || v == 2 || v == 4, "unexpected tile {v} after reset");
        }
    }
}

#[test]
fn test_reset_is_repeatable() {
    let mut grid = Grid::new(3);
    for _ in 0..10 {
        grid.reset().unwrap();
        assert_eq!(grid.tile_count(), 2);
    }
}
