use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use maze_carver::{Direction, Generator, Navigator, RecursiveBacktracker, WallGrid};

/// Carve a maze with the recursive backtracker and print it as ASCII.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 20)]
    columns: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 12)]
    rows: usize,

    /// Random seed; the same seed reproduces the same maze
    #[arg(long)]
    seed: Option<u64>,

    /// Moves to replay from the origin after carving, e.g. "eesswn"
    #[arg(long)]
    walk: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut generator = RecursiveBacktracker::new(args.columns, args.rows, args.seed)
        .context("invalid maze dimensions")?;

    let mut steps = 0usize;
    while !generator.is_done() {
        generator.step_generation();
        steps += 1;
    }

    let grid = generator.grid();
    info!(
        "carved {}x{} maze in {} steps, {} passages",
        args.columns,
        args.rows,
        steps,
        grid.open_passages()
    );

    let marker = match &args.walk {
        Some(walk) => Some(replay_walk(grid, walk)?),
        None => None,
    };

    print!("{}", render(grid, marker));

    Ok(())
}

/// Feed a move string through a navigator, reporting blocked moves.
fn replay_walk(grid: &WallGrid, walk: &str) -> Result<(usize, usize)> {
    let mut navigator = Navigator::new();

    for (index, symbol) in walk.chars().enumerate() {
        let dir = parse_direction(symbol)
            .with_context(|| format!("bad move '{}' at position {}", symbol, index))?;

        if !navigator.try_move(grid, dir) {
            println!(
                "move {} ({:?}) blocked at {:?}",
                index + 1,
                dir,
                navigator.position()
            );
        }
    }

    println!("walk ended at {:?}", navigator.position());
    Ok(navigator.position())
}

/// The key mapping of the input adapter: up/right/down/left as compass letters.
fn parse_direction(symbol: char) -> Result<Direction> {
    Ok(match symbol.to_ascii_lowercase() {
        'n' | 'u' => Direction::North,
        'e' | 'r' => Direction::East,
        's' | 'd' => Direction::South,
        'w' | 'l' => Direction::West,
        other => bail!("unknown direction '{}'", other),
    })
}

/// One text row per wall row: `+--+` borders above each cell row, `|` between
/// cells, with the marker cell (if any) drawn as `@`.
fn render(grid: &WallGrid, marker: Option<(usize, usize)>) -> String {
    let mut out = String::new();

    for row in 0..grid.dims.rows {
        for column in 0..grid.dims.columns {
            out.push('+');
            let north = grid
                .cell((column, row))
                .map(|cell| cell.wall(Direction::North))
                .unwrap_or(true);
            out.push_str(if north { "--" } else { "  " });
        }
        out.push_str("+\n");

        for column in 0..grid.dims.columns {
            let cell = grid.cell((column, row)).expect("in-range cell");
            out.push(if cell.wall(Direction::West) { '|' } else { ' ' });
            out.push_str(if marker == Some((column, row)) {
                "@ "
            } else {
                "  "
            });
        }
        out.push_str("|\n");
    }

    for _ in 0..grid.dims.columns {
        out.push_str("+--");
    }
    out.push_str("+\n");

    out
}
