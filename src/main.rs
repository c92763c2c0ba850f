//! Conway Lab CLI - Run Game of Life simulations or estimate π.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;

use conway_lab::{
    compute::{Grid, GridStats},
    montecarlo::{estimate_pi, parse_sample_count},
    schema::{LifeConfig, Pattern, Seed},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("life") => run_life(&args[2..]),
        Some("pi") => run_pi(&args[2..]),
        Some("--example") => print_example_config(),
        _ => {
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [args]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  life [config.json] [generations]  Run a Game of Life simulation");
    eprintln!("  pi <samples>                      Estimate π by Monte Carlo sampling");
    eprintln!("  --example                         Print example configuration");
    eprintln!();
    eprintln!("The seed is read from <config>.seed.json when present,");
    eprintln!("otherwise the grid is filled at random.");
}

fn run_life(args: &[String]) {
    // Load configuration
    let config_path = args.first().map(PathBuf::from);
    let mut config: LifeConfig = match &config_path {
        Some(path) => {
            let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => LifeConfig::default(),
    };

    if let Some(steps) = args.get(1) {
        config.generations = steps.parse().unwrap_or_else(|_| {
            eprintln!("Error: generations must be a non-negative integer, got {:?}", steps);
            std::process::exit(1);
        });
    }

    // Load or create seed
    let seed_path = config_path.map(|p| p.with_extension("seed.json"));
    let seed: Seed = match seed_path.filter(|p| p.exists()) {
        Some(path) => {
            let seed_str = fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Error reading seed file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&seed_str).unwrap_or_else(|e| {
                eprintln!("Error parsing seed: {}", e);
                std::process::exit(1);
            })
        }
        None => Seed {
            pattern: Pattern::Random {
                live_probability: config.live_probability,
                seed: config.seed,
            },
        },
    };

    let mut grid = Grid::from_seed(&seed, &config).unwrap_or_else(|e| {
        eprintln!("Error initializing grid: {}", e);
        std::process::exit(1);
    });

    println!("Conway Lab");
    println!("==========");
    println!("Grid: {0}x{0} (toroidal)", config.dimension);
    println!("Generations: {}", config.generations);
    println!();

    for _ in 0..=config.generations {
        let stats = GridStats::from_grid(&grid);
        println!(
            "Generation {}: {} alive ({:.1}%)",
            stats.generation,
            stats.population,
            stats.live_fraction * 100.0
        );
        print!("{}", grid.render_with(config.alive_glyph, config.dead_glyph));
        println!();

        if stats.generation == config.generations {
            break;
        }
        if stats.stable {
            println!("Still life reached; stopping.");
            break;
        }
        grid.advance_generation();
    }
}

fn run_pi(args: &[String]) {
    let Some(arg) = args.first() else {
        eprintln!("Usage: conway-lab pi <samples>");
        std::process::exit(1);
    };

    let samples = parse_sample_count(arg).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let pi = estimate_pi(samples, &mut rand::thread_rng());
    println!("π ≈ {}", pi);
}

fn print_example_config() {
    let config = LifeConfig::default();
    let seed = Seed {
        pattern: Pattern::Lines {
            lines: vec!["010".into(), "001".into(), "111".into()],
        },
    };

    match (
        serde_json::to_string_pretty(&config),
        serde_json::to_string_pretty(&seed),
    ) {
        (Ok(config_json), Ok(seed_json)) => {
            println!("Example configuration (config.json):");
            println!("{}", config_json);
            println!();
            println!("Example seed (config.seed.json):");
            println!("{}", seed_json);
        }
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error serializing example: {}", e);
            std::process::exit(1);
        }
    }
}
