use std::process;

use clap::{value_t, App, Arg};
use log::debug;

use board_search::config::{AgentKind, Config, Method, Metric};
use board_search::movement::Movement;
use board_search::solution_formatter::SolutionFormatter;
use board_search::{LoadBoard, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("board-search")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds a path for the agent through all the boxes to the exit")
        .arg(
            Arg::with_name("movement")
                .short("m")
                .long("movement")
                .takes_value(true)
                .possible_values(&["default", "knight", "queen", "rook"])
                .default_value("default")
                .help("how the agent moves"),
        )
        .arg(
            Arg::with_name("method")
                .short("s")
                .long("method")
                .takes_value(true)
                .possible_values(&["bfs", "dfs", "ucs", "greedy", "astar"])
                .default_value("astar")
                .help("search method"),
        )
        .arg(
            Arg::with_name("agent")
                .short("a")
                .long("agent")
                .takes_value(true)
                .possible_values(&["exit", "collector"])
                .default_value("collector")
                .help("exit heads straight for the exit, collector for the nearest box first"),
        )
        .arg(
            Arg::with_name("metric")
                .long("metric")
                .takes_value(true)
                .possible_values(&["euclidean", "manhattan"])
                .default_value("euclidean")
                .help("distance used by the heuristic"),
        )
        .arg(
            Arg::with_name("no-box-penalty")
                .long("no-box-penalty")
                .help("don't add rows + cols per remaining box to the collector's heuristic"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print status while searching"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let config = Config {
        movement: value_t!(matches, "movement", Movement).unwrap_or_else(|e| e.exit()),
        method: value_t!(matches, "method", Method).unwrap_or_else(|e| e.exit()),
        agent: value_t!(matches, "agent", AgentKind).unwrap_or_else(|e| e.exit()),
        metric: value_t!(matches, "metric", Metric).unwrap_or_else(|e| e.exit()),
        box_penalty: !matches.is_present("no-box-penalty"),
    };
    debug!("{:?}", config);

    // required so clap already made sure it's there
    let path = matches.value_of("file").unwrap_or_default();
    let board = path.load_board().unwrap_or_else(|err| {
        eprintln!("Can't load board {}: {}", path, err);
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solution = board
        .solve(&config, !matches.is_present("quiet"))
        .unwrap_or_else(|err| {
            eprintln!("Can't solve {}: {}", path, err);
            process::exit(1);
        });
    println!("{}", solution.stats);

    match solution.path {
        Some(ref path) => {
            println!("Found solution:");
            print!("{}", SolutionFormatter::new(&board, path));
            println!("Moves: {}", path.len() - 1);
        }
        None => println!("No solution"),
    }
}
