use clap::Parser;
use plateau::search::{
    heuristics::HeuristicName,
    search_engines::{EhcSearch, SearchVariantName},
    Fact, Operator, State, Task, Verbosity,
};
use std::time::Duration;

#[derive(Parser)]
#[command(version)]
/// Run one of the enforced hill-climbing variants on a built-in demo task.
struct Args {
    #[arg(
        value_enum,
        help = "The search variant to run",
        short = 's',
        long = "search",
        id = "SEARCH"
    )]
    search_variant: SearchVariantName,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use",
        short = 'e',
        long = "evaluator",
        id = "EVALUATOR",
        default_value_t = HeuristicName::GoalCounting
    )]
    heuristic_name: HeuristicName,
    #[arg(
        help = "Number of balls in the demo gripper task",
        short = 'b',
        long = "balls",
        default_value_t = 2
    )]
    balls: usize,
    #[arg(
        help = "Wall-clock budget for the run, e.g. 60s or 2m",
        short = 't',
        long = "time-limit",
        default_value = "60s",
        value_parser = humantime::parse_duration
    )]
    time_limit: Duration,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
}

fn main() {
    let args = Args::parse();

    let level: tracing::Level = args.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let task = gripper_task(args.balls);
    let heuristic = args.heuristic_name.create();
    let config = args
        .search_variant
        .config()
        .with_time_limit(args.time_limit);

    match EhcSearch::new(&task, heuristic, config).run() {
        Some(plan) => {
            println!("Plan found:");
            println!("{}", plan);
            println!("Plan length: {}", plan.len());
        }
        None => {
            println!("No plan found");
        }
    }
}

/// The classic gripper family: two rooms, two grippers, `balls` balls that
/// all start in room a and must end up in room b.
fn gripper_task(balls: usize) -> Task {
    let rooms = ["rooma", "roomb"];
    let grippers = ["left", "right"];

    let mut operators = vec![];
    for from in rooms {
        for to in rooms {
            if from == to {
                continue;
            }
            operators.push(Operator::new(
                &format!("move {} {}", from, to),
                [Fact::new(&format!("at-robby {}", from))],
                [Fact::new(&format!("at-robby {}", to))],
                [Fact::new(&format!("at-robby {}", from))],
            ));
        }
    }
    for ball in 0..balls {
        for room in rooms {
            for gripper in grippers {
                operators.push(Operator::new(
                    &format!("pick ball{} {} {}", ball, room, gripper),
                    [
                        Fact::new(&format!("at ball{} {}", ball, room)),
                        Fact::new(&format!("at-robby {}", room)),
                        Fact::new(&format!("free {}", gripper)),
                    ],
                    [Fact::new(&format!("carry ball{} {}", ball, gripper))],
                    [
                        Fact::new(&format!("at ball{} {}", ball, room)),
                        Fact::new(&format!("free {}", gripper)),
                    ],
                ));
                operators.push(Operator::new(
                    &format!("drop ball{} {} {}", ball, room, gripper),
                    [
                        Fact::new(&format!("carry ball{} {}", ball, gripper)),
                        Fact::new(&format!("at-robby {}", room)),
                    ],
                    [
                        Fact::new(&format!("at ball{} {}", ball, room)),
                        Fact::new(&format!("free {}", gripper)),
                    ],
                    [Fact::new(&format!("carry ball{} {}", ball, gripper))],
                ));
            }
        }
    }

    let mut initial = vec![Fact::new("at-robby rooma")];
    for gripper in grippers {
        initial.push(Fact::new(&format!("free {}", gripper)));
    }
    for ball in 0..balls {
        initial.push(Fact::new(&format!("at ball{} rooma", ball)));
    }

    let goals: Vec<Fact> = (0..balls)
        .map(|ball| Fact::new(&format!("at ball{} roomb", ball)))
        .collect();

    Task::new(
        &format!("gripper-{}", balls),
        operators,
        State::new(initial),
        goals,
    )
    .expect("the generated gripper operators have unique names")
}
