use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, ArgMatches, Command};
use log::{debug, warn};

use horario::{
    default_data_path, hour_label, layout, ColorTheme, CourseDraft, GridConfig, ScheduleStore,
    SnapshotStore,
};

fn main() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let matches = cli().get_matches();

    let path = matches
        .get_one::<PathBuf>("file")
        .cloned()
        .unwrap_or_else(default_data_path);
    debug!("Using schedule slot {}", path.display());

    let mut store = ScheduleStore::open(SnapshotStore::new(path));

    match matches.subcommand() {
        Some(("add", args)) => add_course(&mut store, args),
        Some(("remove", args)) => remove_course(&mut store, args),
        Some(("label", args)) => relabel(&mut store, args),
        Some(("list", _)) => print_list(&store),
        // Plain `horario` and `horario show` both render the week.
        _ => print_week(&store),
    }
}

fn cli() -> Command {
    Command::new("horario")
        .version("0.1.0")
        .about("Weekly class schedule editor")
        .arg_required_else_help(false)
        .arg(
            Arg::new("file")
                .long("file")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Schedule slot to use instead of ~/.horario/schedule.json"),
        )
        .subcommand(Command::new("show").about("Render the week grid"))
        .subcommand(Command::new("list").about("List sessions with their ids"))
        .subcommand(
            Command::new("add")
                .about("Validate and add a course session")
                .arg(Arg::new("name").long("name").required(true).help("Course name"))
                .arg(
                    Arg::new("professor")
                        .long("professor")
                        .required(true)
                        .help("Professor"),
                )
                .arg(Arg::new("room").long("room").required(true).help("Room"))
                .arg(
                    Arg::new("credits")
                        .long("credits")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .help("Credits, 1 to 10"),
                )
                .arg(
                    Arg::new("day")
                        .long("day")
                        .required(true)
                        .help("Day of the week, Lunes to Sábado"),
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .help("Start hour on the 24h clock"),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .help("End hour on the 24h clock"),
                )
                .arg(
                    Arg::new("color")
                        .long("color")
                        .default_value("pink")
                        .help("pink, blue, purple, green or orange"),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove the session with the given id")
                .arg(Arg::new("id").required(true).help("Session id, see list")),
        )
        .subcommand(
            Command::new("label")
                .about("Rename the term")
                .arg(Arg::new("text").required(true).help("New label")),
        )
}

fn add_course(store: &mut ScheduleStore, args: &ArgMatches) {
    let color_name = args.get_one::<String>("color").cloned().unwrap_or_default();
    let color_theme = match ColorTheme::from_name(&color_name) {
        Some(color) => color,
        None => {
            eprintln!("Unknown color '{color_name}'; pick pink, blue, purple, green or orange");
            process::exit(1);
        }
    };

    let draft = CourseDraft {
        name: args.get_one::<String>("name").cloned().unwrap_or_default(),
        professor: args
            .get_one::<String>("professor")
            .cloned()
            .unwrap_or_default(),
        room: args.get_one::<String>("room").cloned().unwrap_or_default(),
        credits: args.get_one::<i64>("credits").copied().unwrap_or_default(),
        day: args.get_one::<String>("day").cloned().unwrap_or_default(),
        start_time: args.get_one::<i64>("start").copied().unwrap_or_default(),
        end_time: args.get_one::<i64>("end").copied().unwrap_or_default(),
        color_theme,
    };

    let record = match draft.validate() {
        Ok(record) => record,
        Err(err) => {
            eprintln!("Invalid course: {err}");
            process::exit(1);
        }
    };

    // Overlaps are allowed; they are reported so the user can decide.
    let conflicts: Vec<String> = store
        .find_conflicts(&record)
        .iter()
        .map(|s| format!("{} ({} {}:00-{}:00)", s.name, s.day.label(), s.start_time, s.end_time))
        .collect();

    let name = record.name.clone();
    let id = record.id.clone();
    match store.add_session(record) {
        Ok(()) => {
            println!("Added {name} with id {id}");
            if !conflicts.is_empty() {
                println!("Warning: overlaps with {}", conflicts.join(", "));
            }
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn remove_course(store: &mut ScheduleStore, args: &ArgMatches) {
    let id = args.get_one::<String>("id").cloned().unwrap_or_default();
    let known = store.sessions().iter().any(|s| s.id == id);
    store.remove_session(&id);
    if known {
        println!("Removed {id}");
    } else {
        println!("No session with id {id}; nothing changed");
    }
}

fn relabel(store: &mut ScheduleStore, args: &ArgMatches) {
    let text = args.get_one::<String>("text").cloned().unwrap_or_default();
    store.set_label(text);
    println!("Label is now '{}'", store.label());
}

fn print_list(store: &ScheduleStore) {
    println!(
        "{} ({} sessions, {} credits)",
        store.label(),
        store.session_count(),
        store.total_credits()
    );
    for s in store.sessions() {
        println!(
            "{:<36}  {:<9}  {:>2}:00-{:>2}:00  {:<22}  {:<12}  {} cr  {}",
            s.id,
            s.day.label(),
            s.start_time,
            s.end_time,
            s.name,
            s.room,
            s.credits,
            s.color_theme.as_str()
        );
    }
}

fn print_week(store: &ScheduleStore) {
    let config = GridConfig::default();
    println!(
        "{} ({} sessions, {} credits)",
        store.label(),
        store.session_count(),
        store.total_credits()
    );
    println!();

    let rows = config.row_count();
    let columns = config.day_order.len();
    let mut cells: Vec<Vec<Option<String>>> = vec![vec![None; columns]; rows];

    for record in store.sessions() {
        let span = match layout(record, &config) {
            Ok(span) => span,
            Err(err) => {
                warn!("Skipping {}: {}", record.name, err);
                continue;
            }
        };

        // Hand-edited slots can carry out-of-range hours; clip the span
        // instead of panicking.
        let row_end = (span.row_start + span.row_span).min(rows);
        for row in span.row_start..row_end {
            let text = match row - span.row_start {
                0 => record.name.clone(),
                1 => record.room.clone(),
                _ => String::new(),
            };
            cells[row][span.column] = Some(text);
        }
    }

    let mut header = format!("{:>9} ", "");
    for day in config.day_order {
        header.push('|');
        header.push_str(&format!("{:^14}", day.label()));
    }
    header.push('|');
    let rule = "-".repeat(header.chars().count());
    println!("{header}");
    println!("{rule}");

    for (row, hour) in (config.first_hour..config.last_hour).enumerate() {
        let mut line = format!("{:>9} ", hour_label(hour));
        for cell in &cells[row] {
            let text = cell.as_deref().unwrap_or("");
            line.push('|');
            line.push_str(&format!("{:^14}", clip(text, 13)));
        }
        line.push('|');
        println!("{line}");
    }
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}
