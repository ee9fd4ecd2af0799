use chrono::Datelike;
use clap::{Parser, Subcommand};
use liftday_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "liftday")]
#[command(about = "Weekly workout schedule and session tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the weekly schedule (default)
    Week {
        /// Week offset from the current week (negative = past)
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        offset: i32,
    },

    /// List the workout catalog
    Workouts {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the user profile
    Profile,

    /// Start a workout session and drive it interactively
    Start {
        /// Day of week to start (0 = Sunday); defaults to today
        #[arg(long, conflicts_with = "workout")]
        day: Option<usize>,

        /// Workout id to start (see `liftday workouts`)
        #[arg(long)]
        workout: Option<String>,

        /// Read session commands from a file, or "-" for stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Initialize logging
    liftday_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut store = AppStore::new();
    let mut user = store.user().clone();
    config.apply_to(&mut user);
    store.set_user(user);

    match cli.command {
        Some(Commands::Week { offset }) => cmd_week(&mut store, offset),
        Some(Commands::Workouts { json }) => cmd_workouts(&store, json),
        Some(Commands::Profile) => cmd_profile(&store),
        Some(Commands::Start {
            day,
            workout,
            script,
        }) => cmd_start(&mut store, day, workout, script),
        None => cmd_week(&mut store, 0),
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn cmd_week(store: &mut AppStore, offset: i32) -> Result<()> {
    store.set_current_week_offset(offset);

    let today = today();
    let days = week_days(today, store.current_week_offset());
    let start = schedule::week_start(today, store.current_week_offset());

    println!();
    println!("  Your Week: {}", week_range_label(start));
    println!();

    for (index, day) in days.iter().enumerate() {
        let plan = plan_for_day(index).expect("7-day window");
        let workout_name = store
            .workout_by_id(plan.workout_id)
            .map(|w| w.name.clone())
            .unwrap_or_else(|| plan.workout_id.to_string());

        let marker = if day.is_today { "▸" } else { " " };
        let kind = if plan.is_rest { "rest" } else { "train" };
        println!(
            "  {} {} {:>2}  [{}]  {}",
            marker, day.day_name, day.day_num, kind, workout_name
        );
    }

    println!();
    Ok(())
}

fn cmd_workouts(store: &AppStore, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(store.workouts())?);
        return Ok(());
    }

    println!();
    for workout in store.workouts() {
        println!(
            "  {:<12} {} ({} min, ~{} kcal, {} exercises)",
            workout.id,
            workout.name,
            workout.duration_seconds / 60,
            workout.calories_burned,
            workout.exercise_count()
        );
        println!("               {}", workout.description);
    }
    println!();
    Ok(())
}

fn cmd_profile(store: &AppStore) -> Result<()> {
    let user = store.user();
    println!();
    println!("  Name:   {}", user.name);
    println!("  Weight: {}lb", user.weight);
    println!("  Height: {}", profile::format_height(user.height));
    println!("  Age:    {}", user.age);
    if let Some(goals) = &user.goals {
        println!("  Goals:  {}", goals);
    }
    println!();
    Ok(())
}

// ============================================================================
// Active session loop
// ============================================================================

/// Where session commands come from
enum CommandSource {
    /// Interactive prompt; timers advance with wall-clock time
    Interactive,
    /// Scripted lines (from a file or piped stdin); timers advance only
    /// through explicit `tick` commands
    Script(std::vec::IntoIter<String>),
}

impl CommandSource {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self {
            CommandSource::Interactive => {
                print!("{}", prompt);
                io::stdout().flush()?;
                let mut line = String::new();
                let read = io::stdin().lock().read_line(&mut line)?;
                if read == 0 {
                    Ok(None)
                } else {
                    Ok(Some(line.trim().to_string()))
                }
            }
            CommandSource::Script(lines) => match lines.next() {
                Some(line) => {
                    println!("{}{}", prompt, line);
                    Ok(Some(line))
                }
                None => Ok(None),
            },
        }
    }
}

fn cmd_start(
    store: &mut AppStore,
    day: Option<usize>,
    workout_id: Option<String>,
    script: Option<PathBuf>,
) -> Result<()> {
    let id = match workout_id {
        Some(id) => id,
        None => {
            let day_index =
                day.unwrap_or_else(|| today().weekday().num_days_from_sunday() as usize);
            plan_for_day(day_index)
                .ok_or_else(|| Error::Other(format!("day index {} out of range", day_index)))?
                .workout_id
                .to_string()
        }
    };

    let workout = store
        .workout_by_id(&id)
        .cloned()
        .ok_or_else(|| Error::UnknownWorkout(id.clone()))?;

    store.start_workout(workout.clone());
    let mut session = ActiveSession::start(&workout)?;

    let mut source = match script {
        Some(path) if path.as_os_str() == "-" => {
            let lines: Vec<String> = io::stdin()
                .lock()
                .lines()
                .collect::<std::result::Result<_, _>>()?;
            CommandSource::Script(lines.into_iter())
        }
        Some(path) => {
            let contents = std::fs::read_to_string(&path)?;
            let lines: Vec<String> = contents.lines().map(str::to_string).collect();
            CommandSource::Script(lines.into_iter())
        }
        None => CommandSource::Interactive,
    };

    print_session_header(&workout, &session);
    print_exercise(&workout, &session);

    let mut last_prompt = Instant::now();
    loop {
        let Some(line) = source.next_line("> ")? else {
            // Abandon without finishing: the active workout stays set
            // ("soft pause"), matching leaving the session screen.
            println!("\nSession paused. Resume with `liftday start`.");
            return Ok(());
        };

        // Best-effort wall clock: interactive timers advance by the time
        // spent at the prompt. Scripted runs stay deterministic.
        if matches!(source, CommandSource::Interactive) {
            let elapsed = last_prompt.elapsed().as_secs();
            for _ in 0..elapsed {
                session.tick();
            }
            last_prompt = Instant::now();
        }

        let command = line.trim();
        if command.is_empty() {
            print_timers(&session);
            continue;
        }

        match apply_command(command, &mut source, store, &workout, session)? {
            LoopState::Continue(s) => session = s,
            LoopState::Finished => {
                println!("\n✓ Workout complete!");
                return Ok(());
            }
            LoopState::Quit => {
                println!("\nSession paused. Resume with `liftday start`.");
                return Ok(());
            }
        }
    }
}

enum LoopState {
    Continue(ActiveSession),
    Finished,
    Quit,
}

fn apply_command(
    command: &str,
    source: &mut CommandSource,
    store: &mut AppStore,
    workout: &Workout,
    mut session: ActiveSession,
) -> Result<LoopState> {
    let mut parts = command.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let exercise_id = session.current_exercise().exercise_id.clone();

    match verb {
        "done" => {
            let index = profile::coerce_number(parts.next().unwrap_or_default()) as usize;
            if index == 0 {
                println!("usage: done <set-number>");
            } else {
                session.toggle_set_completion(&exercise_id, index - 1);
                print_exercise(workout, &session);
            }
        }
        "w" => {
            let index = profile::coerce_number(parts.next().unwrap_or_default()) as usize;
            // Non-numeric weight coerces to 0 rather than erroring
            let weight = profile::coerce_number(parts.next().unwrap_or_default());
            if index == 0 {
                println!("usage: w <set-number> <weight>");
            } else {
                session.update_weight(&exercise_id, index - 1, weight);
                print_exercise(workout, &session);
            }
        }
        "r" => {
            let index = profile::coerce_number(parts.next().unwrap_or_default()) as usize;
            let reps = profile::coerce_number(parts.next().unwrap_or_default());
            if index == 0 {
                println!("usage: r <set-number> <reps>");
            } else {
                session.update_reps(&exercise_id, index - 1, reps);
                print_exercise(workout, &session);
            }
        }
        "timer" => {
            let seconds = match parts.next() {
                Some(text) => text.parse().unwrap_or(DEFAULT_TIMER_SECONDS),
                None => default_timer_seconds(workout, &session),
            };
            session.start_exercise_timer(seconds);
            print_timers(&session);
        }
        "stop" => {
            session.stop_exercise_timer();
            print_timers(&session);
        }
        "show-timer" => {
            session.toggle_timer_visibility(&exercise_id);
            print_exercise(workout, &session);
        }
        "set-timer" => {
            let seconds = parts
                .next()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TIMER_SECONDS);
            session.set_custom_timer_seconds(&exercise_id, seconds);
        }
        "rest-skip" => {
            session.skip_rest_timer();
            print_timers(&session);
        }
        "tick" => {
            let count = parts
                .next()
                .and_then(|t| t.parse().ok())
                .unwrap_or(1u32);
            for _ in 0..count {
                session.tick();
            }
            print_timers(&session);
        }
        "next" => {
            if session.next_exercise() {
                // Cursor moved: redraw from the top
                print_exercise(workout, &session);
            }
        }
        "prev" => {
            if session.previous_exercise() {
                print_exercise(workout, &session);
            }
        }
        "finish" => {
            if !session.can_finish() {
                println!("Finish is only available on the last exercise once every set is done.");
                return Ok(LoopState::Continue(session));
            }
            let answer = source
                .next_line("Finish this workout? [y/N] ")?
                .unwrap_or_default();
            let confirmed = answer.trim().eq_ignore_ascii_case("y");
            match session.finish(confirmed, store) {
                FinishOutcome::Finished => return Ok(LoopState::Finished),
                FinishOutcome::Declined(s) | FinishOutcome::NotReady(s) => {
                    session = s;
                }
            }
        }
        "quit" => return Ok(LoopState::Quit),
        "help" => print_help(),
        other => println!("Unknown command '{}'. Try 'help'.", other),
    }

    Ok(LoopState::Continue(session))
}

/// Start-button default: the first set's duration when the exercise leads
/// with a timed set, else the per-exercise custom timer length.
fn default_timer_seconds(workout: &Workout, session: &ActiveSession) -> u32 {
    let exercise = &workout.exercises[session.exercise_index()];
    exercise
        .sets
        .first()
        .and_then(|s| s.kind.duration_seconds())
        .unwrap_or(session.current_exercise().custom_timer_seconds)
}

// ============================================================================
// Rendering
// ============================================================================

fn print_session_header(workout: &Workout, session: &ActiveSession) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", workout.name);
    println!("╰─────────────────────────────────────────╯");
    println!("  {}", workout.description);
    println!(
        "  Progress: {}/{} exercises ({:.0}%)",
        session.completed_exercise_count(),
        session.exercise_count(),
        session.progress_percentage()
    );
}

fn print_exercise(workout: &Workout, session: &ActiveSession) {
    let index = session.exercise_index();
    let exercise = &workout.exercises[index];
    let state = session.current_exercise();

    println!();
    println!(
        "  Exercise {}/{}: {}",
        index + 1,
        session.exercise_count(),
        exercise.name
    );
    println!("  {}", exercise.description);
    println!("  Equipment: {}", exercise.equipment.label());
    println!(
        "  Progress: {}/{} exercises ({:.0}%)",
        session.completed_exercise_count(),
        session.exercise_count(),
        session.progress_percentage()
    );
    println!();
    println!("  Set  Weight  {:<8}Status", header_for(exercise));

    for (i, set) in exercise.sets.iter().enumerate() {
        let entry = &state.sets[i];
        let weight = if entry.weight > 0 {
            format!("{}lb", entry.weight)
        } else {
            "--".to_string()
        };
        let work = match set.kind {
            SetKind::Timed { duration_seconds } => format_time(duration_seconds),
            SetKind::Reps { .. } => entry.reps.to_string(),
        };
        let status = if entry.completed { "✓" } else { " " };
        println!("  {:<5}{:<8}{:<8}{}", i + 1, weight, work, status);
    }

    let notes: Vec<&str> = exercise
        .sets
        .iter()
        .filter_map(|s| s.notes.as_deref())
        .collect();
    if !notes.is_empty() {
        println!();
        println!("  Notes:");
        for note in notes {
            println!("    • {}", note);
        }
    }

    if state.timer_visible {
        print_timers(session);
    }
}

fn header_for(exercise: &Exercise) -> &'static str {
    // The session screen shows "Time" for exercises that lead with a
    // timed set, "Reps" otherwise
    match exercise.sets.first().map(|s| &s.kind) {
        Some(SetKind::Timed { .. }) => "Time",
        _ => "Reps",
    }
}

fn print_timers(session: &ActiveSession) {
    if session.exercise_timer().is_running() {
        println!(
            "  Timer: {}",
            format_time(session.exercise_timer().remaining())
        );
    }
    if session.rest_timer().is_running() {
        println!(
            "  Rest:  {}",
            format_time(session.rest_timer().remaining())
        );
    }
}

fn print_help() {
    println!("─────────────────────────────────────────");
    println!("  done N       toggle completion of set N");
    println!("  w N X        set weight of set N to X");
    println!("  r N X        set reps of set N to X");
    println!("  timer [S]    start exercise timer (S seconds)");
    println!("  stop         stop the exercise timer");
    println!("  show-timer   toggle the timer display");
    println!("  set-timer S  set the custom timer length");
    println!("  rest-skip    skip the rest countdown");
    println!("  tick [N]     advance timers N seconds");
    println!("  next / prev  switch exercise");
    println!("  finish       finish the workout (asks to confirm)");
    println!("  quit         pause and leave the session");
}
