use clap::{Parser, Subcommand};
use std::path::PathBuf;

use quiz_compass::config::{self, QuestionFile, QuestionRecord};
use quiz_compass::output;
use quiz_compass::quiz;
use quiz_compass::scoring::{self, ResultRecord, ARCHETYPES};
use quiz_compass::storage::{self, ResultsDocument};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a saved answer file against the question set
    Score {
        /// Path to the JSON answer map (question id -> -2..2)
        answers: PathBuf,

        /// Print the full result record as JSON
        #[arg(long)]
        json: bool,

        /// Print tab-separated values for scripting
        #[arg(long, conflicts_with = "json")]
        tsv: bool,

        /// Write the results document to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Take the quiz interactively (default if no subcommand)
    Take {
        /// Save the collected answers for replay through `score`
        #[arg(long)]
        save_answers: Option<PathBuf>,

        /// Print the full result record as JSON instead of the table
        #[arg(long)]
        json: bool,

        /// Write the results document to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check the question file and report every problem found
    Validate,
    /// List all 32 archetype codes and names
    Archetypes,
    /// Write a starter question file
    Init {
        /// Overwrite an existing question file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "quiz-compass")]
#[command(about = "Political-compass quiz scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the question file (defaults to ~/.config/quiz-compass/questions.yaml)
    #[arg(short, long, global = true)]
    questions: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Take {
        save_answers: None,
        json: false,
        output: None,
    });
    let questions_path = cli.questions.map(PathBuf::from);

    let code = match command {
        Commands::Score {
            answers,
            json,
            tsv,
            output,
        } => run_score(questions_path, &answers, json, tsv, output, cli.verbose),
        Commands::Take {
            save_answers,
            json,
            output,
        } => run_take(questions_path, save_answers, json, output, cli.verbose),
        Commands::Validate => run_validate(questions_path),
        Commands::Archetypes => run_archetypes(),
        Commands::Init { force } => run_init(questions_path, force),
    };

    std::process::exit(code);
}

/// Route engine warnings (unresolvable axes, out-of-range answers) to
/// stderr. RUST_LOG overrides; --verbose raises the default to debug.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "quiz_compass=debug"
    } else {
        "quiz_compass=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load and lint the question file, exiting with a config error message on
/// any problem. Both scoring paths share this.
fn load_checked_questions(path: Option<PathBuf>) -> Result<QuestionFile, i32> {
    let file = match config::load_question_file(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return Err(EXIT_CONFIG);
        }
    };

    if let Err(errors) = scoring::validate_questions(&file.questions) {
        eprintln!("Question file errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(EXIT_CONFIG);
    }

    Ok(file)
}

fn active_questions(file: &QuestionFile) -> Vec<quiz_compass::quiz::Question> {
    file.questions
        .iter()
        .filter(|record| record.active)
        .map(QuestionRecord::resolve)
        .collect()
}

fn run_score(
    questions_path: Option<PathBuf>,
    answers_path: &std::path::Path,
    json: bool,
    tsv: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> i32 {
    let file = match load_checked_questions(questions_path) {
        Ok(file) => file,
        Err(code) => return code,
    };

    let answers = match quiz::load_answers(answers_path) {
        Ok(answers) => answers,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    let questions = active_questions(&file);
    if verbose {
        eprintln!(
            "Scoring {} answers against {} active questions",
            answers.len(),
            questions.len()
        );
    }

    let record = scoring::calculate_results(&questions, &answers);
    render_results(&record, json, tsv, verbose);
    persist_results(record, output)
}

fn run_take(
    questions_path: Option<PathBuf>,
    save_answers: Option<PathBuf>,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> i32 {
    let file = match load_checked_questions(questions_path) {
        Ok(file) => file,
        Err(code) => return code,
    };

    let answers = match quiz::collect_answers(&file.questions) {
        Ok(answers) => answers,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    if let Some(path) = save_answers {
        if let Err(e) = quiz::save_answers(&path, &answers) {
            eprintln!("Input error: {:#}", e);
            return EXIT_INPUT;
        }
        if verbose {
            eprintln!("Saved {} answers to {}", answers.len(), path.display());
        }
    }

    let questions = active_questions(&file);
    let record = scoring::calculate_results(&questions, &answers);
    println!();
    render_results(&record, json, false, verbose);
    persist_results(record, output)
}

fn render_results(record: &ResultRecord, json: bool, tsv: bool, verbose: bool) {
    if json {
        match serde_json::to_string_pretty(record) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => eprintln!("Failed to render results as JSON: {}", e),
        }
        return;
    }
    if tsv {
        println!("{}", output::format_tsv(record));
        return;
    }

    let use_colors = output::should_use_colors();
    if verbose {
        for entry in &record.axis_results {
            println!("{}", output::format_axis_detail(record, entry, use_colors));
            println!();
        }
    } else {
        println!("{}", output::format_axis_table(record, use_colors));
        println!();
    }
    println!("{}", output::format_archetype(&record.archetype, use_colors));
}

fn persist_results(record: ResultRecord, output: Option<PathBuf>) -> i32 {
    let Some(path) = output else {
        return EXIT_SUCCESS;
    };
    let document = ResultsDocument::new(record);
    if let Err(e) = storage::save_results(&path, &document) {
        eprintln!("Failed to write results: {:#}", e);
        return EXIT_INPUT;
    }
    println!("Results written to {}", path.display());
    EXIT_SUCCESS
}

fn run_validate(questions_path: Option<PathBuf>) -> i32 {
    let file = match config::load_question_file(questions_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    match scoring::validate_questions(&file.questions) {
        Ok(()) => {
            let active = file.questions.iter().filter(|r| r.active).count();
            println!(
                "OK: {} questions, {} active",
                file.questions.len(),
                active
            );
            EXIT_SUCCESS
        }
        Err(errors) => {
            eprintln!("Question file errors:");
            for error in &errors {
                eprintln!("  - {}", error);
            }
            eprintln!("{} problem(s) found", errors.len());
            EXIT_CONFIG
        }
    }
}

fn run_archetypes() -> i32 {
    for (code, name) in ARCHETYPES {
        println!("{}  {}", code, name);
    }
    EXIT_SUCCESS
}

fn run_init(questions_path: Option<PathBuf>, force: bool) -> i32 {
    match config::write_starter_questions(questions_path, force) {
        Ok(path) => {
            println!("Starter question file written to {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            EXIT_CONFIG
        }
    }
}
