use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use log::{error, info};
use seahorse::{App, Command, Context, Flag};

use job_log::generate_job_log;
use job_log::input::Config;
use job_log::time::{DecimalHours, WorkingDuration};
use job_log::verifier::{DefaultVerifier, Verifier};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "trace");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use std::path::PathBuf;

    use anyhow::Context as _;
    use seahorse::Context;

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name)
                .map(PathBuf::from)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn path_flag(&self, name: &str) -> Option<PathBuf> {
            self.context().string_flag(name).ok().map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::ContextExt;

// seahorse actions are plain fn pointers, so the error handling lives
// in a wrapper per subcommand instead of a generic adapter.
fn make_action(context: &Context) {
    if let Err(e) = make(context) {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

fn check_action(context: &Context) {
    if let Err(e) = check(context) {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

struct Paths {
    month: PathBuf,
    settings: PathBuf,
    assets: PathBuf,
    output: PathBuf,
    preserve_dir: Option<PathBuf>,
    magick: Option<PathBuf>,
}

fn extract_context_paths(context: &Context) -> anyhow::Result<Paths> {
    let month = context.required_path_flag("month")?;

    let workspace = dunce::canonicalize(&month)
        .map_err(|e| anyhow::anyhow!(e))?
        .parent()
        .ok_or_else(|| anyhow::anyhow!("month file should have a parent directory"))?
        .to_path_buf();

    Ok(Paths {
        settings: context
            .path_flag("settings")
            .unwrap_or_else(|| PathBuf::from("settings.json")),
        assets: context
            .path_flag("assets")
            .unwrap_or_else(|| PathBuf::from("assets")),
        output: context.path_flag("output").unwrap_or(workspace),
        preserve_dir: context.path_flag("preserve-dir"),
        magick: context.path_flag("magick"),
        month,
    })
}

fn build_config(paths: &Paths) -> anyhow::Result<Config> {
    let mut builder = Config::try_from_files(&paths.month, &paths.settings)?;

    builder.assets(&paths.assets);
    builder.output_dir(&paths.output);

    if let Some(dir) = &paths.preserve_dir {
        builder.preserve_dir(dir);
    }

    if let Some(magick) = &paths.magick {
        builder.magick_path(magick);
    }

    let config = builder.build()?;

    info!("finished building config");

    Ok(config)
}

fn make(context: &Context) -> anyhow::Result<()> {
    let paths = extract_context_paths(context)?;
    let mut config = build_config(&paths)?;

    generate_job_log(&config)?;
    info!("wrote {}", config.output().display());

    // remember the locations for the next month
    let locations: Vec<String> = config
        .sheet()
        .entries()
        .map(|entry| entry.location().to_string())
        .collect();

    let settings = config.settings_mut();
    for location in &locations {
        settings.record_use(location);
    }

    settings.save(&paths.settings)?;

    Ok(())
}

fn check(context: &Context) -> anyhow::Result<()> {
    let paths = extract_context_paths(context)?;
    let config = build_config(&paths)?;
    let sheet = config.sheet();

    if let Err(errors) = DefaultVerifier.verify(sheet) {
        for error in &errors {
            error!("{}", error);
        }

        anyhow::bail!("the sheet has {} problem(s)", errors.len());
    }

    for entry in sheet.entries() {
        info!(
            "{} {}-{} worked {} (break {}) at \"{}\"",
            entry.date(),
            entry.start(),
            entry.end(),
            WorkingDuration::from(entry.work_duration()),
            WorkingDuration::from(entry.break_duration()),
            entry.location(),
        );
    }

    info!(
        "total work time: {} h in {} entries",
        DecimalHours::new(sheet.total_work_duration()),
        sheet.entry_count()
    );

    let ranked = config.settings().ranked_locations();
    if !ranked.is_empty() {
        info!("most used locations: {}", ranked.join(", "));
    }

    Ok(())
}

fn common_flags(command: Command) -> Command {
    command
        .flag(Flag::new("month", seahorse::FlagType::String).description("Path to the month file."))
        .flag(
            Flag::new("settings", seahorse::FlagType::String)
                .description("[optional] Path to the settings file. Default: `settings.json`"),
        )
        .flag(
            Flag::new("assets", seahorse::FlagType::String).description(
                "[optional] Path to the directory with the templates and the font. Default: `assets/`",
            ),
        )
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let make_command = common_flags(
        Command::new("make")
            .usage(format!("{} make [args]", args[0]))
            .description("Renders a job log pdf from the given month file."),
    )
    .flag(
        Flag::new("output", seahorse::FlagType::String).description(
            "[optional] Path to the output folder. Default: the folder of the month file",
        ),
    )
    .flag(
        Flag::new("preserve-dir", seahorse::FlagType::String)
            .description("[optional] Keeps the working directory there when rendering fails."),
    )
    .flag(
        Flag::new("magick", seahorse::FlagType::String)
            .description("[optional] Path to the ImageMagick binary. Default: `magick`"),
    )
    .action(make_action);

    let check_command = common_flags(
        Command::new("check")
            .usage(format!("{} check [args]", args[0]))
            .description("Validates the month file and prints the computed times."),
    )
    .action(check_action);

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(make_command)
        .command(check_command);

    app.run(args);

    Ok(())
}
