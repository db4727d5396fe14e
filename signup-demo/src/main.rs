mod command;
mod paths;
mod settings;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use signup_form::prelude::*;
use simplelog::{Config, WriteLogger};
use thiserror::Error;

use command::{Command, HELP};
use paths::LogFiles;
use settings::LogSettings;

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn init_logging(settings: &LogSettings) {
    let Some(dir) = paths::cache_dir() else {
        eprintln!("warning: no cache directory, logging disabled");
        return;
    };
    let logs = LogFiles::new(dir, settings);
    if let Err(e) = logs.rotate() {
        eprintln!("warning: log rotation failed: {}", e);
    }
    let path = logs.current();
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(settings.level_filter(), Config::default(), file) {
                eprintln!("warning: failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("warning: cannot create {}: {}", path.display(), e),
    }
}

fn render(form: &MemoryForm, session: &FormSession) {
    for id in FieldId::ALL {
        let field = form.field(id);
        let mark = if field.is_invalid() { "✗" } else { " " };
        println!("{} {:<17} {:?}", mark, id.name(), field.value());
        for message in form.errors(id).items() {
            println!("    - {}", message);
        }
        if id == FieldId::Country && session.autocomplete().is_open() {
            for (i, suggestion) in form.country_suggestions.items().iter().enumerate() {
                println!("    [{}] {}", i, suggestion);
            }
        }
    }
}

fn run() -> Result<(), DemoError> {
    let config = match paths::config_file() {
        Some(path) => FormConfig::load_or_default(path)?,
        None => FormConfig::default(),
    };
    log::info!("config: {:?}", config);

    let form = MemoryForm::new();
    let mut session = FormSession::mount(form.surface(), Services::bundled()?, &config)?;
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => println!("{}", HELP),
            Ok(Some(Command::Show)) => render(&form, &session),
            Ok(Some(Command::Set(id, value))) => {
                form.field(id).set_value(value);
                session.dispatch(FormEvent::Input(id))?;
            }
            Ok(Some(Command::Event(event))) => session.dispatch(event)?,
            Ok(Some(Command::Submit)) => match session.submit()? {
                ValidationResult::Valid => println!("form is valid"),
                ValidationResult::Invalid(errors) => {
                    for error in errors {
                        println!("{}: {}", error.field, error.messages.join("; "));
                    }
                }
            },
            Err(e) => {
                log::debug!("bad command {:?}: {}", line, e);
                println!("{}", e);
            }
        }

        if form.is_dirty() {
            render(&form, &session);
            form.clear_dirty();
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    session.teardown();
    Ok(())
}

fn main() -> ExitCode {
    let config_path = paths::config_file();
    init_logging(&settings::load_log_settings(config_path.as_deref()));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
