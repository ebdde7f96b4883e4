// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wenan shell` command implementation.
//!
//! Launches an interactive REPL with a colored prompt and readline history.
//! Each invocation owns one session: the form draft, generation history and
//! saved templates live until the shell exits.

use std::path::Path;
use std::str::FromStr;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use wenan_config::model::WenanConfig;
use wenan_core::{ContentDomain, GenerationResult, WenanError};
use wenan_session::{ActionOutcome, HistoryRecord, SessionAction, SessionContext, Template};

use crate::form::{default_form, describe, set_field, FormField};
use crate::setup::open_session;

const HELP: &str = "\
/set <field> <value>  edit the form (domain, theme, category, style, length, custom, trending, examples)
/set model <name>     switch the model for later generations
/form                 show the current form
/gen                  generate from the form
/regen                regenerate the most recent history entry
/history [style]      list history, newest first, optionally by style
/use <n>              load history entry #n into the form
/save                 save the form as a template
/templates            list templates
/apply <name>         load a template into the form
/clear-history        forget all history
/clear-templates      forget all templates
/export [file]        write the last result under the export directory
/help                 show this help
/quit                 leave the shell
Any other text sets the theme and generates.";

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Set { field: FormField, value: String },
    SetModel { model: String },
    Form,
    /// Plain text: set the theme, then generate.
    Quick { theme: String },
    Session(SessionAction),
    Help,
    Quit,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quit,
}

pub fn parse_command(line: &str) -> Result<ShellCommand, WenanError> {
    let line = line.trim();
    let Some(body) = line.strip_prefix('/') else {
        return Ok(ShellCommand::Quick {
            theme: line.to_string(),
        });
    };

    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (body, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let command = match name {
        "quit" | "exit" => ShellCommand::Quit,
        "help" => ShellCommand::Help,
        "form" => ShellCommand::Form,
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if field == "model" {
                return Ok(ShellCommand::SetModel {
                    model: value.trim().to_string(),
                });
            }
            let field = FormField::from_str(field).map_err(|_| {
                WenanError::Validation(format!(
                    "usage: /set <field> <value>, unknown field `{field}`"
                ))
            })?;
            ShellCommand::Set {
                field,
                value: value.trim().to_string(),
            }
        }
        "gen" => ShellCommand::Session(SessionAction::Generate),
        "regen" => ShellCommand::Session(SessionAction::Regenerate),
        "history" => ShellCommand::Session(SessionAction::ListHistory { style: arg }),
        "use" => {
            let n = rest.parse::<usize>().ok().filter(|n| *n >= 1).ok_or_else(|| {
                WenanError::Validation("usage: /use <n>, where n is a history number".into())
            })?;
            ShellCommand::Session(SessionAction::Rehydrate { index: n - 1 })
        }
        "save" => ShellCommand::Session(SessionAction::SaveTemplate),
        "templates" => ShellCommand::Session(SessionAction::ListTemplates),
        "apply" => {
            let name = arg.ok_or_else(|| WenanError::Validation("usage: /apply <name>".into()))?;
            ShellCommand::Session(SessionAction::ApplyTemplate { name })
        }
        "clear-history" => ShellCommand::Session(SessionAction::ClearHistory),
        "clear-templates" => ShellCommand::Session(SessionAction::ClearTemplates),
        "export" => ShellCommand::Session(SessionAction::Export { filename: arg }),
        other => {
            return Err(WenanError::Validation(format!(
                "unknown command `/{other}`, type /help"
            )));
        }
    };
    Ok(command)
}

/// Runs one command against the session.
pub async fn execute(
    session: &mut SessionContext,
    command: ShellCommand,
    export_dir: &Path,
) -> Result<Reply, WenanError> {
    let text = match command {
        ShellCommand::Quit => return Ok(Reply::Quit),
        ShellCommand::Help => HELP.to_string(),
        ShellCommand::Form => {
            format!("{}\nmodel     {}", describe(session.form()), session.model())
        }
        ShellCommand::SetModel { model } => {
            session.set_model(&model)?;
            format!("model     {}", session.model())
        }
        ShellCommand::Set { field, value } => {
            set_field(session.form_mut(), field, &value)?;
            describe(session.form())
        }
        ShellCommand::Quick { theme } => {
            set_field(session.form_mut(), FormField::Theme, &theme)?;
            let outcome = session.dispatch(SessionAction::Generate).await?;
            render_outcome(outcome, export_dir).await?
        }
        ShellCommand::Session(action) => {
            let outcome = session.dispatch(action).await?;
            render_outcome(outcome, export_dir).await?
        }
    };
    Ok(Reply::Print(text))
}

/// Renders an outcome for the terminal. Exports are written to `export_dir`
/// first.
async fn render_outcome(outcome: ActionOutcome, export_dir: &Path) -> Result<String, WenanError> {
    let text = match outcome {
        ActionOutcome::Generated(result) => render_result(&result),
        ActionOutcome::History(records) if records.is_empty() => "no history yet".to_string(),
        ActionOutcome::History(records) => records
            .iter()
            .map(|(index, record)| render_record(*index, record))
            .collect::<Vec<_>>()
            .join("\n\n"),
        ActionOutcome::FormUpdated(form) => describe(&form),
        ActionOutcome::TemplateSaved(template) => format!("saved template {}", template.name),
        ActionOutcome::Templates(templates) if templates.is_empty() => {
            "no templates yet".to_string()
        }
        ActionOutcome::Templates(templates) => templates
            .iter()
            .map(render_template)
            .collect::<Vec<_>>()
            .join("\n"),
        ActionOutcome::Cleared { removed } => format!("removed {removed}"),
        ActionOutcome::Exported(exported) => {
            let path = exported.write_to(export_dir).await?;
            format!("exported to {}", path.display())
        }
    };
    Ok(text)
}

fn render_result(result: &GenerationResult) -> String {
    let header = format!(
        "{} · {} · {}",
        result.request.theme, result.request.category, result.request.style
    );
    format!("{}\n{}", header.dimmed(), result.output_text)
}

fn render_record(index: usize, record: &HistoryRecord) -> String {
    format!(
        "{} {} {} · {}\n{}",
        format!("#{}", index + 1).yellow(),
        record.created_at.format("%m-%d %H:%M").to_string().dimmed(),
        record.theme(),
        record.style(),
        record.output
    )
}

fn render_template(template: &Template) -> String {
    format!(
        "{}  ({}, {}, {})",
        template.name.bold(),
        template.domain,
        template.category,
        template.length
    )
}

/// Runs the `wenan shell` interactive REPL.
pub async fn run_shell(
    config: &WenanConfig,
    domain: Option<ContentDomain>,
) -> Result<(), WenanError> {
    let form = default_form(domain.unwrap_or(config.generation.domain));
    let mut session = open_session(config, form)?;
    let export_dir = Path::new(&config.session.export_dir);

    let mut rl = DefaultEditor::new()
        .map_err(|e| WenanError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "wenan shell".bold().green());
    println!(
        "Type a theme to generate, {} for commands, {} to exit.\n",
        "/help".yellow(),
        "/quit".yellow()
    );

    let prompt = format!("{}> ", "wenan".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                let reply = match parse_command(trimmed) {
                    Ok(command) => execute(&mut session, command, export_dir).await,
                    Err(e) => Err(e),
                };
                match reply {
                    Ok(Reply::Print(text)) => println!("{text}\n"),
                    Ok(Reply::Quit) => break,
                    Err(e @ WenanError::Validation(_)) => eprintln!("{}", e.to_string().yellow()),
                    Err(e) => eprintln!("{}: {e}", "error".red()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    tracing::info!(
        session_id = %session.id(),
        generations = session.history().len(),
        "shell session ended"
    );
    println!("{}", "goodbye".dimmed());
    Ok(())
}
