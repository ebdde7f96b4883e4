// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wenan generate`: one-shot generation.

use std::path::{Path, PathBuf};

use clap::Args;
use wenan_config::model::WenanConfig;
use wenan_core::{ContentDomain, GenerationRequest, WenanError};

use crate::form::{default_form, set_field, FormField};
use crate::setup::open_session;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Content domain; defaults to `generation.domain` from the config.
    #[arg(long)]
    pub domain: Option<ContentDomain>,

    /// What the copy is about.
    #[arg(long)]
    pub theme: String,

    /// Scene or category; defaults to the domain's first option.
    #[arg(long)]
    pub category: Option<String>,

    /// Style; defaults to the domain's first option.
    #[arg(long)]
    pub style: Option<String>,

    /// short, medium, long, extra-long, or the matching Chinese label.
    #[arg(long, default_value = "medium")]
    pub length: String,

    /// Ask for trending phrasing and hooks.
    #[arg(long)]
    pub trending: bool,

    /// Ask the model to follow a worked example.
    #[arg(long)]
    pub examples: bool,

    /// Extra free-text requirement.
    #[arg(long, value_name = "TEXT")]
    pub custom: Option<String>,

    /// Model to use instead of `provider.model`, e.g. `gpt-4`.
    #[arg(long)]
    pub model: Option<String>,

    /// Write the copy to this file instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Builds the form, rejecting options the domain does not declare.
    fn to_form(&self, default_domain: ContentDomain) -> Result<GenerationRequest, WenanError> {
        let mut form = default_form(self.domain.unwrap_or(default_domain));
        set_field(&mut form, FormField::Theme, &self.theme)?;
        if let Some(category) = &self.category {
            set_field(&mut form, FormField::Category, category)?;
        }
        if let Some(style) = &self.style {
            set_field(&mut form, FormField::Style, style)?;
        }
        set_field(&mut form, FormField::Length, &self.length)?;
        if let Some(custom) = &self.custom {
            set_field(&mut form, FormField::Custom, custom)?;
        }
        form.flags.use_trending = self.trending;
        form.flags.include_examples = self.examples;
        Ok(form)
    }
}

pub async fn run_generate(config: &WenanConfig, args: GenerateArgs) -> Result<(), WenanError> {
    let form = args.to_form(config.generation.domain)?;
    let mut session = open_session(config, form)?;
    if let Some(model) = &args.model {
        session.set_model(model)?;
    }
    let result = session.generate().await?;

    match &args.output {
        Some(path) => {
            let (dir, filename) = split_output_path(path)?;
            let written = session.export_last(Some(filename))?.write_to(dir).await?;
            eprintln!("wrote {}", written.display());
        }
        None => println!("{}", result.output_text),
    }
    Ok(())
}

fn split_output_path(path: &Path) -> Result<(&Path, &str), WenanError> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| WenanError::Export {
            message: format!("`{}` is not a file path", path.display()),
            source: None,
        })?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    Ok((dir, filename))
}
