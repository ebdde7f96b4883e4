// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wenan options`: the declared option sets per domain.

use std::fmt::Write;

use colored::Colorize;
use wenan_core::ContentDomain;
use wenan_prompt::{profile, LengthClass};

pub fn render_options(domain: Option<ContentDomain>) -> String {
    let domains: Vec<ContentDomain> = match domain {
        Some(domain) => vec![domain],
        None => ContentDomain::ALL.to_vec(),
    };

    let lengths = LengthClass::ALL
        .iter()
        .map(|l| format!("{} / {}", l, l.label()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    for domain in domains {
        let profile = profile(domain);
        let _ = writeln!(out, "{} ({})", domain.to_string().bold(), profile.title);
        let _ = writeln!(out, "  {}: {}", profile.category_label, profile.categories.join(", "));
        let _ = writeln!(out, "  风格: {}", profile.styles.join(", "));
        let _ = writeln!(out, "  字数: {lengths}");
        let _ = writeln!(out, "  temperature: {}", profile.temperature);
        out.push('\n');
    }
    out
}
