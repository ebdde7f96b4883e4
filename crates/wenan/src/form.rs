// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Editing the form draft from command-line values.
//!
//! Unknown categories, styles and lengths are rejected here, at input time,
//! so the prompt builder only ever sees declared options.

use std::str::FromStr;

use strum::{Display, EnumString};
use wenan_core::{ContentDomain, GenerationFlags, GenerationRequest, WenanError};
use wenan_prompt::{profile, LengthClass};

/// A form field settable with `/set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FormField {
    Domain,
    Theme,
    Category,
    Style,
    Length,
    Custom,
    Trending,
    Examples,
}

/// A blank form for `domain`, preset to its first category and style and a
/// medium length.
pub fn default_form(domain: ContentDomain) -> GenerationRequest {
    let profile = profile(domain);
    GenerationRequest {
        domain,
        theme: String::new(),
        category: profile.categories.first().copied().unwrap_or_default().to_string(),
        style: profile.styles.first().copied().unwrap_or_default().to_string(),
        length: LengthClass::Medium.label().to_string(),
        custom_prompt: None,
        flags: GenerationFlags::default(),
    }
}

pub fn set_field(
    form: &mut GenerationRequest,
    field: FormField,
    value: &str,
) -> Result<(), WenanError> {
    let value = value.trim();
    let profile = profile(form.domain);
    match field {
        FormField::Domain => {
            let domain = ContentDomain::from_str(value).map_err(|_| {
                WenanError::Validation(format!(
                    "unknown domain `{value}` (choose one of: {})",
                    join(ContentDomain::ALL.iter().map(|d| d.to_string()))
                ))
            })?;
            if domain != form.domain {
                let fresh = default_form(domain);
                form.domain = domain;
                form.category = fresh.category;
                form.style = fresh.style;
            }
        }
        FormField::Theme => form.theme = value.to_string(),
        FormField::Category => {
            if !profile.has_category(value) {
                return Err(WenanError::Validation(format!(
                    "unknown {} `{value}` (choose one of: {})",
                    profile.category_label,
                    profile.categories.join(", ")
                )));
            }
            form.category = value.to_string();
        }
        FormField::Style => {
            if !profile.has_style(value) {
                return Err(WenanError::Validation(format!(
                    "unknown style `{value}` (choose one of: {})",
                    profile.styles.join(", ")
                )));
            }
            form.style = value.to_string();
        }
        FormField::Length => {
            let class = LengthClass::from_str(value).map_err(|_| {
                WenanError::Validation(format!(
                    "unknown length `{value}` (choose one of: {})",
                    join(LengthClass::ALL.iter().map(|l| l.to_string()))
                ))
            })?;
            form.length = class.label().to_string();
        }
        FormField::Custom => {
            form.custom_prompt = (!value.is_empty()).then(|| value.to_string());
        }
        FormField::Trending => form.flags.use_trending = parse_switch(value)?,
        FormField::Examples => form.flags.include_examples = parse_switch(value)?,
    }
    Ok(())
}

/// Multi-line summary of the draft for `/form`.
pub fn describe(form: &GenerationRequest) -> String {
    let profile = profile(form.domain);
    let theme = if form.theme.is_empty() {
        "(not set)"
    } else {
        form.theme.as_str()
    };
    let mut lines = vec![
        format!("domain    {} ({})", form.domain, profile.title),
        format!("theme     {theme}"),
        format!("category  {}", form.category),
        format!("style     {}", form.style),
        format!("length    {}", form.length),
        format!("trending  {}", on_off(form.flags.use_trending)),
        format!("examples  {}", on_off(form.flags.include_examples)),
    ];
    if let Some(custom) = &form.custom_prompt {
        lines.push(format!("custom    {custom}"));
    }
    lines.join("\n")
}

fn parse_switch(value: &str) -> Result<bool, WenanError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(WenanError::Validation(format!(
            "expected on or off, got `{other}`"
        ))),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_uses_first_declared_options() {
        let form = default_form(ContentDomain::Bilibili);
        assert_eq!(form.category, "科技");
        assert_eq!(form.style, "轻松活泼");
        assert_eq!(form.length, "中（300字内）");
        assert!(form.theme.is_empty());
    }

    #[test]
    fn switching_domain_resets_options() {
        let mut form = default_form(ContentDomain::Moments);
        set_field(&mut form, FormField::Theme, "周末").unwrap();
        set_field(&mut form, FormField::Domain, "short-video").unwrap();
        assert_eq!(form.domain, ContentDomain::ShortVideo);
        assert_eq!(form.category, "动漫");
        assert_eq!(form.style, "搞笑");
        assert_eq!(form.theme, "周末");
    }

    #[test]
    fn rejects_options_from_another_domain() {
        let mut form = default_form(ContentDomain::ShortVideo);
        let err = set_field(&mut form, FormField::Style, "温馨治愈").unwrap_err();
        assert!(matches!(err, WenanError::Validation(_)));
        assert_eq!(form.style, "搞笑");
        assert!(set_field(&mut form, FormField::Category, "科技").is_err());
    }

    #[test]
    fn length_accepts_keys_and_labels() {
        let mut form = default_form(ContentDomain::ShortVideo);
        set_field(&mut form, FormField::Length, "short").unwrap();
        assert_eq!(form.length, "短（150字内）");
        set_field(&mut form, FormField::Length, "超长（1000字内）").unwrap();
        assert_eq!(form.length, "超长（1000字内）");
        assert!(set_field(&mut form, FormField::Length, "huge").is_err());
    }

    #[test]
    fn custom_and_switches() {
        let mut form = default_form(ContentDomain::Moments);
        set_field(&mut form, FormField::Custom, "加上emoji").unwrap();
        assert_eq!(form.custom_prompt.as_deref(), Some("加上emoji"));
        set_field(&mut form, FormField::Custom, "  ").unwrap();
        assert_eq!(form.custom_prompt, None);

        set_field(&mut form, FormField::Trending, "on").unwrap();
        set_field(&mut form, FormField::Examples, "YES").unwrap();
        assert!(form.flags.use_trending && form.flags.include_examples);
        assert!(set_field(&mut form, FormField::Trending, "maybe").is_err());
    }

    #[test]
    fn describe_marks_missing_theme() {
        let text = describe(&default_form(ContentDomain::Moments));
        assert!(text.contains("(not set)"));
        assert!(text.contains("朋友圈"));
        assert!(!text.contains("custom"));
    }
}
