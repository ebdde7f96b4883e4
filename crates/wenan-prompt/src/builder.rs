// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds the system/user prompt pair and generation parameters for a request.
//!
//! The user prompt is an ordered list of labelled sections joined with a
//! newline. Optional sections are only pushed when present, so an absent
//! field never leaves an empty line or a dangling label behind.

use std::str::FromStr;

use tracing::debug;
use wenan_core::{BuiltPrompt, GenerationRequest};

use crate::domain::profile;
use crate::length::{token_budget, LengthClass};

const SECTION_SEPARATOR: &str = "\n";

const TRENDING_HINT: &str = "结合当下的热门话题和流行表达，但不要生硬蹭热点";
const EXAMPLE_HINT: &str = "先给出一条完整示例，再按示例的结构完成其余内容";

/// Ordered, labelled prompt sections.
#[derive(Debug, Default)]
struct PromptSections {
    sections: Vec<String>,
}

impl PromptSections {
    /// Pushes `label：value` unless the value is blank. Internal line breaks and
    /// surrounding whitespace are folded so a value never spans several lines.
    fn push(&mut self, label: &str, value: &str) {
        let value = fold_whitespace(value);
        if !value.is_empty() {
            self.sections.push(format!("{label}：{value}"));
        }
    }

    fn push_if(&mut self, enabled: bool, label: &str, value: &str) {
        if enabled {
            self.push(label, value);
        }
    }

    fn finish(self) -> String {
        self.sections.join(SECTION_SEPARATOR)
    }
}

fn fold_whitespace(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns a [`GenerationRequest`] into a [`BuiltPrompt`].
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    temperature_override: Option<f32>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the domain's default temperature for every build.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature_override = temperature;
        self
    }

    /// Builds the prompt pair, token budget and temperature.
    ///
    /// The caller is expected to have validated the request against the
    /// domain profile; an undeclared category or style is a programming error.
    pub fn build(&self, request: &GenerationRequest) -> BuiltPrompt {
        let profile = profile(request.domain);
        debug_assert!(
            profile.has_category(&request.category),
            "undeclared category {:?} for {}",
            request.category,
            request.domain
        );
        debug_assert!(
            profile.has_style(&request.style),
            "undeclared style {:?} for {}",
            request.style,
            request.domain
        );

        let length_hint = LengthClass::from_str(request.length.trim())
            .map(LengthClass::word_hint)
            .unwrap_or(request.length.as_str());

        let mut sections = PromptSections::default();
        sections.push("主题", &request.theme);
        sections.push(profile.category_label, &request.category);
        sections.push("风格", &request.style);
        sections.push("字数", length_hint);
        sections.push_if(request.flags.use_trending, "热点", TRENDING_HINT);
        sections.push_if(request.flags.include_examples, "示例", EXAMPLE_HINT);
        if let Some(custom) = &request.custom_prompt {
            sections.push("补充需求", custom);
        }

        let built = BuiltPrompt {
            system: profile.system_prompt.to_string(),
            user: sections.finish(),
            token_budget: token_budget(&request.length),
            temperature: self.temperature_override.unwrap_or(profile.temperature),
        };

        debug!(
            domain = %request.domain,
            token_budget = built.token_budget,
            temperature = built.temperature,
            "prompt built"
        );
        built
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wenan_core::{ContentDomain, GenerationFlags};

    fn anime_request() -> GenerationRequest {
        GenerationRequest {
            domain: ContentDomain::ShortVideo,
            theme: "新番推荐".into(),
            category: "动漫".into(),
            style: "搞笑".into(),
            length: "短（150字内）".into(),
            custom_prompt: None,
            flags: GenerationFlags::default(),
        }
    }

    #[test]
    fn minimal_request_has_only_core_sections() {
        let built = RequestBuilder::new().build(&anime_request());
        assert_eq!(
            built.user,
            "主题：新番推荐\n分类：动漫\n风格：搞笑\n字数：150字以内"
        );
        assert_eq!(built.token_budget, 400);
        assert!((built.temperature - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn addenda_follow_core_sections_in_order() {
        let mut req = anime_request();
        req.flags = GenerationFlags {
            use_trending: true,
            include_examples: true,
        };
        req.custom_prompt = Some("提到《葬送的芙莉莲》".into());
        let user = RequestBuilder::new().build(&req).user;
        let lines: Vec<&str> = user.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[4].starts_with("热点："));
        assert!(lines[5].starts_with("示例："));
        assert_eq!(lines[6], "补充需求：提到《葬送的芙莉莲》");
    }

    #[test]
    fn blank_custom_prompt_is_dropped() {
        let mut req = anime_request();
        req.custom_prompt = Some("  \n ".into());
        let user = RequestBuilder::new().build(&req).user;
        assert!(!user.contains("补充需求"));
        assert!(!user.ends_with('\n'));
    }

    #[test]
    fn multiline_custom_prompt_is_folded() {
        let mut req = anime_request();
        req.custom_prompt = Some("第一点\n\n第二点\n".into());
        let user = RequestBuilder::new().build(&req).user;
        assert!(user.ends_with("补充需求：第一点 第二点"));
        assert!(!user.contains("\n\n"));
    }

    #[test]
    fn unknown_length_uses_default_budget_and_raw_label() {
        let mut req = anime_request();
        req.length = "随意".into();
        let built = RequestBuilder::new().build(&req);
        assert_eq!(built.token_budget, 700);
        assert!(built.user.contains("字数：随意"));
    }

    #[test]
    fn moments_uses_scene_label_and_its_system_prompt() {
        let req = GenerationRequest {
            domain: ContentDomain::Moments,
            theme: "周末海边".into(),
            category: "日常分享-旅行".into(),
            style: "文艺清新".into(),
            length: "medium".into(),
            custom_prompt: None,
            flags: GenerationFlags::default(),
        };
        let built = RequestBuilder::new().build(&req);
        assert!(built.user.contains("场景：日常分享-旅行"));
        assert!(built.system.contains("朋友圈"));
        assert_eq!(built.token_budget, 700);
    }

    #[test]
    fn temperature_override_wins() {
        let built = RequestBuilder::new()
            .with_temperature(Some(0.2))
            .build(&anime_request());
        assert!((built.temperature - 0.2).abs() < f32::EPSILON);
    }
}
