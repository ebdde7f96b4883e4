// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests over every declared option combination.

use proptest::prelude::*;
use wenan_core::{ContentDomain, GenerationFlags, GenerationRequest};
use wenan_prompt::{profile, token_budget, LengthClass, RequestBuilder, DEFAULT_TOKEN_BUDGET};

fn domain_strategy() -> impl Strategy<Value = ContentDomain> {
    prop::sample::select(ContentDomain::ALL.to_vec())
}

fn request_strategy() -> impl Strategy<Value = GenerationRequest> {
    domain_strategy().prop_flat_map(|domain| {
        let p = profile(domain);
        let lengths: Vec<String> = LengthClass::ALL
            .iter()
            .flat_map(|c| [c.to_string(), c.label().to_string()])
            .chain(["", "未知"].map(String::from))
            .collect();
        (
            Just(domain),
            "[a-zA-Z0-9\\x{4e00}-\\x{9fa5}]{1,12}",
            prop::sample::select(p.categories.to_vec()),
            prop::sample::select(p.styles.to_vec()),
            prop::sample::select(lengths),
            prop::option::of("[ \\na-z\\x{4e00}-\\x{9fa5}]{0,20}"),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(
                |(domain, theme, category, style, length, custom, trending, examples)| {
                    GenerationRequest {
                        domain,
                        theme,
                        category: category.to_string(),
                        style: style.to_string(),
                        length,
                        custom_prompt: custom,
                        flags: GenerationFlags {
                            use_trending: trending,
                            include_examples: examples,
                        },
                    }
                },
            )
    })
}

proptest! {
    #[test]
    fn user_prompt_never_has_blank_sections(req in request_strategy()) {
        let user = RequestBuilder::new().build(&req).user;
        prop_assert!(!user.contains("\n\n"), "blank line in {user:?}");
        prop_assert!(!user.starts_with('\n') && !user.ends_with('\n'));
        for line in user.lines() {
            prop_assert!(!line.trim().is_empty(), "empty section in {user:?}");
            prop_assert!(!line.trim_end().ends_with('：'), "dangling label in {user:?}");
        }
    }

    #[test]
    fn budget_matches_table_or_default(req in request_strategy()) {
        let built = RequestBuilder::new().build(&req);
        let expected = LengthClass::ALL
            .iter()
            .find(|c| c.to_string() == req.length || c.label() == req.length)
            .map(|c| c.token_budget())
            .unwrap_or(DEFAULT_TOKEN_BUDGET);
        prop_assert_eq!(built.token_budget, expected);
        prop_assert_eq!(token_budget(&req.length), expected);
    }

    #[test]
    fn system_prompt_is_fixed_per_domain(req in request_strategy()) {
        let built = RequestBuilder::new().build(&req);
        prop_assert_eq!(built.system.as_str(), profile(req.domain).system_prompt);
    }
}
