// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-domain option sets and fixed system prompts.

use wenan_core::{ContentDomain, GenerationRequest, WenanError};

/// Everything the builder and the front-end need to know about one domain.
#[derive(Debug)]
pub struct DomainProfile {
    pub domain: ContentDomain,
    /// Human-readable domain title.
    pub title: &'static str,
    /// Label for the category field in the user prompt ("场景" or "分类").
    pub category_label: &'static str,
    pub categories: &'static [&'static str],
    pub styles: &'static [&'static str],
    pub system_prompt: &'static str,
    pub temperature: f32,
}

static MOMENTS: DomainProfile = DomainProfile {
    domain: ContentDomain::Moments,
    title: "朋友圈文案",
    category_label: "场景",
    categories: &[
        "节日文案（春节/中秋/圣诞/情人节等）",
        "日常分享-美食",
        "日常分享-旅行",
        "日常分享-心情（开心/emo/治愈）",
        "日常分享-职场（加班/摸鱼/成就感）",
        "纪念日（生日/恋爱/入职）",
        "社交互动（朋友圈回复/求点赞）",
    ],
    styles: &["温馨治愈", "搞笑沙雕", "文艺清新", "简约短句", "元气满满"],
    system_prompt: "你是朋友圈文案专家，擅长生成符合场景、风格的朋友圈文案，要求：\n\
1. 每段文案控制在50字以内，适配朋友圈阅读习惯；\n\
2. 必须带贴合场景的emoji，避免堆砌；\n\
3. 风格严格匹配用户选择的类型，语言自然不生硬；\n\
4. 生成3条不同版本的文案，每条换行分隔，前标注序号。",
    temperature: 0.8,
};

static BILIBILI: DomainProfile = DomainProfile {
    domain: ContentDomain::Bilibili,
    title: "B站话题文案",
    category_label: "分类",
    categories: &["科技", "学习", "生活", "游戏", "娱乐"],
    styles: &["轻松活泼", "专业严谨", "幽默搞笑", "干货满满"],
    system_prompt: "你是B站话题文案策划，熟悉B站社区的表达习惯，要求：\n\
1. 输出包含【话题标题】、【话题简介】、【互动引导】三部分，按此顺序分段；\n\
2. 话题标题不超过30字，可带一个贴切的emoji；\n\
3. 风格严格匹配用户选择的类型，避免营销腔；\n\
4. 互动引导要自然地邀请弹幕、评论或投币。",
    temperature: 0.7,
};

static SHORT_VIDEO: DomainProfile = DomainProfile {
    domain: ContentDomain::ShortVideo,
    title: "短视频选题",
    category_label: "分类",
    categories: &["动漫", "美食", "旅行", "知识", "生活", "游戏"],
    styles: &["搞笑", "治愈", "热血", "干货", "悬疑"],
    system_prompt: "你是短视频选题策划，擅长为抖音、快手、B站短视频设计选题，要求：\n\
1. 给出5个不同的标题备选，每个标题单独一行并标注序号；\n\
2. 每个标题后附3到5个话题标签，格式为 #标签，标签之间用空格分隔；\n\
3. 语气匹配用户选择的风格，不使用夸大或违规用语；\n\
4. 最后给出一段不超过100字的开场口播。",
    temperature: 0.8,
};

/// Returns the profile for a domain.
pub fn profile(domain: ContentDomain) -> &'static DomainProfile {
    match domain {
        ContentDomain::Moments => &MOMENTS,
        ContentDomain::Bilibili => &BILIBILI,
        ContentDomain::ShortVideo => &SHORT_VIDEO,
    }
}

impl DomainProfile {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(&category)
    }

    pub fn has_style(&self, style: &str) -> bool {
        self.styles.contains(&style)
    }

    /// Checks a request before it is built: theme present, category and style
    /// from this domain's declared sets.
    pub fn validate(&self, request: &GenerationRequest) -> Result<(), WenanError> {
        if request.theme.trim().is_empty() {
            return Err(WenanError::Validation("theme must not be empty".into()));
        }
        if !self.has_category(&request.category) {
            return Err(WenanError::Validation(format!(
                "`{}` is not a {} {} (choose one of: {})",
                request.category,
                self.title,
                self.category_label,
                self.categories.join(", ")
            )));
        }
        if !self.has_style(&request.style) {
            return Err(WenanError::Validation(format!(
                "`{}` is not a {} style (choose one of: {})",
                request.style,
                self.title,
                self.styles.join(", ")
            )));
        }
        Ok(())
    }
}
