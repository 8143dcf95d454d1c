//! 区块注册表：三个动态集合（经历、项目、教育）的静态配置
//!
//! 每个区块定义默认字段集（决定记录拥有哪些键）、空状态占位文本，
//! 以及预览渲染所需的标题字段与元信息组成。

use std::{fmt, str::FromStr};

use crate::model::ModelError;

/// 动态集合类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Experience,
    Projects,
    Education,
}

impl SectionKind {
    /// 初始化与完整渲染的顺序
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Education,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Education => "education",
        }
    }

    pub fn config(self) -> &'static SectionConfig {
        match self {
            SectionKind::Experience => &EXPERIENCE,
            SectionKind::Projects => &PROJECTS,
            SectionKind::Education => &EDUCATION,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ModelError::UnknownSection(s.to_string()))
    }
}

/// 单个输入字段的描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    /// 多行输入（详情列表）
    pub multiline: bool,
}

const fn field(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { key, label, multiline: false }
}

const fn multiline(key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec { key, label, multiline: true }
}

/// 元信息行的组成部分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaPart {
    /// 直接取字段值
    Field(&'static str),
    /// 起止日期区间，经 `format_dates` 格式化
    DateRange { start: &'static str, end: &'static str },
}

/// 动态集合的静态配置
#[derive(Debug)]
pub struct SectionConfig {
    pub kind: SectionKind,
    pub heading: &'static str,
    pub empty_text: &'static str,
    pub add_label: &'static str,
    pub fields: &'static [FieldSpec],
    pub title_field: &'static str,
    pub title_placeholder: &'static str,
    pub meta: &'static [MetaPart],
    pub details_field: &'static str,
}

impl SectionConfig {
    /// 默认字段键（按注册顺序）
    pub fn default_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }
}

static EXPERIENCE: SectionConfig = SectionConfig {
    kind: SectionKind::Experience,
    heading: "Experience",
    empty_text: "Add internships or part-time roles with measurable impact.",
    add_label: "Add experience",
    fields: &[
        field("role", "Role / Title"),
        field("company", "Company"),
        field("location", "Location"),
        field("start", "Start"),
        field("end", "End"),
        multiline("details", "Impact highlights (one per line)"),
    ],
    title_field: "role",
    title_placeholder: "Role / Title",
    meta: &[
        MetaPart::Field("company"),
        MetaPart::Field("location"),
        MetaPart::DateRange { start: "start", end: "end" },
    ],
    details_field: "details",
};

static PROJECTS: SectionConfig = SectionConfig {
    kind: SectionKind::Projects,
    heading: "Projects",
    empty_text: "Highlight engineering builds, hackathons, or research.",
    add_label: "Add project",
    fields: &[
        field("title", "Project Title"),
        field("context", "Context"),
        field("tech", "Tech Stack"),
        multiline("details", "What you built (one per line)"),
    ],
    title_field: "title",
    title_placeholder: "Project Title",
    meta: &[MetaPart::Field("context"), MetaPart::Field("tech")],
    details_field: "details",
};

static EDUCATION: SectionConfig = SectionConfig {
    kind: SectionKind::Education,
    heading: "Education",
    empty_text: "Show degrees, certifications, and standout academics.",
    add_label: "Add education",
    fields: &[
        field("degree", "Degree"),
        field("institution", "Institution"),
        field("start", "Start"),
        field("end", "End"),
        multiline("details", "Coursework or honors (one per line)"),
    ],
    title_field: "degree",
    title_placeholder: "Degree",
    meta: &[
        MetaPart::Field("institution"),
        MetaPart::DateRange { start: "start", end: "end" },
    ],
    details_field: "details",
};

/// 按区块名称查找配置，未知名称返回 None
pub fn lookup(name: &str) -> Option<&'static SectionConfig> {
    name.parse::<SectionKind>().ok().map(SectionKind::config)
}
