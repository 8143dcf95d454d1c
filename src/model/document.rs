//! Document：简历文档模型（唯一的会话状态）
//!
//! 所有字符串输入在存储前去除首尾空白；每个动态集合在任何删除之后
//! 至少保留一条记录。

use std::{fmt, str::FromStr};

use serde::{ser::SerializeMap, Serialize, Serializer};
use uuid::Uuid;

use crate::model::{
    sections::{SectionConfig, SectionKind},
    ModelError,
};

/// 个人信息字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalField {
    FullName,
    Headline,
    Email,
    Phone,
    Location,
    Linkedin,
    Portfolio,
}

impl PersonalField {
    pub const ALL: [PersonalField; 7] = [
        PersonalField::FullName,
        PersonalField::Headline,
        PersonalField::Email,
        PersonalField::Phone,
        PersonalField::Location,
        PersonalField::Linkedin,
        PersonalField::Portfolio,
    ];

    /// 输入控件的稳定名称
    pub fn input_name(self) -> &'static str {
        match self {
            PersonalField::FullName => "full-name",
            PersonalField::Headline => "headline",
            PersonalField::Email => "email",
            PersonalField::Phone => "phone",
            PersonalField::Location => "location",
            PersonalField::Linkedin => "linkedin",
            PersonalField::Portfolio => "portfolio",
        }
    }
}

impl FromStr for PersonalField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if matches!(s, "fullName" | "full_name") {
            return Ok(PersonalField::FullName);
        }
        PersonalField::ALL
            .into_iter()
            .find(|field| field.input_name() == s)
            .ok_or_else(|| ModelError::UnknownPersonalField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub portfolio: String,
}

impl PersonalInfo {
    pub fn get(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FullName => &self.full_name,
            PersonalField::Headline => &self.headline,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Location => &self.location,
            PersonalField::Linkedin => &self.linkedin,
            PersonalField::Portfolio => &self.portfolio,
        }
    }

    fn slot_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::Headline => &mut self.headline,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Location => &mut self.location,
            PersonalField::Linkedin => &mut self.linkedin,
            PersonalField::Portfolio => &mut self.portfolio,
        }
    }
}

/// 动态记录ID，创建时生成一次，永不复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RecordId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ModelError::InvalidRecordId(s.to_string()))
    }
}

/// 动态集合中的一条记录（一段经历、一个项目、一个学位）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicRecord {
    id: RecordId,
    fields: Vec<(&'static str, String)>,
}

/// 序列化为扁平对象：`{"id": ..., "role": ..., ...}`
impl Serialize for DynamicRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl DynamicRecord {
    /// 按区块默认字段创建空白记录
    pub fn blank(config: &SectionConfig) -> Self {
        Self {
            id: RecordId::new(),
            fields: config.default_keys().map(|key| (key, String::new())).collect(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    /// 字段值，不存在的字段视为空字符串
    pub fn field(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// 仅更新已存在的键；未知字段返回 false
    fn set_field(&mut self, key: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => {
                *slot = value.trim().to_string();
                true
            }
            None => false,
        }
    }

    /// 至少一个默认字段非空（去空白后）即为“有意义”的记录
    pub fn is_meaningful(&self, config: &SectionConfig) -> bool {
        config
            .default_keys()
            .any(|key| !self.field(key).trim().is_empty())
    }
}

/// 删除记录的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// ID 不存在，什么也没做
    NotFound,
    Removed,
    /// 删除了最后一条记录，已补上一条新的空白记录
    Replenished(RecordId),
}

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    personal: PersonalInfo,
    summary: String,
    skills: Vec<String>,
    experience: Vec<DynamicRecord>,
    projects: Vec<DynamicRecord>,
    education: Vec<DynamicRecord>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// 初始状态：个人信息、摘要、技能为空，每个动态集合一条空白记录
    pub fn new() -> Self {
        let mut doc = Self {
            personal: PersonalInfo::default(),
            summary: String::new(),
            skills: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            education: Vec::new(),
        };
        for kind in SectionKind::ALL {
            doc.add_record(kind);
        }
        doc
    }

    /// 恢复到初始状态（旧记录的ID不会再出现）
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn records(&self, kind: SectionKind) -> &[DynamicRecord] {
        match kind {
            SectionKind::Experience => &self.experience,
            SectionKind::Projects => &self.projects,
            SectionKind::Education => &self.education,
        }
    }

    fn records_mut(&mut self, kind: SectionKind) -> &mut Vec<DynamicRecord> {
        match kind {
            SectionKind::Experience => &mut self.experience,
            SectionKind::Projects => &mut self.projects,
            SectionKind::Education => &mut self.education,
        }
    }

    pub fn record(&self, kind: SectionKind, id: RecordId) -> Option<&DynamicRecord> {
        self.records(kind).iter().find(|r| r.id == id)
    }

    pub fn set_personal_field(&mut self, field: PersonalField, value: &str) {
        *self.personal.slot_mut(field) = value.trim().to_string();
    }

    pub fn set_summary(&mut self, value: &str) {
        self.summary = value.trim().to_string();
    }

    pub fn set_skills<I, S>(&mut self, skills: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skills = skills
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .collect();
    }

    /// 追加一条空白记录并返回其ID
    pub fn add_record(&mut self, kind: SectionKind) -> RecordId {
        let record = DynamicRecord::blank(kind.config());
        let id = record.id;
        self.records_mut(kind).push(record);
        id
    }

    /// 删除记录；集合被删空时立即补一条空白记录
    pub fn remove_record(&mut self, kind: SectionKind, id: RecordId) -> Removal {
        let records = self.records_mut(kind);
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Removal::NotFound;
        }
        if records.is_empty() {
            return Removal::Replenished(self.add_record(kind));
        }
        Removal::Removed
    }

    /// 更新记录字段；记录或字段不存在时返回 false
    pub fn update_record_field(
        &mut self,
        kind: SectionKind,
        id: RecordId,
        field: &str,
        value: &str,
    ) -> bool {
        self.records_mut(kind)
            .iter_mut()
            .find(|r| r.id == id)
            .is_some_and(|record| record.set_field(field, value))
    }
}
