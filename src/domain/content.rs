//! Editorial records: blog posts, promotions, navigation links and
//! per-page SEO meta data.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entity::{EntityKind, impl_resource};
use crate::domain::types::{EntityId, wire_enum};

wire_enum!(
    /// Section of the public blog a post is filed under.
    BlogCategory {
        Cars => ("cars", "Cars"),
        Bikes => ("bikes", "Bikes"),
        Travel => ("travel", "Travel"),
        News => ("news", "News"),
    }
);

wire_enum!(
    /// Area of the public site a link is rendered in.
    LinkPlacement {
        Header => ("header", "Header"),
        Footer => ("footer", "Footer"),
        Sidebar => ("sidebar", "Sidebar"),
    }
);

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogFields {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub category: BlogCategory,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    #[validate(length(max = 300))]
    pub summary: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: BlogFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl_resource!(Blog, BlogFields, EntityKind::Blog, |f| f.title.clone());

fn validate_promotion_window(fields: &PromotionFields) -> Result<(), ValidationError> {
    if fields.valid_until < fields.valid_from {
        return Err(ValidationError::new("promotion_window"));
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_promotion_window"))]
pub struct PromotionFields {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 3, max = 20))]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1, max = 100))]
    pub discount_percent: u8,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: PromotionFields,
}

impl_resource!(Promotion, PromotionFields, EntityKind::Promotion, |f| f.code.clone());

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LinkFields {
    #[validate(length(min = 1, max = 80))]
    pub label: String,
    #[validate(url)]
    pub url: String,
    pub placement: LinkPlacement,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub open_in_new_tab: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: LinkFields,
}

impl_resource!(Link, LinkFields, EntityKind::Link, |f| f.label.clone());

fn validate_page_path(path: &str) -> Result<(), ValidationError> {
    if path.starts_with('/') && !path.contains(char::is_whitespace) {
        Ok(())
    } else {
        Err(ValidationError::new("page_path"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MetaDataFields {
    #[validate(custom(function = "validate_page_path"))]
    pub page_path: String,
    #[validate(length(min = 1, max = 70))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 160))]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: MetaDataFields,
}

impl_resource!(MetaData, MetaDataFields, EntityKind::MetaData, |f| f.page_path.clone());
